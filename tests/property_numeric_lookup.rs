use proptest::prelude::*;
use service_config::{ConfigLoader, MapEnv, Provenance};

proptest! {
    /// Property: any canonical integer string parses back to itself
    #[test]
    fn prop_int_round_trip(value in any::<i64>(), default in any::<i64>()) {
        let env = MapEnv::new().with("N", value.to_string());
        let resolved = ConfigLoader::get_int(&env, "N", default);

        prop_assert_eq!(resolved.value, value);
        prop_assert_eq!(resolved.provenance, Provenance::Environment);
    }

    /// Property: finite floats round-trip through both display and exponent form
    #[test]
    fn prop_float_round_trip(value in any::<f64>().prop_filter("finite", |v| v.is_finite())) {
        for raw in [value.to_string(), format!("{value:e}")] {
            let env = MapEnv::new().with("F", raw);
            let resolved = ConfigLoader::get_float(&env, "F", 0.0);

            prop_assert_eq!(resolved.value.to_bits(), value.to_bits());
            prop_assert_eq!(resolved.provenance, Provenance::Environment);
        }
    }

    /// Property: strings without a digit never parse as integers
    #[test]
    fn prop_int_rejects_non_numeric(raw in "[a-zA-Z_ .]*", default in any::<i64>()) {
        let env = MapEnv::new().with("N", raw);
        let resolved = ConfigLoader::get_int(&env, "N", default);

        prop_assert_eq!(resolved.value, default);
        prop_assert_eq!(resolved.provenance, Provenance::Malformed);
    }

    /// Property: strings with letters other than float keywords never parse as floats
    #[test]
    fn prop_float_rejects_garbage(raw in "[g-hj-mo-z_]+[0-9]*", default in -1.0e6f64..1.0e6) {
        let env = MapEnv::new().with("F", raw);
        let resolved = ConfigLoader::get_float(&env, "F", default);

        prop_assert_eq!(resolved.value.to_bits(), default.to_bits());
        prop_assert_eq!(resolved.provenance, Provenance::Malformed);
    }

    /// Property: unset numeric variables always report Default
    #[test]
    fn prop_missing_is_default(default in any::<i64>()) {
        let resolved = ConfigLoader::get_int(&MapEnv::new(), "MISSING", default);
        prop_assert_eq!(resolved.value, default);
        prop_assert_eq!(resolved.provenance, Provenance::Default);
    }

    /// Property: string lookups return any set value verbatim, even empty
    #[test]
    fn prop_string_presence_wins(raw in ".*", default in "[a-z]{1,8}") {
        let env = MapEnv::new().with("S", raw.clone());
        let resolved = ConfigLoader::get_string(&env, "S", &default);

        prop_assert_eq!(resolved.value, raw);
        prop_assert_eq!(resolved.provenance, Provenance::Environment);
    }
}
