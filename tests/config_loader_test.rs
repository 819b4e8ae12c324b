//! End-to-end loader behaviour against both injected and process environments.

mod common;

use service_config::{
    ConfigLoader, DbEnvironment, EnvFile, EnvSource, Layered, MapEnv, ProcessEnv, Provenance,
};

#[test]
fn scenario_empty_environment() {
    let config = ConfigLoader::from_source(&MapEnv::new());

    assert_eq!(config.server_port, ":3000");
    assert_eq!(config.db_env.as_str(), "local");
    assert_eq!(config.neo4j.uri, "neo4j://localhost:7687");
}

#[test]
fn scenario_only_port_set() {
    let env = MapEnv::new().with("PORT", "8080");
    let resolution = ConfigLoader::resolve(&env);

    assert_eq!(resolution.config.server_port, ":8080");
    let defaulted: Vec<_> = resolution.defaulted().collect();
    assert!(!defaulted.contains(&"PORT"));
    assert_eq!(defaulted.len(), resolution.provenance.len() - 1);
}

#[test]
fn scenario_aura_with_username_only() {
    let env = MapEnv::new()
        .with("DB_ENV", "aura")
        .with("NEO4J_AURA_USERNAME", "alice");
    let config = ConfigLoader::from_source(&env);

    assert_eq!(config.neo4j.username, "alice");
    assert_eq!(config.neo4j.uri, "neo4j+ssc://your_aura_uri:7687");
    assert_eq!(config.db_env.as_str(), "aura");
}

#[test]
fn scenario_short_encryption_key() {
    let env = MapEnv::new().with("AES_ENCRYPTION_KEY", "shortkey");
    let config = ConfigLoader::from_source(&env);

    assert_eq!(config.aes_encryption_key, "shortkey".as_bytes());
}

#[test]
fn scenario_malformed_threshold() {
    let env = MapEnv::new().with("MIN_RED_THRESHOLD", "notanumber");
    let resolution = ConfigLoader::resolve(&env);

    assert_eq!(resolution.config.red.min_threshold, 5);
    assert_eq!(
        resolution.provenance_of("MIN_RED_THRESHOLD"),
        Some(Provenance::Malformed)
    );
}

#[test]
fn every_set_string_variable_is_used_verbatim() {
    let local = [
        ("DB_ENV", "local"),
        ("NEO4J_LOCAL_URI", "neo4j://graph:7687"),
        ("NEO4J_LOCAL_USERNAME", "neo"),
        ("NEO4J_LOCAL_PASSWORD", "s3cret"),
        ("REDIS_ADDRESS", "cache:6379"),
        ("REDIS_PASSWORD", "redispw"),
    ];
    let env: MapEnv = local.into_iter().collect();
    let resolution = ConfigLoader::resolve(&env);

    assert_eq!(resolution.config.neo4j.uri, "neo4j://graph:7687");
    assert_eq!(resolution.config.neo4j.username, "neo");
    assert_eq!(resolution.config.neo4j.password, "s3cret");
    assert_eq!(resolution.config.redis.address, "cache:6379");
    assert_eq!(resolution.config.redis.password, "redispw");
    for (name, _) in local {
        assert_eq!(resolution.provenance_of(name), Some(Provenance::Environment), "{name}");
    }
}

#[test]
fn any_other_db_env_selects_local_group() {
    for raw in ["local", "", "Aura", "production"] {
        let env = MapEnv::new()
            .with("DB_ENV", raw)
            .with("NEO4J_AURA_USERNAME", "aura-only")
            .with("NEO4J_LOCAL_USERNAME", "local-only");
        let config = ConfigLoader::from_source(&env);

        assert_eq!(config.db_env, DbEnvironment::Local(raw.to_string()));
        assert_eq!(config.neo4j.username, "local-only", "DB_ENV={raw:?}");
    }
}

#[test]
fn load_reads_process_environment() {
    temp_env::with_vars(
        common::only(&[("PORT", "9000"), ("DB_ENV", "aura"), ("NEO4J_AURA_URI", "neo4j+s://x")]),
        || {
            let dir = tempfile::tempdir().unwrap();
            // Point at a file that does not exist so no stray .env leaks in
            let config = ConfigLoader::load_from_path(dir.path().join("absent.env"));

            assert_eq!(config.server_port, ":9000");
            assert!(config.db_env.is_aura());
            assert_eq!(config.neo4j.uri, "neo4j+s://x");
            assert_eq!(config.neo4j.username, "aura_user");
        },
    );
}

#[test]
fn load_is_idempotent() {
    temp_env::with_vars(common::only(&[("MAX_RED_PROBABILITY", "0.75")]), || {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.env");
        let first = ConfigLoader::load_from_path(&path);
        let second = ConfigLoader::load_from_path(&path);

        assert_eq!(first, second);
        assert!((first.red.max_probability - 0.75).abs() < f64::EPSILON);
    });
}

#[test]
fn env_file_merge_does_not_override_process_values() {
    let (_dir, path) = common::env_file("PORT=7000\nDB_ENV=aura\nNEO4J_AURA_PASSWORD=from-file\n");

    temp_env::with_vars(common::only(&[("PORT", "8000")]), || {
        let config = ConfigLoader::load_from_path(&path);

        assert_eq!(config.server_port, ":8000");
        assert!(config.db_env.is_aura());
        assert_eq!(config.neo4j.password, "from-file");
    });
}

#[test]
fn layered_env_file_matches_merge() {
    let (_dir, path) = common::env_file("PORT=7000\nKAFKA_BROKERS=a:9092,b:9092\n");

    temp_env::with_vars(common::only(&[("PORT", "8000")]), || {
        let file = EnvFile::read(&path).unwrap();
        let layered = ConfigLoader::from_source(&Layered::new(ProcessEnv, file));

        assert_eq!(layered.server_port, ":8000");
        assert_eq!(layered.kafka_brokers, vec!["a:9092", "b:9092"]);
        // Reading the file left the process untouched
        assert!(!ProcessEnv.contains("KAFKA_BROKERS"));

        let merged = ConfigLoader::load_from_path(&path);
        assert_eq!(layered, merged);
    });
}
