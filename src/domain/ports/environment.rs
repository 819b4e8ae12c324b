/// Read-only mapping from variable name to value.
///
/// Presence is what matters: `Some(String::new())` is a set-but-empty variable
/// and must not be reported as `None`.
pub trait EnvSource {
    /// Look up `name`, returning `None` when it is not defined
    fn get(&self, name: &str) -> Option<String>;

    /// Whether `name` is defined at all
    fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }
}
