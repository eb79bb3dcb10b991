//! Port for reading startup configuration values.

/// Source of environment-style key/value settings.
///
/// Implementations return `None` for keys that are unset or whose value is
/// not valid Unicode.
pub trait EnvironmentSource {
    /// Looks up the value stored under `key`.
    fn var(&self, key: &str) -> Option<String>;
}

impl<T: EnvironmentSource + ?Sized> EnvironmentSource for &T {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}
