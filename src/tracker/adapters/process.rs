//! Environment adapter backed by the process environment.

use crate::tracker::ports::EnvironmentSource;

/// Reads settings from the current process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl EnvironmentSource for ProcessEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}
