//! In-memory adapters for deterministic tests.

mod environment;

pub use environment::StaticEnvironment;
