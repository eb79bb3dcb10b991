//! Port contracts for the tracker.
//!
//! Ports define infrastructure-agnostic interfaces used by tracker services.

pub mod environment;

pub use environment::EnvironmentSource;
