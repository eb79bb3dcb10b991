//! In-memory project and task tracking.
//!
//! A [`services::TrackerManager`] owns a bounded, ordered list of projects,
//! each holding an ordered list of tasks. Creation is checked against
//! configurable ceilings and text fields against word limits. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
