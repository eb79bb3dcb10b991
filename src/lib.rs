//! Todolist: in-memory project and task tracking.
//!
//! This crate manages a bounded collection of projects, each holding an
//! ordered collection of tasks, with word-limit validation on text fields and
//! capacity ceilings read once from the environment.
//!
//! # Architecture
//!
//! Todolist follows hexagonal architecture principles:
//!
//! - **Domain**: Records, identifiers and text rules with no infrastructure
//!   dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (process environment,
//!   in-memory fixtures)
//!
//! # Modules
//!
//! - [`tracker`]: Projects, tasks and the tracker service

pub mod tracker;
