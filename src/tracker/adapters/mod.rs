//! Adapter implementations for tracker ports.

pub mod memory;
pub mod process;

pub use memory::StaticEnvironment;
pub use process::ProcessEnvironment;
