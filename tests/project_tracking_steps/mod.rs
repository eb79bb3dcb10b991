//! Step definitions for project tracking behaviour tests.

pub mod given;
pub mod then;
pub mod when;
