// models/src/lib.rs

//! Value types shared by the triage engine, the REST API and the CLI.

pub mod errors;
pub mod medical;

pub use errors::{ValidationError, ValidationResult};
pub use medical::*;
