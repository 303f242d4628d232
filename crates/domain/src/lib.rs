//! Domain layer for skycast
//!
//! Contains the forecast model: locations, hourly readings, day buckets and
//! the value objects they are built from. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
