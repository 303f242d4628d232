//! Application layer - Use cases and orchestration
//!
//! Contains the forecast use cases and the port they depend on. Adapters in
//! the infrastructure layer implement the port; presentation layers call the
//! services.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
