// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Boundary between any transport and the services
// - Translates between DTOs and domain inputs/outputs
// - Maps errors into the failure envelope
// - Runs service calls on blocking workers

pub mod commands;
pub mod dto;
pub mod error_handling;
pub mod state;

pub use commands::*;
pub use dto::*;
pub use error_handling::{ErrorBody, ErrorResponse, ErrorType, ToErrorResponse};
pub use state::AppState;
