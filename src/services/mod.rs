// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod movie_service;
pub mod reference_service;
pub mod reference_validator;

pub use movie_service::{MoviePage, MovieService, RatedMovie};
pub use reference_service::ReferenceService;
pub use reference_validator::ReferenceValidator;
