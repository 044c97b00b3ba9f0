// src/lib.rs
// Movie Catalog - movies, directors, genres and ratings over SQLite
//
// Architecture:
// - Domain-centric: entities, field invariants and rating aggregation live in `domain`
// - Repositories own SQL; every multi-statement write is one transaction
// - Services own reference validation and use-case orchestration
// - Application layer: DTOs, error envelope, async command adapters
// - Transport-agnostic: any HTTP/IPC layer can mount the commands

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod logging;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API
// ============================================================================

pub use domain::{
    validate_movie_patch,
    validate_new_movie,
    validate_pagination,
    validate_score,
    Director,
    DomainError,
    Genre,
    Movie,
    MovieFilter,
    MoviePatch,
    NewMovie,
    Pagination,
    Rating,
    RatingSummary,
};

pub use error::{AppError, AppResult};

pub use config::CatalogConfig;

pub use services::{MoviePage, MovieService, RatedMovie, ReferenceService, ReferenceValidator};

pub use application::{AppState, ErrorResponse};
