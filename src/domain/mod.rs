// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file declares all domain modules and re-exports their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod director;
pub mod genre;
pub mod movie;
pub mod rating;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Reference data (read-only for the catalog core)
pub use director::Director;
pub use genre::Genre;

// Movie Domain
pub use movie::{
    validate_id, validate_movie_patch, validate_new_movie, validate_pagination, Movie,
    MovieFilter, MoviePatch, NewMovie, Pagination,
};

// Rating Domain
pub use rating::{validate_score, Rating, RatingSummary};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent caller mistakes: bad input or references that do not resolve
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Director {0} does not exist")]
    UnknownDirector(i64),

    #[error("Genres do not exist: {0:?}")]
    UnknownGenres(Vec<i64>),

    #[error("Score {0} is out of range, must be between 1 and 10")]
    ScoreOutOfRange(i32),

    #[error("Release year {year} is out of range, must be between {min} and {max}")]
    ReleaseYearOutOfRange { year: i32, min: i32, max: i32 },

    #[error("Invalid pagination: {0}")]
    InvalidPagination(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
