// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are data mappers
// - NO reference validation (the service owns it)
// - NO cross-repository calls
// - Multi-statement writes run in one transaction
// - Explicit SQL only

pub mod director_repository;
pub mod genre_repository;
pub mod movie_repository;

pub use director_repository::{DirectorRepository, SqliteDirectorRepository};
pub use genre_repository::{GenreRepository, SqliteGenreRepository};
pub use movie_repository::{MovieRepository, SqliteMovieRepository};

#[cfg(test)]
pub use director_repository::MockDirectorRepository;
#[cfg(test)]
pub use genre_repository::MockGenreRepository;
#[cfg(test)]
pub use movie_repository::MockMovieRepository;

/// `?, ?, ?` for an IN list of `count` values
pub(crate) fn placeholders(count: usize) -> String {
    vec!["?"; count].join(", ")
}
