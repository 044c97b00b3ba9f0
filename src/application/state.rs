// src/application/state.rs

use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::repositories::{SqliteDirectorRepository, SqliteGenreRepository, SqliteMovieRepository};
use crate::services::{MovieService, ReferenceService, ReferenceValidator};

/// Shared state handed to every command.
/// All fields are Arc-wrapped so commands can move clones onto blocking workers.
#[derive(Clone)]
pub struct AppState {
    pub pool: Arc<ConnectionPool>,
    pub movie_service: Arc<MovieService>,
    pub reference_service: Arc<ReferenceService>,
}

impl AppState {
    /// Wire SQLite repositories and services over one pool
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        let director_repo = Arc::new(SqliteDirectorRepository::new(pool.clone()));
        let genre_repo = Arc::new(SqliteGenreRepository::new(pool.clone()));
        let movie_repo = Arc::new(SqliteMovieRepository::new(pool.clone()));

        let validator = ReferenceValidator::new(director_repo.clone(), genre_repo.clone());
        let movie_service = Arc::new(MovieService::new(movie_repo, validator));
        let reference_service = Arc::new(ReferenceService::new(director_repo, genre_repo));

        Self {
            pool,
            movie_service,
            reference_service,
        }
    }
}
