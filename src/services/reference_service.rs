// src/services/reference_service.rs
//
// Read-only access to directors and genres for pickers and lookups.

use std::sync::Arc;

use crate::domain::{Director, Genre};
use crate::error::AppResult;
use crate::repositories::{DirectorRepository, GenreRepository};

pub struct ReferenceService {
    director_repo: Arc<dyn DirectorRepository>,
    genre_repo: Arc<dyn GenreRepository>,
}

impl ReferenceService {
    pub fn new(
        director_repo: Arc<dyn DirectorRepository>,
        genre_repo: Arc<dyn GenreRepository>,
    ) -> Self {
        Self {
            director_repo,
            genre_repo,
        }
    }

    pub fn list_directors(&self) -> AppResult<Vec<Director>> {
        self.director_repo.list_all()
    }

    pub fn list_genres(&self) -> AppResult<Vec<Genre>> {
        self.genre_repo.list_all()
    }
}
