// src/services/reference_validator.rs
//
// Existence checks for the references a movie write carries.
// Runs before any write so an invalid reference never reaches the store.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::DomainError;
use crate::error::{AppError, AppResult};
use crate::repositories::{DirectorRepository, GenreRepository};

pub struct ReferenceValidator {
    director_repo: Arc<dyn DirectorRepository>,
    genre_repo: Arc<dyn GenreRepository>,
}

impl ReferenceValidator {
    pub fn new(
        director_repo: Arc<dyn DirectorRepository>,
        genre_repo: Arc<dyn GenreRepository>,
    ) -> Self {
        Self {
            director_repo,
            genre_repo,
        }
    }

    pub fn director_exists(&self, director_id: i64) -> AppResult<bool> {
        self.director_repo.exists(director_id)
    }

    /// Ids from `genre_ids` that do not resolve, sorted and without repeats
    pub fn missing_genres(&self, genre_ids: &[i64]) -> AppResult<Vec<i64>> {
        let mut wanted = genre_ids.to_vec();
        wanted.sort_unstable();
        wanted.dedup();

        let found: HashSet<i64> = self
            .genre_repo
            .get_by_ids(&wanted)?
            .into_iter()
            .map(|genre| genre.id)
            .collect();

        Ok(wanted.into_iter().filter(|id| !found.contains(id)).collect())
    }

    /// True iff every id resolves. Vacuously true for an empty slice.
    pub fn all_genres_exist(&self, genre_ids: &[i64]) -> AppResult<bool> {
        Ok(self.missing_genres(genre_ids)?.is_empty())
    }

    pub fn ensure_director(&self, director_id: i64) -> AppResult<()> {
        if !self.director_exists(director_id)? {
            return Err(AppError::Validation(DomainError::UnknownDirector(
                director_id,
            )));
        }
        Ok(())
    }

    pub fn ensure_genres(&self, genre_ids: &[i64]) -> AppResult<()> {
        let missing = self.missing_genres(genre_ids)?;
        if !missing.is_empty() {
            return Err(AppError::Validation(DomainError::UnknownGenres(missing)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Genre;
    use crate::repositories::{MockDirectorRepository, MockGenreRepository};

    fn genre(id: i64) -> Genre {
        Genre {
            id,
            name: format!("Genre {}", id),
            description: None,
        }
    }

    fn validator_with_genres(known: Vec<i64>) -> ReferenceValidator {
        let mut genre_repo = MockGenreRepository::new();
        genre_repo
            .expect_get_by_ids()
            .returning(move |ids| {
                Ok(ids
                    .iter()
                    .filter(|id| known.contains(id))
                    .map(|id| genre(*id))
                    .collect())
            });

        ReferenceValidator::new(Arc::new(MockDirectorRepository::new()), Arc::new(genre_repo))
    }

    #[test]
    fn test_missing_genres_sorted_and_deduplicated() {
        let validator = validator_with_genres(vec![1, 2]);

        assert_eq!(validator.missing_genres(&[9, 1, 9, 4]).unwrap(), vec![4, 9]);
        assert!(validator.all_genres_exist(&[2, 1, 2]).unwrap());
        assert!(!validator.all_genres_exist(&[1, 3]).unwrap());
    }

    #[test]
    fn test_empty_genre_set_is_vacuously_valid() {
        let validator = validator_with_genres(vec![]);
        assert!(validator.all_genres_exist(&[]).unwrap());
        assert!(validator.ensure_genres(&[]).is_ok());
    }

    #[test]
    fn test_ensure_genres_names_missing_ids() {
        let validator = validator_with_genres(vec![1]);

        let err = validator.ensure_genres(&[1, 5]).unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation(DomainError::UnknownGenres(ref ids)) if ids == &vec![5]
        ));
    }

    #[test]
    fn test_ensure_director() {
        let mut director_repo = MockDirectorRepository::new();
        director_repo
            .expect_exists()
            .returning(|id| Ok(id == 1));
        let validator =
            ReferenceValidator::new(Arc::new(director_repo), Arc::new(MockGenreRepository::new()));

        assert!(validator.ensure_director(1).is_ok());
        assert!(matches!(
            validator.ensure_director(2),
            Err(AppError::Validation(DomainError::UnknownDirector(2)))
        ));
    }

    #[test]
    fn test_store_failure_is_propagated() {
        let mut director_repo = MockDirectorRepository::new();
        director_repo
            .expect_exists()
            .returning(|_| Err(AppError::Pool("timed out".to_string())));
        let validator =
            ReferenceValidator::new(Arc::new(director_repo), Arc::new(MockGenreRepository::new()));

        assert!(matches!(validator.ensure_director(1), Err(AppError::Pool(_))));
    }
}
