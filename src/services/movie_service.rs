// src/services/movie_service.rs
//
// Movie use cases
//
// Flow for writes: field validation -> reference validation -> repository.
// Nothing is written unless every check passes.

use std::sync::Arc;

use log::{debug, info, warn};

use crate::domain::{
    validate_movie_patch, validate_new_movie, validate_pagination, validate_score, Movie,
    MovieFilter, MoviePatch, NewMovie, Pagination, Rating, RatingSummary,
};
use crate::error::{AppError, AppResult};
use crate::repositories::MovieRepository;

use super::reference_validator::ReferenceValidator;

/// A movie together with the aggregate over its current ratings
#[derive(Debug, Clone, PartialEq)]
pub struct RatedMovie {
    pub movie: Movie,
    pub rating: RatingSummary,
}

impl From<Movie> for RatedMovie {
    fn from(movie: Movie) -> Self {
        let rating = movie.rating_summary();
        Self { movie, rating }
    }
}

/// One page of a filtered listing
#[derive(Debug, Clone, PartialEq)]
pub struct MoviePage {
    pub page: u32,
    pub page_size: u32,
    pub total_items: u64,
    pub total_pages: u64,
    pub items: Vec<RatedMovie>,
}

pub struct MovieService {
    movie_repo: Arc<dyn MovieRepository>,
    validator: ReferenceValidator,
}

impl MovieService {
    pub fn new(movie_repo: Arc<dyn MovieRepository>, validator: ReferenceValidator) -> Self {
        Self {
            movie_repo,
            validator,
        }
    }

    pub fn list_movies(
        &self,
        filter: &MovieFilter,
        pagination: Pagination,
    ) -> AppResult<MoviePage> {
        validate_pagination(&pagination).map_err(|e| {
            warn!("Rejected movie listing: {}", e);
            AppError::Validation(e)
        })?;

        let items = self
            .movie_repo
            .list(filter, pagination.skip(), pagination.limit())?;
        let total_items = self.movie_repo.count(filter)?;

        debug!(
            "Listed {} of {} movies (page {}, size {})",
            items.len(),
            total_items,
            pagination.page,
            pagination.page_size
        );

        Ok(MoviePage {
            page: pagination.page,
            page_size: pagination.page_size,
            total_items,
            total_pages: pagination.total_pages(total_items),
            items: items.into_iter().map(RatedMovie::from).collect(),
        })
    }

    pub fn get_movie(&self, movie_id: i64) -> AppResult<RatedMovie> {
        self.movie_repo
            .get_by_id(movie_id)?
            .map(RatedMovie::from)
            .ok_or_else(|| AppError::movie_not_found(movie_id))
    }

    pub fn create_movie(&self, new_movie: NewMovie) -> AppResult<RatedMovie> {
        validate_new_movie(&new_movie).map_err(|e| {
            warn!("Rejected new movie '{}': {}", new_movie.title, e);
            AppError::Validation(e)
        })?;

        self.validator.ensure_director(new_movie.director_id)?;
        self.validator.ensure_genres(&new_movie.genre_ids)?;

        let movie = self.movie_repo.create(&new_movie)?;
        info!("Created movie {} '{}'", movie.id, movie.title);

        Ok(RatedMovie::from(movie))
    }

    pub fn update_movie(&self, movie_id: i64, patch: MoviePatch) -> AppResult<RatedMovie> {
        validate_movie_patch(&patch).map_err(|e| {
            warn!("Rejected update of movie {}: {}", movie_id, e);
            AppError::Validation(e)
        })?;

        if let Some(director_id) = patch.director_id {
            self.validator.ensure_director(director_id)?;
        }

        if let Some(genre_ids) = &patch.genre_ids {
            // An empty set clears genres and has nothing to resolve
            if !genre_ids.is_empty() {
                self.validator.ensure_genres(genre_ids)?;
            }
        }

        let movie = self
            .movie_repo
            .update(movie_id, &patch)?
            .ok_or_else(|| AppError::movie_not_found(movie_id))?;
        info!("Updated movie {}", movie_id);

        Ok(RatedMovie::from(movie))
    }

    pub fn delete_movie(&self, movie_id: i64) -> AppResult<()> {
        if !self.movie_repo.delete(movie_id)? {
            return Err(AppError::movie_not_found(movie_id));
        }

        info!("Deleted movie {}", movie_id);
        Ok(())
    }

    pub fn add_rating(&self, movie_id: i64, score: i32) -> AppResult<Rating> {
        validate_score(score).map_err(|e| {
            warn!("Rejected rating for movie {}: {}", movie_id, e);
            AppError::Validation(e)
        })?;

        let rating = self
            .movie_repo
            .add_rating(movie_id, score)?
            .ok_or_else(|| AppError::movie_not_found(movie_id))?;
        info!("Movie {} rated {}", movie_id, score);

        Ok(rating)
    }
}
