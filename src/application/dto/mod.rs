// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are transport-friendly representations
// - Response DTOs are built FROM service results only
// - Request DTOs convert INTO domain inputs; the domain validates them
// - Averages are rounded here and nowhere else

use serde::{Deserialize, Serialize};

use crate::db::DatabaseStats;
use crate::domain::{Director, Genre, MovieFilter, MoviePatch, NewMovie, Pagination, Rating};
use crate::services::{MoviePage, RatedMovie};

// ============================================================================
// MOVIE DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectorSummaryDto {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDto {
    pub id: i64,
    pub title: String,
    pub release_year: i32,
    pub director: DirectorSummaryDto,
    /// Genre names, ordered by genre id
    pub genres: Vec<String>,
    pub cast: String,
    /// One decimal place, `null` when unrated
    pub average_rating: Option<f64>,
    pub ratings_count: usize,
}

impl From<RatedMovie> for MovieDto {
    fn from(rated: RatedMovie) -> Self {
        let RatedMovie { movie, rating } = rated;
        Self {
            id: movie.id,
            title: movie.title,
            release_year: movie.release_year,
            director: DirectorSummaryDto {
                id: movie.director.id,
                name: movie.director.name,
            },
            genres: movie.genres.into_iter().map(|g| g.name).collect(),
            cast: movie.cast,
            average_rating: rating.rounded_average(),
            ratings_count: rating.count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoviePageDto {
    pub page: u32,
    pub page_size: u32,
    pub total_items: u64,
    pub total_pages: u64,
    pub items: Vec<MovieDto>,
}

impl From<MoviePage> for MoviePageDto {
    fn from(page: MoviePage) -> Self {
        Self {
            page: page.page,
            page_size: page.page_size,
            total_items: page.total_items,
            total_pages: page.total_pages,
            items: page.items.into_iter().map(MovieDto::from).collect(),
        }
    }
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    Pagination::DEFAULT_PAGE_SIZE
}

/// Listing parameters. Missing page fields take their defaults;
/// blank text filters behave as absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMoviesQuery {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub release_year: Option<i32>,
    #[serde(default)]
    pub genre: Option<String>,
}

impl Default for ListMoviesQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
            title: None,
            release_year: None,
            genre: None,
        }
    }
}

impl ListMoviesQuery {
    pub fn filter(&self) -> MovieFilter {
        MovieFilter {
            title: self.title.clone(),
            release_year: self.release_year,
            genre: self.genre.clone(),
        }
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.page_size)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateMovieDto {
    pub title: String,
    pub release_year: i32,
    pub cast: String,
    pub director_id: i64,
    /// Genre ids
    pub genres: Vec<i64>,
}

impl From<CreateMovieDto> for NewMovie {
    fn from(dto: CreateMovieDto) -> Self {
        NewMovie {
            title: dto.title,
            director_id: dto.director_id,
            release_year: dto.release_year,
            cast: dto.cast,
            genre_ids: dto.genres,
        }
    }
}

/// Every field optional. `genres: []` clears the genre set; omitting it keeps it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateMovieDto {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub release_year: Option<i32>,
    #[serde(default)]
    pub cast: Option<String>,
    #[serde(default)]
    pub director_id: Option<i64>,
    #[serde(default)]
    pub genres: Option<Vec<i64>>,
}

impl From<UpdateMovieDto> for MoviePatch {
    fn from(dto: UpdateMovieDto) -> Self {
        MoviePatch {
            title: dto.title,
            director_id: dto.director_id,
            release_year: dto.release_year,
            cast: dto.cast,
            genre_ids: dto.genres,
        }
    }
}

// ============================================================================
// RATING DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingDto {
    pub id: i64,
    pub movie_id: i64,
    pub score: i32,
    /// RFC 3339, UTC
    pub created_at: String,
}

impl From<Rating> for RatingDto {
    fn from(rating: Rating) -> Self {
        Self {
            id: rating.id,
            movie_id: rating.movie_id,
            score: rating.score,
            created_at: rating.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRatingDto {
    pub score: i32,
}

// ============================================================================
// REFERENCE DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectorDto {
    pub id: i64,
    pub name: String,
    pub birth_year: Option<i32>,
    pub description: Option<String>,
}

impl From<Director> for DirectorDto {
    fn from(director: Director) -> Self {
        Self {
            id: director.id,
            name: director.name,
            birth_year: director.birth_year,
            description: director.description,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl From<Genre> for GenreDto {
    fn from(genre: Genre) -> Self {
        Self {
            id: genre.id,
            name: genre.name,
            description: genre.description,
        }
    }
}

// ============================================================================
// ENVELOPES & HEALTH
// ============================================================================

/// `{status: "success", data: ...}` wrapper used by update and rating commands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessEnvelope<T> {
    pub status: String,
    pub data: T,
}

impl<T> SuccessEnvelope<T> {
    pub fn new(data: T) -> Self {
        Self {
            status: "success".to_string(),
            data,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthDto {
    pub status: String,
    pub size_bytes: i64,
    pub director_count: i64,
    pub genre_count: i64,
    pub movie_count: i64,
    pub rating_count: i64,
}

impl From<DatabaseStats> for HealthDto {
    fn from(stats: DatabaseStats) -> Self {
        Self {
            status: "ok".to_string(),
            size_bytes: stats.size_bytes,
            director_count: stats.director_count,
            genre_count: stats.genre_count,
            movie_count: stats.movie_count,
            rating_count: stats.rating_count,
        }
    }
}
