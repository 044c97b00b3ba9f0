use serde::{Deserialize, Serialize};

use crate::domain::director::Director;
use crate::domain::genre::Genre;
use crate::domain::rating::{Rating, RatingSummary};

/// Central catalog entity.
/// A Movie refers to exactly one Director, any number of Genres,
/// and exclusively owns its Ratings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Generated by the store on insert
    pub id: i64,

    pub title: String,

    pub release_year: i32,

    /// Free-text cast list
    pub cast: String,

    /// Resolved director (never dangling)
    pub director: Director,

    /// Resolved genres, ordered by genre id
    pub genres: Vec<Genre>,

    /// Owned ratings, ordered by rating id
    pub ratings: Vec<Rating>,
}

impl Movie {
    /// Aggregate over the ratings currently attached to this movie
    pub fn rating_summary(&self) -> RatingSummary {
        RatingSummary::from_ratings(&self.ratings)
    }

    pub fn genre_ids(&self) -> Vec<i64> {
        self.genres.iter().map(|g| g.id).collect()
    }
}

/// Fields required to create a movie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMovie {
    pub title: String,
    pub director_id: i64,
    pub release_year: i32,
    pub cast: String,
    pub genre_ids: Vec<i64>,
}

/// Partial update payload.
///
/// `None` means "not supplied, leave untouched". For genres,
/// `Some(vec![])` is an explicit request to clear the genre set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub director_id: Option<i64>,
    pub release_year: Option<i32>,
    pub cast: Option<String>,
    pub genre_ids: Option<Vec<i64>>,
}

impl MoviePatch {
    /// True when no field was supplied at all
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.director_id.is_none()
            && self.release_year.is_none()
            && self.cast.is_none()
            && self.genre_ids.is_none()
    }
}
