pub mod entity;
pub mod invariants;
pub mod query;

pub use entity::{Movie, MoviePatch, NewMovie};
pub use invariants::{
    validate_id, validate_movie_patch, validate_new_movie, validate_pagination,
    MAX_RELEASE_YEAR, MIN_RELEASE_YEAR,
};
pub use query::{MovieFilter, Pagination};
