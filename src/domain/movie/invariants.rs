use super::entity::{MoviePatch, NewMovie};
use super::query::Pagination;
use crate::domain::{DomainError, DomainResult};

pub const MIN_RELEASE_YEAR: i32 = 1500;
pub const MAX_RELEASE_YEAR: i32 = 2030;

/// Validates all fields of a movie about to be created.
/// Reference existence (director, genres) is checked by the service, not here.
pub fn validate_new_movie(movie: &NewMovie) -> DomainResult<()> {
    validate_title(&movie.title)?;
    validate_release_year(movie.release_year)?;
    validate_cast(&movie.cast)?;
    validate_id("director_id", movie.director_id)?;

    if movie.genre_ids.is_empty() {
        return Err(DomainError::InvariantViolation(
            "A movie needs at least one genre".to_string(),
        ));
    }
    validate_genre_ids(&movie.genre_ids)
}

/// Validates only the fields present in a partial update.
/// An explicitly empty genre list is allowed and means "clear genres".
pub fn validate_movie_patch(patch: &MoviePatch) -> DomainResult<()> {
    if let Some(title) = &patch.title {
        validate_title(title)?;
    }
    if let Some(year) = patch.release_year {
        validate_release_year(year)?;
    }
    if let Some(cast) = &patch.cast {
        validate_cast(cast)?;
    }
    if let Some(director_id) = patch.director_id {
        validate_id("director_id", director_id)?;
    }
    if let Some(genre_ids) = &patch.genre_ids {
        validate_genre_ids(genre_ids)?;
    }
    Ok(())
}

/// Page must be >= 1 and page size in [1, 100]. Out-of-range values are rejected, not clamped.
pub fn validate_pagination(pagination: &Pagination) -> DomainResult<()> {
    if pagination.page < 1 {
        return Err(DomainError::InvalidPagination(
            "page must be at least 1".to_string(),
        ));
    }
    if pagination.page_size < 1 || pagination.page_size > Pagination::MAX_PAGE_SIZE {
        return Err(DomainError::InvalidPagination(format!(
            "page_size must be between 1 and {}",
            Pagination::MAX_PAGE_SIZE
        )));
    }
    Ok(())
}

/// Identifiers handed in from outside must be positive
pub fn validate_id(field: &str, id: i64) -> DomainResult<()> {
    if id <= 0 {
        return Err(DomainError::InvariantViolation(format!(
            "{} must be a positive integer, got {}",
            field, id
        )));
    }
    Ok(())
}

fn validate_title(title: &str) -> DomainResult<()> {
    if title.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Movie title cannot be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_cast(cast: &str) -> DomainResult<()> {
    if cast.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Movie cast cannot be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_release_year(year: i32) -> DomainResult<()> {
    if !(MIN_RELEASE_YEAR..=MAX_RELEASE_YEAR).contains(&year) {
        return Err(DomainError::ReleaseYearOutOfRange {
            year,
            min: MIN_RELEASE_YEAR,
            max: MAX_RELEASE_YEAR,
        });
    }
    Ok(())
}

fn validate_genre_ids(genre_ids: &[i64]) -> DomainResult<()> {
    for id in genre_ids {
        validate_id("genre id", *id)?;
    }
    Ok(())
}

/// Invariants that must hold true for the Movie domain:
///
/// 1. Title and cast are never blank
/// 2. Release year stays within [1500, 2030]
/// 3. A new movie has a director and at least one genre
/// 4. A patch only touches the fields it carries
/// 5. Director and genre ids resolve at write time (checked by the service)

#[cfg(test)]
mod tests {
    use super::*;

    fn inception() -> NewMovie {
        NewMovie {
            title: "Inception".to_string(),
            director_id: 1,
            release_year: 2010,
            cast: "Leonardo DiCaprio".to_string(),
            genre_ids: vec![1],
        }
    }

    #[test]
    fn test_valid_movie() {
        assert!(validate_new_movie(&inception()).is_ok());
    }

    #[test]
    fn test_empty_title_fails() {
        let movie = NewMovie {
            title: "   ".to_string(),
            ..inception()
        };
        assert!(matches!(
            validate_new_movie(&movie),
            Err(DomainError::InvariantViolation(msg)) if msg.contains("title")
        ));
    }

    #[test]
    fn test_release_year_bounds() {
        for year in [MIN_RELEASE_YEAR, MAX_RELEASE_YEAR] {
            let movie = NewMovie {
                release_year: year,
                ..inception()
            };
            assert!(validate_new_movie(&movie).is_ok());
        }

        for year in [MIN_RELEASE_YEAR - 1, MAX_RELEASE_YEAR + 1, 0] {
            let movie = NewMovie {
                release_year: year,
                ..inception()
            };
            assert!(matches!(
                validate_new_movie(&movie),
                Err(DomainError::ReleaseYearOutOfRange { .. })
            ));
        }
    }

    #[test]
    fn test_create_requires_genres() {
        let movie = NewMovie {
            genre_ids: vec![],
            ..inception()
        };
        assert!(validate_new_movie(&movie).is_err());
    }

    #[test]
    fn test_non_positive_ids_fail() {
        let movie = NewMovie {
            director_id: 0,
            ..inception()
        };
        assert!(validate_new_movie(&movie).is_err());

        let movie = NewMovie {
            genre_ids: vec![1, -3],
            ..inception()
        };
        assert!(validate_new_movie(&movie).is_err());
    }

    #[test]
    fn test_patch_only_checks_supplied_fields() {
        assert!(validate_movie_patch(&MoviePatch::default()).is_ok());

        let patch = MoviePatch {
            genre_ids: Some(vec![]),
            ..Default::default()
        };
        assert!(validate_movie_patch(&patch).is_ok());

        let patch = MoviePatch {
            cast: Some(String::new()),
            ..Default::default()
        };
        assert!(validate_movie_patch(&patch).is_err());

        let patch = MoviePatch {
            release_year: Some(1200),
            ..Default::default()
        };
        assert!(validate_movie_patch(&patch).is_err());
    }

    #[test]
    fn test_pagination_bounds() {
        assert!(validate_pagination(&Pagination::new(1, 1)).is_ok());
        assert!(validate_pagination(&Pagination::new(7, 100)).is_ok());
        assert!(validate_pagination(&Pagination::new(0, 10)).is_err());
        assert!(validate_pagination(&Pagination::new(1, 0)).is_err());
        assert!(validate_pagination(&Pagination::new(1, 101)).is_err());
    }
}
