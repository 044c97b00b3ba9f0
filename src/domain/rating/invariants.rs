use crate::domain::{DomainError, DomainResult};

pub const MIN_SCORE: i32 = 1;
pub const MAX_SCORE: i32 = 10;

/// Score must lie in the closed range [1, 10]
pub fn validate_score(score: i32) -> DomainResult<()> {
    if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Err(DomainError::ScoreOutOfRange(score));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(validate_score(1).is_ok());
        assert!(validate_score(10).is_ok());
    }

    #[test]
    fn test_out_of_range_fails() {
        assert_eq!(validate_score(0), Err(DomainError::ScoreOutOfRange(0)));
        assert_eq!(validate_score(11), Err(DomainError::ScoreOutOfRange(11)));
        assert!(validate_score(-5).is_err());
    }
}
