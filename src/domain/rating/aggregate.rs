use serde::Serialize;

use super::entity::Rating;

/// Derived (count, mean) pair over a movie's ratings.
/// Never persisted; always recomputed from the current rating rows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatingSummary {
    pub count: usize,
    /// Unrounded mean, `None` when there are no ratings
    pub average: Option<f64>,
}

impl RatingSummary {
    pub fn from_ratings(ratings: &[Rating]) -> Self {
        Self::from_scores(ratings.iter().map(|r| r.score))
    }

    pub fn from_scores<I>(scores: I) -> Self
    where
        I: IntoIterator<Item = i32>,
    {
        let (count, total) = scores
            .into_iter()
            .fold((0usize, 0i64), |(count, total), score| {
                (count + 1, total + i64::from(score))
            });

        let average = if count == 0 {
            None
        } else {
            Some(total as f64 / count as f64)
        };

        Self { count, average }
    }

    /// Mean rounded to one decimal place, for presentation only
    pub fn rounded_average(&self) -> Option<f64> {
        self.average.map(|avg| (avg * 10.0).round() / 10.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_ratings_has_no_average() {
        let summary = RatingSummary::from_ratings(&[]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.average, None);
        assert_eq!(summary.rounded_average(), None);
    }

    #[test]
    fn test_mean_of_two() {
        let summary = RatingSummary::from_scores([7, 9]);
        assert_eq!(summary.count, 2);
        assert_eq!(summary.rounded_average(), Some(8.0));
    }

    #[test]
    fn test_rounding_happens_only_on_presentation() {
        let summary = RatingSummary::from_scores([7, 9, 4]);
        assert_eq!(summary.count, 3);
        assert_eq!(summary.rounded_average(), Some(6.7));

        let raw = summary.average.unwrap();
        assert!((raw - 20.0 / 3.0).abs() < f64::EPSILON);
    }
}
