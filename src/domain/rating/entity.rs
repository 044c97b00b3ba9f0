use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single score given to a movie. Immutable once stored;
/// removed only when its movie is deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub id: i64,
    pub movie_id: i64,
    pub score: i32,
    pub created_at: DateTime<Utc>,
}
