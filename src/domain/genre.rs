use serde::{Deserialize, Serialize};

/// A genre tag. Names are unique across the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}
