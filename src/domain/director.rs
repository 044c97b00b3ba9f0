use serde::{Deserialize, Serialize};

/// A film director. Rows are created out-of-band (seed/admin data);
/// the catalog only reads them and checks their existence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Director {
    pub id: i64,
    pub name: String,
    pub birth_year: Option<i32>,
    pub description: Option<String>,
}
