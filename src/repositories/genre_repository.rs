// src/repositories/genre_repository.rs

use std::sync::Arc;

use rusqlite::{params_from_iter, Row};

use crate::db::ConnectionPool;
use crate::domain::Genre;
use crate::error::AppResult;

use super::placeholders;

#[cfg_attr(test, mockall::automock)]
pub trait GenreRepository: Send + Sync {
    fn list_all(&self) -> AppResult<Vec<Genre>>;

    /// Genres whose id is in `ids`. Unknown ids are simply absent from the result.
    fn get_by_ids(&self, ids: &[i64]) -> AppResult<Vec<Genre>>;
}

pub struct SqliteGenreRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteGenreRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_genre(row: &Row) -> Result<Genre, rusqlite::Error> {
        Ok(Genre {
            id: row.get("id")?,
            name: row.get("name")?,
            description: row.get("description")?,
        })
    }
}

impl GenreRepository for SqliteGenreRepository {
    fn list_all(&self) -> AppResult<Vec<Genre>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare("SELECT id, name, description FROM genres ORDER BY id")?;

        let genres = stmt
            .query_map([], Self::row_to_genre)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(genres)
    }

    fn get_by_ids(&self, ids: &[i64]) -> AppResult<Vec<Genre>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let conn = self.pool.get()?;

        let sql = format!(
            "SELECT id, name, description FROM genres WHERE id IN ({}) ORDER BY id",
            placeholders(ids.len())
        );
        let mut stmt = conn.prepare(&sql)?;

        let genres = stmt
            .query_map(params_from_iter(ids.iter()), Self::row_to_genre)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(genres)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::{insert_genre, schema_pool};

    #[test]
    fn test_get_by_ids_ignores_unknown_and_duplicates() {
        let pool = schema_pool();
        let action = insert_genre(&pool, "Action");
        let drama = insert_genre(&pool, "Drama");
        let repo = SqliteGenreRepository::new(pool);

        let genres = repo.get_by_ids(&[drama, action, action, 999]).unwrap();
        let ids: Vec<i64> = genres.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![action, drama]);
    }

    #[test]
    fn test_empty_input_skips_query() {
        let pool = schema_pool();
        let repo = SqliteGenreRepository::new(pool);
        assert!(repo.get_by_ids(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_list_all() {
        let pool = schema_pool();
        insert_genre(&pool, "Action");
        insert_genre(&pool, "Horror");
        let repo = SqliteGenreRepository::new(pool);

        let names: Vec<String> = repo.list_all().unwrap().into_iter().map(|g| g.name).collect();
        assert_eq!(names, vec!["Action", "Horror"]);
    }
}
