// src/repositories/director_repository.rs

use std::sync::Arc;

use rusqlite::{params, Row};

use crate::db::ConnectionPool;
use crate::domain::Director;
use crate::error::{AppError, AppResult};

#[cfg_attr(test, mockall::automock)]
pub trait DirectorRepository: Send + Sync {
    fn get_by_id(&self, id: i64) -> AppResult<Option<Director>>;
    fn list_all(&self) -> AppResult<Vec<Director>>;
    fn exists(&self, id: i64) -> AppResult<bool>;
}

pub struct SqliteDirectorRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteDirectorRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_director(row: &Row) -> Result<Director, rusqlite::Error> {
        Ok(Director {
            id: row.get("id")?,
            name: row.get("name")?,
            birth_year: row.get("birth_year")?,
            description: row.get("description")?,
        })
    }
}

impl DirectorRepository for SqliteDirectorRepository {
    fn get_by_id(&self, id: i64) -> AppResult<Option<Director>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT id, name, birth_year, description FROM directors WHERE id = ?1",
        )?;

        match stmt.query_row(params![id], Self::row_to_director) {
            Ok(director) => Ok(Some(director)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn list_all(&self) -> AppResult<Vec<Director>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT id, name, birth_year, description FROM directors ORDER BY id",
        )?;

        let directors = stmt
            .query_map([], Self::row_to_director)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(directors)
    }

    fn exists(&self, id: i64) -> AppResult<bool> {
        let conn = self.pool.get()?;

        let exists: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM directors WHERE id = ?1)",
            params![id],
            |row| row.get(0),
        )?;

        Ok(exists)
    }
}
