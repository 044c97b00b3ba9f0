// src/repositories/movie_repository.rs
//
// Movie persistence
//
// - Reads resolve director, genres and ratings eagerly
// - Filters compose into one WHERE clause shared by list and count
// - Every write runs in a single IMMEDIATE transaction; the write lock is
//   held from before the existence check until commit
// - An early return or error drops the transaction, which rolls it back

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::debug;
use rusqlite::types::{Type, Value};
use rusqlite::{params, params_from_iter, Connection, Row, TransactionBehavior};

use crate::db::ConnectionPool;
use crate::domain::{Director, Genre, Movie, MovieFilter, MoviePatch, NewMovie, Rating};
use crate::error::{AppError, AppResult};

use super::placeholders;

const MOVIE_COLUMNS: &str = r#"m.id AS id, m.title AS title, m.release_year AS release_year,
       m."cast" AS "cast", d.id AS director_id, d.name AS director_name,
       d.birth_year AS director_birth_year, d.description AS director_description"#;

const MOVIE_SOURCE: &str = "FROM movies m JOIN directors d ON d.id = m.director_id";

#[cfg_attr(test, mockall::automock)]
pub trait MovieRepository: Send + Sync {
    /// One page of movies matching `filter`, in ascending id order
    fn list(&self, filter: &MovieFilter, skip: u64, limit: u64) -> AppResult<Vec<Movie>>;

    /// Number of movies matching `filter`, ignoring pagination
    fn count(&self, filter: &MovieFilter) -> AppResult<u64>;

    fn get_by_id(&self, id: i64) -> AppResult<Option<Movie>>;

    /// Insert a movie and attach the genres among `genre_ids` that exist
    fn create(&self, movie: &NewMovie) -> AppResult<Movie>;

    /// Apply the supplied fields. `None` when the movie does not exist.
    fn update(&self, id: i64, patch: &MoviePatch) -> AppResult<Option<Movie>>;

    /// Delete a movie with its genre links and ratings. `false` when absent.
    fn delete(&self, id: i64) -> AppResult<bool>;

    /// Store a rating as given (no range check). `None` when the movie does not exist.
    fn add_rating(&self, movie_id: i64, score: i32) -> AppResult<Option<Rating>>;
}

pub struct SqliteMovieRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteMovieRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Map a joined movie/director row. Genres and ratings are filled in by `load_relations`.
    fn row_to_movie(row: &Row) -> Result<Movie, rusqlite::Error> {
        Ok(Movie {
            id: row.get("id")?,
            title: row.get("title")?,
            release_year: row.get("release_year")?,
            cast: row.get("cast")?,
            director: Director {
                id: row.get("director_id")?,
                name: row.get("director_name")?,
                birth_year: row.get("director_birth_year")?,
                description: row.get("director_description")?,
            },
            genres: Vec::new(),
            ratings: Vec::new(),
        })
    }

    fn row_to_rating(row: &Row) -> Result<Rating, rusqlite::Error> {
        let created_at_str: String = row.get("created_at")?;
        let created_at = DateTime::parse_from_rfc3339(&created_at_str)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?;

        Ok(Rating {
            id: row.get("id")?,
            movie_id: row.get("movie_id")?,
            score: row.get("score")?,
            created_at,
        })
    }

    /// WHERE clause and bound values for a filter.
    ///
    /// The genre filter is a semi-join (EXISTS), so a movie matching through
    /// several genres still yields exactly one row.
    fn filter_clause(filter: &MovieFilter) -> (String, Vec<Value>) {
        let mut conditions: Vec<&str> = Vec::new();
        let mut values: Vec<Value> = Vec::new();

        if let Some(title) = filter.title_needle() {
            conditions.push(r"unicode_lower(m.title) LIKE ? ESCAPE '\'");
            values.push(Value::Text(like_pattern(&title)));
        }

        if let Some(year) = filter.release_year {
            conditions.push("m.release_year = ?");
            values.push(Value::Integer(i64::from(year)));
        }

        if let Some(genre) = filter.genre_needle() {
            conditions.push(
                r"EXISTS (SELECT 1 FROM movie_genres mg
                          JOIN genres g ON g.id = mg.genre_id
                          WHERE mg.movie_id = m.id AND unicode_lower(g.name) LIKE ? ESCAPE '\')",
            );
            values.push(Value::Text(like_pattern(&genre)));
        }

        let clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        (clause, values)
    }

    fn fetch_movie(conn: &Connection, id: i64) -> AppResult<Option<Movie>> {
        let sql = format!("SELECT {} {} WHERE m.id = ?1", MOVIE_COLUMNS, MOVIE_SOURCE);

        let movie = match conn.query_row(&sql, params![id], Self::row_to_movie) {
            Ok(movie) => movie,
            Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
            Err(e) => return Err(AppError::Database(e)),
        };

        Ok(Self::load_relations(conn, vec![movie])?.pop())
    }

    /// Batch-load genres and ratings for the given movies (two queries total)
    fn load_relations(conn: &Connection, mut movies: Vec<Movie>) -> AppResult<Vec<Movie>> {
        if movies.is_empty() {
            return Ok(movies);
        }

        let ids: Vec<i64> = movies.iter().map(|m| m.id).collect();
        let in_list = placeholders(ids.len());

        let mut genres_by_movie: HashMap<i64, Vec<Genre>> = HashMap::new();
        let mut stmt = conn.prepare(&format!(
            "SELECT mg.movie_id, g.id, g.name, g.description
             FROM movie_genres mg JOIN genres g ON g.id = mg.genre_id
             WHERE mg.movie_id IN ({})
             ORDER BY g.id",
            in_list
        ))?;
        let rows = stmt.query_map(params_from_iter(ids.iter()), |row| {
            Ok((
                row.get::<_, i64>(0)?,
                Genre {
                    id: row.get(1)?,
                    name: row.get(2)?,
                    description: row.get(3)?,
                },
            ))
        })?;
        for row in rows {
            let (movie_id, genre) = row?;
            genres_by_movie.entry(movie_id).or_default().push(genre);
        }

        let mut ratings_by_movie: HashMap<i64, Vec<Rating>> = HashMap::new();
        let mut stmt = conn.prepare(&format!(
            "SELECT id, movie_id, score, created_at
             FROM movie_ratings
             WHERE movie_id IN ({})
             ORDER BY id",
            in_list
        ))?;
        let rows = stmt.query_map(params_from_iter(ids.iter()), Self::row_to_rating)?;
        for row in rows {
            let rating = row?;
            ratings_by_movie.entry(rating.movie_id).or_default().push(rating);
        }

        for movie in &mut movies {
            movie.genres = genres_by_movie.remove(&movie.id).unwrap_or_default();
            movie.ratings = ratings_by_movie.remove(&movie.id).unwrap_or_default();
        }

        Ok(movies)
    }

    fn movie_exists(conn: &Connection, id: i64) -> AppResult<bool> {
        let exists: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM movies WHERE id = ?1)",
            params![id],
            |row| row.get(0),
        )?;
        Ok(exists)
    }

    /// Link the movie to each genre id that exists; unknown ids and repeats are skipped
    fn attach_genres(conn: &Connection, movie_id: i64, genre_ids: &[i64]) -> AppResult<()> {
        let mut stmt = conn.prepare(
            "INSERT OR IGNORE INTO movie_genres (movie_id, genre_id)
             SELECT ?1, id FROM genres WHERE id = ?2",
        )?;

        for genre_id in genre_ids {
            stmt.execute(params![movie_id, genre_id])?;
        }

        Ok(())
    }
}

impl MovieRepository for SqliteMovieRepository {
    fn list(&self, filter: &MovieFilter, skip: u64, limit: u64) -> AppResult<Vec<Movie>> {
        let conn = self.pool.get()?;

        let (clause, mut values) = Self::filter_clause(filter);
        values.push(Value::Integer(to_sql_int(limit)));
        values.push(Value::Integer(to_sql_int(skip)));

        let sql = format!(
            "SELECT {} {} {} ORDER BY m.id LIMIT ? OFFSET ?",
            MOVIE_COLUMNS, MOVIE_SOURCE, clause
        );
        let mut stmt = conn.prepare(&sql)?;

        let movies = stmt
            .query_map(params_from_iter(values.iter()), Self::row_to_movie)?
            .collect::<Result<Vec<_>, _>>()?;

        Self::load_relations(&conn, movies)
    }

    fn count(&self, filter: &MovieFilter) -> AppResult<u64> {
        let conn = self.pool.get()?;

        let (clause, values) = Self::filter_clause(filter);
        let sql = format!("SELECT COUNT(*) {} {}", MOVIE_SOURCE, clause);

        let count: i64 = conn.query_row(&sql, params_from_iter(values.iter()), |row| row.get(0))?;

        Ok(u64::try_from(count).unwrap_or(0))
    }

    fn get_by_id(&self, id: i64) -> AppResult<Option<Movie>> {
        let conn = self.pool.get()?;
        Self::fetch_movie(&conn, id)
    }

    fn create(&self, movie: &NewMovie) -> AppResult<Movie> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        tx.execute(
            r#"INSERT INTO movies (title, release_year, "cast", director_id)
               VALUES (?1, ?2, ?3, ?4)"#,
            params![movie.title, movie.release_year, movie.cast, movie.director_id],
        )?;
        let movie_id = tx.last_insert_rowid();

        Self::attach_genres(&tx, movie_id, &movie.genre_ids)?;

        let created = Self::fetch_movie(&tx, movie_id)?.ok_or_else(|| {
            AppError::Other(format!("Movie {} not readable after insert", movie_id))
        })?;

        tx.commit()?;
        debug!("Inserted movie {} with {} genres", movie_id, created.genres.len());

        Ok(created)
    }

    fn update(&self, id: i64, patch: &MoviePatch) -> AppResult<Option<Movie>> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        if !Self::movie_exists(&tx, id)? {
            return Ok(None);
        }

        let mut assignments: Vec<&str> = Vec::new();
        let mut values: Vec<Value> = Vec::new();

        if let Some(title) = &patch.title {
            assignments.push("title = ?");
            values.push(Value::Text(title.clone()));
        }
        if let Some(year) = patch.release_year {
            assignments.push("release_year = ?");
            values.push(Value::Integer(i64::from(year)));
        }
        if let Some(cast) = &patch.cast {
            assignments.push(r#""cast" = ?"#);
            values.push(Value::Text(cast.clone()));
        }
        if let Some(director_id) = patch.director_id {
            assignments.push("director_id = ?");
            values.push(Value::Integer(director_id));
        }

        if !assignments.is_empty() {
            values.push(Value::Integer(id));
            let sql = format!("UPDATE movies SET {} WHERE id = ?", assignments.join(", "));
            tx.execute(&sql, params_from_iter(values.iter()))?;
        }

        // Supplied genre set replaces the current one, empty included
        if let Some(genre_ids) = &patch.genre_ids {
            tx.execute("DELETE FROM movie_genres WHERE movie_id = ?1", params![id])?;
            Self::attach_genres(&tx, id, genre_ids)?;
        }

        let updated = Self::fetch_movie(&tx, id)?;
        tx.commit()?;

        Ok(updated)
    }

    fn delete(&self, id: i64) -> AppResult<bool> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        if !Self::movie_exists(&tx, id)? {
            return Ok(false);
        }

        let links = tx.execute("DELETE FROM movie_genres WHERE movie_id = ?1", params![id])?;
        let ratings = tx.execute("DELETE FROM movie_ratings WHERE movie_id = ?1", params![id])?;
        tx.execute("DELETE FROM movies WHERE id = ?1", params![id])?;

        tx.commit()?;
        debug!(
            "Deleted movie {} along with {} genre links and {} ratings",
            id, links, ratings
        );

        Ok(true)
    }

    fn add_rating(&self, movie_id: i64, score: i32) -> AppResult<Option<Rating>> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        if !Self::movie_exists(&tx, movie_id)? {
            return Ok(None);
        }

        let created_at = Utc::now();
        tx.execute(
            "INSERT INTO movie_ratings (score, movie_id, created_at) VALUES (?1, ?2, ?3)",
            params![score, movie_id, created_at.to_rfc3339()],
        )?;
        let id = tx.last_insert_rowid();

        tx.commit()?;

        Ok(Some(Rating {
            id,
            movie_id,
            score,
            created_at,
        }))
    }
}

/// `%needle%` with LIKE wildcards in the needle escaped
fn like_pattern(needle: &str) -> String {
    let escaped = needle
        .replace('\\', r"\\")
        .replace('%', r"\%")
        .replace('_', r"\_");
    format!("%{}%", escaped)
}

fn to_sql_int(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
