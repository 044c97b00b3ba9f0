// src/db/seed.rs
//
// Reference data seeding
//
// Directors and genres are never created through the catalog service,
// so a fresh database gets a starter set here. Each table is only
// seeded when empty, which makes repeated runs harmless.

use log::{info, warn};
use rusqlite::{params, Connection};

use crate::error::AppResult;

const GENRES: [&str; 5] = ["Action", "Drama", "Sci-Fi", "Comedy", "Horror"];

const DIRECTORS: [(&str, i32); 3] = [
    ("Christopher Nolan", 1970),
    ("Quentin Tarantino", 1963),
    ("Martin Scorsese", 1942),
];

/// What a seeding run actually inserted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub genres_added: usize,
    pub directors_added: usize,
    pub sample_movie_added: bool,
}

/// Seed genres, directors and one sample movie in a single transaction
pub fn seed_reference_data(conn: &Connection) -> AppResult<SeedReport> {
    let tx = conn.unchecked_transaction()?;
    let mut report = SeedReport::default();

    if table_is_empty(&tx, "genres")? {
        for name in GENRES {
            tx.execute(
                "INSERT INTO genres (name, description) VALUES (?1, ?2)",
                params![name, format!("Movies belonging to {} category", name)],
            )?;
            report.genres_added += 1;
        }
        info!("Seeded {} genres", report.genres_added);
    } else {
        warn!("Genres already exist, skipping genre seed");
    }

    if table_is_empty(&tx, "directors")? {
        for (name, birth_year) in DIRECTORS {
            tx.execute(
                "INSERT INTO directors (name, birth_year) VALUES (?1, ?2)",
                params![name, birth_year],
            )?;
            report.directors_added += 1;
        }
        info!("Seeded {} directors", report.directors_added);
    } else {
        warn!("Directors already exist, skipping director seed");
    }

    if table_is_empty(&tx, "movies")? {
        report.sample_movie_added = seed_sample_movie(&tx)?;
    }

    tx.commit()?;
    Ok(report)
}

/// Inception, by the first director, tagged with the first genre
fn seed_sample_movie(conn: &Connection) -> AppResult<bool> {
    let director_id: Option<i64> =
        conn.query_row("SELECT MIN(id) FROM directors", [], |row| row.get(0))?;
    let genre_id: Option<i64> = conn.query_row("SELECT MIN(id) FROM genres", [], |row| row.get(0))?;

    let (Some(director_id), Some(genre_id)) = (director_id, genre_id) else {
        return Ok(false);
    };

    conn.execute(
        r#"INSERT INTO movies (title, release_year, "cast", director_id) VALUES (?1, ?2, ?3, ?4)"#,
        params![
            "Inception",
            2010,
            "Leonardo DiCaprio, Joseph Gordon-Levitt",
            director_id
        ],
    )?;
    let movie_id = conn.last_insert_rowid();

    conn.execute(
        "INSERT INTO movie_genres (movie_id, genre_id) VALUES (?1, ?2)",
        params![movie_id, genre_id],
    )?;

    info!("Seeded sample movie 'Inception' (id {})", movie_id);
    Ok(true)
}

fn table_is_empty(conn: &Connection, table: &str) -> AppResult<bool> {
    let exists: bool = conn.query_row(
        &format!("SELECT EXISTS(SELECT 1 FROM {})", table),
        [],
        |row| row.get(0),
    )?;
    Ok(!exists)
}
