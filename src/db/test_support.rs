// src/db/test_support.rs
//
// Shared fixtures for unit tests: an in-memory pool with the real schema
// and small helpers to insert reference rows directly.
//
// The in-memory pool holds a single connection. Helpers return it to the
// pool before returning so repository calls never wait on a checkout.

use std::sync::Arc;

use rusqlite::params;

use super::{create_memory_pool, initialize_database, ConnectionPool};

pub(crate) fn schema_pool() -> Arc<ConnectionPool> {
    let pool = create_memory_pool().unwrap();
    {
        let conn = pool.get().unwrap();
        initialize_database(&conn).unwrap();
    }
    Arc::new(pool)
}

pub(crate) fn insert_director(pool: &ConnectionPool, name: &str) -> i64 {
    let conn = pool.get().unwrap();
    conn.execute("INSERT INTO directors (name) VALUES (?1)", params![name])
        .unwrap();
    conn.last_insert_rowid()
}

pub(crate) fn insert_genre(pool: &ConnectionPool, name: &str) -> i64 {
    let conn = pool.get().unwrap();
    conn.execute("INSERT INTO genres (name) VALUES (?1)", params![name])
        .unwrap();
    conn.last_insert_rowid()
}

pub(crate) fn count(pool: &ConnectionPool, sql: &str) -> i64 {
    let conn = pool.get().unwrap();
    conn.query_row(sql, [], |row| row.get(0)).unwrap()
}
