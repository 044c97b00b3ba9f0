// src/db/mod.rs
//
// Database module
//
// Provides:
// - Connection pooling
// - Schema migrations
// - Reference data seeding

pub mod connection;
pub mod migrations;
pub mod seed;

#[cfg(test)]
pub(crate) mod test_support;

pub use connection::{
    create_connection_pool, create_memory_pool, get_connection, ConnectionPool, PooledConn,
};

pub use migrations::{
    get_database_stats, initialize_database, verify_database_integrity, DatabaseStats,
};

pub use seed::{seed_reference_data, SeedReport};
