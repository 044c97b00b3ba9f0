// src/main.rs

use std::sync::Arc;

use anyhow::Context;
use log::{info, warn};

use movie_catalog::application::commands::{health_check, list_movies};
use movie_catalog::application::{AppState, ListMoviesQuery};
use movie_catalog::db::{create_connection_pool, initialize_database, seed_reference_data};
use movie_catalog::logging::init_logger;
use movie_catalog::CatalogConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();
    init_logger();
    if let Err(e) = dotenv {
        if !e.not_found() {
            warn!("Ignoring unreadable .env file: {}", e);
        }
    }

    // 1. INFRASTRUCTURE
    let config = CatalogConfig::from_env().context("loading configuration")?;
    let pool = Arc::new(create_connection_pool(&config).context("opening the catalog store")?);

    // Initialize schema (idempotent)
    {
        let conn = pool.get()?;
        initialize_database(&conn)?;

        if config.seed {
            let report = seed_reference_data(&conn)?;
            info!("Seed run: {:?}", report);
        }
    }

    // 2. REPOSITORIES + SERVICES
    let state = AppState::new(pool);

    // 3. SMOKE CHECK
    let health = health_check(&state).await.context("health check failed")?;
    info!(
        "Catalog ready: {} movies, {} directors, {} genres, {} ratings",
        health.movie_count, health.director_count, health.genre_count, health.rating_count
    );

    let page = list_movies(ListMoviesQuery::default(), &state).await?;
    println!("{}", serde_json::to_string_pretty(&page)?);

    Ok(())
}
