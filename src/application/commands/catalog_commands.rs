// src/application/commands/catalog_commands.rs
//
// Reference data and store health

use crate::application::{dto::*, state::AppState};
use crate::db::{get_connection, get_database_stats, verify_database_integrity};

use super::{run_blocking, CommandResult};

pub async fn list_directors(state: &AppState) -> CommandResult<Vec<DirectorDto>> {
    let service = state.reference_service.clone();

    run_blocking(move || {
        let directors = service.list_directors()?;
        Ok(directors.into_iter().map(DirectorDto::from).collect())
    })
    .await
}

pub async fn list_genres(state: &AppState) -> CommandResult<Vec<GenreDto>> {
    let service = state.reference_service.clone();

    run_blocking(move || {
        let genres = service.list_genres()?;
        Ok(genres.into_iter().map(GenreDto::from).collect())
    })
    .await
}

/// Integrity check plus table counts
pub async fn health_check(state: &AppState) -> CommandResult<HealthDto> {
    let pool = state.pool.clone();

    run_blocking(move || {
        let conn = get_connection(&pool)?;
        verify_database_integrity(&conn)?;
        Ok(HealthDto::from(get_database_stats(&conn)?))
    })
    .await
}
