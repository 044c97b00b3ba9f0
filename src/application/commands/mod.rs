// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - Commands are thin async adapters between a transport and the services
// - Commands accept DTOs, return DTOs or an ErrorResponse
// - Service calls run on tokio's blocking pool (SQLite is synchronous)
// - Commands NEVER contain business logic

pub mod catalog_commands;
pub mod movie_commands;
pub mod rating_commands;

pub use catalog_commands::*;
pub use movie_commands::*;
pub use rating_commands::*;

use crate::error::{AppError, AppResult};

use super::error_handling::{ErrorResponse, ToErrorResponse};

pub type CommandResult<T> = Result<T, ErrorResponse>;

/// Run `work` on a blocking worker and map its failure into the envelope
pub(crate) async fn run_blocking<T, F>(work: F) -> CommandResult<T>
where
    F: FnOnce() -> AppResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(AppError::from)
        .and_then(|result| result)
        .to_error_response()
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::application::AppState;
    use crate::db::{seed_reference_data, test_support::schema_pool};

    /// State over a fresh in-memory store holding the seed catalog
    pub(crate) fn seeded_state() -> AppState {
        let pool = schema_pool();
        {
            let conn = pool.get().unwrap();
            seed_reference_data(&conn).unwrap();
        }
        AppState::new(pool)
    }
}
