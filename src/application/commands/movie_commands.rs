// src/application/commands/movie_commands.rs
//
// Movie Command Handlers
//
// RULES:
// - Accept DTOs
// - Call services
// - Return DTOs
// - Never contain business logic

use log::debug;

use crate::application::{dto::*, state::AppState};

use super::{run_blocking, CommandResult};

/// List one page of movies matching the query filters
pub async fn list_movies(query: ListMoviesQuery, state: &AppState) -> CommandResult<MoviePageDto> {
    debug!("list_movies {:?}", query);
    let service = state.movie_service.clone();

    run_blocking(move || {
        let page = service.list_movies(&query.filter(), query.pagination())?;
        Ok(MoviePageDto::from(page))
    })
    .await
}

/// Get a single movie by id
pub async fn get_movie(movie_id: i64, state: &AppState) -> CommandResult<MovieDto> {
    let service = state.movie_service.clone();

    run_blocking(move || Ok(MovieDto::from(service.get_movie(movie_id)?))).await
}

/// Create a new movie
pub async fn create_movie(dto: CreateMovieDto, state: &AppState) -> CommandResult<MovieDto> {
    let service = state.movie_service.clone();

    run_blocking(move || Ok(MovieDto::from(service.create_movie(dto.into())?))).await
}

/// Partially update a movie
pub async fn update_movie(
    movie_id: i64,
    dto: UpdateMovieDto,
    state: &AppState,
) -> CommandResult<SuccessEnvelope<MovieDto>> {
    let service = state.movie_service.clone();

    run_blocking(move || {
        let movie = service.update_movie(movie_id, dto.into())?;
        Ok(SuccessEnvelope::new(MovieDto::from(movie)))
    })
    .await
}

/// Delete a movie together with its ratings and genre links
pub async fn delete_movie(movie_id: i64, state: &AppState) -> CommandResult<()> {
    let service = state.movie_service.clone();

    run_blocking(move || service.delete_movie(movie_id)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::commands::test_support::seeded_state;
    use crate::application::ErrorType;

    fn blade_runner(director_id: i64, genres: Vec<i64>) -> CreateMovieDto {
        CreateMovieDto {
            title: "Blade Runner".to_string(),
            release_year: 1982,
            cast: "Harrison Ford".to_string(),
            director_id,
            genres,
        }
    }

    #[tokio::test]
    async fn test_list_defaults_to_first_page() {
        let state = seeded_state();

        let page = list_movies(ListMoviesQuery::default(), &state).await.unwrap();

        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 10);
        assert_eq!(page.total_items, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.items[0].title, "Inception");
        assert_eq!(page.items[0].genres, vec!["Action".to_string()]);
    }

    #[tokio::test]
    async fn test_list_rejects_page_zero() {
        let state = seeded_state();
        let query = ListMoviesQuery {
            page: 0,
            ..Default::default()
        };

        let err = list_movies(query, &state).await.unwrap_err();

        assert_eq!(err.kind(), ErrorType::Validation);
        assert_eq!(err.error.code, 422);
    }

    #[tokio::test]
    async fn test_create_update_delete() {
        let state = seeded_state();
        let genres = state.reference_service.list_genres().unwrap();
        let directors = state.reference_service.list_directors().unwrap();
        let scifi = genres.iter().find(|g| g.name == "Sci-Fi").unwrap().id;
        let drama = genres.iter().find(|g| g.name == "Drama").unwrap().id;
        let director = directors[0].id;

        let created = create_movie(blade_runner(director, vec![scifi]), &state).await.unwrap();
        assert_eq!(created.genres, vec!["Sci-Fi".to_string()]);
        assert_eq!(created.average_rating, None);
        assert_eq!(created.ratings_count, 0);

        let update = UpdateMovieDto {
            genres: Some(vec![drama, scifi]),
            ..Default::default()
        };
        let updated = update_movie(created.id, update, &state).await.unwrap();
        assert_eq!(updated.status, "success");
        assert_eq!(updated.data.title, "Blade Runner");
        assert_eq!(updated.data.genres.len(), 2);

        delete_movie(created.id, &state).await.unwrap();
        let err = get_movie(created.id, &state).await.unwrap_err();
        assert_eq!(err.kind(), ErrorType::NotFound);
    }

    #[tokio::test]
    async fn test_create_with_unknown_genre_is_422() {
        let state = seeded_state();
        let director = state.reference_service.list_directors().unwrap()[0].id;

        let err = create_movie(blade_runner(director, vec![9_999]), &state)
            .await
            .unwrap_err();

        assert_eq!(err.error.code, 422);
        let page = list_movies(ListMoviesQuery::default(), &state).await.unwrap();
        assert_eq!(page.total_items, 1);
    }

    #[tokio::test]
    async fn test_missing_movie_envelope() {
        let state = seeded_state();

        let err = delete_movie(4_242, &state).await.unwrap_err();
        let value = serde_json::to_value(&err).unwrap();

        assert_eq!(value["status"], "failure");
        assert_eq!(value["error"]["code"], 404);
        assert_eq!(value["error"]["kind"], "not_found");
    }
}
