// src/application/commands/rating_commands.rs

use crate::application::{dto::*, state::AppState};

use super::{run_blocking, CommandResult};

/// Add a rating to a movie
pub async fn add_rating(
    movie_id: i64,
    dto: CreateRatingDto,
    state: &AppState,
) -> CommandResult<SuccessEnvelope<RatingDto>> {
    let service = state.movie_service.clone();

    run_blocking(move || {
        let rating = service.add_rating(movie_id, dto.score)?;
        Ok(SuccessEnvelope::new(RatingDto::from(rating)))
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::commands::{get_movie, list_movies, test_support::seeded_state};
    use crate::application::ErrorType;

    async fn inception_id(state: &AppState) -> i64 {
        list_movies(ListMoviesQuery::default(), state).await.unwrap().items[0].id
    }

    #[tokio::test]
    async fn test_ratings_drive_the_average() {
        let state = seeded_state();
        let id = inception_id(&state).await;

        for score in [7, 9] {
            let envelope = add_rating(id, CreateRatingDto { score }, &state).await.unwrap();
            assert_eq!(envelope.status, "success");
            assert_eq!(envelope.data.movie_id, id);
            assert_eq!(envelope.data.score, score);
        }
        let movie = get_movie(id, &state).await.unwrap();
        assert_eq!(movie.ratings_count, 2);
        assert_eq!(movie.average_rating, Some(8.0));

        add_rating(id, CreateRatingDto { score: 4 }, &state).await.unwrap();
        let movie = get_movie(id, &state).await.unwrap();
        assert_eq!(movie.ratings_count, 3);
        assert_eq!(movie.average_rating, Some(6.7));
    }

    #[tokio::test]
    async fn test_out_of_range_score() {
        let state = seeded_state();
        let id = inception_id(&state).await;

        for score in [0, 11] {
            let err = add_rating(id, CreateRatingDto { score }, &state).await.unwrap_err();
            assert_eq!(err.kind(), ErrorType::Validation);
        }
        assert_eq!(get_movie(id, &state).await.unwrap().ratings_count, 0);
    }

    #[tokio::test]
    async fn test_rating_unknown_movie() {
        let state = seeded_state();

        let err = add_rating(999, CreateRatingDto { score: 5 }, &state).await.unwrap_err();

        assert_eq!(err.kind(), ErrorType::NotFound);
    }
}
