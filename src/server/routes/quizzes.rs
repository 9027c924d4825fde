use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::SqlitePool;

use crate::{
    db::{queries::questions, Question},
    quiz::{pick_unseen, QuizError, ALL_CATEGORIES},
    server::{app::AppState, deserializers::deserialize_lenient_i64},
    telemetry::{QUIZ_EXHAUSTED, QUIZ_QUESTIONS_SERVED},
};

use super::{ApiError, ApiResponse};

#[derive(Deserialize)]
struct QuizCategory {
    #[serde(default, deserialize_with = "deserialize_lenient_i64")]
    id: Option<i64>,
}

#[derive(Deserialize)]
struct QuizBody {
    previous_questions: Option<Vec<Value>>,
    quiz_category: Option<QuizCategory>,
}

#[derive(Serialize)]
struct QuizQuestion {
    success: bool,
    /// `None` once every question of the category was asked.
    question: Option<Question>,
}

#[tracing::instrument(skip_all)]
async fn play_quiz(
    State(pool): State<SqlitePool>,
    body: Result<Json<QuizBody>, JsonRejection>,
) -> ApiResponse<Json<QuizQuestion>> {
    let Json(body) = body.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let (Some(previous), Some(QuizCategory { id: Some(category) })) =
        (body.previous_questions, body.quiz_category)
    else {
        return Err(ApiError::bad_request(
            "previous_questions and quiz_category are required",
        ));
    };

    let candidates = match category {
        ALL_CATEGORIES => questions::get_all_questions(&pool).await,
        id => questions::get_questions_for_category(&pool, id).await,
    }
    .map_err(ApiError::bad_request)?;

    let label = category.to_string();
    let picked = pick_unseen(&candidates, &previous, &mut rand::rng());
    match picked {
        Ok(question) => {
            QUIZ_QUESTIONS_SERVED.with_label_values(&[label.as_str()]).inc();
            tracing::debug!(id = question.id, category, "Serving quiz question");
            Ok(Json(QuizQuestion {
                success: true,
                question: Some(question.clone()),
            }))
        }
        Err(QuizError::Exhausted) => {
            QUIZ_EXHAUSTED.with_label_values(&[label.as_str()]).inc();
            tracing::info!(category, asked = previous.len(), "Quiz exhausted");
            Ok(Json(QuizQuestion {
                success: true,
                question: None,
            }))
        }
        Err(e @ QuizError::EmptyPool) => {
            Err(ApiError::bad_request(format!("category {category}: {e}")))
        }
    }
}

pub fn quizzes_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(play_quiz))
        .with_state(state)
}
