use std::collections::BTreeMap;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{categories, questions},
        NewQuestion, Question,
    },
    pagination::paginate,
    server::{
        app::AppState,
        deserializers::{deserialize_lenient_i64, deserialize_non_empty},
    },
};

use super::{categories_map, requested_page, ApiError, ApiResponse, PageQuery, Success};

const CURRENT_CATEGORY_ALL: &str = "all";

#[derive(Deserialize)]
struct NewQuestionBody {
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    question: Option<String>,
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_i64")]
    difficulty: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_lenient_i64")]
    category: Option<i64>,
}

#[derive(Serialize)]
struct QuestionsPage {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    categories: BTreeMap<i64, String>,
    current_category: &'static str,
}

async fn questions_page(
    pool: &SqlitePool,
    selection: &[Question],
    page: i64,
) -> ApiResponse<QuestionsPage> {
    let current = paginate(selection, page);
    if current.is_empty() {
        return Err(ApiError::not_found(format!("page {page} is empty")));
    }
    let categories = categories::get_all_categories(pool).await?;
    Ok(QuestionsPage {
        success: true,
        questions: current.to_vec(),
        total_questions: selection.len(),
        categories: categories_map(categories),
        current_category: CURRENT_CATEGORY_ALL,
    })
}

#[tracing::instrument(skip_all)]
async fn get_questions(
    State(pool): State<SqlitePool>,
    page: Result<Query<PageQuery>, QueryRejection>,
) -> ApiResponse<Json<QuestionsPage>> {
    let selection = questions::get_all_questions(&pool).await?;
    let body = questions_page(&pool, &selection, requested_page(page)).await?;
    Ok(Json(body))
}

#[tracing::instrument(skip_all)]
async fn create_question(
    State(pool): State<SqlitePool>,
    body: Result<Json<NewQuestionBody>, JsonRejection>,
) -> ApiResponse<(StatusCode, Json<Success>)> {
    let Json(body) = body.map_err(|e| ApiError::unprocessable(e.body_text()))?;
    let (Some(question), Some(answer), Some(difficulty), Some(category)) =
        (body.question, body.answer, body.difficulty, body.category)
    else {
        return Err(ApiError::unprocessable("all four fields are required"));
    };

    let id = questions::create_question(
        &pool,
        NewQuestion {
            question: &question,
            answer: &answer,
            difficulty,
            category,
        },
    )
    .await
    .map_err(ApiError::unprocessable)?;
    tracing::info!(id, category, "Question created");

    Ok((StatusCode::CREATED, Json(Success::new())))
}

#[tracing::instrument(skip_all)]
async fn delete_question(
    State(pool): State<SqlitePool>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResponse<Json<Success>> {
    let Path(id) = id.map_err(|e| ApiError::not_found(e.body_text()))?;
    questions::delete_question(&pool, id)
        .await
        .map_err(|e| ApiError::unprocessable(format!("question {id}: {e}")))?;
    tracing::info!(id, "Question deleted");
    Ok(Json(Success::new()))
}

// every failure here is reported as 404
#[tracing::instrument(skip_all)]
async fn search_questions(
    State(pool): State<SqlitePool>,
    page: Result<Query<PageQuery>, QueryRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResponse<Json<QuestionsPage>> {
    let Json(body) = body.map_err(|e| ApiError::not_found(e.body_text()))?;
    let term = body
        .get("searchTerm")
        .and_then(Value::as_str)
        .ok_or_else(|| ApiError::not_found("searchTerm is missing"))?;
    let selection = questions::search_questions(&pool, term)
        .await
        .map_err(ApiError::not_found)?;
    let body = questions_page(&pool, &selection, requested_page(page))
        .await
        .map_err(|e| match e {
            ApiError::Internal(e) => ApiError::not_found(format!("{e:#}")),
            other => other,
        })?;
    Ok(Json(body))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(get_questions).post(create_question))
        .route("/questions/{id}", delete(delete_question))
        .route("/questions/search", post(search_questions))
        .with_state(state)
}
