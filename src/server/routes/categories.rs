use std::collections::BTreeMap;

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    routing::get,
    Json, Router,
};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{categories, questions},
        Question,
    },
    pagination::paginate,
    server::app::AppState,
};

use super::{categories_map, requested_page, ApiError, ApiResponse, PageQuery};

#[derive(Serialize)]
struct CategoriesBody {
    success: bool,
    categories: BTreeMap<i64, String>,
}

#[derive(Serialize)]
struct CategoryQuestionsBody {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    current_category: String,
}

#[tracing::instrument(skip_all)]
async fn get_categories(State(pool): State<SqlitePool>) -> ApiResponse<Json<CategoriesBody>> {
    let categories = categories::get_all_categories(&pool).await?;
    Ok(Json(CategoriesBody {
        success: true,
        categories: categories_map(categories),
    }))
}

#[tracing::instrument(skip_all)]
async fn category_questions(
    State(pool): State<SqlitePool>,
    id: Result<Path<i64>, PathRejection>,
    page: Result<Query<PageQuery>, QueryRejection>,
) -> ApiResponse<Json<CategoryQuestionsBody>> {
    let Path(id) = id.map_err(|e| ApiError::not_found(e.body_text()))?;
    let category = categories::get_category(&pool, id)
        .await
        .map_err(|e| ApiError::unprocessable(format!("category {id}: {e}")))?;
    let selection = questions::get_questions_for_category(&pool, id)
        .await
        .map_err(ApiError::unprocessable)?;
    let current = paginate(&selection, requested_page(page)).to_vec();

    // total_questions counts the returned page, not the whole category
    Ok(Json(CategoryQuestionsBody {
        success: true,
        total_questions: current.len(),
        questions: current,
        current_category: category.kind,
    }))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(get_categories))
        .route("/categories/{id}/questions", get(category_questions))
        .with_state(state)
}
