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
        queries::{
            categories::{get_all_categories, get_category},
            questions::get_questions_for_category,
        },
        Category, Question,
    },
    server::{app::AppState, error::ApiError},
    trivia::{paginate, PageSize},
};

use super::{categories_by_id, ApiResponse, PageQuery};

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
    #[serde(rename = "currentCategory")]
    current_category: Category,
}

async fn list_categories(State(pool): State<SqlitePool>) -> ApiResponse<CategoriesBody> {
    let categories = get_all_categories(&pool)
        .await
        .map_err(ApiError::not_found)?;
    if categories.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(Json(CategoriesBody {
        success: true,
        categories: categories_by_id(categories),
    }))
}

async fn category_questions(
    State(pool): State<SqlitePool>,
    State(page_size): State<PageSize>,
    path: Result<Path<i64>, PathRejection>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> ApiResponse<CategoryQuestionsBody> {
    // a non-numeric id can not name a category
    let Path(id) = path.map_err(|e| ApiError::not_found(e.body_text()))?;
    let Query(PageQuery { page }) = query?;

    let category = get_category(&pool, id).await.map_err(ApiError::not_found)?;
    let questions = get_questions_for_category(&pool, category.id)
        .await
        .map_err(ApiError::not_found)?;

    let current = paginate(&questions, page, page_size);
    if current.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(Json(CategoryQuestionsBody {
        success: true,
        questions: current.to_vec(),
        total_questions: questions.len(),
        current_category: category,
    }))
}

pub fn category_router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}/questions", get(category_questions))
}
