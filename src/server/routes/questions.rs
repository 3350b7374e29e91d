use std::collections::BTreeMap;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_option_number_from_string;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{
            categories::get_all_categories,
            questions::{self, get_all_questions, search_questions},
        },
        Question,
    },
    server::{app::AppState, error::ApiError},
    telemetry::{QUESTIONS_CREATED, QUESTIONS_DELETED},
    trivia::{paginate, Page, PageSize},
};

use super::{categories_by_id, ApiResponse, PageQuery};

const DIFFICULTIES: std::ops::RangeInclusive<i64> = 1..=5;

// one body for both creating and searching, `searchTerm` decides which
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuestionsBody {
    question: Option<String>,
    answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    difficulty: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    category: Option<i64>,
    search_term: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QuestionsPage {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    categories: BTreeMap<i64, String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchResults {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
}

#[derive(Serialize)]
#[serde(untagged)]
enum PostQuestionsReply {
    Created(QuestionsPage),
    Found(SearchResults),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DeletedBody {
    success: bool,
    #[serde(rename = "deleted_id")]
    deleted_id: i64,
    questions: Vec<Question>,
    total_questions: usize,
}

/// Page of all questions together with the category names, or `None` when the page is empty.
async fn questions_page(
    pool: &SqlitePool,
    page: Page,
    page_size: PageSize,
) -> sqlx::Result<Option<QuestionsPage>> {
    let questions = get_all_questions(pool).await?;
    let current = paginate(&questions, page, page_size);
    if current.is_empty() {
        return Ok(None);
    }
    let categories = get_all_categories(pool).await?;
    Ok(Some(QuestionsPage {
        success: true,
        questions: current.to_vec(),
        total_questions: questions.len(),
        categories: categories_by_id(categories),
    }))
}

async fn list_questions(
    State(pool): State<SqlitePool>,
    State(page_size): State<PageSize>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> ApiResponse<QuestionsPage> {
    let Query(PageQuery { page }) = query?;
    questions_page(&pool, page, page_size)
        .await
        .map_err(ApiError::not_found)?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

async fn create_or_search(
    State(pool): State<SqlitePool>,
    State(page_size): State<PageSize>,
    query: Result<Query<PageQuery>, QueryRejection>,
    payload: Result<Json<QuestionsBody>, JsonRejection>,
) -> ApiResponse<PostQuestionsReply> {
    let Query(PageQuery { page }) = query?;
    let Json(body) = payload?;

    match body.search_term {
        Some(term) if !term.is_empty() => search(&pool, &term, page, page_size)
            .await
            .map(|found| Json(PostQuestionsReply::Found(found))),
        _ => create(&pool, body, page, page_size)
            .await
            .map(|created| Json(PostQuestionsReply::Created(created))),
    }
}

async fn search(
    pool: &SqlitePool,
    term: &str,
    page: Page,
    page_size: PageSize,
) -> Result<SearchResults, ApiError> {
    tracing::debug!("Searching questions for {term:?}");
    let found = search_questions(pool, term)
        .await
        .map_err(ApiError::unprocessable)?;
    let current = paginate(&found, page, page_size);
    if current.is_empty() {
        return Err(ApiError::unprocessable(format!(
            "no questions match {term:?} on page {}",
            page.number()
        )));
    }
    Ok(SearchResults {
        success: true,
        questions: current.to_vec(),
        total_questions: found.len(),
    })
}

async fn create(
    pool: &SqlitePool,
    body: QuestionsBody,
    page: Page,
    page_size: PageSize,
) -> Result<QuestionsPage, ApiError> {
    let (Some(question), Some(answer), Some(difficulty), Some(category)) =
        (body.question, body.answer, body.difficulty, body.category)
    else {
        return Err(ApiError::unprocessable("question fields are missing"));
    };
    if !DIFFICULTIES.contains(&difficulty) {
        return Err(ApiError::unprocessable(format!(
            "difficulty {difficulty} is out of range"
        )));
    }

    let id = questions::create_question(pool, &question, &answer, difficulty, category)
        .await
        .map_err(ApiError::unprocessable)?;
    QUESTIONS_CREATED.inc();
    tracing::info!("Created question {id} in category {category}");

    questions_page(pool, page, page_size)
        .await
        .map_err(ApiError::unprocessable)?
        .ok_or_else(|| ApiError::unprocessable(format!("page {} is empty", page.number())))
}

async fn delete_question(
    State(pool): State<SqlitePool>,
    State(page_size): State<PageSize>,
    path: Result<Path<i64>, PathRejection>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> ApiResponse<DeletedBody> {
    let Path(id) = path.map_err(|e| ApiError::unprocessable(e.body_text()))?;
    let Query(PageQuery { page }) = query?;

    questions::delete_question(&pool, id)
        .await
        .map_err(ApiError::unprocessable)?;
    QUESTIONS_DELETED.inc();
    tracing::info!("Deleted question {id}");

    let questions = get_all_questions(&pool)
        .await
        .map_err(ApiError::unprocessable)?;
    Ok(Json(DeletedBody {
        success: true,
        deleted_id: id,
        questions: paginate(&questions, page, page_size).to_vec(),
        total_questions: questions.len(),
    }))
}

pub fn questions_router() -> Router<AppState> {
    Router::new()
        .route("/questions", get(list_questions).post(create_or_search))
        .route("/questions/{id}", delete(delete_question))
}
