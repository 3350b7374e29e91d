use std::collections::HashSet;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::questions::{get_all_questions, get_questions_for_category},
        Question,
    },
    server::{app::AppState, deserializers::Id, error::ApiError},
    telemetry::QUIZ_QUESTIONS_SERVED,
    trivia::{next_question, QuizCategory},
};

use super::ApiResponse;

#[derive(Deserialize)]
struct QuizRequest {
    #[serde(default)]
    previous_questions: Vec<Id>,
    quiz_category: QuizCategoryBody,
}

// clients also send the category name as `type`, only the id matters here
#[derive(Deserialize)]
struct QuizCategoryBody {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    id: i64,
}

#[derive(Serialize)]
struct QuizReply {
    success: bool,
    question: Option<Question>,
}

async fn next_quiz_question(
    State(pool): State<SqlitePool>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> ApiResponse<QuizReply> {
    let Json(request) = payload?;
    let category = QuizCategory::from(request.quiz_category.id);
    let previously_seen: HashSet<i64> = request.previous_questions.iter().map(|id| id.0).collect();

    let candidates = match category {
        QuizCategory::All => get_all_questions(&pool).await,
        QuizCategory::Only(id) => get_questions_for_category(&pool, id).await,
    }
    .map_err(ApiError::not_found)?;

    let question = next_question(
        candidates,
        category,
        &previously_seen,
        &mut rand::thread_rng(),
    )?;
    if let Some(question) = &question {
        QUIZ_QUESTIONS_SERVED
            .with_label_values(&[category.to_string().as_str()])
            .inc();
        tracing::debug!(
            "Serving question {} to a round in category {category} after {} questions",
            question.id,
            previously_seen.len()
        );
    }

    Ok(Json(QuizReply {
        success: true,
        question,
    }))
}

pub fn quizzes_router() -> Router<AppState> {
    Router::new().route("/quizzes", post(next_quiz_question))
}
