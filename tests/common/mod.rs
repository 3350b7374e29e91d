#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;
use trivia_api::db::queries::categories::create_category;
use trivia_api::db::queries::questions::create_question;
use trivia_api::server::app::{router, AppState};
use trivia_api::trivia::PageSize;

pub const CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

// (question, answer, difficulty, category); Sports is left without questions
pub const QUESTIONS: [(&str, &str, i64, i64); 14] = [
    ("What is the heaviest organ in the human body?", "The Liver", 4, 1),
    ("Who discovered penicillin?", "Alexander Fleming", 3, 1),
    ("Hematology is a branch of medicine involving the study of what?", "Blood", 4, 1),
    ("What is the chemical symbol for gold?", "Au", 2, 1),
    ("Who painted the Mona Lisa?", "Leonardo da Vinci", 1, 2),
    ("Which Dutch graphic artist was a master of impossible objects?", "Escher", 3, 2),
    ("How many paintings did Van Gogh sell in his lifetime?", "One", 4, 2),
    ("What is the largest lake in Africa?", "Lake Victoria", 2, 3),
    ("In which royal palace would you find the Hall of Mirrors?", "Versailles", 3, 3),
    ("The Taj Mahal is located in which Indian city?", "Agra", 2, 3),
    ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 2, 4),
    ("Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", 4, 4),
    ("Who invented Peanut Butter?", "George Washington Carver", 2, 4),
    (
        "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?",
        "Apollo 13",
        4,
        5,
    ),
];

pub async fn empty_db() -> SqlitePool {
    trivia_api::db::in_memory()
        .await
        .expect("failed to create test database")
}

pub async fn seeded_db() -> SqlitePool {
    let pool = empty_db().await;
    for name in CATEGORIES {
        create_category(&pool, name)
            .await
            .expect("seed category");
    }
    for (question, answer, difficulty, category) in QUESTIONS {
        create_question(&pool, question, answer, difficulty, category)
            .await
            .expect("seed question");
    }
    pool
}

pub fn app(pool: SqlitePool) -> Router {
    app_with_page_size(pool, PageSize::default())
}

pub fn app_with_page_size(pool: SqlitePool, page_size: PageSize) -> Router {
    router(AppState::new(pool, page_size))
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let req = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(body) => req
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => req.body(Body::empty()),
    }
    .expect("request build should succeed");

    let resp = app
        .clone()
        .oneshot(req)
        .await
        .expect("router should respond");
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body should be json")
    };
    (status, json)
}

pub fn ids(questions: &Value) -> Vec<i64> {
    questions
        .as_array()
        .expect("questions should be an array")
        .iter()
        .map(|q| q["id"].as_i64().expect("question id"))
        .collect()
}

pub fn assert_error(status: StatusCode, body: &Value, expected: StatusCode, message: &str) {
    assert_eq!(status, expected, "unexpected status, body: {body}");
    assert_eq!(body["success"], Value::Bool(false));
    assert_eq!(body["error"].as_u64(), Some(u64::from(expected.as_u16())));
    assert_eq!(body["message"], message);
}
