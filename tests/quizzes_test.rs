mod common;

use std::collections::HashSet;

use axum::http::{Method, StatusCode};
use serde_json::{json, Value};

use common::{app, assert_error, empty_db, seeded_db, send};

fn round(previous: Value, category: Value) -> Option<Value> {
    Some(json!({
        "previous_questions": previous,
        "quiz_category": {"type": "Science", "id": category}
    }))
}

#[tokio::test]
async fn first_question_of_a_round() {
    let app = app(seeded_db().await);

    let (status, body) = send(&app, Method::POST, "/quizzes", round(json!([]), json!("1"))).await;

    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["success"], true);
    assert_eq!(body["question"]["category"], 1);
}

#[tokio::test]
async fn previous_questions_are_not_repeated() {
    let app = app(seeded_db().await);

    let (status, body) = send(
        &app,
        Method::POST,
        "/quizzes",
        round(json!([1, 2, 3]), json!(1)),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["question"]["id"], 4);
}

#[tokio::test]
async fn a_round_asks_each_question_once() {
    let app = app(seeded_db().await);
    let mut seen: Vec<i64> = Vec::new();

    for _ in 0..4 {
        let (status, body) =
            send(&app, Method::POST, "/quizzes", round(json!(seen), json!(1))).await;
        assert_eq!(status, StatusCode::OK, "{body}");
        seen.push(body["question"]["id"].as_i64().unwrap());
    }
    assert_eq!(seen.iter().collect::<HashSet<_>>().len(), 4);

    let (status, body) = send(&app, Method::POST, "/quizzes", round(json!(seen), json!(1))).await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "resource not found");
}

#[tokio::test]
async fn category_without_questions_is_not_found() {
    let app = app(seeded_db().await);

    for category in [json!(6), json!(100)] {
        let (status, body) = send(&app, Method::POST, "/quizzes", round(json!([]), category)).await;
        assert_error(status, &body, StatusCode::NOT_FOUND, "resource not found");
    }
}

#[tokio::test]
async fn all_categories_keep_serving_questions() {
    let app = app(seeded_db().await);
    let everything: Vec<i64> = (1..=14).collect();

    let (status, body) = send(
        &app,
        Method::POST,
        "/quizzes",
        round(json!(everything), json!(0)),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "{body}");
    assert!(body["question"]["id"].is_i64());
}

#[tokio::test]
async fn all_categories_of_an_empty_store_has_no_question() {
    let app = app(empty_db().await);

    let (status, body) = send(&app, Method::POST, "/quizzes", round(json!([]), json!(0))).await;

    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body, json!({"success": true, "question": null}));
}

#[tokio::test]
async fn malformed_rounds_are_unprocessable() {
    let app = app(seeded_db().await);

    let bodies = [
        json!({"previous_questions": []}),
        json!({"previous_questions": [], "quiz_category": {"id": "science"}}),
        json!({"previous_questions": ["twenty"], "quiz_category": {"id": 1}}),
    ];
    for body in bodies {
        let (status, reply) = send(&app, Method::POST, "/quizzes", Some(body)).await;
        assert_error(status, &reply, StatusCode::UNPROCESSABLE_ENTITY, "unprocessable");
    }

    let (status, reply) = send(&app, Method::POST, "/quizzes", None).await;
    assert_error(status, &reply, StatusCode::UNPROCESSABLE_ENTITY, "unprocessable");
}

#[tokio::test]
async fn quizzes_only_accept_post() {
    let app = app(seeded_db().await);

    let (status, body) = send(&app, Method::GET, "/quizzes", None).await;
    assert_error(
        status,
        &body,
        StatusCode::METHOD_NOT_ALLOWED,
        "not allowed method",
    );
}
