mod categories;
mod questions;
mod quizzes;

use std::collections::BTreeMap;

use axum::Json;
use serde::Deserialize;

pub use categories::category_router;
pub use questions::questions_router;
pub use quizzes::quizzes_router;

use crate::db::Category;
use crate::server::error::ApiError;
use crate::trivia::Page;

pub type ApiResponse<T> = Result<Json<T>, ApiError>;

#[derive(Deserialize, Default)]
struct PageQuery {
    #[serde(default)]
    page: Page,
}

/// Categories keyed by id, the shape every listing reports them in.
fn categories_by_id(categories: Vec<Category>) -> BTreeMap<i64, String> {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}
