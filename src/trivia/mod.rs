//! Storage-independent trivia logic: paging over ordered question lists and
//! picking the next quiz question.

pub mod pagination;
pub mod quiz;

pub use pagination::{paginate, Page, PageError, PageSize, QUESTIONS_PER_PAGE};
pub use quiz::{next_question, QuizCategory, QuizError};
