use std::collections::HashSet;
use std::fmt;

use rand::Rng;

use crate::db::Question;

/// Which questions a quiz round draws from. Clients send `0` for every category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizCategory {
    All,
    Only(i64),
}

impl From<i64> for QuizCategory {
    fn from(id: i64) -> Self {
        match id {
            0 => QuizCategory::All,
            id => QuizCategory::Only(id),
        }
    }
}

impl fmt::Display for QuizCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizCategory::All => write!(f, "all"),
            QuizCategory::Only(id) => write!(f, "{id}"),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum QuizError {
    /// Every question of the category was already asked in this round.
    Exhausted { category: i64 },
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizError::Exhausted { category } => {
                write!(f, "no questions left in category {category}")
            }
        }
    }
}

impl std::error::Error for QuizError {}

/// Picks a random question out of `candidates`.
///
/// For a single category the questions in `previously_seen` are skipped and
/// running out of questions is an error. The all-categories round draws from
/// every candidate and does not look at `previously_seen`; with no candidates
/// at all it yields `None`.
pub fn next_question<R: Rng + ?Sized>(
    candidates: Vec<Question>,
    category: QuizCategory,
    previously_seen: &HashSet<i64>,
    rng: &mut R,
) -> Result<Option<Question>, QuizError> {
    let mut pool = match category {
        QuizCategory::All => candidates,
        QuizCategory::Only(id) => {
            let pool: Vec<Question> = candidates
                .into_iter()
                .filter(|q| q.category == id && !previously_seen.contains(&q.id))
                .collect();
            if pool.is_empty() {
                return Err(QuizError::Exhausted { category: id });
            }
            pool
        }
    };

    if pool.is_empty() {
        return Ok(None);
    }
    let idx = rng.gen_range(0..pool.len());
    Ok(Some(pool.swap_remove(idx)))
}
