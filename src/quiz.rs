use std::fmt;

use rand::seq::IndexedRandom;
use rand::Rng;
use serde_json::Value;

use crate::db::Question;

/// `quiz_category.id` value that selects from every category.
pub const ALL_CATEGORIES: i64 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizError {
    /// Nothing to pick from, the category has no questions.
    EmptyPool,
    /// Every candidate already appears in the previous questions.
    Exhausted,
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizError::EmptyPool => write!(f, "no questions to choose from"),
            QuizError::Exhausted => write!(f, "all questions were already asked"),
        }
    }
}

impl std::error::Error for QuizError {}

/// Picks a random candidate whose formatted representation is not in `previous`.
///
/// `previous` holds whatever the client sent back. Only entries equal to a
/// candidate's full JSON object count as seen, so bare ids never exclude anything.
pub fn pick_unseen<'a, R>(
    candidates: &'a [Question],
    previous: &[Value],
    rng: &mut R,
) -> Result<&'a Question, QuizError>
where
    R: Rng + ?Sized,
{
    if candidates.is_empty() {
        return Err(QuizError::EmptyPool);
    }
    let unseen: Vec<&Question> = candidates
        .iter()
        .filter(|q| {
            let formatted = q.format();
            !previous.contains(&formatted)
        })
        .collect();
    unseen.choose(rng).copied().ok_or(QuizError::Exhausted)
}
