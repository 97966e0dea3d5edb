//! Score calculation

use serde::Serialize;

use crate::answers::{Answer, AnswerSheet};
use crate::question::QuestionBank;

/// Number of correct answers out of the bank size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

impl Score {
    pub fn is_perfect(&self) -> bool {
        self.correct == self.total
    }
}

/// Count questions whose chosen index equals the stored answer. Missing and
/// malformed answers count as incorrect.
pub fn grade(bank: &QuestionBank, sheet: &AnswerSheet) -> Score {
    let correct = bank
        .iter()
        .filter(|q| matches!(sheet.get(q.id), Answer::Chosen(idx) if q.is_correct(*idx)))
        .count();

    Score {
        correct,
        total: bank.len(),
    }
}
