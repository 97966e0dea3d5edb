//! Submitted answers, mapped from `q<id>` form fields to question ids
//!
//! This is the boundary where raw form strings become domain values. Every
//! question in the bank gets exactly one [`Answer`]; fields for unknown
//! questions are ignored.

use std::collections::{BTreeMap, HashMap};

use crate::question::{QuestionBank, QuestionId};

/// What the form said about one question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Field held an integer option index
    Chosen(i64),
    /// Field was absent
    Missing,
    /// Field held something that is not an integer
    Malformed(String),
}

impl Answer {
    /// Parse a raw field value. Surrounding whitespace is ignored.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None => Self::Missing,
            Some(value) => match value.trim().parse::<i64>() {
                Ok(idx) => Self::Chosen(idx),
                Err(_) => Self::Malformed(value.to_owned()),
            },
        }
    }
}

/// One answer per question in the bank
#[derive(Debug, Clone, Default)]
pub struct AnswerSheet {
    answers: BTreeMap<QuestionId, Answer>,
}

impl AnswerSheet {
    /// Map form fields onto the bank. Missing and malformed answers are
    /// logged here and later scored as incorrect.
    pub fn from_form(bank: &QuestionBank, form: &HashMap<String, String>) -> Self {
        let answers = bank
            .iter()
            .map(|q| {
                let answer = Answer::parse(form.get(&q.id.field_name()).map(String::as_str));
                match &answer {
                    Answer::Missing => {
                        tracing::warn!(question_id = %q.id, "no answer submitted");
                    }
                    Answer::Malformed(raw) => {
                        tracing::warn!(question_id = %q.id, value = %raw, "invalid answer submitted");
                    }
                    Answer::Chosen(_) => {}
                }
                (q.id, answer)
            })
            .collect();

        Self { answers }
    }

    /// Build a sheet directly from chosen indices; questions not listed are
    /// missing.
    pub fn from_choices(choices: impl IntoIterator<Item = (QuestionId, i64)>) -> Self {
        Self {
            answers: choices
                .into_iter()
                .map(|(id, idx)| (id, Answer::Chosen(idx)))
                .collect(),
        }
    }

    /// Answer recorded for a question, [`Answer::Missing`] if none.
    pub fn get(&self, id: QuestionId) -> &Answer {
        self.answers.get(&id).unwrap_or(&Answer::Missing)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}
