//! Question model and the immutable question bank
//!
//! A bank is validated once when it is built; after that every question is
//! guaranteed to have a unique id, exactly [`OPTION_COUNT`] options and an
//! answer index inside the option list.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{QuizError, Result};

/// Number of options every question carries
pub const OPTION_COUNT: usize = 4;

/// Question identifier, also the suffix of the `q<id>` form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub u32);

impl QuestionId {
    /// Name of the form field carrying the answer to this question.
    pub fn field_name(self) -> String {
        format!("q{}", self.0)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: String,
    pub options: Vec<String>,
    /// Zero-based index into `options`
    pub answer: usize,
}

impl Question {
    pub fn is_correct(&self, chosen: i64) -> bool {
        usize::try_from(chosen).is_ok_and(|idx| idx == self.answer)
    }
}

#[derive(Serialize, Deserialize)]
struct BankFile<Q> {
    questions: Q,
}

/// Validated, read-only set of questions in presentation order
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Build a bank, rejecting empty banks, duplicate ids, wrong option counts
    /// and out-of-range answers.
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        if questions.is_empty() {
            return Err(QuizError::EmptyBank);
        }

        let mut seen = HashSet::with_capacity(questions.len());
        for q in &questions {
            if !seen.insert(q.id) {
                return Err(QuizError::DuplicateId(q.id));
            }
            if q.options.len() != OPTION_COUNT {
                return Err(QuizError::OptionCount {
                    id: q.id,
                    found: q.options.len(),
                    expected: OPTION_COUNT,
                });
            }
            if q.answer >= q.options.len() {
                return Err(QuizError::AnswerOutOfRange {
                    id: q.id,
                    answer: q.answer,
                });
            }
        }

        Ok(Self { questions })
    }

    /// Parse a bank from TOML (`[[questions]]` tables).
    ///
    /// ```
    /// use dockside_quiz::QuestionBank;
    ///
    /// let bank = QuestionBank::from_toml_str(r#"
    ///     [[questions]]
    ///     id = 1
    ///     prompt = "Default Docker network?"
    ///     options = ["bridge", "host", "none", "overlay"]
    ///     answer = 0
    /// "#).unwrap();
    /// assert_eq!(bank.len(), 1);
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: BankFile<Vec<Question>> = toml::from_str(content)?;
        Self::new(file.questions)
    }

    /// Serialize in the same `[[questions]]` layout `from_toml_str` reads.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(&BankFile {
            questions: &self.questions,
        })?)
    }

    /// Read and validate a bank file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| QuizError::io(path, e))?;
        let bank = Self::from_toml_str(&content)?;
        tracing::info!(path = %path.display(), questions = bank.len(), "question bank loaded");
        Ok(bank)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }
}

impl Default for QuestionBank {
    /// The built-in Docker/Kubernetes bank.
    fn default() -> Self {
        crate::builtin::docker_bank()
    }
}
