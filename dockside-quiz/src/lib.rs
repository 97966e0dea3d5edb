//! dockside-quiz: multiple-choice quiz service
//!
//! Serves a single page carrying the whole question bank (client-side script
//! reveals one question at a time) and scores the submitted form server-side.
//! No session state: the bank is loaded once at start-up and never mutated.

pub mod answers;
pub mod builtin;
pub mod error;
pub mod http;
pub mod question;
pub mod render;
pub mod score;

pub use answers::{Answer, AnswerSheet};
pub use error::{QuizError, Result, ServerError};
pub use http::{router, run_server, QuizServerConfig};
pub use question::{Question, QuestionBank, QuestionId, OPTION_COUNT};
pub use score::{grade, Score};
