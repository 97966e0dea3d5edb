//! Quiz HTTP routes and server runner
//!
//! - `GET /` - the quiz page (rendered once at start-up)
//! - `POST /submit` - score a form submission, return the result fragment
//! - `GET /health` - liveness check

use std::collections::HashMap;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::answers::AnswerSheet;
use crate::error::ServerError;
use crate::question::QuestionBank;
use crate::render::{render_page, render_result};
use crate::score::grade;

/// Server configuration
#[derive(Debug, Clone)]
pub struct QuizServerConfig {
    /// Address to bind to (default: 127.0.0.1:5000)
    pub bind_addr: SocketAddr,
}

impl Default for QuizServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
        }
    }
}

/// Shared, read-only quiz state
#[derive(Clone)]
pub struct QuizState {
    bank: Arc<QuestionBank>,
    page: Arc<str>,
}

impl QuizState {
    pub fn new(bank: QuestionBank) -> Self {
        let page = render_page(&bank);
        Self {
            bank: Arc::new(bank),
            page: page.into(),
        }
    }
}

/// Body of `GET /health`
#[derive(Debug, Serialize)]
pub struct QuizHealth {
    pub service: &'static str,
    pub status: &'static str,
    /// Size of the bank being served
    pub questions: usize,
}

/// GET /
async fn index(State(state): State<QuizState>) -> Html<String> {
    Html(state.page.to_string())
}

/// POST /submit
///
/// A body that is not a form is logged and scored as an empty submission.
async fn submit(
    State(state): State<QuizState>,
    form: Result<Form<HashMap<String, String>>, FormRejection>,
) -> Html<String> {
    let fields = match form {
        Ok(Form(fields)) => fields,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "unreadable quiz submission");
            HashMap::new()
        }
    };

    let sheet = AnswerSheet::from_form(&state.bank, &fields);
    let score = grade(&state.bank, &sheet);
    tracing::info!(correct = score.correct, total = score.total, "quiz scored");

    Html(render_result(&score))
}

/// GET /health
async fn health(State(state): State<QuizState>) -> Json<QuizHealth> {
    Json(QuizHealth {
        service: "quiz",
        status: "ok",
        questions: state.bank.len(),
    })
}

/// Build the quiz router.
pub fn router(bank: QuestionBank) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/submit", post(submit))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(QuizState::new(bank))
}

/// Run the quiz server until `shutdown` resolves.
pub async fn run_server<F>(
    bank: QuestionBank,
    config: QuizServerConfig,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let questions = bank.len();
    let app = router(bank);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(questions, "Quiz server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Quiz server shutdown complete");
    Ok(())
}
