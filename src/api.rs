//! JSON backend served next to the site. A remote-source deployment can point
//! `PORTFOLIO_BACKEND_URL` at another instance of this server.

use std::sync::{Arc, LazyLock};

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use http::StatusCode;
use regex::Regex;
use serde_json::{json, Value};

use crate::{
    contact::{
        check_message, ContactDraft, ContactReply, ErrorDetail, ValidationError,
        DEFAULT_CONFIRMATION, CONTACT_PATH, MAX_MESSAGE_CHARS, MAX_NAME_CHARS,
    },
    portfolio::{PortfolioDocument, PORTFOLIO_PATH},
};

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

#[derive(Debug, Clone)]
pub struct ApiState {
    document: Arc<PortfolioDocument>,
}

impl ApiState {
    pub fn new(document: PortfolioDocument) -> Self {
        Self {
            document: Arc::new(document),
        }
    }
}

pub fn router<S>(state: ApiState) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route(PORTFOLIO_PATH, get(portfolio))
        .route(CONTACT_PATH, post(contact))
        .with_state(state)
}

/// Full check applied by the backend, stricter than the form's own.
pub fn validate_submission(draft: &ContactDraft) -> Result<(), ValidationError> {
    let name = draft.name.trim();
    if name.is_empty() {
        return Err(ValidationError::MissingName);
    }
    if name.chars().count() > MAX_NAME_CHARS {
        return Err(ValidationError::NameTooLong {
            max: MAX_NAME_CHARS,
        });
    }
    if !EMAIL.is_match(draft.email.trim()) {
        return Err(ValidationError::InvalidEmail);
    }
    check_message(&draft.message)?;
    if draft.message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(ValidationError::MessageTooLong {
            max: MAX_MESSAGE_CHARS,
        });
    }
    Ok(())
}

type ApiError = (StatusCode, Json<ErrorDetail>);

fn unprocessable(detail: impl Into<String>) -> ApiError {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorDetail {
            detail: detail.into(),
        }),
    )
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn portfolio(State(state): State<ApiState>) -> Json<PortfolioDocument> {
    Json(PortfolioDocument::clone(&state.document))
}

async fn contact(
    payload: Result<Json<ContactDraft>, JsonRejection>,
) -> Result<Json<ContactReply>, ApiError> {
    let Json(draft) = payload.map_err(|e| unprocessable(e.body_text()))?;
    validate_submission(&draft).map_err(|e| unprocessable(e.to_string()))?;

    tracing::info!(
        email = %draft.email,
        received_at = %chrono::Utc::now().to_rfc3339(),
        "new contact message"
    );
    Ok(Json(ContactReply {
        message: DEFAULT_CONFIRMATION.to_string(),
    }))
}
