use std::future::Future;

use leptos::server_fn::{
    codec::JsonEncoding,
    error::{FromServerFnError, ServerFnErrorErr},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONTACT_PATH: &str = "/api/contact";
pub const MIN_MESSAGE_CHARS: usize = 10;
pub const MAX_MESSAGE_CHARS: usize = 2000;
pub const MAX_NAME_CHARS: usize = 100;
pub const DEFAULT_CONFIRMATION: &str = "Thank you for reaching out! I'll get back to you soon.";
pub const GENERIC_FAILURE: &str = "Failed to send message. Please try again later.";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

/// Success body of `POST /api/contact`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReply {
    pub message: String,
}

/// Failure body used by the backend for every non-2xx answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("Please enter your name.")]
    MissingName,
    #[error("Name must be at most {max} characters.")]
    NameTooLong { max: usize },
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Message must be at least {min} characters long.")]
    MessageTooShort { min: usize },
    #[error("Message must be at most {max} characters.")]
    MessageTooLong { max: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionError {
    /// The backend answered with an error and said why.
    #[error("{0}")]
    Rejected(String),
    #[error("{}", GENERIC_FAILURE)]
    Unavailable,
    #[error("{0}")]
    Transport(String),
}

impl FromServerFnError for SubmissionError {
    type Encoder = JsonEncoding;

    fn from_server_fn_error(value: ServerFnErrorErr) -> Self {
        SubmissionError::Transport(value.to_string())
    }
}

/// The browser-side rule: only the message length is checked before sending.
/// Whitespace counts like any other character.
pub fn check_message(message: &str) -> Result<(), ValidationError> {
    if message.chars().count() < MIN_MESSAGE_CHARS {
        return Err(ValidationError::MessageTooShort {
            min: MIN_MESSAGE_CHARS,
        });
    }
    Ok(())
}

/// Something that can deliver a draft and report the confirmation text.
pub trait ContactTransport {
    fn send(
        &self,
        draft: &ContactDraft,
    ) -> impl Future<Output = Result<String, SubmissionError>> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
}

impl Toast {
    fn success(description: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            title: "Message Sent!".to_string(),
            description: description.into(),
        }
    }

    fn error(title: &str, description: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            title: title.to_string(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Success,
    ValidationFailed,
    RequestFailed,
}

impl SubmitState {
    pub fn is_submitting(self) -> bool {
        self == SubmitState::Submitting
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejected {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("{}", .0.description)]
    Invalid(Toast),
}

/// Contact form state: the draft plus where the last attempt stands.
///
/// `begin` and `complete` bracket the one outstanding request. Every state
/// other than `Submitting` accepts a new `begin`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmitter {
    draft: ContactDraft,
    state: SubmitState,
}

impl ContactSubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn can_submit(&self) -> bool {
        !self.state.is_submitting()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.draft.email = email.into();
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.draft.message = message.into();
    }

    /// Start an attempt. On success the caller owns sending the returned
    /// draft and must report back through [`ContactSubmitter::complete`].
    pub fn begin(&mut self) -> Result<ContactDraft, SubmitRejected> {
        if self.state.is_submitting() {
            return Err(SubmitRejected::InFlight);
        }
        self.state = SubmitState::Submitting;
        match check_message(&self.draft.message) {
            Ok(()) => Ok(self.draft.clone()),
            Err(e) => {
                self.state = SubmitState::ValidationFailed;
                log::debug!("contact draft rejected: {e}");
                Err(SubmitRejected::Invalid(Toast::error(
                    "Message too short",
                    e.to_string(),
                )))
            }
        }
    }

    /// Finish the in-flight attempt. Ignored unless one is in flight.
    pub fn complete(&mut self, result: Result<String, SubmissionError>) -> Option<Toast> {
        if !self.state.is_submitting() {
            return None;
        }
        let toast = match result {
            Ok(message) => {
                self.draft = ContactDraft::default();
                self.state = SubmitState::Success;
                Toast::success(message)
            }
            Err(e) => {
                log::warn!("contact submission failed: {e}");
                self.state = SubmitState::RequestFailed;
                Toast::error("Something went wrong", e.to_string())
            }
        };
        Some(toast)
    }

    /// [`ContactSubmitter::complete`] followed by [`ContactSubmitter::dismiss`]:
    /// the form is back to `Idle` as soon as the outcome is handed out.
    pub fn finish(&mut self, result: Result<String, SubmissionError>) -> Option<Toast> {
        let toast = self.complete(result)?;
        self.dismiss();
        Some(toast)
    }

    /// Back to `Idle` once the outcome has been shown.
    pub fn dismiss(&mut self) {
        if !self.state.is_submitting() {
            self.state = SubmitState::Idle;
        }
    }
}
