use std::error::Error;
use std::fmt;

use crate::api_connection::connection::ApiConnectionError;

/// Upper bound on how much raw backend text a failure carries around.
pub const SNIPPET_MAX_CHARS: usize = 200;

/// Truncate a raw backend payload for diagnostics.
pub fn truncate_snippet(raw: &str) -> String {
    let mut chars = raw.chars();
    let head: String = chars.by_ref().take(SNIPPET_MAX_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

/// One failed decode pipeline. Every variant is terminal for the request
/// that produced it; nothing here is retried internally.
#[derive(Debug)]
pub enum AssistantError {
    Transport(ApiConnectionError),
    Extraction { cause: String, snippet: String },
    Parse { cause: String, snippet: String },
    Validation { cause: String, snippet: String },
}

impl AssistantError {
    pub fn extraction(cause: impl Into<String>, raw: &str) -> Self {
        AssistantError::Extraction {
            cause: cause.into(),
            snippet: truncate_snippet(raw),
        }
    }

    pub fn parse(cause: impl Into<String>, raw: &str) -> Self {
        AssistantError::Parse {
            cause: cause.into(),
            snippet: truncate_snippet(raw),
        }
    }

    pub fn validation(cause: impl Into<String>, raw: &str) -> Self {
        AssistantError::Validation {
            cause: cause.into(),
            snippet: truncate_snippet(raw),
        }
    }

    pub fn stage(&self) -> &'static str {
        match self {
            AssistantError::Transport(_) => "transport",
            AssistantError::Extraction { .. } => "extraction",
            AssistantError::Parse { .. } => "parse",
            AssistantError::Validation { .. } => "validation",
        }
    }

    /// Message suitable for direct display. Names the likely cause without
    /// embedding the raw backend payload; that stays in diagnostic output.
    pub fn user_message(&self) -> &'static str {
        match self {
            AssistantError::Transport(ApiConnectionError::MissingApiKey) => {
                "Groq API key is not available. Please add GROQ_API_KEY to your .env file."
            }
            AssistantError::Transport(_) => {
                "The nutrition service could not be reached. Please try again."
            }
            AssistantError::Extraction { .. } | AssistantError::Parse { .. } => {
                "The assistant returned an answer that could not be read. Please try again."
            }
            AssistantError::Validation { .. } => {
                "The assistant's answer was missing required information. Please try again."
            }
        }
    }
}

impl fmt::Display for AssistantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssistantError::Transport(err) => write!(f, "transport stage failed: {}", err),
            AssistantError::Extraction { cause, snippet } => {
                write!(f, "extraction stage failed: {} (raw: {})", cause, snippet)
            }
            AssistantError::Parse { cause, snippet } => {
                write!(f, "parse stage failed: {} (raw: {})", cause, snippet)
            }
            AssistantError::Validation { cause, snippet } => {
                write!(f, "validation stage failed: {} (raw: {})", cause, snippet)
            }
        }
    }
}

impl Error for AssistantError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AssistantError::Transport(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ApiConnectionError> for AssistantError {
    fn from(err: ApiConnectionError) -> Self {
        AssistantError::Transport(err)
    }
}
