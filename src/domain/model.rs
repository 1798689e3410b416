use crate::utils::error::{GoodCountError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Accumulated "good" reactions for one article.
pub type Count = u64;

/// Non-empty article identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArticleId(String);

impl ArticleId {
    pub const EMPTY_MESSAGE: &'static str = "article_id is empty";

    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(GoodCountError::bad_request(Self::EMPTY_MESSAGE));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessEnvelope {
    #[serde(rename = "goodCount")]
    pub good_count: Count,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCategory {
    #[serde(rename = "bad request")]
    BadRequest,
    #[serde(rename = "internal server error")]
    InternalServerError,
}

impl ErrorCategory {
    pub fn status_code(self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::InternalServerError => 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorCategory,
    pub message: String,
}

/// How the process runs, decided once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionMode {
    /// One lookup for the given article, printed to stdout.
    Local { article_id: ArticleId },
    /// Long-lived handler registered with the gateway runtime.
    Service,
}

/// What the use-case does when the count provider fails.
///
/// `Swallow` reports the failure as a successful, empty body. That is the
/// long-standing observable behavior and stays the default until callers opt
/// into `Propagate`, which surfaces the failure as a 500.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ProviderErrorPolicy {
    #[default]
    Swallow,
    Propagate,
}
