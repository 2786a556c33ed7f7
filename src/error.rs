use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PostError>;

/// One kind per step, so the caller can tell where the run stopped.
#[derive(Debug, Error)]
pub enum PostError {
    /// Non-fatal: the caller substitutes the fallback preview image.
    #[error("failed to scrape preview image from {url}: {reason}")]
    ScrapeFailed { url: String, reason: String },

    #[error("failed to authenticate: {reason}")]
    AuthFailed { reason: String },

    #[error("failed to upload the image: {reason}")]
    UploadFailed { reason: String },

    /// `status` is `None` when the request never got a response.
    #[error("failed to create post: {reason}")]
    PostFailed {
        status: Option<StatusCode>,
        reason: String,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

impl PostError {
    pub(crate) fn auth(reason: impl ToString) -> Self {
        PostError::AuthFailed {
            reason: reason.to_string(),
        }
    }

    pub(crate) fn upload(reason: impl ToString) -> Self {
        PostError::UploadFailed {
            reason: reason.to_string(),
        }
    }

    /// Whether the run must stop before the post is attempted.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            PostError::ScrapeFailed { .. } | PostError::PostFailed { .. }
        )
    }
}
