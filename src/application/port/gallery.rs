// SPDX-License-Identifier: MPL-2.0
//! Gallery server port definition.
//!
//! This module defines the [`GalleryApi`] trait for talking to a gallery
//! server. The HTTP adapter lives in `infrastructure::http`; tests provide
//! in-memory fakes.
//!
//! Methods return `'static` boxed futures so callers can hand them straight
//! to `iced::Task::perform` without borrowing the adapter.

use crate::domain::gallery::GalleryImage;
use futures_util::future::BoxFuture;
use std::fmt;

// =============================================================================
// ApiError
// =============================================================================

/// Errors that can occur while talking to the gallery server.
///
/// The `Display` output is what the browser shows in its error view, so every
/// variant renders as a single human-readable line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request could not be sent or the connection failed.
    Network(String),

    /// The server answered with a non-success HTTP status.
    Status(u16),

    /// The response body was not the expected JSON document.
    Decode(String),

    /// The configured server URL cannot be used.
    InvalidUrl(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(cause) => write!(f, "{cause}"),
            ApiError::Status(code) => write!(f, "HTTP status {code}"),
            ApiError::Decode(msg) => write!(f, "Invalid response body: {msg}"),
            ApiError::InvalidUrl(url) => write!(f, "Invalid server URL: {url}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Result type for gallery server operations.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

// =============================================================================
// GalleryApi Trait
// =============================================================================

/// Access to a gallery server.
pub trait GalleryApi: Send + Sync {
    /// Lists gallery names, in the order the server returns them.
    fn list_galleries(&self) -> BoxFuture<'static, ApiResult<Vec<String>>>;

    /// Fetches the images of the gallery called `name`, in server order.
    fn gallery_contents(&self, name: &str) -> BoxFuture<'static, ApiResult<Vec<GalleryImage>>>;

    /// Downloads a static asset. `asset` is already resolved, e.g.
    /// `photos/thumbs/1.jpg`.
    fn fetch_asset(&self, asset: &str) -> BoxFuture<'static, ApiResult<Vec<u8>>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_error_displays_cause_verbatim() {
        assert_eq!(ApiError::Network("timeout".into()).to_string(), "timeout");
    }

    #[test]
    fn status_error_names_the_code() {
        assert_eq!(ApiError::Status(404).to_string(), "HTTP status 404");
    }

    #[test]
    fn json_errors_become_decode_errors() {
        let err = serde_json::from_str::<Vec<String>>("<html>").unwrap_err();
        let api_err: ApiError = err.into();
        assert!(matches!(api_err, ApiError::Decode(_)));
        assert!(api_err.to_string().starts_with("Invalid response body"));
    }
}
