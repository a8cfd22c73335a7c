// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter for the gallery server.
//!
//! [`HttpGalleryApi`] implements [`GalleryApi`] with `reqwest`:
//!
//! - `GET  {base}/api/list_galleries` returns a JSON array of names
//! - `POST {base}/api/gallery_contents` with a bare JSON string body returns a
//!   JSON array of images
//! - `GET  {base}/photos/<path>` serves static assets
//!
//! Bodies are read fully and decoded with `serde_json` so that malformed
//! documents surface as [`ApiError::Decode`] rather than transport errors.

use crate::application::port::gallery::{ApiError, ApiResult, GalleryApi};
use crate::domain::gallery::GalleryImage;
use futures_util::future::{BoxFuture, FutureExt};
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Endpoint listing gallery names.
pub const LIST_GALLERIES_PATH: &str = "api/list_galleries";

/// Endpoint returning the contents of one gallery.
pub const GALLERY_CONTENTS_PATH: &str = "api/gallery_contents";

const USER_AGENT: &str = concat!("GalleryLens/", env!("CARGO_PKG_VERSION"));

/// Gallery server client over HTTP.
#[derive(Debug, Clone)]
pub struct HttpGalleryApi {
    client: Client,
    base_url: Url,
}

impl HttpGalleryApi {
    /// Creates a client for the server at `base_url`.
    ///
    /// `timeout` applies to whole requests; `None` leaves requests unbounded.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> ApiResult<Self> {
        let base_url = normalize_base_url(base_url)?;

        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// The normalized server URL (always ends with `/`).
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> ApiResult<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::InvalidUrl(format!("{path}: {e}")))
    }

    /// URL of a static asset. Each `/`-separated part of `asset` becomes one
    /// percent-encoded path segment, so `#`, `?` and `%` stay in the path.
    fn asset_url(&self, asset: &str) -> ApiResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidUrl(format!("{}: cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(asset.split('/').filter(|segment| !segment.is_empty()));
        Ok(url)
    }
}

impl GalleryApi for HttpGalleryApi {
    fn list_galleries(&self) -> BoxFuture<'static, ApiResult<Vec<String>>> {
        let request = self
            .endpoint(LIST_GALLERIES_PATH)
            .map(|url| self.client.get(url));
        async move { send_json(request?).await }.boxed()
    }

    fn gallery_contents(&self, name: &str) -> BoxFuture<'static, ApiResult<Vec<GalleryImage>>> {
        let request = self
            .endpoint(GALLERY_CONTENTS_PATH)
            .map(|url| self.client.post(url).json(name));
        async move { send_json(request?).await }.boxed()
    }

    fn fetch_asset(&self, asset: &str) -> BoxFuture<'static, ApiResult<Vec<u8>>> {
        let request = self.asset_url(asset).map(|url| self.client.get(url));
        async move { send(request?).await }.boxed()
    }
}

/// Parses `raw` and makes sure it ends with a slash so relative joins keep
/// any path prefix (e.g. `http://host/gallery/`).
fn normalize_base_url(raw: &str) -> ApiResult<Url> {
    let trimmed = raw.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };

    let url = Url::parse(&with_slash).map_err(|e| ApiError::InvalidUrl(format!("{raw}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ApiError::InvalidUrl(format!(
            "{raw}: unsupported scheme {other}"
        ))),
    }
}

async fn send(request: RequestBuilder) -> ApiResult<Vec<u8>> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status(status.as_u16()));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    Ok(body.to_vec())
}

async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> ApiResult<T> {
    let body = send(request).await?;
    Ok(serde_json::from_slice(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gets_trailing_slash() {
        let api = HttpGalleryApi::new("http://127.0.0.1:8080", None).expect("valid url");
        assert_eq!(api.base_url().as_str(), "http://127.0.0.1:8080/");
    }

    #[test]
    fn endpoints_keep_base_path_prefix() {
        let api = HttpGalleryApi::new("http://example.com/gallery", None).expect("valid url");
        let url = api.endpoint(LIST_GALLERIES_PATH).expect("join");
        assert_eq!(url.as_str(), "http://example.com/gallery/api/list_galleries");
    }

    #[test]
    fn asset_paths_are_percent_encoded() {
        let api = HttpGalleryApi::new("http://example.com/", None).expect("valid url");
        let url = api.asset_url("photos/summer trip/1.jpg").expect("asset url");
        assert_eq!(url.as_str(), "http://example.com/photos/summer%20trip/1.jpg");
    }

    #[test]
    fn asset_path_keeps_hash_and_question_mark() {
        let api = HttpGalleryApi::new("http://example.com/", None).expect("valid url");

        let url = api.asset_url("photos/a/thumbs/a#1.jpg").expect("asset url");
        assert_eq!(url.as_str(), "http://example.com/photos/a/thumbs/a%231.jpg");
        assert_eq!(url.fragment(), None);

        let url = api.asset_url("photos/what?.jpg").expect("asset url");
        assert_eq!(url.as_str(), "http://example.com/photos/what%3F.jpg");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn asset_url_keeps_base_path_prefix() {
        let api = HttpGalleryApi::new("http://example.com/gallery", None).expect("valid url");
        let url = api.asset_url("/photos//a/1.jpg").expect("asset url");
        assert_eq!(url.as_str(), "http://example.com/gallery/photos/a/1.jpg");
    }

    #[test]
    fn rejects_unparseable_url() {
        let err = HttpGalleryApi::new("not a url", None).unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl(_)));
    }

    #[test]
    fn rejects_non_http_scheme() {
        let err = HttpGalleryApi::new("ftp://example.com", None).unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl(msg) if msg.contains("ftp")));
    }
}
