// SPDX-License-Identifier: MPL-2.0
//! Gallery media handling.
//!
//! Thumbnails and webview images are downloaded through the gallery port and
//! turned into Iced image handles; the renderer decodes them lazily.

pub mod asset_cache;

pub use asset_cache::{AssetCache, AssetStatus};

use crate::application::port::gallery::{ApiResult, GalleryApi};
use iced::widget::image::Handle;
use std::future::Future;

/// Downloads `asset` and wraps its bytes in an image handle.
///
/// Resolves to the asset path alongside the result so the caller can file it
/// in the cache. The port future is built before this returns, so the result
/// does not borrow `api`.
pub fn load_asset(
    api: &dyn GalleryApi,
    asset: String,
) -> impl Future<Output = (String, ApiResult<Handle>)> + Send + 'static {
    let request = api.fetch_asset(&asset);
    async move {
        let result = request.await.map(Handle::from_bytes);
        (asset, result)
    }
}
