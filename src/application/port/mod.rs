// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`gallery`]: Gallery server access (gallery list, gallery contents, assets)
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no `reqwest` types)
//! - Traits are `Send + Sync` so adapters can be shared behind an `Arc`
//! - Methods return boxed `'static` futures that callers wrap in an Iced `Task`
//!
//! # Example
//!
//! ```ignore
//! use gallery_lens::application::port::GalleryApi;
//!
//! async fn first_gallery(api: &dyn GalleryApi) -> Option<String> {
//!     api.list_galleries().await.ok()?.into_iter().next()
//! }
//! ```

pub mod gallery;

pub use gallery::{ApiError, ApiResult, GalleryApi};
