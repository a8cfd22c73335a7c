// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap external dependencies like the
//! HTTP client.
//!
//! # Available Adapters
//!
//! - [`http`]: Gallery server access via `reqwest` (implements [`GalleryApi`])
//!
//! [`GalleryApi`]: crate::application::port::GalleryApi

pub mod http;

pub use http::HttpGalleryApi;
