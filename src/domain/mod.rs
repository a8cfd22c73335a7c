// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value types with no UI or I/O dependencies.
//!
//! This module contains pure domain types shared by the application,
//! infrastructure and presentation layers. Apart from `serde` derives (the
//! types travel over the wire and into history snapshots) it depends only on
//! `std`.
//!
//! # Modules
//!
//! - [`gallery`]: Gallery types ([`GalleryImage`](gallery::GalleryImage),
//!   [`View`](gallery::View), [`State`](gallery::State))

pub mod gallery;

pub use gallery::{GalleryImage, State, View};
