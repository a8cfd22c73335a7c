// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Every view is a pure function of the data it is handed through a
//! `ViewContext`, following the Elm-style "state down, messages up" pattern.
//!
//! # Views
//!
//! - [`loading`] - Placeholder before the first gallery list arrives
//! - [`error_state`] - Failure message with a hint to go back
//! - [`home`] - Gallery list
//! - [`gallery`] - Thumbnail grid of one gallery
//! - [`image_view`] - One image with its original path
//!
//! # Shared Infrastructure
//!
//! - [`navbar`] - Back / forward / reload bar
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod error_state;
pub mod gallery;
pub mod home;
pub mod image_view;
pub mod loading;
pub mod navbar;
pub mod styles;
pub mod theming;
