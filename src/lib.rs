// SPDX-License-Identifier: MPL-2.0
//! `gallery_lens` is a photo gallery browser built with the Iced GUI framework.
//!
//! It lists the galleries published by a gallery server, shows their
//! thumbnails, opens single images and keeps a back/forward history of the
//! visited views.
//!
//! # Layout
//!
//! - [`domain`] - Gallery value types and the view state
//! - [`application`] - Port traits implemented by the infrastructure
//! - [`infrastructure`] - HTTP client for the gallery server
//! - [`app`] - The Iced application: update loop, history, subscriptions
//! - [`media`] - Asset downloads and the image cache
//! - [`ui`] - Views, navbar, styles and theming
//! - [`config`], [`i18n`], [`error`] - Settings, localization, error types

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod media;
pub mod ui;
