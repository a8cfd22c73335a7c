// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations use the Fluent localization system. Bundles are embedded in
//! the binary at build time from `assets/i18n/*.ftl`.
//!
//! # Locale Resolution
//!
//! 1. `--lang` command-line flag
//! 2. `[general] language` in `settings.toml`
//! 3. Operating system locale
//! 4. `en-US`

pub mod fluent;
