// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::history::Direction;
use crate::application::port::gallery::ApiError;
use crate::domain::gallery::GalleryImage;
use crate::ui::{gallery, home, image_view, navbar};
use iced::widget::image::Handle;

/// Top-level messages consumed by `App::update`. The variants forward
/// view messages and carry the results of asynchronous requests.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Home(home::Message),
    Gallery(gallery::Message),
    ImageView(image_view::Message),
    /// Back/forward input from the keyboard or mouse side buttons.
    Navigate(Direction),
    GalleryListLoaded(Result<Vec<String>, ApiError>),
    GalleryLoaded {
        name: String,
        result: Result<Vec<GalleryImage>, ApiError>,
    },
    AssetLoaded {
        asset: String,
        result: Result<Handle, ApiError>,
    },
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional server base URL; takes precedence over `[server] base_url`.
    pub server_url: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `GALLERY_LENS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
