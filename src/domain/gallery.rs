// SPDX-License-Identifier: MPL-2.0
//! Gallery value types shared by every layer.
//!
//! [`GalleryImage`] mirrors the objects returned by the gallery server, and
//! [`View`] is the closed set of screens the browser can show. [`State`] wraps
//! the active view and is the unit stored in navigation history.

use serde::{Deserialize, Serialize};

/// Directory (relative to the server root) under which static assets live.
pub const ASSET_ROOT: &str = "photos";

/// Resolves a server-provided asset path to the path requested from the server.
///
/// Leading slashes on `path` are ignored so that `"a/1.jpg"` and `"/a/1.jpg"`
/// resolve to the same asset.
#[must_use]
pub fn asset_path(path: &str) -> String {
    format!("{ASSET_ROOT}/{}", path.trim_start_matches('/'))
}

/// One image entry of a gallery, as published by the server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GalleryImage {
    pub thumbnail_path: String,
    pub webview_path: String,
    pub original_path: String,
}

impl GalleryImage {
    /// Asset path of the thumbnail shown in gallery listings.
    #[must_use]
    pub fn thumbnail_asset(&self) -> String {
        asset_path(&self.thumbnail_path)
    }

    /// Asset path of the full-size image shown in the image view.
    #[must_use]
    pub fn webview_asset(&self) -> String {
        asset_path(&self.webview_path)
    }
}

/// What the browser currently shows. Exactly one variant is active at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum View {
    /// Nothing received yet; the first gallery list fetch is in flight.
    #[default]
    Init,
    Home {
        galleries: Vec<String>,
    },
    Gallery {
        name: String,
        images: Vec<GalleryImage>,
    },
    Image {
        gallery: String,
        image: GalleryImage,
    },
    Error {
        message: String,
    },
}

impl View {
    /// Short, stable name of the variant, used in logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            View::Init => "init",
            View::Home { .. } => "home",
            View::Gallery { .. } => "gallery",
            View::Image { .. } => "image",
            View::Error { .. } => "error",
        }
    }

    /// Asset paths that must be loaded to fully render this view.
    #[must_use]
    pub fn required_assets(&self) -> Vec<String> {
        match self {
            View::Gallery { images, .. } => {
                images.iter().map(GalleryImage::thumbnail_asset).collect()
            }
            View::Image { image, .. } => vec![image.webview_asset()],
            View::Init | View::Home { .. } | View::Error { .. } => Vec::new(),
        }
    }
}

/// The browser state owned by the view controller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    pub view: View,
}

impl State {
    #[must_use]
    pub fn new(view: View) -> Self {
        Self { view }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_image(stem: &str) -> GalleryImage {
        GalleryImage {
            thumbnail_path: format!("thumbs/{stem}.jpg"),
            webview_path: format!("web/{stem}.jpg"),
            original_path: format!("/srv/photos/{stem}.jpg"),
        }
    }

    #[test]
    fn asset_path_prefixes_photo_root() {
        assert_eq!(asset_path("a/1.jpg"), "photos/a/1.jpg");
        assert_eq!(asset_path("/a/1.jpg"), "photos/a/1.jpg");
    }

    #[test]
    fn default_state_is_init() {
        assert_eq!(State::default().view, View::Init);
    }

    #[test]
    fn gallery_image_decodes_server_field_names() {
        let json = r#"{"thumbnail_path":"t.jpg","webview_path":"w.jpg","original_path":"o.jpg"}"#;
        let image: GalleryImage = serde_json::from_str(json).expect("valid image json");
        assert_eq!(image.thumbnail_path, "t.jpg");
        assert_eq!(image.webview_asset(), "photos/w.jpg");
        assert_eq!(image.original_path, "o.jpg");
    }

    #[test]
    fn gallery_view_requires_every_thumbnail_in_order() {
        let view = View::Gallery {
            name: "a".to_string(),
            images: vec![sample_image("1"), sample_image("2")],
        };
        assert_eq!(
            view.required_assets(),
            vec!["photos/thumbs/1.jpg", "photos/thumbs/2.jpg"]
        );
    }

    #[test]
    fn image_view_requires_only_webview_asset() {
        let view = View::Image {
            gallery: "a".to_string(),
            image: sample_image("1"),
        };
        assert_eq!(view.required_assets(), vec!["photos/web/1.jpg"]);
    }

    #[test]
    fn non_media_views_require_nothing() {
        assert!(View::Init.required_assets().is_empty());
        assert!(View::Home { galleries: vec!["a".into()] }
            .required_assets()
            .is_empty());
        assert!(View::Error {
            message: "boom".into()
        }
        .required_assets()
        .is_empty());
    }

    #[test]
    fn view_kind_names_each_variant() {
        assert_eq!(View::Init.kind(), "init");
        assert_eq!(View::Error { message: String::new() }.kind(), "error");
    }
}
