// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Every state change goes through [`transition`], which records the state
//! being left in history before replacing it. Restoring from history is the
//! only path that replaces the state without recording it.

use super::history::{Direction, History};
use super::Message;
use crate::application::port::gallery::{ApiError, GalleryApi};
use crate::domain::gallery::{GalleryImage, State, View};
use crate::media::{self, AssetCache};
use crate::ui::{gallery, home, image_view, navbar};
use iced::widget::image::Handle;
use iced::Task;
use std::sync::Arc;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub api: &'a Arc<dyn GalleryApi>,
    pub state: &'a mut State,
    pub history: &'a mut History,
    pub assets: &'a mut AssetCache,
}

/// Requests the gallery list.
pub fn fetch_gallery_list(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    tracing::info!("requesting gallery list");
    Task::perform(ctx.api.list_galleries(), Message::GalleryListLoaded)
}

/// Requests the contents of gallery `name`.
pub fn fetch_gallery(ctx: &mut UpdateContext<'_>, name: String) -> Task<Message> {
    tracing::info!(gallery = %name, "requesting gallery contents");
    Task::perform(ctx.api.gallery_contents(&name), move |result| {
        Message::GalleryLoaded { name, result }
    })
}

pub fn handle_gallery_list_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<Vec<String>, ApiError>,
) -> Task<Message> {
    match result {
        Ok(galleries) => {
            tracing::debug!(count = galleries.len(), "gallery list received");
            transition(ctx, View::Home { galleries })
        }
        Err(err) => handle_async_error(ctx, &err),
    }
}

pub fn handle_gallery_loaded(
    ctx: &mut UpdateContext<'_>,
    name: String,
    result: Result<Vec<GalleryImage>, ApiError>,
) -> Task<Message> {
    match result {
        Ok(images) => {
            tracing::debug!(gallery = %name, count = images.len(), "gallery contents received");
            transition(ctx, View::Gallery { name, images })
        }
        Err(err) => handle_async_error(ctx, &err),
    }
}

/// Shows `image` of `gallery`. Works from any view.
pub fn view_image(
    ctx: &mut UpdateContext<'_>,
    gallery: String,
    image: GalleryImage,
) -> Task<Message> {
    tracing::debug!(gallery = %gallery, image = %image.webview_path, "opening image");
    transition(ctx, View::Image { gallery, image })
}

/// Replaces the view with the failure message. The state active when the
/// failure arrived is recorded so a back navigation returns to it.
pub fn handle_async_error(ctx: &mut UpdateContext<'_>, err: &ApiError) -> Task<Message> {
    tracing::warn!(error = %err, "request failed");
    transition(
        ctx,
        View::Error {
            message: err.to_string(),
        },
    )
}

/// Restores a state from history. No-op when there is nothing to restore.
pub fn navigate(ctx: &mut UpdateContext<'_>, direction: Direction) -> Task<Message> {
    match ctx.history.navigate(direction, ctx.state) {
        Some(restored) => {
            tracing::debug!(?direction, view = restored.view.kind(), "restored from history");
            *ctx.state = restored;
            request_assets(ctx)
        }
        None => {
            tracing::debug!(?direction, "nothing to restore");
            Task::none()
        }
    }
}

/// Files a finished asset download in the cache. Failures only affect the
/// placeholder of that asset.
pub fn handle_asset_loaded(
    ctx: &mut UpdateContext<'_>,
    asset: String,
    result: Result<Handle, ApiError>,
) -> Task<Message> {
    match result {
        Ok(handle) => ctx.assets.insert_loaded(asset, handle),
        Err(err) => {
            tracing::warn!(asset = %asset, error = %err, "asset download failed");
            ctx.assets.insert_failed(asset);
        }
    }
    Task::none()
}

pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match message {
        navbar::Message::Back => navigate(ctx, Direction::Back),
        navbar::Message::Forward => navigate(ctx, Direction::Forward),
        navbar::Message::Reload => fetch_gallery_list(ctx),
    }
}

pub fn handle_home_message(ctx: &mut UpdateContext<'_>, message: home::Message) -> Task<Message> {
    match message {
        home::Message::OpenGallery(name) => fetch_gallery(ctx, name),
    }
}

pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    match message {
        gallery::Message::GoHome => fetch_gallery_list(ctx),
        gallery::Message::ViewImage { gallery, image } => view_image(ctx, gallery, image),
    }
}

pub fn handle_image_view_message(
    ctx: &mut UpdateContext<'_>,
    message: image_view::Message,
) -> Task<Message> {
    match message {
        image_view::Message::BackToGallery(gallery) => fetch_gallery(ctx, gallery),
    }
}

/// Records the current state and switches to `view`.
fn transition(ctx: &mut UpdateContext<'_>, view: View) -> Task<Message> {
    ctx.history.push(ctx.state);
    tracing::info!(from = ctx.state.view.kind(), to = view.kind(), "view changed");
    ctx.state.view = view;
    request_assets(ctx)
}

/// Starts downloads for the assets the current view draws and that are
/// neither cached nor in flight.
fn request_assets(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let missing = ctx.assets.claim_missing(&ctx.state.view.required_assets());
    if missing.is_empty() {
        return Task::none();
    }
    tracing::debug!(count = missing.len(), "requesting assets");

    let tasks: Vec<Task<Message>> = missing
        .into_iter()
        .map(|asset| {
            Task::perform(
                media::load_asset(ctx.api.as_ref(), asset),
                |(asset, result)| Message::AssetLoaded { asset, result },
            )
        })
        .collect();
    Task::batch(tasks)
}
