// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct owns the current [`State`], the navigation history and
//! the asset cache, and translates messages into gallery requests. It starts
//! in [`View::Init`] and immediately requests the gallery list.

pub mod history;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::gallery::{ApiError, ApiResult, GalleryApi};
use crate::config::{self, Config};
use crate::domain::gallery::{GalleryImage, State, View};
use crate::i18n::fluent::I18n;
use crate::infrastructure::http::HttpGalleryApi;
use crate::media::AssetCache;
use crate::ui::theming::ThemeMode;
use futures_util::future::{self, BoxFuture, FutureExt};
use history::History;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    api: Arc<dyn GalleryApi>,
    state: State,
    history: History,
    assets: AssetCache,
    theme_mode: ThemeMode,
    /// Theme resolved once at startup; system detection is not free.
    theme: Theme,
    thumbnail_size: u32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("view", &self.state.view.kind())
            .field("history_len", &self.history.len())
            .field("assets", &self.assets)
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 360;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires a `Fn` boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Stands in for the HTTP adapter when the server URL cannot be used, so
/// every request fails with the same error and surfaces in the error view.
struct UnavailableApi(ApiError);

impl UnavailableApi {
    fn fail<T: Send + 'static>(&self) -> BoxFuture<'static, ApiResult<T>> {
        future::ready(Err(self.0.clone())).boxed()
    }
}

impl GalleryApi for UnavailableApi {
    fn list_galleries(&self) -> BoxFuture<'static, ApiResult<Vec<String>>> {
        self.fail()
    }

    fn gallery_contents(&self, _name: &str) -> BoxFuture<'static, ApiResult<Vec<GalleryImage>>> {
        self.fail()
    }

    fn fetch_asset(&self, _asset: &str) -> BoxFuture<'static, ApiResult<Vec<u8>>> {
        self.fail()
    }
}

impl App {
    /// Loads configuration, applies CLI overrides and connects to the server.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir);
        let (mut config, config_warning) = config::load();

        if let Some(url) = flags.server_url {
            config.server.base_url = Some(url);
        }

        let i18n = I18n::new(flags.lang, &config);
        if let Some(key) = config_warning {
            tracing::warn!("{}", i18n.tr(&key));
        }

        let api: Arc<dyn GalleryApi> =
            match HttpGalleryApi::new(config.server_url(), config.request_timeout()) {
                Ok(api) => {
                    tracing::info!(server = %api.base_url(), "using gallery server");
                    Arc::new(api)
                }
                Err(err) => {
                    tracing::error!(error = %err, "gallery server unavailable");
                    Arc::new(UnavailableApi(err))
                }
            };

        Self::with_api(api, &config, i18n)
    }

    /// Builds the application around `api` and returns the initial gallery
    /// list request.
    pub fn with_api(api: Arc<dyn GalleryApi>, config: &Config, i18n: I18n) -> (Self, Task<Message>) {
        let theme_mode = config.general.theme_mode;
        let mut app = App {
            i18n,
            api,
            state: State::default(),
            history: History::new(config.history_entries()),
            assets: AssetCache::new(config.asset_cache_entries()),
            theme_mode,
            theme: theme_mode.iced_theme(),
            thumbnail_size: config.thumbnail_size(),
        };

        let task = update::fetch_gallery_list(&mut app.update_context());
        (app, task)
    }

    /// The state currently displayed.
    #[must_use]
    pub fn state(&self) -> &State {
        &self.state
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub fn assets(&self) -> &AssetCache {
        &self.assets
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match &self.state.view {
            View::Gallery { name, .. } => format!("{name} - {app_name}"),
            View::Image { gallery, .. } => format!("{gallery} - {app_name}"),
            View::Init | View::Home { .. } | View::Error { .. } => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_navigation_subscription()
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            api: &self.api,
            state: &mut self.state,
            history: &mut self.history,
            assets: &mut self.assets,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Home(home_message) => update::handle_home_message(&mut ctx, home_message),
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::ImageView(image_message) => {
                update::handle_image_view_message(&mut ctx, image_message)
            }
            Message::Navigate(direction) => update::navigate(&mut ctx, direction),
            Message::GalleryListLoaded(result) => {
                update::handle_gallery_list_loaded(&mut ctx, result)
            }
            Message::GalleryLoaded { name, result } => {
                update::handle_gallery_loaded(&mut ctx, name, result)
            }
            Message::AssetLoaded { asset, result } => {
                update::handle_asset_loaded(&mut ctx, asset, result)
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self.view_context())
    }

    fn view_context(&self) -> view::ViewContext<'_> {
        view::ViewContext {
            i18n: &self.i18n,
            state: &self.state,
            assets: &self.assets,
            thumbnail_size: self.thumbnail_size as f32,
            can_go_back: self.history.can_go_back(),
            can_go_forward: self.history.can_go_forward(),
        }
    }
}
