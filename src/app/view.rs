// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The render output is a pure function of the current [`View`]; the match
//! below is exhaustive so a new variant cannot be left without a rendering.

use super::Message;
use crate::domain::gallery::{State, View};
use crate::i18n::fluent::I18n;
use crate::media::AssetCache;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::{error_state, gallery, home, image_view, loading};
use iced::{
    widget::{Column, Container},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub assets: &'a AssetCache,
    pub thumbnail_size: f32,
    pub can_go_back: bool,
    pub can_go_forward: bool,
}

/// Renders the navbar above the active view.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        can_go_back: ctx.can_go_back,
        can_go_forward: ctx.can_go_forward,
    })
    .map(Message::Navbar);

    let current_view: Element<'_, Message> = match &ctx.state.view {
        View::Init => loading::view(ctx.i18n),
        View::Error { message } => error_state::view(ctx.i18n, message),
        View::Home { galleries } => home::view(home::ViewContext {
            i18n: ctx.i18n,
            galleries,
        })
        .map(Message::Home),
        View::Gallery { name, images } => gallery::view(gallery::ViewContext {
            i18n: ctx.i18n,
            name,
            images,
            assets: ctx.assets,
            thumbnail_size: ctx.thumbnail_size,
        })
        .map(Message::Gallery),
        View::Image { gallery, image } => image_view::view(image_view::ViewContext {
            i18n: ctx.i18n,
            gallery,
            image,
            assets: ctx.assets,
        })
        .map(Message::ImageView),
    };

    let column = Column::new().push(navbar).push(
        Container::new(current_view)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    Container::new(column.width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
