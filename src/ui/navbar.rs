// SPDX-License-Identifier: MPL-2.0
//! Navigation bar shown above every view.
//!
//! Offers history navigation (back / forward) and a button that fetches the
//! gallery list again.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::spacing;
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub can_go_back: bool,
    pub can_go_forward: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Back,
    Forward,
    Reload,
}

/// Render the navigation bar.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let back = history_button(
        format!("← {}", ctx.i18n.tr("navbar-back-button")),
        ctx.can_go_back.then_some(Message::Back),
    );
    let forward = history_button(
        format!("{} →", ctx.i18n.tr("navbar-forward-button")),
        ctx.can_go_forward.then_some(Message::Forward),
    );
    let reload = button(Text::new(ctx.i18n.tr("navbar-reload-button")))
        .on_press(Message::Reload)
        .style(styles::button::primary);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(back)
        .push(forward)
        .push(Space::new().width(Length::Fill))
        .push(reload);

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::toolbar)
        .into()
}

/// A history button: clickable with `message`, grayed out without.
fn history_button<'a>(label: String, message: Option<Message>) -> Element<'a, Message> {
    match message {
        Some(message) => button(Text::new(label))
            .on_press(message)
            .style(styles::button::primary)
            .into(),
        None => button(Text::new(label))
            .style(styles::button::disabled)
            .into(),
    }
}
