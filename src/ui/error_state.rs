// SPDX-License-Identifier: MPL-2.0
//! Error view: the failure message and how to get back.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, spacing, typography};
use iced::widget::{container, Column, Container, Text};
use iced::{alignment, Border, Element, Length, Theme};

/// Renders `message` with a hint pointing at history navigation.
pub fn view<'a, Message: 'a>(i18n: &I18n, message: &'a str) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("error-title"))
        .size(typography::TITLE_MD)
        .color(palette::ERROR_500);

    let body = Text::new(message).size(typography::BODY);

    let hint = Text::new(i18n.tr("error-go-back-hint"))
        .size(typography::CAPTION)
        .color(palette::GRAY_400);

    let card = Container::new(
        Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(title)
            .push(body)
            .push(hint),
    )
    .padding(spacing::LG)
    .style(|theme: &Theme| container::Style {
        background: Some(theme.extended_palette().background.weak.color.into()),
        border: Border {
            color: palette::ERROR_500,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    });

    Container::new(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
