// SPDX-License-Identifier: MPL-2.0
//! Placeholder shown before the first gallery list arrives.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, typography};
use iced::widget::{Container, Text};
use iced::{alignment, Element, Length};

/// Renders the loading placeholder.
pub fn view<'a, Message: 'a>(i18n: &I18n) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("loading-title"))
        .size(typography::TITLE_MD)
        .color(palette::GRAY_400);

    Container::new(title)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_view_renders() {
        let i18n = I18n::default();
        let _element: Element<'_, ()> = view(&i18n);
    }
}
