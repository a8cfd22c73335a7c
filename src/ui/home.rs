// SPDX-License-Identifier: MPL-2.0
//! Home view: the list of galleries offered by the server.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, scrollable, Column, Text};
use iced::{Element, Length};

/// Contextual data needed to render the home view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub galleries: &'a [String],
}

/// Messages emitted by the home view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    OpenGallery(String),
}

/// Render the gallery list, one link per gallery in server order.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::XS)
        .padding(spacing::LG)
        .push(Text::new(ctx.i18n.tr("home-title")).size(typography::TITLE_LG));

    if ctx.galleries.is_empty() {
        content = content.push(
            Text::new(ctx.i18n.tr("home-empty"))
                .size(typography::BODY)
                .color(palette::GRAY_400),
        );
    }

    for (name, message) in gallery_links(ctx.galleries) {
        content = content.push(
            button(Text::new(name).size(typography::BODY))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::button::link)
                .on_press(message),
        );
    }

    scrollable(content).into()
}

/// One `(label, message)` pair per gallery, in the order given.
#[must_use]
pub fn gallery_links(galleries: &[String]) -> Vec<(&str, Message)> {
    galleries
        .iter()
        .map(|name| (name.as_str(), Message::OpenGallery(name.clone())))
        .collect()
}
