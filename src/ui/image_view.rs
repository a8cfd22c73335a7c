// SPDX-License-Identifier: MPL-2.0
//! Single image view.
//!
//! Shows the gallery heading, a link back to the gallery above and below the
//! picture, the original file path, and the webview-sized image itself.

use crate::domain::gallery::GalleryImage;
use crate::i18n::fluent::I18n;
use crate::media::{AssetCache, AssetStatus};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::gallery::{placeholder, placeholder_key};
use crate::ui::styles;
use iced::widget::{button, image::Image, scrollable, Column, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Contextual data needed to render the image view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a str,
    pub image: &'a GalleryImage,
    pub assets: &'a AssetCache,
}

/// Messages emitted by the image view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    BackToGallery(String),
}

/// Parts of the image view, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Heading,
    BackLink,
    OriginalPath,
    Picture,
}

/// The picture is framed by a back link on each side.
pub const SECTIONS: [Section; 5] = [
    Section::Heading,
    Section::BackLink,
    Section::OriginalPath,
    Section::Picture,
    Section::BackLink,
];

/// Render the image view.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = SECTIONS.iter().fold(
        Column::new()
            .width(Length::Fill)
            .spacing(spacing::SM)
            .padding(spacing::LG)
            .align_x(alignment::Horizontal::Center),
        |column, section| column.push(section_view(&ctx, *section)),
    );

    scrollable(content).into()
}

fn section_view<'a>(ctx: &ViewContext<'a>, section: Section) -> Element<'a, Message> {
    match section {
        Section::Heading => Text::new(ctx.gallery).size(typography::TITLE_LG).into(),
        Section::BackLink => back_link(ctx),
        Section::OriginalPath => Text::new(
            ctx.i18n
                .tr_with_args("image-original-path", &[("path", ctx.image.original_path.as_str())]),
        )
        .size(typography::CAPTION)
        .color(palette::GRAY_400)
        .into(),
        Section::Picture => {
            let status = ctx.assets.status(&ctx.image.webview_asset());
            match (placeholder_key(&status), status) {
                (None, AssetStatus::Loaded(handle)) => Image::new(handle)
                    .width(Length::Fill)
                    .content_fit(ContentFit::Contain)
                    .into(),
                (key, _) => placeholder(
                    ctx.i18n.tr(key.unwrap_or("asset-loading")),
                    sizing::PLACEHOLDER_HEIGHT,
                ),
            }
        }
    }
}

fn back_link<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let label = ctx
        .i18n
        .tr_with_args("image-back-to-gallery", &[("gallery", ctx.gallery)]);

    button(Text::new(format!("← {label}")).size(typography::BODY))
        .padding(0.0)
        .style(styles::button::link)
        .on_press(back_message(ctx.gallery))
        .into()
}

fn back_message(gallery: &str) -> Message {
    Message::BackToGallery(gallery.to_string())
}
