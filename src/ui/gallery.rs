// SPDX-License-Identifier: MPL-2.0
//! Gallery view: heading, a link back home and a grid of thumbnails.
//!
//! The grid adapts its column count to the available width. Thumbnails that
//! are still downloading, or failed to download, are drawn as placeholders of
//! the same size so the layout does not jump while assets arrive.

use crate::domain::gallery::GalleryImage;
use crate::i18n::fluent::I18n;
use crate::media::{AssetCache, AssetStatus};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image::Image, responsive, scrollable, Column, Container, Row, Text};
use iced::{alignment, ContentFit, Element, Length, Size};

/// Contextual data needed to render a gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub name: &'a str,
    pub images: &'a [GalleryImage],
    pub assets: &'a AssetCache,
    /// Edge length of one thumbnail cell, in pixels.
    pub thumbnail_size: f32,
}

/// Messages emitted by the gallery view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    GoHome,
    ViewImage {
        gallery: String,
        image: GalleryImage,
    },
}

/// Render the gallery.
#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let heading = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(ctx.name).size(typography::TITLE_LG))
        .push(
            Text::new(ctx.i18n.tr_count("gallery-image-count", "count", ctx.images.len()))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );

    let home_link = button(Text::new(ctx.i18n.tr("gallery-home-link")).size(typography::BODY))
        .padding(0.0)
        .style(styles::button::link)
        .on_press(Message::GoHome);

    let header = Column::new()
        .spacing(spacing::XS)
        .padding([spacing::MD, spacing::LG])
        .push(home_link)
        .push(heading);

    let body: Element<'_, Message> = if ctx.images.is_empty() {
        Container::new(
            Text::new(ctx.i18n.tr("gallery-empty"))
                .size(typography::BODY)
                .color(palette::GRAY_400),
        )
        .padding([0.0, spacing::LG])
        .into()
    } else {
        responsive(move |size: Size| grid(&ctx, size)).into()
    };

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(header)
        .push(body)
        .into()
}

fn grid<'a>(ctx: &ViewContext<'a>, available: Size) -> Element<'a, Message> {
    let columns = columns_for(available.width, ctx.thumbnail_size);
    let mut rows = Column::new().spacing(spacing::SM).padding([0.0, spacing::LG]);

    for chunk in grid_rows(ctx.images, columns) {
        let mut row = Row::new().spacing(spacing::SM);
        for image in chunk {
            row = row.push(thumbnail(ctx, image));
        }
        rows = rows.push(row);
    }

    scrollable(rows).width(Length::Fill).height(Length::Fill).into()
}

fn thumbnail<'a>(ctx: &ViewContext<'a>, image: &'a GalleryImage) -> Element<'a, Message> {
    let size = ctx.thumbnail_size;
    let status = ctx.assets.status(&image.thumbnail_asset());
    let content: Element<'a, Message> = match (placeholder_key(&status), status) {
        (None, AssetStatus::Loaded(handle)) => Image::new(handle)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .content_fit(ContentFit::Contain)
            .into(),
        (key, _) => placeholder(ctx.i18n.tr(key.unwrap_or("asset-loading")), size),
    };

    button(content)
        .padding(spacing::XXS)
        .style(styles::button::thumbnail)
        .on_press(open_image(ctx.name, image))
        .into()
}

/// Splits `images` into rows of `columns` cells. Every image lands in
/// exactly one cell, in gallery order.
#[must_use]
pub fn grid_rows(images: &[GalleryImage], columns: usize) -> Vec<&[GalleryImage]> {
    images.chunks(columns.max(1)).collect()
}

fn open_image(gallery: &str, image: &GalleryImage) -> Message {
    Message::ViewImage {
        gallery: gallery.to_string(),
        image: image.clone(),
    }
}

/// Translation key of the caption drawn instead of an asset, or `None` once
/// the asset can be drawn.
#[must_use]
pub fn placeholder_key(status: &AssetStatus) -> Option<&'static str> {
    match status {
        AssetStatus::Loaded(_) => None,
        AssetStatus::Failed => Some("asset-failed"),
        AssetStatus::Pending | AssetStatus::Unknown => Some("asset-loading"),
    }
}

/// A box of `size` pixels with a caption, used until an asset is drawable.
pub fn placeholder<'a, M: 'a>(caption: String, size: f32) -> Element<'a, M> {
    Container::new(Text::new(caption).size(typography::CAPTION))
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::placeholder)
        .into()
}

/// Number of thumbnail columns fitting in `width`. Always at least one.
fn columns_for(width: f32, thumbnail_size: f32) -> usize {
    // Cell = thumbnail + button padding on both sides.
    let cell = thumbnail_size + 2.0 * spacing::XXS;
    let usable = width - 2.0 * spacing::LG - sizing::SCROLLBAR_GUTTER + spacing::SM;
    if !usable.is_finite() || cell <= 0.0 {
        return 1;
    }
    ((usable / (cell + spacing::SM)).floor() as usize).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(n: u32) -> GalleryImage {
        GalleryImage {
            thumbnail_path: format!("thumbs/{n}.jpg"),
            webview_path: format!("web/{n}.jpg"),
            original_path: format!("/srv/{n}.jpg"),
        }
    }

    #[test]
    fn narrow_window_still_has_one_column() {
        assert_eq!(columns_for(10.0, 200.0), 1);
        assert_eq!(columns_for(0.0, 200.0), 1);
        assert_eq!(columns_for(f32::NAN, 200.0), 1);
    }

    #[test]
    fn wider_window_fits_more_columns() {
        let narrow = columns_for(800.0, 200.0);
        let wide = columns_for(1600.0, 200.0);
        assert!(wide > narrow);
    }

    #[test]
    fn smaller_thumbnails_fit_more_columns() {
        assert!(columns_for(1200.0, 64.0) > columns_for(1200.0, 200.0));
    }

    #[test]
    fn grid_rows_hold_every_image_once_in_order() {
        let images: Vec<GalleryImage> = (1..=7).map(image).collect();
        let rows = grid_rows(&images, 3);

        assert_eq!(rows.iter().map(|row| row.len()).collect::<Vec<_>>(), vec![3, 3, 1]);
        let flattened: Vec<&GalleryImage> = rows.iter().flat_map(|row| row.iter()).collect();
        assert_eq!(flattened, images.iter().collect::<Vec<_>>());
    }

    #[test]
    fn grid_rows_tolerate_zero_columns() {
        let images: Vec<GalleryImage> = (1..=2).map(image).collect();
        assert_eq!(grid_rows(&images, 0).len(), 2);
        assert!(grid_rows(&[], 4).is_empty());
    }

    #[test]
    fn thumbnail_opens_its_own_image() {
        let picked = image(4);
        assert_eq!(
            open_image("a", &picked),
            Message::ViewImage {
                gallery: "a".into(),
                image: picked.clone(),
            }
        );
    }

    #[test]
    fn placeholder_caption_follows_asset_status() {
        let handle = iced::widget::image::Handle::from_rgba(1, 1, vec![0; 4]);
        assert_eq!(placeholder_key(&AssetStatus::Loaded(handle)), None);
        assert_eq!(placeholder_key(&AssetStatus::Failed), Some("asset-failed"));
        assert_eq!(placeholder_key(&AssetStatus::Pending), Some("asset-loading"));
        assert_eq!(placeholder_key(&AssetStatus::Unknown), Some("asset-loading"));
    }

    #[test]
    fn gallery_view_renders_pending_thumbnails() {
        let i18n = I18n::default();
        let images = vec![image(1), image(2)];
        let assets = AssetCache::new(16);
        let _element = view(ViewContext {
            i18n: &i18n,
            name: "a",
            images: &images,
            assets: &assets,
            thumbnail_size: 200.0,
        });
    }

    #[test]
    fn gallery_view_renders_empty_gallery() {
        let i18n = I18n::default();
        let assets = AssetCache::new(16);
        let _element = view(ViewContext {
            i18n: &i18n,
            name: "empty",
            images: &[],
            assets: &assets,
            thumbnail_size: 200.0,
        });
    }
}
