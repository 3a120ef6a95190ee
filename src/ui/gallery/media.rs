// SPDX-License-Identifier: MPL-2.0
//! Cached image rendering with placeholders.

use crate::gallery::Message;
use crate::media::{ImageCache, ImageState};
use crate::ui::design_tokens::typography;
use crate::ui::styles;
use iced::widget::{container, image, text};
use iced::{ContentFit, Element, Length};

/// Image for `uri` filling the width at `height`.
///
/// While loading an ellipsis is drawn; a failed image shows `alt` instead.
pub fn view<'a>(
    images: &ImageCache,
    uri: &str,
    height: f32,
    alt: String,
) -> Element<'a, Message> {
    match images.get(uri) {
        Some(ImageState::Ready(handle)) => image(handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .into(),
        Some(ImageState::Failed) => placeholder(format!("⚠ {alt}"), height),
        Some(ImageState::Loading) | None => placeholder("…".to_string(), height),
    }
}

fn placeholder<'a>(label: String, height: f32) -> Element<'a, Message> {
    container(text(label).size(typography::CAPTION))
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(height))
        .style(styles::container::media_placeholder)
        .into()
}
