/// User interface module
///
/// Views for the three page sections and the canvas programs behind the
/// tilt demos. Everything here reads from the state module and emits
/// `Message`s; no view owns data.

pub mod gallery;
pub mod music;
pub mod tilt_card;

use iced::widget::{container, image, text};
use iced::{Color, ContentFit, Element, Length};
use std::path::Path;

use crate::Message;

/// Draw an image reference, or a titled placeholder when it can't be loaded
///
/// Remote references and missing files both take the placeholder.
pub fn asset_image<'a>(reference: &str, title: &'a str, height: f32) -> Element<'a, Message> {
    let local = Path::new(reference);
    if !reference.contains("://") && local.is_file() {
        return image(image::Handle::from_path(local))
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .content_fit(ContentFit::Contain)
            .into();
    }

    container(text(title).size(14).color(Color::from_rgb(0.75, 0.75, 0.8)))
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(height))
        .style(|_theme| container::Style {
            background: Some(Color::from_rgba(1.0, 1.0, 1.0, 0.05).into()),
            ..container::Style::default()
        })
        .into()
}

/// Section heading with a short blurb underneath
pub fn section_header<'a>(title: &'a str, blurb: &'a str) -> Element<'a, Message> {
    iced::widget::column![
        text(title).size(36),
        text(blurb).size(16).color(Color::from_rgb(0.6, 0.6, 0.65)),
    ]
    .spacing(12)
    .align_x(iced::Alignment::Center)
    .width(Length::Fill)
    .into()
}
