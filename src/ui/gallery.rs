use iced::widget::{button, column, container, mouse_area, row, text, Space};
use iced::{Alignment, Border, Color, Element, Length};
use iced_aw::Wrap;

use super::asset_image;
use crate::state::catalog::Catalog;
use crate::state::data::{AssetRecord, ShowcaseItem, WorkGroup};
use crate::Message;

const CARD_SIZE: f32 = 320.0;
const THUMB_HEIGHT: f32 = 220.0;

fn panel_style(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(Color::from_rgba(1.0, 1.0, 1.0, 0.05).into()),
        border: Border {
            color: Color::from_rgba(1.0, 1.0, 1.0, 0.1),
            width: 1.0,
            radius: 16.0.into(),
        },
        ..container::Style::default()
    }
}

fn badge(label: &str) -> Element<'_, Message> {
    container(text(label).size(14))
        .padding([4, 12])
        .style(|_theme| container::Style {
            background: Some(Color::from_rgba(1.0, 1.0, 1.0, 0.1).into()),
            border: Border {
                color: Color::from_rgba(1.0, 1.0, 1.0, 0.2),
                width: 1.0,
                radius: 999.0.into(),
            },
            ..container::Style::default()
        })
        .into()
}

/// One clickable card of the Designs grid
fn card(item: &ShowcaseItem) -> Element<'_, Message> {
    let mut caption = column![badge(item.category)].spacing(6);
    if let Some(title) = item.card_title() {
        caption = caption.push(text(title).size(20));
    }
    if let Some(hint) = item.count_hint() {
        caption = caption.push(text(hint).size(13).color(Color::from_rgb(0.8, 0.8, 0.8)));
    }

    let body = column![
        asset_image(&item.cover_image, item.title, CARD_SIZE - 110.0),
        caption,
    ]
    .spacing(12)
    .padding(12);

    let tile = container(body)
        .width(Length::Fixed(CARD_SIZE))
        .height(Length::Fixed(CARD_SIZE))
        .style(panel_style);

    container(mouse_area(tile).on_press(Message::SelectWork(item.id)))
        .padding(12)
        .into()
}

/// The Designs grid, without hidden categories
pub fn grid(catalog: &Catalog) -> Element<'_, Message> {
    let cards: Vec<Element<'_, Message>> = catalog.listed_items().map(card).collect();
    container(Wrap::with_elements(cards))
        .center_x(Length::Fill)
        .into()
}

fn thumbnails<'a>(works: &'a [AssetRecord], current: Option<&'a AssetRecord>) -> Element<'a, Message> {
    let tiles: Vec<Element<'a, Message>> = works
        .iter()
        .map(|work| {
            let highlighted = current == Some(work);
            let tile = container(asset_image(&work.image, &work.title, THUMB_HEIGHT))
                .width(Length::Fixed(200.0))
                .padding(6)
                .style(move |theme| {
                    let mut style = panel_style(theme);
                    if highlighted {
                        style.border.color = Color::from_rgba(1.0, 1.0, 1.0, 0.6);
                    }
                    style
                });
            container(tile).padding(6).into()
        })
        .collect();
    Wrap::with_elements(tiles).into()
}

fn section<'a>(group: &'a WorkGroup, current: Option<&'a AssetRecord>) -> Element<'a, Message> {
    column![text(group.name).size(20), thumbnails(&group.works, current)]
        .spacing(10)
        .into()
}

/// Detail overlay for the selected item, `index` is the current work
pub fn detail(item: &ShowcaseItem, index: usize) -> Element<'_, Message> {
    let current = item.past_works.get(index);

    let header = row![
        badge(item.category),
        Space::with_width(Length::Fill),
        text(item.title).size(24),
        button(text("✕")).on_press(Message::CloseGallery).padding(8),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let mut content = column![
        header,
        text(item.description).size(14).color(Color::from_rgb(0.7, 0.7, 0.75)),
    ]
    .spacing(20);

    if let Some(work) = current {
        let mut info = column![text(&work.title).size(20)].spacing(6);
        if let Some(description) = &work.description {
            info = info.push(text(description).size(14).color(Color::from_rgb(0.7, 0.7, 0.75)));
        }
        if let Some(details) = &work.details {
            info = info.push(text(details).size(13).color(Color::from_rgb(0.6, 0.6, 0.65)));
        }

        let pager = row![
            button(text("‹ Prev")).on_press_maybe((index > 0).then_some(Message::PrevImage)),
            text(format!("{} / {}", index + 1, item.past_works.len())).size(14),
            button(text("Next ›")).on_press_maybe(
                (index + 1 < item.past_works.len()).then_some(Message::NextImage)
            ),
        ]
        .spacing(16)
        .align_y(Alignment::Center);

        content = content
            .push(asset_image(&work.image, &work.title, 360.0))
            .push(pager)
            .push(info);
    } else {
        content = content.push(text("Nothing here yet.").size(16));
    }

    if item.sections.is_empty() {
        content = content.push(thumbnails(&item.past_works, current));
    } else {
        for group in &item.sections {
            content = content.push(section(group, current));
        }
    }

    container(iced::widget::scrollable(content.padding(24)))
        .max_width(900)
        .max_height(820)
        .style(|theme| {
            let mut style = panel_style(theme);
            style.background = Some(Color::from_rgba(0.0, 0.0, 0.0, 0.75).into());
            style
        })
        .into()
}
