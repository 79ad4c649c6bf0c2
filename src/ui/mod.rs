/// View helpers for the hotel form
///
/// The drop zone and preview panel are plain functions returning
/// `Element`s so `main.rs` can compose them into the form column.

use iced::widget::{column, container, image, mouse_area, text};
use iced::{Alignment, Border, Color, Element, Length, Theme};

use crate::state::data::{Notice, NoticeKind};
use crate::Message;

/// Height of the preview region
const PREVIEW_HEIGHT: f32 = 192.0;

/// Click-or-drop target for the hotel image
///
/// Files are dropped onto the window as a whole, so `hovering` comes from
/// window events. The zone only changes its border to show it.
pub fn drop_zone<'a>(hovering: bool, selected: Option<&'a str>) -> Element<'a, Message> {
    let hint = match selected {
        Some(name) => format!("Selected: {}", name),
        None => "Upload a file or drag and drop".to_string(),
    };

    let content = column![
        text("⬆").size(36),
        text(hint).size(14),
        text("PNG, JPG, GIF up to 10MB").size(12),
    ]
    .spacing(6)
    .align_x(Alignment::Center);

    let zone = container(content)
        .width(Length::Fill)
        .padding(24)
        .center_x(Length::Fill)
        .style(move |theme: &Theme| {
            let palette = theme.extended_palette();
            let color = if hovering {
                palette.primary.strong.color
            } else {
                palette.background.strong.color
            };

            container::Style {
                border: Border {
                    color,
                    width: 2.0,
                    radius: 8.0.into(),
                },
                ..container::Style::default()
            }
        });

    mouse_area(zone).on_press(Message::PickImage).into()
}

/// Preview of the decoded image, if there is one
pub fn preview_panel<'a>(handle: Option<&image::Handle>) -> Option<Element<'a, Message>> {
    let handle = handle?.clone();

    Some(
        column![
            text("Preview").size(14),
            image(handle)
                .width(Length::Fill)
                .height(Length::Fixed(PREVIEW_HEIGHT)),
        ]
        .spacing(8)
        .into(),
    )
}

/// Status line under the submit button
pub fn notice_line(notice: Option<&Notice>) -> Element<'_, Message> {
    let Some(notice) = notice else {
        return text("").into();
    };

    let color = match notice.kind {
        NoticeKind::Info => Color::from_rgb(0.6, 0.6, 0.6),
        NoticeKind::Success => Color::from_rgb(0.3, 0.75, 0.4),
        NoticeKind::Error => Color::from_rgb(0.9, 0.35, 0.35),
    };

    text(notice.message.as_str()).size(14).color(color).into()
}
