/// Preview modal
///
/// Drawn on top of the table while a record is selected. Clicking the
/// backdrop or the Close button dismisses it.

use iced::widget::image::Handle;
use iced::widget::{
    button, center, column, container, horizontal_space, mouse_area, opaque, row, stack, text,
    Column,
};
use iced::{Alignment, Color, Element, Length};

use crate::blob::Blob;
use crate::preview::renderer::{renderer_for, Renderer};
use crate::state::data::SelectedPreview;
use crate::Message;

/// Decode state of the image shown in the modal
#[derive(Debug, Clone)]
pub enum ImageState {
    Loading,
    Ready(Handle),
    Failed(String),
}

/// Wrap `base` with the modal for `selected`
pub fn overlay<'a>(
    base: Element<'a, Message>,
    selected: &'a SelectedPreview,
    blob: Option<&'a Blob>,
    image: Option<&'a ImageState>,
) -> Element<'a, Message> {
    let title = row![
        text(&selected.name).size(20),
        horizontal_space(),
        button("Close").on_press(Message::ClosePreview),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let dialog = container(column![title, body(selected, blob, image)].spacing(16))
        .padding(20)
        .max_width(960)
        .style(container::rounded_box);

    let backdrop = center(opaque(dialog)).style(|_theme| container::Style {
        background: Some(
            Color {
                a: 0.8,
                ..Color::BLACK
            }
            .into(),
        ),
        ..container::Style::default()
    });

    stack![base, opaque(mouse_area(backdrop).on_press(Message::ClosePreview))].into()
}

/// Modal content picked by MIME type; empty when no renderer matches
fn body<'a>(
    selected: &'a SelectedPreview,
    blob: Option<&'a Blob>,
    image: Option<&'a ImageState>,
) -> Element<'a, Message> {
    match renderer_for(&selected.mime_type) {
        Some(Renderer::Image) => match image {
            Some(ImageState::Ready(handle)) => iced::widget::image(handle.clone())
                .width(Length::Fill)
                .into(),
            Some(ImageState::Failed(reason)) => {
                text(format!("Cannot display image: {}", reason)).into()
            }
            Some(ImageState::Loading) | None => text("Loading preview...").into(),
        },
        Some(Renderer::Audio) => media_card("🎵 Audio", selected, blob),
        Some(Renderer::Video) => media_card("🎬 Video", selected, blob),
        None => Column::new().into(),
    }
}

/// Audio and video get a details card; there is no in-window player
fn media_card<'a>(
    label: &'a str,
    selected: &'a SelectedPreview,
    blob: Option<&'a Blob>,
) -> Element<'a, Message> {
    let size = blob
        .map(|b| format_size(b.len()))
        .unwrap_or_else(|| "unknown".to_string());

    column![
        text(label).size(18),
        text(format!("Type: {}", selected.mime_type)),
        text(format!("Size: {}", size)),
        text(&selected.url).size(13),
        button("Copy URL").on_press(Message::CopyUrl(selected.url.clone())),
    ]
    .spacing(8)
    .into()
}

/// Human-readable byte count
pub fn format_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;

    let bytes_f = bytes as f64;
    if bytes_f >= GB {
        format!("{:.1} GB", bytes_f / GB)
    } else if bytes_f >= MB {
        format!("{:.1} MB", bytes_f / MB)
    } else if bytes_f >= KB {
        format!("{:.1} KB", bytes_f / KB)
    } else {
        format!("{} B", bytes)
    }
}
