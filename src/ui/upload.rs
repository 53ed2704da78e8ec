//! Upload zone: drop target, preview, and remove affordance.

use super::style;
use super::Message;
use crate::models::SelectedImage;
use iced::widget::{button, column, container, image as image_widget, row, text, Space};
use iced::{Alignment, Element, Length};

/// Preview of the current selection with its remove button, or the empty
/// drop target when nothing is selected.
pub fn view<'a>(
    selected: Option<&'a SelectedImage>,
    preview: Option<&'a image_widget::Handle>,
    loading: bool,
    drop_hover: bool,
) -> Element<'a, Message> {
    match (selected, preview) {
        (Some(image), Some(handle)) => selected_view(image, handle, loading),
        _ => empty_view(loading, drop_hover),
    }
}

fn selected_view<'a>(
    image: &'a SelectedImage,
    handle: &'a image_widget::Handle,
    loading: bool,
) -> Element<'a, Message> {
    let preview = container(
        image_widget(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(360.0)),
    )
    .padding(8)
    .style(style::card);

    let mut caption = row![
        text(image.file_name.as_str()).size(14).color(style::text_muted()),
        Space::with_width(Length::Fill),
    ]
    .align_y(Alignment::Center)
    .spacing(12);

    // Removal is disabled while an analysis is in flight.
    if !loading {
        caption = caption.push(
            button(text("Remove").size(14))
                .padding([6, 14])
                .style(style::remove_button)
                .on_press(Message::RemoveImage),
        );
    }

    container(column![preview, caption].spacing(10))
        .max_width(560)
        .width(Length::Fill)
        .into()
}

fn empty_view<'a>(loading: bool, drop_hover: bool) -> Element<'a, Message> {
    let browse = button(text("Browse Files").size(16))
        .padding([10, 24])
        .style(style::primary_button)
        .on_press_maybe((!loading).then_some(Message::OpenFilePicker));

    let inner = column![
        text("Drag and drop an image here").size(18),
        text("JPEG, PNG, WEBP, GIF, or BMP").size(14).color(style::text_muted()),
        browse,
    ]
    .spacing(14)
    .align_x(Alignment::Center);

    container(inner)
        .padding(48)
        .max_width(560)
        .width(Length::Fill)
        .align_x(Alignment::Center)
        .style(move |theme| style::drop_zone(theme, drop_hover))
        .into()
}
