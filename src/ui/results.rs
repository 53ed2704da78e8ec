//! Result presentation: the four analysis fields and the copy affordance.

use super::style;
use super::Message;
use crate::models::AnalysisResult;
use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Font, Length};
use iced_aw::Wrap;

pub fn view<'a>(result: &'a AnalysisResult, prompt_copied: bool) -> Element<'a, Message> {
    let heading = text("Analysis Results")
        .size(14)
        .color(style::text_muted());

    column![
        container(heading).center_x(Length::Fill),
        labeled_card("Artistic Style", result.artistic_style.as_str()),
        labeled_card("Composition & Technical", result.composition.as_str()),
        prompt_card(result, prompt_copied),
        keywords_card(&result.keywords),
    ]
    .spacing(18)
    .max_width(720)
    .width(Length::Fill)
    .into()
}

fn labeled_card<'a>(label: &'a str, value: &'a str) -> Element<'a, Message> {
    container(
        column![
            text(label).size(16).color(style::indigo_bright()),
            text(value).size(17),
        ]
        .spacing(6),
    )
    .padding(20)
    .width(Length::Fill)
    .style(style::card)
    .into()
}

fn prompt_card<'a>(result: &'a AnalysisResult, copied: bool) -> Element<'a, Message> {
    let copy_label = if copied { "Copied!" } else { "Copy Prompt" };
    let copy = button(text(copy_label).size(14))
        .padding([6, 14])
        .style(move |theme, status| style::copy_button(theme, status, copied))
        .on_press(Message::CopyPrompt);

    let header = row![
        text("Generation Prompt").size(16).color(style::emerald()),
        Space::with_width(Length::Fill),
        copy,
    ]
    .align_y(Alignment::Center);

    // Verbatim, whitespace-preserving prompt body.
    let body = container(text(result.prompt.as_str()).size(14).font(Font::MONOSPACE))
        .padding(16)
        .width(Length::Fill)
        .style(style::prompt_body);

    container(column![header, body].spacing(12))
        .padding(20)
        .width(Length::Fill)
        .style(style::card)
        .into()
}

fn keywords_card<'a>(keywords: &'a [String]) -> Element<'a, Message> {
    let tags = keywords
        .iter()
        .map(|keyword| {
            container(text(keyword.as_str()).size(14))
                .padding([5, 12])
                .style(style::keyword_tag)
                .into()
        })
        .collect::<Vec<Element<'a, Message>>>();

    container(
        column![
            text("Style Keywords").size(16).color(style::text_muted()),
            Wrap::with_elements(tags).spacing(8.0).line_spacing(8.0),
        ]
        .spacing(12),
    )
    .padding(20)
    .width(Length::Fill)
    .style(style::card)
    .into()
}
