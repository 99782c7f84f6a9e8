//! Content panel: one catalog entry, faded in.
//!
//! Dispatch is a single match on the entry's shape; the fade only changes
//! alpha and top padding, never layout of the entry itself.

use iced::widget::{Column, Container, column, container, row, text};
use iced::{Color, Element, Length, Padding};

use super::super::state::{Encore, Message};
use super::constants::{BLOCK_SPACING, BODY_LINE_HEIGHT, BODY_TEXT, HEADING_TEXT, LIST_SPACING};
use super::style::{Palette, faded};
use super::widgets::BOLD;
use crate::core::{ContentEntry, EntryLayout, LabeledText};

pub(crate) fn build_content(state: &Encore, palette: Palette) -> Container<'_, Message> {
    let visual = state.visual();
    let body_color = faded(palette.page_text, visual.opacity);
    let label_color = faded(palette.label, visual.opacity);

    let body: Element<'_, Message> = match state.catalog.entry(state.active()) {
        ContentEntry::Paragraph(paragraph) => text(*paragraph)
            .size(BODY_TEXT)
            .line_height(BODY_LINE_HEIGHT)
            .color(body_color)
            .into(),
        ContentEntry::Entries {
            layout: EntryLayout::Inline,
            items,
        } => inline_list(items, body_color, label_color).into(),
        ContentEntry::Entries {
            layout: EntryLayout::Stacked,
            items,
        } => stacked_blocks(items, body_color, label_color).into(),
    };

    container(body).width(Length::Fill).padding(Padding {
        top: visual.offset_y,
        ..Padding::ZERO
    })
}

/// `label: text` per line.
fn inline_list(
    items: &'static [LabeledText],
    body: Color,
    label: Color,
) -> Column<'static, Message> {
    Column::with_children(items.iter().map(|item| {
        row![
            text(format!("{}:", item.label)).font(BOLD).color(label),
            text(item.text).color(body).width(Length::Fill),
        ]
        .spacing(LIST_SPACING)
        .into()
    }))
    .spacing(LIST_SPACING)
}

/// Heading line, then the paragraph under it.
fn stacked_blocks(
    items: &'static [LabeledText],
    body: Color,
    label: Color,
) -> Column<'static, Message> {
    Column::with_children(items.iter().map(|item| {
        column![
            text(format!("{}:", item.label))
                .size(HEADING_TEXT)
                .font(BOLD)
                .color(label),
            text(item.text).color(body),
        ]
        .spacing(LIST_SPACING)
        .into()
    }))
    .spacing(BLOCK_SPACING)
}
