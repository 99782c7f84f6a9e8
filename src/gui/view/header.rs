//! Page header: title, play/pause, theme switch, and the playback status line.

use iced::widget::{Column, column, row, text};
use iced::{Alignment, Length};

use super::super::state::{Encore, Message};
use super::constants::{HEADER_TITLE, STATUS_TEXT};
use super::style::{self, Palette};
use super::widgets::{BOLD, round_button};
use crate::core::{Glyph, SUBJECT};

pub(crate) fn build_header(state: &Encore, palette: Palette) -> Column<'_, Message> {
    let (play_glyph, play_label) = if state.is_playing() {
        (Glyph::Pause, "Pause")
    } else {
        (Glyph::Play, "Play")
    };

    let (theme_glyph, theme_label) = if state.is_dark() {
        (Glyph::Sun, "Light mode")
    } else {
        (Glyph::Moon, "Dark mode")
    };

    let controls = row![
        round_button(
            play_glyph,
            play_label,
            Message::TogglePlayPause,
            style::accent_button(palette),
        ),
        round_button(
            theme_glyph,
            theme_label,
            Message::ToggleDarkMode,
            style::toggle_button(palette),
        ),
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    let title = text(SUBJECT)
        .size(HEADER_TITLE)
        .font(BOLD)
        .width(Length::Fill);

    let mut col = column![row![title, controls].align_y(Alignment::Center)].spacing(8);

    if let Some(status) = &state.status {
        col = col.push(
            text(status.as_str())
                .size(STATUS_TEXT)
                .color(palette.error),
        );
    }

    col
}
