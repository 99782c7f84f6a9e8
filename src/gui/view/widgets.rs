//! Reusable small widgets/helpers used across view modules.

use iced::widget::{Text, button, text, tooltip};
use iced::{Element, Font, Theme, font};

use super::super::state::Message;
use super::constants::{ICON, ROUND_BTN_PAD};
use crate::core::Glyph;

pub(crate) const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

/// Unicode stand-in for each icon.
pub(crate) fn glyph_symbol(glyph: Glyph) -> &'static str {
    match glyph {
        Glyph::Music => "♫",
        Glyph::History => "↺",
        Glyph::Album => "◉",
        Glyph::Mic => "♪",
        Glyph::Star => "★",
        Glyph::TrendingUp => "↗",
        Glyph::Moon => "☾",
        Glyph::Sun => "☀",
        Glyph::Play => "▶",
        Glyph::Pause => "❚❚",
        Glyph::ChevronRight => "›",
    }
}

pub(crate) fn icon<'a>(glyph: Glyph) -> Text<'a> {
    text(glyph_symbol(glyph)).size(ICON)
}

/// Round icon button with a hover label (the only labeling iced gives us).
pub(crate) fn round_button<'a>(
    glyph: Glyph,
    label: &'static str,
    on_press: Message,
    style: impl Fn(&Theme, button::Status) -> button::Style + 'a,
) -> Element<'a, Message> {
    let btn = button(icon(glyph))
        .on_press(on_press)
        .padding(ROUND_BTN_PAD)
        .style(style);

    tooltip(btn, text(label).size(12), tooltip::Position::Bottom).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_glyph_has_a_symbol() {
        let all = [
            Glyph::Music,
            Glyph::History,
            Glyph::Album,
            Glyph::Mic,
            Glyph::Star,
            Glyph::TrendingUp,
            Glyph::Moon,
            Glyph::Sun,
            Glyph::Play,
            Glyph::Pause,
            Glyph::ChevronRight,
        ];
        for glyph in all {
            assert!(!glyph_symbol(glyph).is_empty(), "{glyph:?}");
        }
    }
}
