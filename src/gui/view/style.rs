//! Light/dark palettes and the widget styles built from them.
//!
//! Style functions return closures so views can pass them straight to
//! `.style(...)`.

use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

use super::super::state::Encore;
use crate::core::SectionId;

const RADIUS: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Palette {
    pub page_bg: Color,
    pub page_text: Color,

    pub sidebar_bg: Color,
    pub item_text: Color,
    pub item_hover_bg: Color,

    pub accent: Color,
    pub accent_hover: Color,
    pub on_accent: Color,
    pub label: Color,

    pub toggle_bg: Color,
    pub toggle_hover_bg: Color,
    pub toggle_text: Color,

    pub error: Color,
}

impl Palette {
    pub(crate) fn light() -> Self {
        Self {
            page_bg: Color::from_rgb8(0xf3, 0xf4, 0xf6),
            page_text: Color::from_rgb8(0x11, 0x18, 0x27),

            sidebar_bg: Color::WHITE,
            item_text: Color::from_rgb8(0x4b, 0x55, 0x63),
            item_hover_bg: Color::from_rgb8(0xf3, 0xf4, 0xf6),

            accent: Color::from_rgb8(0xec, 0x48, 0x99),
            accent_hover: Color::from_rgb8(0xdb, 0x27, 0x77),
            on_accent: Color::WHITE,
            label: Color::from_rgb8(0xdb, 0x27, 0x77),

            toggle_bg: Color::from_rgb8(0xe5, 0xe7, 0xeb),
            toggle_hover_bg: Color::from_rgb8(0xd1, 0xd5, 0xdb),
            toggle_text: Color::from_rgb8(0x1f, 0x29, 0x37),

            error: Color::from_rgb8(0xdc, 0x26, 0x26),
        }
    }

    pub(crate) fn dark() -> Self {
        Self {
            page_bg: Color::from_rgb8(0x11, 0x18, 0x27),
            page_text: Color::WHITE,

            sidebar_bg: Color::from_rgb8(0x1f, 0x29, 0x37),
            item_text: Color::from_rgb8(0xd1, 0xd5, 0xdb),
            item_hover_bg: Color::from_rgb8(0x37, 0x41, 0x51),

            accent: Color::from_rgb8(0xec, 0x48, 0x99),
            accent_hover: Color::from_rgb8(0xdb, 0x27, 0x77),
            on_accent: Color::WHITE,
            label: Color::from_rgb8(0xf9, 0xa8, 0xd4),

            toggle_bg: Color::from_rgb8(0x37, 0x41, 0x51),
            toggle_hover_bg: Color::from_rgb8(0x4b, 0x55, 0x63),
            toggle_text: Color::WHITE,

            error: Color::from_rgb8(0xf8, 0x71, 0x71),
        }
    }

    pub(crate) fn for_mode(dark: bool) -> Self {
        if dark { Self::dark() } else { Self::light() }
    }
}

/// Scale a color's alpha (used by the content fade).
pub(crate) fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity,
        ..color
    }
}

/// Which look a sidebar entry gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ItemVariant {
    Active,
    Inactive { dark: bool },
}

pub(crate) fn item_variant(state: &Encore, id: SectionId) -> ItemVariant {
    if state.selector.is_active(id) {
        ItemVariant::Active
    } else {
        ItemVariant::Inactive {
            dark: state.is_dark(),
        }
    }
}

pub(crate) fn page(palette: Palette) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(palette.page_bg)),
        text_color: Some(palette.page_text),
        ..container::Style::default()
    }
}

pub(crate) fn sidebar(palette: Palette) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(palette.sidebar_bg)),
        text_color: Some(palette.page_text),
        ..container::Style::default()
    }
}

/// The variant alone decides the look: active entries are accent-filled in
/// both themes, inactive ones follow the theme.
pub(crate) fn sidebar_item(variant: ItemVariant) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (background, text_color) = match variant {
            ItemVariant::Active => {
                let palette = Palette::light();
                (Some(palette.accent), palette.on_accent)
            }
            ItemVariant::Inactive { dark } => {
                let palette = Palette::for_mode(dark);
                match status {
                    button::Status::Hovered | button::Status::Pressed => {
                        (Some(palette.item_hover_bg), palette.item_text)
                    }
                    _ => (None, palette.item_text),
                }
            }
        };

        button::Style {
            background: background.map(Background::Color),
            text_color,
            border: rounded(),
            ..button::Style::default()
        }
    }
}

/// Pink round button (play/pause).
pub(crate) fn accent_button(palette: Palette) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => palette.accent_hover,
            _ => palette.accent,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: palette.on_accent,
            border: round(),
            ..button::Style::default()
        }
    }
}

/// Neutral round button (theme switch).
pub(crate) fn toggle_button(palette: Palette) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => palette.toggle_hover_bg,
            _ => palette.toggle_bg,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: palette.toggle_text,
            border: round(),
            ..button::Style::default()
        }
    }
}

fn rounded() -> Border {
    Border {
        radius: RADIUS.into(),
        ..Border::default()
    }
}

fn round() -> Border {
    Border {
        radius: 999.0_f32.into(),
        ..Border::default()
    }
}
