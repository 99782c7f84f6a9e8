//! Left sidebar: subject heading + one button per section.

use iced::widget::{Container, button, column, container, row, scrollable, text};
use iced::{Alignment, Length};

use super::super::state::{Encore, Message};
use super::constants::{ITEM_PAD, ITEM_SPACING, SIDEBAR_PAD, SIDEBAR_TITLE};
use super::style::{self, ItemVariant, Palette};
use super::widgets::{BOLD, icon};
use crate::core::{Glyph, SUBJECT};

pub(crate) fn build_sidebar(state: &Encore, palette: Palette) -> Container<'_, Message> {
    let mut menu = column![].spacing(ITEM_SPACING);

    for section in state.catalog.sections() {
        let variant = style::item_variant(state, section.id);

        let mut label = row![icon(section.icon), text(section.title).width(Length::Fill)]
            .spacing(8)
            .align_y(Alignment::Center);
        if variant == ItemVariant::Active {
            label = label.push(icon(Glyph::ChevronRight));
        }

        menu = menu.push(
            button(label)
                .on_press(Message::SelectSection(section.id))
                .width(Length::Fill)
                .padding(ITEM_PAD)
                .style(style::sidebar_item(variant)),
        );
    }

    let col = column![text(SUBJECT).size(SIDEBAR_TITLE).font(BOLD), menu].spacing(16);

    container(scrollable(col).height(Length::Fill))
        .padding(SIDEBAR_PAD)
        .height(Length::Fill)
        .style(style::sidebar(palette))
}
