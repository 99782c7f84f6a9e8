//! GUI renderer (reads state, produces widgets; no mutation).

mod constants;
mod content;
mod header;
mod sidebar;
pub(crate) mod style;
mod widgets;

use iced::widget::{column, container, row, scrollable};
use iced::{Element, Length};

use super::state::{Encore, Message};
use constants::{MAIN_PAD, SIDEBAR_W};
use style::Palette;

pub(crate) fn view(state: &Encore) -> Element<'_, Message> {
    let palette = Palette::for_mode(state.is_dark());

    let sidebar = sidebar::build_sidebar(state, palette).width(Length::Fixed(SIDEBAR_W));

    let main = column![
        header::build_header(state, palette),
        content::build_content(state, palette),
    ]
    .spacing(MAIN_PAD)
    .padding(MAIN_PAD)
    .width(Length::Fill);

    container(row![sidebar, scrollable(main).height(Length::Fill)].height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(style::page(palette))
        .into()
}
