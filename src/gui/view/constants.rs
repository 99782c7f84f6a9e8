//! View constants (layout/sizing).

pub(crate) const SIDEBAR_W: f32 = 256.0;
pub(crate) const SIDEBAR_PAD: f32 = 16.0;
pub(crate) const SIDEBAR_TITLE: f32 = 20.0;
pub(crate) const ITEM_PAD: f32 = 8.0;
pub(crate) const ITEM_SPACING: f32 = 4.0;

pub(crate) const MAIN_PAD: f32 = 32.0;
pub(crate) const HEADER_TITLE: f32 = 36.0;
pub(crate) const STATUS_TEXT: f32 = 12.0;

pub(crate) const ICON: f32 = 20.0;
pub(crate) const ROUND_BTN_PAD: f32 = 8.0;

pub(crate) const BODY_TEXT: f32 = 16.0;
pub(crate) const BODY_LINE_HEIGHT: f32 = 1.6;
pub(crate) const HEADING_TEXT: f32 = 18.0;
pub(crate) const LIST_SPACING: f32 = 8.0;
pub(crate) const BLOCK_SPACING: f32 = 16.0;
