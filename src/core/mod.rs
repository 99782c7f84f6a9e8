//! core/mod.rs
//!
//! Everything that isn't drawing:
//! - the static content table (`catalog`, `types`)
//! - the three bits of UI state (`selector`, `theme`, `playback`)
//! - the fade timing (`transition`)
//!
//! No Iced imports in here; `gui` reads these and turns them into widgets.

pub mod catalog;
pub mod playback;
pub mod selector;
pub mod theme;
pub mod transition;
pub mod types;

pub use catalog::{Catalog, CatalogError, SUBJECT};
pub use selector::SectionSelector;
pub use theme::ThemeToggle;
pub use transition::{FadeIn, Visual};
pub use types::{ContentEntry, EntryLayout, Glyph, LabeledText, Section, SectionId};
