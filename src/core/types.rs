//! Core data types shared between core logic and the UI.
//!
//! Rule of thumb:
//! - These are "boring bags of data"
//! - No GUI code
//! - No audio code
//!
//! Everything here is `'static`: the panel's content is compiled in and never
//! changes while the app runs.

use std::fmt;
use std::str::FromStr;

use super::catalog::CatalogError;

/// Identifier of one sidebar section.
///
/// The set is closed: a section that isn't listed here cannot be selected,
/// so "dangling selection" is not representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    Overview,
    History,
    Songs,
    Style,
    Lyrics,
    Influence,
    Future,
}

impl SectionId {
    /// Declaration order. The sidebar renders in exactly this order.
    pub const ALL: [SectionId; 7] = [
        SectionId::Overview,
        SectionId::History,
        SectionId::Songs,
        SectionId::Style,
        SectionId::Lyrics,
        SectionId::Influence,
        SectionId::Future,
    ];

    /// Stable textual key (ex: "overview").
    pub fn key(self) -> &'static str {
        match self {
            SectionId::Overview => "overview",
            SectionId::History => "history",
            SectionId::Songs => "songs",
            SectionId::Style => "style",
            SectionId::Lyrics => "lyrics",
            SectionId::Influence => "influence",
            SectionId::Future => "future",
        }
    }

    /// Position in `ALL`.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SectionId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.key() == s)
            .ok_or_else(|| CatalogError::UnknownSection(s.to_string()))
    }
}

/// Opaque icon reference. The view decides how a glyph is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Music,
    History,
    Album,
    Mic,
    Star,
    TrendingUp,
    Moon,
    Sun,
    Play,
    Pause,
    ChevronRight,
}

/// One sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: SectionId,
    pub title: &'static str,
    pub icon: Glyph,
}

/// A `label: text` pair (a year and an event, a period and a style, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabeledText {
    pub label: &'static str,
    pub text: &'static str,
}

/// How a labeled list is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryLayout {
    /// `label: text` on one line.
    Inline,
    /// Label as a heading, text as a paragraph underneath.
    Stacked,
}

/// Body of a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentEntry {
    Paragraph(&'static str),
    Entries {
        layout: EntryLayout,
        items: &'static [LabeledText],
    },
}

impl ContentEntry {
    pub fn is_empty(&self) -> bool {
        match self {
            ContentEntry::Paragraph(text) => text.trim().is_empty(),
            ContentEntry::Entries { items, .. } => items.is_empty(),
        }
    }
}
