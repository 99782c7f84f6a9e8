//! GUI state + messages.
//! Pure data definitions used by update.rs + view.rs.

use std::time::Instant;

use iced::Theme;

use crate::config::Settings;
use crate::core::playback::{AudioHandle, MediaPlayer, PlaybackToggle};
use crate::core::{Catalog, FadeIn, SectionId, SectionSelector, ThemeToggle, Visual};

/// App state
pub(crate) struct Encore {
    pub catalog: Catalog,
    pub selector: SectionSelector,
    pub theme: ThemeToggle,
    pub playback: PlaybackToggle,

    // Content fade
    pub fade: FadeIn,
    pub now: Instant,

    /// Last playback problem, shown under the header.
    pub status: Option<String>,
}

impl Encore {
    /// Mount: grabs the audio resource right away. It is given back when
    /// the state is dropped.
    pub(crate) fn new(settings: &Settings, catalog: Catalog, player: Box<dyn MediaPlayer>) -> Self {
        let now = Instant::now();
        let audio = AudioHandle::acquire(player, &settings.audio_path);

        Self {
            selector: SectionSelector::new(catalog.first()),
            catalog,
            theme: ThemeToggle::new(settings.start_dark),
            playback: PlaybackToggle::new(audio),
            fade: FadeIn::new(settings.fade, now),
            now,
            status: None,
        }
    }

    pub(crate) fn active(&self) -> SectionId {
        self.selector.active()
    }

    pub(crate) fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    pub(crate) fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    /// Fade state at the last observed frame.
    pub(crate) fn visual(&self) -> Visual {
        self.fade.visual(self.now)
    }

    pub(crate) fn theme(&self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// Message = "something happened".
#[derive(Debug, Clone)]
pub(crate) enum Message {
    // Navigation
    SelectSection(SectionId),

    // Toggles
    ToggleDarkMode,
    TogglePlayPause,

    // Timers
    TickPlayback,
    Frame(Instant),
}
