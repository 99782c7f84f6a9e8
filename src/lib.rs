//! Encore
//!
//! A small desktop panel (built with `iced`) about Mr.Children: a sidebar of
//! sections, a content panel that fades in on every section change, a dark
//! mode switch and a play/pause button for one sample track (played with
//! `rodio`).
//!
//! # How the app is wired
//! - `Encore` = the whole app state (selection, theme, playback, fade)
//! - `Message` = "something happened" (click, playback tick, animation frame)
//! - `update(state, message)` changes state
//! - `view(state)` draws from state
//!
//! # Layout
//! - `core`: content table + state machines, no GUI imports
//! - `gui`: state, messages, update, view, subscriptions
//! - `config`: CLI flags + optional `settings.toml`

pub mod config;
pub mod core;
pub mod error;
mod gui;

use iced::{Size, window};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Settings;
use crate::core::playback::start_playback;
use crate::core::{Catalog, SUBJECT};
use crate::gui::Encore;

pub use error::{Error, Result};

const DEFAULT_LOG_FILTER: &str = "encore=info,warn";

/// Install the global tracing subscriber.
///
/// An explicit `filter` wins over `RUST_LOG`; without either we log our own
/// crate at info and everything else at warn.
pub fn init_logging(filter: Option<&str>) {
    let filter = match filter {
        Some(f) => EnvFilter::new(f),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

/// Validate the content table and run the window until it closes.
pub fn run(settings: Settings) -> Result<()> {
    // Fail fast: a broken table never reaches the screen.
    let catalog = Catalog::builtin()?;

    tracing::info!(
        audio = %settings.audio_path.display(),
        dark = settings.start_dark,
        "starting"
    );

    let window = window::Settings {
        size: Size::new(settings.window_size.0, settings.window_size.1),
        ..window::Settings::default()
    };

    let boot = move || Encore::new(&settings, catalog.clone(), Box::new(start_playback()));

    iced::application(boot, gui::update, gui::view)
        .title(SUBJECT)
        .theme(Encore::theme)
        .subscription(gui::subscription)
        .window(window)
        .run()?;

    tracing::info!("window closed");
    Ok(())
}
