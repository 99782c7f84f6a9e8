//! gui/mod.rs
//!
//! This folder contains ONLY frontend concerns:
//! - app state ('Encore')
//! - messages ('Message')
//! - update logic ('update()')
//! - view layout ('view()')
//! - subscriptions (playback polling + fade frames)

pub(crate) mod state;
pub(crate) mod subscription;
pub(crate) mod update;
pub(crate) mod view;

// Re-export the entry points lib.rs needs.
pub(crate) use state::Encore;
pub(crate) use subscription::subscription;
pub(crate) use update::update;
pub(crate) use view::view;
