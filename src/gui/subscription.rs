//! gui/subscription.rs
//! - TickPlayback: poll the playback listener while the resource is held
//! - Frame: advance the content fade while it runs

use std::time::Duration;

use iced::{Subscription, time};

use super::state::{Encore, Message};

const PLAYBACK_POLL: Duration = Duration::from_millis(200);
const FRAME: Duration = Duration::from_millis(16);

pub(crate) fn subscription(state: &Encore) -> Subscription<Message> {
    let playback = if state.playback.is_attached() {
        time::every(PLAYBACK_POLL).map(|_| Message::TickPlayback)
    } else {
        Subscription::none()
    };

    let frames = if state.fade.is_animating(state.now) {
        time::every(FRAME).map(Message::Frame)
    } else {
        Subscription::none()
    };

    Subscription::batch([playback, frames])
}
