//! Forward cube events to the [`NotificationBridge`] channel.
//!
//! Registered by [`crate::game::setup_world`]. Sending never blocks; a full
//! or disconnected channel only drops the notification.

use crate::events::cube::{CubeChangedEvent, CubeNotification, CubeSolvedEvent};
use crate::resources::notifications::NotificationBridge;
use bevy_ecs::prelude::*;
use log::debug;

pub fn forward_cube_changed(trigger: On<CubeChangedEvent>, bridge: Res<NotificationBridge>) {
    let steps = trigger.event().steps;
    if bridge.tx.try_send(CubeNotification::Changed { steps }).is_err() {
        debug!("Dropped cube changed notification ({} steps)", steps);
    }
}

pub fn forward_cube_solved(_trigger: On<CubeSolvedEvent>, bridge: Res<NotificationBridge>) {
    if bridge.tx.try_send(CubeNotification::Solved).is_err() {
        debug!("Dropped cube solved notification");
    }
}
