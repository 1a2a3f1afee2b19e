//! Channel bridge from the cube observers to the host.
//!
//! Insert [`NotificationBridge`] once during setup (see
//! [`crate::game::setup_world`]). The forwarding observers in
//! [`crate::systems::notifications`] push a [`CubeNotification`] for every
//! cube event; a host that does not want to write observers drains
//! [`NotificationBridge::rx`] once per frame. The channel holds at most
//! [`NOTIFICATION_CAPACITY`] messages, so a host that never drains it only
//! loses the newest notifications.

use crate::events::cube::CubeNotification;
use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, bounded};

/// Messages kept until the host drains the channel.
pub const NOTIFICATION_CAPACITY: usize = 64;

/// Shared bridge between the ECS world and whoever listens to the cube.
#[derive(Resource)]
pub struct NotificationBridge {
    /// Sender for [`CubeNotification`] messages (ECS -> host).
    pub tx: Sender<CubeNotification>,
    /// Receiver the host polls.
    pub rx: Receiver<CubeNotification>,
}

impl Default for NotificationBridge {
    fn default() -> Self {
        let (tx, rx) = bounded::<CubeNotification>(NOTIFICATION_CAPACITY);
        NotificationBridge { tx, rx }
    }
}

impl NotificationBridge {
    /// Non-blocking: everything received since the last call.
    pub fn drain(&self) -> Vec<CubeNotification> {
        self.rx.try_iter().collect()
    }
}
