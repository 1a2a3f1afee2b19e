//! Cube notifications for external observers.
//!
//! [`CubeChangedEvent`] and [`CubeSolvedEvent`] are triggered by the move
//! sequencer. Hosts can react with regular observers:
//!
//! ```ignore
//! world.add_observer(|trigger: On<CubeChangedEvent>| {
//!     println!("moves: {}", trigger.event().steps);
//! });
//! ```
//!
//! or poll the [`NotificationBridge`](crate::resources::notifications::NotificationBridge)
//! channel, which receives a [`CubeNotification`] for each of these events.

use bevy_ecs::prelude::*;

/// The move counter changed: emitted on build, when a scramble starts and
/// after every completed interactive move.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CubeChangedEvent {
    /// Moves made since the last build or scramble.
    pub steps: u32,
}

/// An interactive move just left the cube solved.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CubeSolvedEvent {}

/// Channel-friendly copy of the cube events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CubeNotification {
    Changed { steps: u32 },
    Solved,
}
