//! Cube systems and observers.
//!
//! This module groups all ECS systems that advance the puzzle, plus the
//! observers that react to its events.
//!
//! Submodules overview
//! - [`build`] – surface cell layout and the rebuild observer
//! - [`gesture`] – drag-to-turn mapping and the per-frame gesture driver
//! - [`group`] – co-planar layer selection
//! - [`input`] – read the mouse and keyboard through Raylib (`render` feature)
//! - [`moves`] – move requests, turn start and completion
//! - [`notifications`] – forward cube events to the channel bridge
//! - [`render`] – draw the cube and HUD using Raylib (`render` feature)
//! - [`scramble`] – random turn chains
//! - [`signals`] – mirror the cube state into world signals
//! - [`solved`] – solved-state detection
//! - [`time`] – update simulation time and delta
//! - [`tween`] – play layer turns and scale animations

pub mod build;
pub mod gesture;
pub mod group;
#[cfg(feature = "render")]
pub mod input;
pub mod moves;
pub mod notifications;
#[cfg(feature = "render")]
pub mod render;
pub mod scramble;
pub mod signals;
pub mod solved;
pub mod time;
pub mod tween;
