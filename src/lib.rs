//! Rubik's Cube gameplay plugin.
//!
//! This crate exposes the puzzle's ECS components, resources, systems, and
//! events so a host engine built on `bevy_ecs` can embed it, and so the
//! integration tests can drive it without a window.
//!
//! The host calls [`game::setup_world`] once, then every frame fills
//! [`resources::input::PointerState`], calls
//! [`systems::time::update_world_time`] and runs the schedule returned by
//! [`game::build_update_schedule`].

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
