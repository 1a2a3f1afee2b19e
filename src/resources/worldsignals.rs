//! Global signal storage resource.
//!
//! The [`WorldSignals`] resource mirrors the cube state into a flat,
//! string-keyed map so HUDs and host scripts can read it without knowing
//! the plugin's types. It is refreshed every tick by
//! [`publish_cube_signals`](crate::systems::signals::publish_cube_signals).
//!
//! Keys written by the plugin:
//! - integers: `"steps"`, `"size"`, `"scramble_remaining"`
//! - flags: `"solved"`, `"animating"`, `"scrambling"`

use bevy_ecs::prelude::Resource;
use rustc_hash::{FxHashMap, FxHashSet};

/// Global signal storage for cross-system communication.
#[derive(Debug, Clone, Resource, Default)]
pub struct WorldSignals {
    /// Integer numeric signals addressed by string keys.
    pub integers: FxHashMap<String, i32>,
    /// Presence-only boolean flags; a key being present means "true".
    pub flags: FxHashSet<String>,
}

impl WorldSignals {
    /// Set an integer signal value.
    pub fn set_integer(&mut self, key: impl Into<String>, value: i32) {
        self.integers.insert(key.into(), value);
    }
    /// Get an integer signal by key.
    pub fn get_integer(&self, key: &str) -> Option<i32> {
        self.integers.get(key).copied()
    }
    /// Set or clear a flag from a boolean.
    pub fn set_flag_to(&mut self, key: &str, value: bool) {
        if value {
            if !self.flags.contains(key) {
                self.flags.insert(key.to_string());
            }
        } else {
            self.flags.remove(key);
        }
    }
    /// Check whether a flag is present/true.
    pub fn has_flag(&self, key: &str) -> bool {
        self.flags.contains(key)
    }
}
