//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: the cube itself, the turning pivot,
//! pointer input, timing, configuration and the host-facing bridges. Each
//! submodule documents the semantics and intended usage of its resource(s).
//!
//! Overview
//! - `camerarig` – orbit camera numbers (target, yaw, pitch, arm length)
//! - `cube` – authoritative cube state: pieces, size, counters, mode flags
//! - `cubeconfig` – INI-backed settings with safe defaults
//! - `gesture` – state of the press in progress
//! - `input` – per-frame pointer state written by the host
//! - `notifications` – channel bridge for hosts that poll instead of observing
//! - `pivot` – the layer currently turning and its tween
//! - `scramblerng` – seedable random source for scrambles
//! - `worldsignals` – flat key/value mirror of the cube state
//! - `worldtime` – simulation time and delta
pub mod camerarig;
pub mod cube;
pub mod cubeconfig;
pub mod gesture;
pub mod input;
pub mod notifications;
pub mod pivot;
pub mod scramblerng;
pub mod worldsignals;
pub mod worldtime;
