//! ECS components for entities.
//!
//! This module groups all component types attached to the puzzle's entities.
//!
//! Submodules overview:
//! - [`axis`] – turn axes and cube faces (not components, shared vocabulary)
//! - [`cubie`] – identity, grid cell and transform of each sub-cube
//! - [`scale`] – uniform scale factor, used for the build pop of the cube root
//! - [`tween`] – animated interpolation of layer turns and scale

pub mod axis;
pub mod cubie;
pub mod scale;
pub mod tween;
