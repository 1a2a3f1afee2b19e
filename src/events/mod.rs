//! Event types used by the cube plugin.
//!
//! Events decouple the systems that detect something (a drag, a finished
//! tween) from the observers that react to it, and expose the cube's state
//! changes to the host application.
//!
//! Submodules:
//! - [`cube`] – notifications for hosts and UI (moves made, solved)
//! - [`moves`] – move requests, scramble and rebuild commands, tween completion
//!
//! See each submodule for concrete event data, semantics, and example usage.
pub mod cube;
pub mod moves;
