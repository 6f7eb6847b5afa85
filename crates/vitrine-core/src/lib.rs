//! Host-driven UI-behavior controllers for item showcases.
//!
//! Two cooperating controllers generalize a showcase page's interaction layer:
//! [`rotation::RotationController`] owns the currently selected item of a fixed
//! cyclic collection and auto-advances it on a configurable cadence unless
//! suspended by user interaction, and [`reveal::RevealController`] owns one-shot
//! visibility flags plus a highlighted element with a derived progress
//! percentage. Both are pure state machines: the embedding adapter feeds them
//! normalized events and an absolute millisecond clock, and they report changes
//! through the sinks in [`notify`]. Nothing in this crate touches presentation.

#![no_std]

pub mod notify;
pub mod reveal;
pub mod rotation;
pub mod scroll;

pub use notify::{DiscardSink, RevealSink, RotationSink};
pub use reveal::{RevealController, MAX_OBSERVED_ELEMENTS};
pub use rotation::{RotationConfig, RotationController};
