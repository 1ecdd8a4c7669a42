//! Locomotion: integrates player velocity against the ground surface each
//! frame, with friction, gravity, and one-jump-per-contact state.
//!
//! # Invariants
//! - Ground probing happens before velocity integration within a tick;
//!   contact state gates the gravity clamp and jump eligibility of that
//!   same tick.
//! - The controller never panics and never produces NaN components; a zero
//!   intent vector stays zero.
//! - While input is inactive the tick is a no-op (pause, not an error).

pub mod controller;
pub mod input;
pub mod state;

pub use controller::{GroundContact, GroundQuery, LocomotionController, MovementFrame};
pub use input::InputState;
pub use state::LocomotionState;
