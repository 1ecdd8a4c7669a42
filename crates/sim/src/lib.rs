//! Simulation loop: one synchronous simulate tick per display refresh,
//! followed by a render phase that only reads immutable snapshots.
//!
//! # Invariants
//! - Ticks are non-blocking and single-threaded; nothing suspends
//!   mid-computation.
//! - Delta time is measured wall-clock time, clamped to a sane maximum so a
//!   backgrounded process cannot produce one catastrophic integration step.
//! - Terrain data is generated once in `Simulation::new` and never mutated;
//!   the render phase may read it from another thread.

pub mod clock;
pub mod simulation;

pub use clock::FrameClock;
pub use simulation::Simulation;
