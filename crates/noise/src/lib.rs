//! Noise Source: deterministic gradient noise from an explicitly owned seed.
//!
//! # Invariants
//! - `noise3` is a pure function of the seed and its arguments; the same
//!   seed always reproduces the same field bit-for-bit.
//! - Construction and sampling never touch global random state.

pub mod perlin;

pub use perlin::Perlin;
