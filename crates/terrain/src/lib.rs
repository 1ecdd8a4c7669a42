//! Terrain subsystem: octave-summed heightfield generation and the shaded
//! surface texture derived from it.
//!
//! # Invariants
//! - A `Heightfield` is generated once from a seed and immutable afterwards;
//!   identical config reproduces identical samples bit-for-bit.
//! - All samples lie in [0, 255]; texture synthesis never reads outside the
//!   grid (border indices are clamped).

pub mod heightfield;
pub mod texture;

pub use heightfield::Heightfield;
pub use texture::ShadedTexture;
