//! Rendering-side collaborators of the simulation core.
//!
//! The core never talks to a GPU or a window; it talks to the seams here:
//! a terrain mesh that displaces grid samples into world space, a collider
//! that answers downward ground probes against that mesh, and a yaw frame
//! that turns view-relative movement deltas into world displacement.

pub mod collider;
pub mod frame;
pub mod mesh;

pub use collider::HeightfieldCollider;
pub use frame::YawFrame;
pub use mesh::TerrainMesh;

/// Default spawn height above the nominal floor, world units.
pub const SPAWN_HEIGHT: f32 = 1200.0;

/// Sky background color, linear RGB.
pub const SKY_COLOR: [f32; 3] = [0.859, 1.0, 0.996];

/// Exponential fog color and density.
pub const FOG_COLOR: [f32; 3] = [0.757, 0.757, 0.757];
pub const FOG_DENSITY: f32 = 0.005;
