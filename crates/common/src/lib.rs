//! Shared types for the terrawalk workspace: configuration and errors.
//!
//! # Invariants
//! - Every tunable named in a config struct is externally overridable;
//!   no subsystem hard-wires its constants.
//! - Config structs round-trip through serde unchanged.

pub mod config;
pub mod error;

pub use config::{PhysicsConfig, TerrainConfig, WalkerConfig};
pub use error::TerrainError;
