use serde::{Deserialize, Serialize};

use crate::error::TerrainError;

/// Parameters for heightfield and texture generation.
///
/// Defaults reproduce the reference terrain: a 150×150 grid displaced onto a
/// 7500-unit plane, four noise octaves with a 5× frequency step per octave.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Grid width in samples. Must be at least 3 for gradient estimation.
    pub width: usize,
    /// Grid depth in samples. Must be at least 3 for gradient estimation.
    pub depth: usize,
    /// Seed driving the noise permutation and every derived random draw.
    pub seed: u64,
    /// Number of octave passes summed into the heightfield.
    pub octaves: u32,
    /// Per-octave frequency/amplitude multiplier ("quality" step).
    pub lacunarity: f32,
    /// Amplitude factor applied to every octave contribution.
    pub amplitude_gain: f32,
    /// Multiplier from height sample to world-space vertex height.
    pub height_scale: f32,
    /// Side length of the square world plane the grid is stretched over.
    pub world_size: f32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            width: 150,
            depth: 150,
            seed: 42,
            octaves: 4,
            lacunarity: 5.0,
            amplitude_gain: 1.75,
            height_scale: 10.0,
            world_size: 7500.0,
        }
    }
}

impl TerrainConfig {
    /// Validate grid dimensions. Gradient estimation samples two cells to
    /// each side, so anything under 3 has no interior at all.
    pub fn validate(&self) -> Result<(), TerrainError> {
        if self.width < 3 || self.depth < 3 {
            return Err(TerrainError::InvalidDimensions {
                width: self.width,
                depth: self.depth,
            });
        }
        Ok(())
    }
}

/// Locomotion constants: damping, gravity, input forces, and recovery bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Exponential horizontal damping coefficient per second.
    pub friction: f32,
    /// Downward acceleration in units/s² (9.8 scaled by player mass factor).
    pub gravity: f32,
    /// Acceleration applied along each active intent axis, units/s².
    pub move_force: f32,
    /// Extra forward acceleration while sprinting, units/s².
    pub sprint_boost: f32,
    /// Instantaneous upward velocity added on jump, units/s.
    pub jump_impulse: f32,
    /// Minimum player height; falling below snaps back here.
    pub floor_height: f32,
    /// Vertical offset subtracted from the player position before the
    /// ground probe, so the ray starts outside the collision volume.
    pub probe_offset: f32,
    /// Maximum distance the ground probe reaches below its origin.
    pub probe_distance: f32,
    /// Upper bound on a single integration step, seconds. Caps the
    /// catastrophic step after the process is suspended mid-frame.
    pub max_delta: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            friction: 10.0,
            gravity: 9.8 * 50.0,
            move_force: 500.0,
            sprint_boost: 600.0,
            jump_impulse: 220.0,
            floor_height: 10.0,
            probe_offset: 10.0,
            probe_distance: 10.0,
            max_delta: 0.1,
        }
    }
}

/// Top-level configuration bundle, loadable from a YAML file.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkerConfig {
    pub terrain: TerrainConfig,
    pub physics: PhysicsConfig,
}
