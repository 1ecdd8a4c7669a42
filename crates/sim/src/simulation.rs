use glam::Vec3;
use terrawalk_common::{TerrainError, WalkerConfig};
use terrawalk_locomotion::{InputState, LocomotionController, LocomotionState};
use terrawalk_render::{HeightfieldCollider, SPAWN_HEIGHT, TerrainMesh, YawFrame};
use terrawalk_terrain::{Heightfield, ShadedTexture};
use tracing::info;

/// The whole simulation: generated terrain plus one player.
///
/// Construction runs the full generation pipeline (heightfield → texture →
/// mesh); after that the terrain is immutable and only `step` mutates the
/// player state. Rendering happens as a separate phase against the
/// snapshots exposed by `state`, `mesh`, and `texture`.
pub struct Simulation {
    config: WalkerConfig,
    mesh: TerrainMesh,
    texture: ShadedTexture,
    controller: LocomotionController,
    state: LocomotionState,
    frame: YawFrame,
}

impl Simulation {
    pub fn new(config: WalkerConfig) -> Result<Self, TerrainError> {
        let heightfield = Heightfield::generate(&config.terrain)?;
        let texture = ShadedTexture::shade(&heightfield, config.terrain.seed);
        let mesh = TerrainMesh::new(heightfield, &config.terrain);
        let state = LocomotionState::at(Vec3::new(0.0, SPAWN_HEIGHT, 0.0));

        info!(
            seed = config.terrain.seed,
            spawn_height = SPAWN_HEIGHT,
            "simulation ready"
        );

        Ok(Self {
            controller: LocomotionController::new(config.physics),
            config,
            mesh,
            texture,
            state,
            frame: YawFrame::new(0.0),
        })
    }

    /// Simulate phase: advance the player by one tick.
    pub fn step(&mut self, input: &InputState, delta: f32) {
        let collider = HeightfieldCollider::new(&self.mesh, self.config.physics.probe_distance);
        self.controller
            .tick(&mut self.state, input, &collider, &self.frame, delta);
    }

    /// Run `ticks` fixed-delta steps with the same input snapshot.
    pub fn run(&mut self, input: &InputState, ticks: u32, delta: f32) -> &LocomotionState {
        for _ in 0..ticks {
            self.step(input, delta);
        }
        &self.state
    }

    /// Point the movement basis; mouse-look updates land here.
    pub fn set_yaw(&mut self, yaw: f32) {
        self.frame = YawFrame::new(yaw);
    }

    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    /// Post-tick player snapshot for the render phase.
    pub fn state(&self) -> &LocomotionState {
        &self.state
    }

    pub fn mesh(&self) -> &TerrainMesh {
        &self.mesh
    }

    pub fn texture(&self) -> &ShadedTexture {
        &self.texture
    }
}
