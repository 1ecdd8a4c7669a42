use glam::Vec3;
use terrawalk_common::PhysicsConfig;
use tracing::trace;

use crate::input::InputState;
use crate::state::LocomotionState;

/// Result of a downward ground probe: where the surface was hit and how far
/// below the probe origin it lies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundContact {
    pub point: Vec3,
    pub distance: f32,
}

/// Downward collision probe supplied by the collision collaborator.
///
/// Implementations probe straight down from `origin` within a bounded
/// maximum distance and report the nearest surface, if any. The controller
/// treats this as a pure query, once per tick.
pub trait GroundQuery {
    fn probe(&self, origin: Vec3) -> Option<GroundContact>;
}

/// Camera-basis translation supplied by the rendering collaborator.
///
/// The controller hands over signed scalar deltas along the view-relative
/// right and forward axes; the frame turns them into a world-space
/// horizontal displacement. Keeping the basis transform behind this seam
/// keeps the integration arithmetic independent of any camera convention.
pub trait MovementFrame {
    fn horizontal_delta(&self, right: f32, forward: f32) -> Vec3;
}

/// Integrates one player's velocity and position each simulation tick.
///
/// Two logical states per tick, grounded and airborne, decided by the
/// ground probe before any integration: contact clamps vertical velocity
/// to non-negative and regrants jump eligibility; airborne carries
/// momentum and grants nothing.
#[derive(Debug, Clone)]
pub struct LocomotionController {
    config: PhysicsConfig,
}

impl LocomotionController {
    pub fn new(config: PhysicsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Advance the state by one tick of `delta` seconds.
    ///
    /// No-op while `input.active` is false: a deliberate pause, the player
    /// is frozen in place until capture resumes.
    pub fn tick(
        &self,
        state: &mut LocomotionState,
        input: &InputState,
        ground: &dyn GroundQuery,
        frame: &dyn MovementFrame,
        delta: f32,
    ) {
        if !input.active {
            return;
        }
        let cfg = &self.config;
        let delta = delta.clamp(0.0, cfg.max_delta);

        // Probe before integrating: this tick's contact gates this tick's
        // gravity clamp and jump eligibility.
        let probe_origin = state.position - Vec3::Y * cfg.probe_offset;
        let contact = ground.probe(probe_origin);
        state.grounded = contact.is_some();

        // Exponential horizontal damping.
        state.velocity.x -= state.velocity.x * cfg.friction * delta;
        state.velocity.z -= state.velocity.z * cfg.friction * delta;

        state.velocity.y -= cfg.gravity * delta;

        let direction = intent_direction(input);

        if input.forward || input.backward {
            state.velocity.z -= direction.z * cfg.move_force * delta;
        }
        if input.left || input.right {
            state.velocity.x -= direction.x * cfg.move_force * delta;
        }
        if input.forward && input.sprint {
            state.velocity.z -= direction.z * cfg.sprint_boost * delta;
        }

        if state.grounded {
            state.velocity.y = state.velocity.y.max(0.0);
            state.can_jump = true;
        }

        if input.jump && state.can_jump {
            state.velocity.y += cfg.jump_impulse;
            state.can_jump = false;
            trace!(y = state.position.y, "jump impulse applied");
        }

        // Horizontal displacement goes through the camera-basis frame;
        // the negated deltas encode the view-relative sign convention.
        let horizontal = frame.horizontal_delta(
            -state.velocity.x * delta,
            -state.velocity.z * delta,
        );
        state.position.x += horizontal.x;
        state.position.z += horizontal.z;
        state.position.y += state.velocity.y * delta;

        // Recovery guard: snapping to the floor catches the player when the
        // probe misses (unloaded terrain, extreme velocity).
        if state.position.y < cfg.floor_height {
            state.position.y = cfg.floor_height;
            state.velocity.y = 0.0;
            state.can_jump = true;
            trace!("floor clamp engaged");
        }
    }
}

/// Movement-intent direction from held-key flags, unit length or zero.
///
/// Normalizing the zero vector is defined as a no-op yielding zero; no key
/// combination can produce NaN components.
fn intent_direction(input: &InputState) -> Vec3 {
    let raw = Vec3::new(
        f32::from(input.right) - f32::from(input.left),
        0.0,
        f32::from(input.forward) - f32::from(input.backward),
    );
    raw.normalize_or_zero()
}
