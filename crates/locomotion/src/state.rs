use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Mutable per-frame player physical state.
///
/// Owned by the simulation loop; the controller mutates it every tick and
/// the render phase reads the resulting snapshot. Never shared concurrently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocomotionState {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Whether the last ground probe reported contact.
    pub grounded: bool,
    /// Jump eligibility: granted on ground contact, spent by one jump.
    pub can_jump: bool,
}

impl LocomotionState {
    /// Spawn at a position, at rest, airborne until the first probe.
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            grounded: false,
            can_jump: false,
        }
    }

    pub fn horizontal_speed(&self) -> f32 {
        Vec3::new(self.velocity.x, 0.0, self.velocity.z).length()
    }
}

impl Default for LocomotionState {
    fn default() -> Self {
        Self::at(Vec3::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawns_at_rest() {
        let s = LocomotionState::at(Vec3::new(0.0, 1200.0, 0.0));
        assert_eq!(s.velocity, Vec3::ZERO);
        assert!(!s.grounded);
        assert!(!s.can_jump);
    }

    #[test]
    fn horizontal_speed_ignores_vertical() {
        let mut s = LocomotionState::default();
        s.velocity = Vec3::new(3.0, 99.0, 4.0);
        assert!((s.horizontal_speed() - 5.0).abs() < 1e-6);
    }
}
