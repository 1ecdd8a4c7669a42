use glam::Vec3;
use terrawalk_locomotion::MovementFrame;

/// Horizontal camera basis from a yaw angle (radians).
///
/// The pointer-lock camera equivalent: pitch never leaks into movement,
/// so the basis vectors are the forward direction projected onto the
/// horizontal plane and its right-hand perpendicular.
#[derive(Debug, Clone, Copy)]
pub struct YawFrame {
    pub yaw: f32,
}

impl YawFrame {
    pub fn new(yaw: f32) -> Self {
        Self { yaw }
    }

    pub fn forward(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), 0.0, self.yaw.sin())
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y)
    }
}

impl MovementFrame for YawFrame {
    fn horizontal_delta(&self, right: f32, forward: f32) -> Vec3 {
        self.right() * right + self.forward() * forward
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Vec3, b: Vec3) {
        assert!((a - b).length() < 1e-5, "{a} != {b}");
    }

    #[test]
    fn basis_vectors_are_horizontal_and_orthogonal() {
        for yaw in [0.0, 0.7, -2.1, std::f32::consts::PI] {
            let frame = YawFrame::new(yaw);
            assert_eq!(frame.forward().y, 0.0);
            assert_eq!(frame.right().y, 0.0);
            assert!(frame.forward().dot(frame.right()).abs() < 1e-6);
        }
    }

    #[test]
    fn zero_yaw_moves_along_x() {
        let frame = YawFrame::new(0.0);
        assert_close(frame.horizontal_delta(0.0, 2.0), Vec3::new(2.0, 0.0, 0.0));
        assert_close(frame.horizontal_delta(3.0, 0.0), Vec3::new(0.0, 0.0, 3.0));
    }

    #[test]
    fn quarter_turn_rotates_the_basis() {
        let frame = YawFrame::new(std::f32::consts::FRAC_PI_2);
        assert_close(frame.horizontal_delta(0.0, 1.0), Vec3::new(0.0, 0.0, 1.0));
        assert_close(frame.horizontal_delta(1.0, 0.0), Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn deltas_compose_linearly() {
        let frame = YawFrame::new(1.3);
        let combined = frame.horizontal_delta(2.0, -1.5);
        let separate = frame.horizontal_delta(2.0, 0.0) + frame.horizontal_delta(0.0, -1.5);
        assert_close(combined, separate);
    }
}
