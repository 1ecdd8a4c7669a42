use glam::Vec3;
use terrawalk_locomotion::{GroundContact, GroundQuery};

use crate::mesh::TerrainMesh;

/// Downward ray probe against the terrain mesh.
///
/// The collision-side implementation of [`GroundQuery`]: casts straight
/// down from the probe origin and reports the interpolated surface if it
/// lies within `max_distance` below. Origins outside the mesh extent, or
/// already below the surface, report no contact — the controller's floor
/// clamp is the recovery path for those.
pub struct HeightfieldCollider<'a> {
    mesh: &'a TerrainMesh,
    max_distance: f32,
}

impl<'a> HeightfieldCollider<'a> {
    pub fn new(mesh: &'a TerrainMesh, max_distance: f32) -> Self {
        Self { mesh, max_distance }
    }
}

impl GroundQuery for HeightfieldCollider<'_> {
    fn probe(&self, origin: Vec3) -> Option<GroundContact> {
        let surface = self.mesh.height_at(origin.x, origin.z)?;
        let distance = origin.y - surface;
        (0.0..=self.max_distance)
            .contains(&distance)
            .then_some(GroundContact {
                point: Vec3::new(origin.x, surface, origin.z),
                distance,
            })
    }
}
