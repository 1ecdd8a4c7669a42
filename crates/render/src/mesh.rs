use glam::Vec3;
use terrawalk_common::TerrainConfig;
use terrawalk_terrain::Heightfield;
use tracing::debug;

/// World-space view of a heightfield: a square plane centered on the origin
/// whose vertices are displaced by the scaled height samples.
///
/// Owns the heightfield after generation; the renderer reads the displaced
/// vertices once, the collider queries interpolated heights every tick.
#[derive(Debug, Clone)]
pub struct TerrainMesh {
    heightfield: Heightfield,
    world_size: f32,
    height_scale: f32,
}

impl TerrainMesh {
    pub fn new(heightfield: Heightfield, config: &TerrainConfig) -> Self {
        debug!(
            world_size = config.world_size,
            height_scale = config.height_scale,
            "terrain mesh built"
        );
        Self {
            heightfield,
            world_size: config.world_size,
            height_scale: config.height_scale,
        }
    }

    pub fn heightfield(&self) -> &Heightfield {
        &self.heightfield
    }

    pub fn world_size(&self) -> f32 {
        self.world_size
    }

    /// Displaced world-space vertex for grid coordinates `(x, z)`.
    pub fn vertex(&self, x: usize, z: usize) -> Vec3 {
        let half = self.world_size / 2.0;
        let sx = self.world_size / (self.heightfield.width() as f32 - 1.0);
        let sz = self.world_size / (self.heightfield.depth() as f32 - 1.0);
        Vec3::new(
            x as f32 * sx - half,
            self.heightfield.get(x, z) * self.height_scale,
            z as f32 * sz - half,
        )
    }

    /// All displaced vertices, row-major, for upload by the renderer.
    pub fn vertices(&self) -> Vec<Vec3> {
        let (w, d) = (self.heightfield.width(), self.heightfield.depth());
        let mut out = Vec::with_capacity(w * d);
        for z in 0..d {
            for x in 0..w {
                out.push(self.vertex(x, z));
            }
        }
        out
    }

    /// Interpolated surface height at a world-space XZ position, or `None`
    /// outside the mesh extent.
    pub fn height_at(&self, x: f32, z: f32) -> Option<f32> {
        let half = self.world_size / 2.0;
        if !(-half..=half).contains(&x) || !(-half..=half).contains(&z) {
            return None;
        }

        let w = self.heightfield.width();
        let d = self.heightfield.depth();
        let gx = (x + half) / self.world_size * (w as f32 - 1.0);
        let gz = (z + half) / self.world_size * (d as f32 - 1.0);

        let x0 = gx.floor() as usize;
        let z0 = gz.floor() as usize;
        let x1 = (x0 + 1).min(w - 1);
        let z1 = (z0 + 1).min(d - 1);
        let fx = gx - x0 as f32;
        let fz = gz - z0 as f32;

        let h00 = self.heightfield.get(x0, z0);
        let h10 = self.heightfield.get(x1, z0);
        let h01 = self.heightfield.get(x0, z1);
        let h11 = self.heightfield.get(x1, z1);
        let north = h00 + (h10 - h00) * fx;
        let south = h01 + (h11 - h01) * fx;

        Some((north + (south - north) * fz) * self.height_scale)
    }
}
