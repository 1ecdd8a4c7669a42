use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use terrawalk_common::{TerrainConfig, TerrainError};
use terrawalk_noise::Perlin;
use tracing::info;

/// Upper bound on a height sample. Accumulation is widened to `f32` and
/// clamped here instead of wrapping in a narrow unsigned type.
pub const MAX_SAMPLE: f32 = 255.0;

/// A fixed-size rectangular grid of non-negative height samples, row-major.
///
/// Created once at startup and immutable thereafter; the renderer and the
/// collision query read it, nothing mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct Heightfield {
    width: usize,
    depth: usize,
    samples: Vec<f32>,
}

impl Heightfield {
    /// Generate a heightfield by summing gradient noise over octaves.
    ///
    /// A ChaCha8 stream seeded from `config.seed` supplies the noise
    /// permutation seed and the fixed third-dimension offset, so the whole
    /// field is a pure function of the config. Each octave adds
    /// `|noise3(x/q, y/q, z) * q * amplitude_gain|` with the frequency step
    /// `q` multiplied by `lacunarity` between passes.
    pub fn generate(config: &TerrainConfig) -> Result<Self, TerrainError> {
        config.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let noise = Perlin::new(rng.r#gen());
        let z_offset = rng.r#gen::<f32>() * 100.0;

        let mut samples = vec![0.0_f32; config.width * config.depth];
        let mut quality = 1.0_f32;

        for _ in 0..config.octaves {
            for (i, sample) in samples.iter_mut().enumerate() {
                let x = (i % config.width) as f32;
                let y = (i / config.width) as f32;
                *sample += (noise.noise3(x / quality, y / quality, z_offset)
                    * quality
                    * config.amplitude_gain)
                    .abs();
            }
            quality *= config.lacunarity;
        }

        for sample in &mut samples {
            *sample = sample.clamp(0.0, MAX_SAMPLE);
        }

        info!(
            width = config.width,
            depth = config.depth,
            seed = config.seed,
            octaves = config.octaves,
            "heightfield generated"
        );

        Ok(Self {
            width: config.width,
            depth: config.depth,
            samples,
        })
    }

    /// Build a heightfield from raw samples (synthetic terrain, tests).
    pub fn from_samples(
        width: usize,
        depth: usize,
        samples: Vec<f32>,
    ) -> Result<Self, TerrainError> {
        if width < 3 || depth < 3 || samples.len() != width * depth {
            return Err(TerrainError::InvalidDimensions { width, depth });
        }
        Ok(Self {
            width,
            depth,
            samples,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Raw row-major samples, for mesh displacement.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Sample at valid grid coordinates.
    pub fn get(&self, x: usize, z: usize) -> f32 {
        self.samples[z * self.width + x]
    }

    /// Sample with out-of-range indices clamped to the grid border.
    /// Keeps gradient estimation defined at edges and corners.
    pub fn get_clamped(&self, x: isize, z: isize) -> f32 {
        let x = x.clamp(0, self.width as isize - 1) as usize;
        let z = z.clamp(0, self.depth as isize - 1) as usize;
        self.get(x, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_is_deterministic() {
        let cfg = TerrainConfig {
            width: 10,
            depth: 10,
            seed: 1234,
            ..TerrainConfig::default()
        };
        let a = Heightfield::generate(&cfg).unwrap();
        let b = Heightfield::generate(&cfg).unwrap();
        assert_eq!(a.samples(), b.samples());
    }

    #[test]
    fn different_seeds_produce_different_terrain() {
        let base = TerrainConfig {
            width: 16,
            depth: 16,
            ..TerrainConfig::default()
        };
        let a = Heightfield::generate(&base).unwrap();
        let b = Heightfield::generate(&TerrainConfig { seed: base.seed + 1, ..base }).unwrap();
        assert_ne!(a.samples(), b.samples());
    }

    #[test]
    fn samples_clamped_to_storage_range() {
        let cfg = TerrainConfig {
            width: 64,
            depth: 64,
            seed: 9,
            ..TerrainConfig::default()
        };
        let hf = Heightfield::generate(&cfg).unwrap();
        for &s in hf.samples() {
            assert!((0.0..=MAX_SAMPLE).contains(&s), "sample out of range: {s}");
        }
    }

    #[test]
    fn rejects_undersized_grid() {
        let cfg = TerrainConfig {
            width: 2,
            depth: 2,
            ..TerrainConfig::default()
        };
        assert!(Heightfield::generate(&cfg).is_err());
    }

    #[test]
    fn clamped_access_at_borders() {
        let hf = Heightfield::from_samples(3, 3, (0..9).map(|v| v as f32).collect()).unwrap();
        assert_eq!(hf.get_clamped(-2, 0), hf.get(0, 0));
        assert_eq!(hf.get_clamped(5, 2), hf.get(2, 2));
        assert_eq!(hf.get_clamped(1, -1), hf.get(1, 0));
        assert_eq!(hf.get_clamped(1, 9), hf.get(1, 2));
    }

    #[test]
    fn from_samples_checks_length() {
        assert!(Heightfield::from_samples(3, 3, vec![0.0; 8]).is_err());
    }
}
