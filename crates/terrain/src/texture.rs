use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::heightfield::Heightfield;

/// Fixed light direction the surface is shaded against, pre-normalization.
const LIGHT_DIRECTION: Vec3 = Vec3::new(1.0, 1.0, 1.0);

/// Base luminance added to the normal·light term.
const SHADE_BASE: f32 = 100.0;

/// How strongly the local height scales pixel brightness.
const HEIGHT_INFLUENCE: f32 = 0.007;

/// Vertical scale of the finite-difference normal.
const NORMAL_Y: f32 = 2.0;

/// Neutral gray the base image is filled with before shading overwrites it.
const BASE_FILL: [u8; 3] = [0xbe, 0xc9, 0xbe];

/// Integer factor of the final upsampling pass.
const UPSAMPLE_FACTOR: usize = 4;

/// Exclusive upper bound of the per-channel dither offset.
const DITHER_RANGE: u8 = 5;

/// An RGB pixel buffer derived from a heightfield.
///
/// Immutable once synthesized; ownership passes to the rendering
/// collaborator, which maps it onto the terrain mesh exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadedTexture {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl ShadedTexture {
    /// Synthesize the final texture: base-resolution shading, then a 4×
    /// bilinear upsample with per-pixel dither noise.
    ///
    /// The dither stream is seeded from `seed`, so the full texture is as
    /// reproducible as the heightfield it came from.
    pub fn shade(heightfield: &Heightfield, seed: u64) -> Self {
        let base = Self::shade_base(heightfield);
        let out = base.upsample_dithered(UPSAMPLE_FACTOR, seed);
        debug!(
            width = out.width,
            height = out.height,
            "surface texture synthesized"
        );
        out
    }

    /// Pass 1: shade the heightfield at 1:1 resolution.
    ///
    /// Per pixel, a surface normal is estimated by central differences two
    /// samples apart on each grid axis (border indices clamped), dotted with
    /// the normalized light direction, and scaled by the local height.
    pub fn shade_base(heightfield: &Heightfield) -> Self {
        let width = heightfield.width();
        let height = heightfield.depth();
        let light = LIGHT_DIRECTION.normalize();

        let mut pixels = Vec::with_capacity(width * height * 3);
        pixels.extend(BASE_FILL.iter().cycle().take(width * height * 3));

        for z in 0..height {
            for x in 0..width {
                let (xi, zi) = (x as isize, z as isize);
                let normal = Vec3::new(
                    heightfield.get_clamped(xi - 2, zi) - heightfield.get_clamped(xi + 2, zi),
                    NORMAL_Y,
                    heightfield.get_clamped(xi, zi - 2) - heightfield.get_clamped(xi, zi + 2),
                )
                .normalize();

                let shade = normal.dot(light);
                let luminance = (SHADE_BASE + shade)
                    * (0.5 + heightfield.get(x, z) * HEIGHT_INFLUENCE);
                // The reference writes blue as (shade + base), red/green as
                // (base + shade); the expressions are numerically identical,
                // so one value serves all three channels.
                let value = luminance.clamp(0.0, 255.0) as u8;

                let i = (z * width + x) * 3;
                pixels[i] = value;
                pixels[i + 1] = value;
                pixels[i + 2] = value;
            }
        }

        Self {
            width,
            height,
            pixels,
        }
    }

    /// Pass 2: integer-factor bilinear upsample plus dithering.
    ///
    /// Each output channel independently gets a small random offset in
    /// `[0, DITHER_RANGE)`, saturating at the channel maximum, to break up
    /// the banding the interpolation introduces.
    pub fn upsample_dithered(&self, factor: usize, seed: u64) -> Self {
        let width = self.width * factor;
        let height = self.height * factor;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut pixels = Vec::with_capacity(width * height * 3);

        for oz in 0..height {
            for ox in 0..width {
                let sample = self.sample_bilinear(
                    (ox as f32 + 0.5) / factor as f32 - 0.5,
                    (oz as f32 + 0.5) / factor as f32 - 0.5,
                );
                for channel in sample {
                    let dither = rng.gen_range(0..DITHER_RANGE);
                    pixels.push(channel.saturating_add(dither));
                }
            }
        }

        Self {
            width,
            height,
            pixels,
        }
    }

    /// Bilinear RGB sample at fractional pixel coordinates, edge-clamped.
    fn sample_bilinear(&self, x: f32, y: f32) -> [u8; 3] {
        let x = x.clamp(0.0, self.width as f32 - 1.0);
        let y = y.clamp(0.0, self.height as f32 - 1.0);
        let x0 = x.floor() as usize;
        let y0 = y.floor() as usize;
        let x1 = (x0 + 1).min(self.width - 1);
        let y1 = (y0 + 1).min(self.height - 1);
        let fx = x - x0 as f32;
        let fy = y - y0 as f32;

        let mut out = [0u8; 3];
        for (c, slot) in out.iter_mut().enumerate() {
            let p00 = self.channel(x0, y0, c) as f32;
            let p10 = self.channel(x1, y0, c) as f32;
            let p01 = self.channel(x0, y1, c) as f32;
            let p11 = self.channel(x1, y1, c) as f32;
            let top = p00 + (p10 - p00) * fx;
            let bottom = p01 + (p11 - p01) * fx;
            *slot = (top + (bottom - top) * fy).round().clamp(0.0, 255.0) as u8;
        }
        out
    }

    #[inline]
    fn channel(&self, x: usize, y: usize, c: usize) -> u8 {
        self.pixels[(y * self.width + x) * 3 + c]
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw RGB bytes, row-major, 3 bytes per pixel.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let i = (y * self.width + x) * 3;
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]]
    }

    /// Mean luminance over all pixels, for diagnostics.
    pub fn mean_luminance(&self) -> f32 {
        if self.pixels.is_empty() {
            return 0.0;
        }
        let sum: u64 = self.pixels.iter().map(|&p| p as u64).sum();
        sum as f32 / self.pixels.len() as f32
    }
}
