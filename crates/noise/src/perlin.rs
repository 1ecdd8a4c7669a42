use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

/// Classic improved Perlin noise over a seeded permutation table.
///
/// The permutation is a Fisher–Yates shuffle of 0..256 driven by a ChaCha8
/// stream seeded from the caller's `u64`, duplicated to 512 entries so
/// lattice lookups never wrap mid-expression. The generator owns all of its
/// randomness; nothing process-wide is read or replaced.
#[derive(Debug, Clone)]
pub struct Perlin {
    perm: [u8; 512],
}

impl Perlin {
    pub fn new(seed: u64) -> Self {
        let mut base: [u8; 256] = std::array::from_fn(|i| i as u8);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        base.shuffle(&mut rng);

        let mut perm = [0u8; 512];
        for (i, slot) in perm.iter_mut().enumerate() {
            *slot = base[i % 256];
        }
        Self { perm }
    }

    /// Sample 3D gradient noise at `(x, y, z)`. Returns a value in [-1, 1].
    pub fn noise3(&self, x: f32, y: f32, z: f32) -> f32 {
        let xi = (x.floor() as i32 & 255) as usize;
        let yi = (y.floor() as i32 & 255) as usize;
        let zi = (z.floor() as i32 & 255) as usize;

        let x = x - x.floor();
        let y = y - y.floor();
        let z = z - z.floor();

        let u = fade(x);
        let v = fade(y);
        let w = fade(z);

        let p = &self.perm;
        let a = p[xi] as usize + yi;
        let aa = p[a] as usize + zi;
        let ab = p[a + 1] as usize + zi;
        let b = p[xi + 1] as usize + yi;
        let ba = p[b] as usize + zi;
        let bb = p[b + 1] as usize + zi;

        lerp(
            w,
            lerp(
                v,
                lerp(
                    u,
                    grad(p[aa], x, y, z),
                    grad(p[ba], x - 1.0, y, z),
                ),
                lerp(
                    u,
                    grad(p[ab], x, y - 1.0, z),
                    grad(p[bb], x - 1.0, y - 1.0, z),
                ),
            ),
            lerp(
                v,
                lerp(
                    u,
                    grad(p[aa + 1], x, y, z - 1.0),
                    grad(p[ba + 1], x - 1.0, y, z - 1.0),
                ),
                lerp(
                    u,
                    grad(p[ab + 1], x, y - 1.0, z - 1.0),
                    grad(p[bb + 1], x - 1.0, y - 1.0, z - 1.0),
                ),
            ),
        )
    }
}

/// Perlin's quintic fade curve: 6t⁵ - 15t⁴ + 10t³.
#[inline]
fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(t: f32, a: f32, b: f32) -> f32 {
    a + t * (b - a)
}

/// Project onto one of 12 cube-edge gradient directions selected by the hash.
#[inline]
fn grad(hash: u8, x: f32, y: f32, z: f32) -> f32 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    (if h & 1 == 0 { u } else { -u }) + (if h & 2 == 0 { v } else { -v })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_field() {
        let a = Perlin::new(42);
        let b = Perlin::new(42);
        for i in 0..50 {
            let x = i as f32 * 0.37;
            assert_eq!(a.noise3(x, x * 0.5, 1.3), b.noise3(x, x * 0.5, 1.3));
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let a = Perlin::new(1);
        let b = Perlin::new(2);
        let diverged = (0..50).any(|i| {
            let x = i as f32 * 0.41 + 0.1;
            a.noise3(x, 2.0, 3.0) != b.noise3(x, 2.0, 3.0)
        });
        assert!(diverged);
    }

    #[test]
    fn output_bounded() {
        let noise = Perlin::new(7);
        for i in 0..500 {
            let t = i as f32 * 0.173;
            let v = noise.noise3(t, t * 0.7, t * 1.3);
            assert!((-1.0..=1.0).contains(&v), "noise out of range: {v}");
        }
    }

    #[test]
    fn zero_at_lattice_points() {
        // Gradient noise vanishes at integer lattice coordinates.
        let noise = Perlin::new(42);
        assert_eq!(noise.noise3(3.0, 5.0, 7.0), 0.0);
        assert_eq!(noise.noise3(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn negative_coordinates_supported() {
        let noise = Perlin::new(9);
        let v = noise.noise3(-12.4, -3.9, -0.5);
        assert!(v.is_finite());
        assert!((-1.0..=1.0).contains(&v));
    }

    #[test]
    fn continuous_across_cell_boundary() {
        let noise = Perlin::new(11);
        let eps = 1e-4_f32;
        let before = noise.noise3(2.0 - eps, 0.5, 0.5);
        let after = noise.noise3(2.0 + eps, 0.5, 0.5);
        assert!((before - after).abs() < 0.01);
    }
}
