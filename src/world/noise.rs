use glam::{Vec2, Vec3};
use noise::{NoiseFn, Perlin};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;

/// Half-width of the range the seed-derived offset is drawn from.
const SEED_OFFSET_RANGE: f64 = 10_000.0;

/// Keeps integer voxel positions off the Perlin lattice, where the noise is
/// identically zero.
const LATTICE_NUDGE: f64 = 0.1;

/// Deterministic 2D/3D noise. All randomness is fixed at construction from
/// the world seed; sampling is a pure function of its inputs.
#[derive(Debug, Clone)]
pub struct NoiseField {
    perlin: Perlin,
    seed_offset: f64,
}

impl NoiseField {
    pub fn new(seed: u32) -> Self {
        let mut rng = ChaCha12Rng::seed_from_u64(seed as u64);
        let seed_offset = rng.gen_range(-SEED_OFFSET_RANGE..SEED_OFFSET_RANGE);
        Self {
            perlin: Perlin::new(seed),
            seed_offset,
        }
    }

    /// Noise in `[0, 1]` sampled at `(point.x / scale + offset, point.y / scale + offset)`.
    /// `point.y` carries the world z axis.
    pub fn noise_2d(&self, point: Vec2, offset: f32, scale: f32) -> f32 {
        let x = self.scaled(point.x, offset, scale);
        let z = self.scaled(point.y, offset, scale);
        remap(self.perlin.get([x, z]))
    }

    /// 3D noise in `[0, 1]` at the scaled and offset coordinate.
    pub fn sample_3d(&self, point: Vec3, offset: f32, scale: f32) -> f32 {
        let x = self.scaled(point.x, offset, scale);
        let y = self.scaled(point.y, offset, scale);
        let z = self.scaled(point.z, offset, scale);
        remap(self.perlin.get([x, y, z]))
    }

    /// Spatial Bernoulli mask: true where the 3D noise exceeds `threshold`.
    pub fn noise_3d(&self, point: Vec3, offset: f32, scale: f32, threshold: f32) -> bool {
        self.sample_3d(point, offset, scale) > threshold
    }

    fn scaled(&self, value: f32, offset: f32, scale: f32) -> f64 {
        (value as f64 + LATTICE_NUDGE) / scale as f64 + offset as f64 + self.seed_offset
    }
}

fn remap(value: f64) -> f32 {
    ((value * 0.5 + 0.5) as f32).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noise_2d_is_deterministic() {
        let a = NoiseField::new(1234);
        let b = NoiseField::new(1234);
        for i in 0..64 {
            let point = Vec2::new(i as f32 * 3.0, i as f32 * 7.0);
            assert_eq!(a.noise_2d(point, 0.0, 25.0), b.noise_2d(point, 0.0, 25.0));
            assert_eq!(a.noise_2d(point, 0.0, 25.0), a.noise_2d(point, 0.0, 25.0));
        }
    }

    #[test]
    fn test_noise_2d_in_unit_range() {
        let field = NoiseField::new(7);
        for x in 0..40 {
            for z in 0..40 {
                let value = field.noise_2d(Vec2::new(x as f32, z as f32), 0.0, 4.0);
                assert!((0.0..=1.0).contains(&value), "{value} out of range");
            }
        }
    }

    #[test]
    fn test_noise_2d_varies_over_space() {
        let field = NoiseField::new(99);
        let first = field.noise_2d(Vec2::ZERO, 0.0, 5.0);
        let varies = (1..200)
            .map(|i| field.noise_2d(Vec2::new(i as f32, (i * 3) as f32), 0.0, 5.0))
            .any(|value| (value - first).abs() > 1e-3);
        assert!(varies);
    }

    #[test]
    fn test_seed_changes_output() {
        let a = NoiseField::new(1);
        let b = NoiseField::new(2);
        let differs = (0..100).any(|i| {
            let point = Vec2::new(i as f32, i as f32 * 0.5);
            a.noise_2d(point, 0.0, 10.0) != b.noise_2d(point, 0.0, 10.0)
        });
        assert!(differs);
    }

    #[test]
    fn test_noise_3d_threshold_extremes() {
        let field = NoiseField::new(42);
        for i in 0..50 {
            let point = Vec3::new(i as f32, (i % 7) as f32, (i * 2) as f32);
            assert!(field.noise_3d(point, 0.0, 3.0, -0.01));
            assert!(!field.noise_3d(point, 0.0, 3.0, 1.0));
        }
    }

    #[test]
    fn test_noise_3d_matches_sample() {
        let field = NoiseField::new(5);
        let point = Vec3::new(12.0, 30.0, 4.0);
        let value = field.sample_3d(point, 500.0, 8.0);
        assert!(field.noise_3d(point, 500.0, 8.0, value - 0.001));
        assert!(!field.noise_3d(point, 500.0, 8.0, value));
    }
}
