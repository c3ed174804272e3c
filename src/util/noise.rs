//! Coherent gradient noise for camera shake.
//!
//! Shake samples the `noise` crate's seeded [`Perlin`] field through the
//! small [`CoherentNoise`] seam so tests and hosts can substitute their own
//! source.

use ::noise::NoiseFn;
pub use ::noise::Perlin;

/// Deterministic 3D noise in roughly `[-1, 1]`.
pub trait CoherentNoise {
    /// Sample the field at `(x, y, z)`.
    fn sample(&self, x: f32, y: f32, z: f32) -> f32;
}

/// Seed of the shake field when presets don't name one.
pub const DEFAULT_NOISE_SEED: u32 = 0x5eed_ca4c;

/// Shake field for `seed`.
#[must_use]
pub fn shake_field(seed: u32) -> Perlin {
    Perlin::new(seed)
}

impl CoherentNoise for Perlin {
    fn sample(&self, x: f32, y: f32, z: f32) -> f32 {
        let value = self.get([f64::from(x), f64::from(y), f64::from(z)]);
        (value as f32).clamp(-1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_is_deterministic() {
        let a = shake_field(7);
        let b = shake_field(7);
        for i in 0..50 {
            let x = i as f32 * 0.37;
            assert_eq!(a.sample(x, 5.0, 0.0), b.sample(x, 5.0, 0.0));
        }
    }

    #[test]
    fn zero_on_integer_lattice() {
        let noise = shake_field(DEFAULT_NOISE_SEED);
        assert!(noise.sample(3.0, 5.0, 0.0).abs() < 1e-6);
    }

    #[test]
    fn stays_in_unit_range_and_varies() {
        let noise = shake_field(DEFAULT_NOISE_SEED);
        let mut min = f32::MAX;
        let mut max = f32::MIN;
        for i in 0..2000 {
            let t = i as f32 * 0.013;
            let s = noise.sample(t, t * 0.5, 0.25);
            assert!((-1.0..=1.0).contains(&s));
            min = min.min(s);
            max = max.max(s);
        }
        assert!(max - min > 0.1, "noise should not be flat");
    }

    #[test]
    fn is_continuous() {
        let noise = shake_field(DEFAULT_NOISE_SEED);
        let a = noise.sample(1.2345, 0.0, 0.0);
        let b = noise.sample(1.2346, 0.0, 0.0);
        assert!((a - b).abs() < 1e-2);
    }
}
