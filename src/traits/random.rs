use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Uniform draws used for pipe shape and twist.
/// Both ranges are half-open `[min, max)`; equal bounds yield `min`.
pub trait RandomSource {
    fn uniform_f32(&mut self, min: f32, max: f32) -> f32;

    fn uniform_usize(&mut self, min: usize, max: usize) -> usize;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn uniform_f32(&mut self, min: f32, max: f32) -> f32 {
        (**self).uniform_f32(min, max)
    }

    fn uniform_usize(&mut self, min: usize, max: usize) -> usize {
        (**self).uniform_usize(min, max)
    }
}

/// Adapts any `rand` generator
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng>(pub R);

impl RngSource<Pcg32> {
    pub fn seeded(seed: u64) -> Self {
        Self(Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn uniform_f32(&mut self, min: f32, max: f32) -> f32 {
        if max <= min {
            return min;
        }
        self.0.gen_range(min..max)
    }

    fn uniform_usize(&mut self, min: usize, max: usize) -> usize {
        if max <= min {
            return min;
        }
        self.0.gen_range(min..max)
    }
}

/// Always answers with the lower bound: minimum curve radius, minimum ring
/// count and zero twist. Handy for reproducible geometry.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowerBoundRandom;

impl RandomSource for LowerBoundRandom {
    fn uniform_f32(&mut self, min: f32, _max: f32) -> f32 {
        min
    }

    fn uniform_usize(&mut self, min: usize, _max: usize) -> usize {
        min
    }
}
