use super::constants::*;
use rand::prelude::*;

/// Deterministic layered sine/cosine noise.
///
/// Not a canonical gradient noise: the original effect was tuned against
/// this exact waveform mix, and nothing depends on bit-exact values, only
/// on the bounded, organically turbulent shape. Each octave damps its
/// amplitude geometrically and the sum is normalized by the accumulated
/// amplitude, so output stays within [-1, 1] for inputs of any magnitude.
#[derive(Clone, Debug)]
pub struct NoiseField {
    seed: f32,
    octaves: u32,
}

impl NoiseField {
    pub fn new(seed: f32, octaves: u32) -> Self {
        Self { seed, octaves }
    }

    pub fn from_rng(rng: &mut impl Rng, octaves: u32) -> Self {
        Self::new(rng.gen::<f32>() * NOISE_SEED_SPAN, octaves)
    }

    /// Pick a fresh seed; called once per ring cycle.
    pub fn reseed(&mut self, rng: &mut impl Rng) {
        self.seed = rng.gen::<f32>() * NOISE_SEED_SPAN;
    }

    pub fn seed(&self) -> f32 {
        self.seed
    }

    /// Scalar noise at (x, y, z); z is typically the animation clock.
    pub fn sample(&self, x: f32, y: f32, z: f32) -> f32 {
        let mut value = 0.0_f32;
        let mut amplitude = 1.0_f32;
        let mut frequency = 1.0_f32;
        let mut max_value = 0.0_f32;

        for _ in 0..self.octaves {
            let nx = x * frequency * NOISE_INPUT_SCALE + self.seed;
            let ny = y * frequency * NOISE_INPUT_SCALE;
            let nz = z * 0.25;

            value += (nx + nz).sin() * (ny - nz * 0.6).cos() * amplitude;
            value += ((nx + ny) * 0.6 + nz * 1.1).sin() * amplitude * 0.4;
            value += (nx * 1.5 - ny * 0.8 + nz * 0.7).cos() * amplitude * 0.25;

            max_value += amplitude * 1.65;
            amplitude *= NOISE_AMPLITUDE_DAMPING;
            frequency *= NOISE_LACUNARITY;
        }

        value / max_value
    }

    /// Ring radius at `angle`, perturbed by three spatial scales of the
    /// field: large-scale billowing, medium detail, fine turbulence.
    pub fn distorted_radius(&self, angle: f32, base_radius: f32, time: f32) -> f32 {
        let large = self.sample(angle.cos() * 60.0, angle.sin() * 60.0, time);
        let medium = self.sample(
            (angle * 2.0).cos() * 40.0,
            (angle * 2.0).sin() * 40.0,
            time * 0.6,
        );
        let fine = self.sample(
            (angle * 0.5).cos() * 100.0,
            (angle * 0.5).sin() * 100.0,
            time * 0.35,
        );

        base_radius
            + large * DISTORT_LARGE_WEIGHT
            + medium * DISTORT_MEDIUM_WEIGHT
            + fine * DISTORT_FINE_WEIGHT
    }
}

/// Standard normal sample via the Box-Muller transform.
pub fn gaussian(rng: &mut impl Rng) -> f32 {
    let mut u = 0.0_f32;
    let mut v = 0.0_f32;
    while u == 0.0 {
        u = rng.gen::<f32>();
    }
    while v == 0.0 {
        v = rng.gen::<f32>();
    }
    (-2.0 * u.ln()).sqrt() * (std::f32::consts::TAU * v).cos()
}
