use super::constants::*;
use super::noise::{gaussian, NoiseField};
use glam::Vec2;
use rand::prelude::*;

/// Tunables fixed at construction. `Default` carries the values the
/// effect was designed around; callers may override any of them.
#[derive(Clone, Debug)]
pub struct RingConfig {
    pub particle_count: usize,
    pub expansion_speed: f32,
    pub initial_radius: f32,
    pub max_radius_scale: f32,
    pub octaves: u32,
    pub glow_layers: usize,
    pub glyphs: Vec<char>,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            expansion_speed: EXPANSION_SPEED,
            initial_radius: INITIAL_RADIUS,
            max_radius_scale: MAX_RADIUS_SCALE,
            octaves: NOISE_OCTAVES,
            glow_layers: GLOW_LAYER_COUNT,
            glyphs: RING_GLYPHS.chars().collect(),
        }
    }
}

/// The single expanding contour. Reset to the initial radius when it
/// exceeds `max_radius`, giving a perpetual one-ring pulse.
#[derive(Clone, Copy, Debug)]
pub struct Ring {
    pub radius: f32,
    pub max_radius: f32,
    pub opacity: f32,
}

/// One textured point sampled around the ring, mutated in place every
/// tick. No allocation after construction.
#[derive(Clone, Debug)]
pub struct Particle {
    pub base_angle: f32,
    pub angle: f32,
    pub radius_offset: f32,
    pub glyph: char,
    pub size: f32,
    pub brightness: f32,
    pub flicker_phase: f32,
    pub flicker_speed: f32,
    pub drift_phase: f32,
    pub drift_speed: f32,
    pub drift_amount: f32,
    pub noise_offset_x: f32,
    pub noise_offset_y: f32,
}

/// Resolved draw parameters for one visible particle.
#[derive(Clone, Copy, Debug)]
pub struct ParticleInstance {
    pub position: Vec2,
    pub alpha: f32,
    pub size: f32,
    pub glyph: char,
    pub gray: u8,
}

/// Smooth ease-out fade: fully visible near the start of the cycle,
/// fading faster toward full extent. Progress is clamped so the curve
/// never sees a negative base.
pub fn fade_opacity(progress: f32) -> f32 {
    let p = progress.clamp(0.0, 1.0);
    (1.0 - p.powf(FADE_RADIUS_EXP)).max(0.0).powf(FADE_EASE_EXP)
}

/// Owns the ring, the fixed particle pool, and the noise field; advances
/// once per animation frame.
pub struct SmokeRing {
    pub ring: Ring,
    particles: Vec<Particle>,
    noise: NoiseField,
    config: RingConfig,
    time: f32,
    width: f32,
    height: f32,
    center: Vec2,
    rng: StdRng,
}

impl SmokeRing {
    pub fn new(config: RingConfig, width: f32, height: f32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let noise = NoiseField::from_rng(&mut rng, config.octaves);

        let n = config.particle_count;
        let particles = (0..n)
            .map(|i| {
                let angle = (i as f32 / n as f32) * std::f32::consts::TAU;
                Particle {
                    base_angle: angle,
                    angle,
                    radius_offset: gaussian(&mut rng) * RADIUS_OFFSET_SIGMA,
                    glyph: *config.glyphs.choose(&mut rng).unwrap_or(&'·'),
                    size: PARTICLE_SIZE_MIN + rng.gen::<f32>() * PARTICLE_SIZE_SPAN,
                    brightness: BRIGHTNESS_INIT_MIN + rng.gen::<f32>() * BRIGHTNESS_INIT_SPAN,
                    flicker_phase: rng.gen::<f32>() * std::f32::consts::TAU,
                    flicker_speed: 0.3 + rng.gen::<f32>() * 0.7,
                    drift_phase: rng.gen::<f32>() * std::f32::consts::TAU,
                    drift_speed: DRIFT_SPEED_MIN + rng.gen::<f32>() * DRIFT_SPEED_SPAN,
                    drift_amount: DRIFT_AMOUNT_MIN + rng.gen::<f32>() * DRIFT_AMOUNT_SPAN,
                    noise_offset_x: rng.gen::<f32>() * NOISE_OFFSET_SPAN,
                    noise_offset_y: rng.gen::<f32>() * NOISE_OFFSET_SPAN,
                }
            })
            .collect();

        let mut this = Self {
            ring: Ring {
                radius: config.initial_radius,
                max_radius: 0.0,
                opacity: 1.0,
            },
            particles,
            noise,
            config,
            time: 0.0,
            width,
            height,
            center: Vec2::ZERO,
            rng,
        };
        this.resize(width, height);
        this
    }

    /// Recompute derived geometry on a viewport change. Ring and particle
    /// state are untouched, so this is safe between any two frames even
    /// mid-cycle.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.center = Vec2::new(width / 2.0, height / 2.0);
        self.ring.max_radius = self.config.max_radius_scale * width.hypot(height);
    }

    pub fn config(&self) -> &RingConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// One simulation tick. The cadence is the display refresh; increments
    /// are fixed per tick rather than dt-scaled, matching the tuning.
    pub fn advance(&mut self) {
        self.time += TIME_STEP;
        self.ring.radius += self.config.expansion_speed;

        let progress = self.ring.radius / self.ring.max_radius;
        self.ring.opacity = fade_opacity(progress);

        if self.ring.radius >= self.ring.max_radius {
            self.begin_cycle();
        }

        for p in &mut self.particles {
            let drift = (self.time * p.drift_speed * DRIFT_TIME_FACTOR + p.drift_phase).sin()
                * p.drift_amount;
            p.angle = p.base_angle + drift * DRIFT_ANGLE_SCALE;

            if self.rng.gen::<f32>() < FLICKER_PROBABILITY {
                p.brightness = FLICKER_JUMP_MIN + self.rng.gen::<f32>() * FLICKER_JUMP_SPAN;
            }
            p.brightness = (p.brightness * BRIGHTNESS_DECAY).max(BRIGHTNESS_FLOOR);
        }
    }

    /// Birth of a new ring cycle: fresh noise seed, fresh glyphs and
    /// brightness across the pool.
    fn begin_cycle(&mut self) {
        self.ring.radius = self.config.initial_radius;
        self.ring.opacity = 1.0;
        self.noise.reseed(&mut self.rng);
        for p in &mut self.particles {
            p.glyph = *self.config.glyphs.choose(&mut self.rng).unwrap_or(&'·');
            p.brightness = BRIGHTNESS_INIT_MIN + self.rng.gen::<f32>() * BRIGHTNESS_INIT_SPAN;
        }
    }

    /// Vertex of a distorted outline at `angle`, for a glow layer offset
    /// from the ring radius by `layer_radius` and phase-shifted in time.
    pub fn outline_point(&self, angle: f32, layer_radius: f32, time_offset: f32) -> Vec2 {
        let r = self
            .noise
            .distorted_radius(angle, layer_radius, self.time + time_offset);
        self.center + Vec2::new(angle.cos(), angle.sin()) * r
    }

    /// Resolve a particle to draw parameters, or `None` when it is
    /// offscreen (with margin) or below the visibility threshold.
    pub fn particle_instance(&self, p: &Particle) -> Option<ParticleInstance> {
        let particle_radius = self.ring.radius + p.radius_offset;

        let jitter_x = self
            .noise
            .sample(p.noise_offset_x, particle_radius * 0.04, self.time)
            * PARTICLE_JITTER_WEIGHT;
        let jitter_y = self
            .noise
            .sample(p.noise_offset_y, particle_radius * 0.04, self.time + 50.0)
            * PARTICLE_JITTER_WEIGHT;

        let distorted = self
            .noise
            .distorted_radius(p.angle, particle_radius, self.time);
        let x = self.center.x + p.angle.cos() * distorted + jitter_x;
        let y = self.center.y + p.angle.sin() * distorted + jitter_y;

        if x < -OFFSCREEN_MARGIN
            || x > self.width + OFFSCREEN_MARGIN
            || y < -OFFSCREEN_MARGIN
            || y > self.height + OFFSCREEN_MARGIN
        {
            return None;
        }

        // Particles far from the nominal ring radius are dimmer
        let dist = p.radius_offset.abs();
        let density = (-dist * dist / DENSITY_FALLOFF_DIVISOR).exp();

        let flicker = FLICKER_OSC_BASE
            + (self.time * p.flicker_speed * FLICKER_TIME_FACTOR + p.flicker_phase).sin()
                * FLICKER_OSC_AMPLITUDE;

        let alpha = self.ring.opacity * p.brightness * density * flicker;
        if alpha < ALPHA_VISIBILITY_MIN {
            return None;
        }

        let gray = (PARTICLE_GRAY_BASE + p.brightness * PARTICLE_GRAY_SPAN) as u8;
        Some(ParticleInstance {
            position: Vec2::new(x, y),
            alpha,
            size: p.size,
            glyph: p.glyph,
            gray,
        })
    }

    /// All particles that survive culling this frame, in pool order.
    pub fn visible_particles(&self) -> impl Iterator<Item = ParticleInstance> + '_ {
        self.particles.iter().filter_map(|p| self.particle_instance(p))
    }
}
