use super::constants::*;
use rand::prelude::*;

/// Tunables for the hacking shockwave, fixed at construction.
#[derive(Clone, Debug)]
pub struct ShockwaveConfig {
    pub ring_interval: u64,
    pub particles_per_ring: usize,
    pub expansion_speed: f32,
    pub spawn_radius: f32,
    pub glyphs: Vec<char>,
}

impl Default for ShockwaveConfig {
    fn default() -> Self {
        Self {
            ring_interval: SHOCKWAVE_RING_INTERVAL,
            particles_per_ring: SHOCKWAVE_PARTICLES_PER_RING,
            expansion_speed: SHOCKWAVE_SPEED,
            spawn_radius: SHOCKWAVE_SPAWN_RADIUS,
            glyphs: SHOCKWAVE_GLYPHS.chars().collect(),
        }
    }
}

/// Life stage of a spark: white-hot leading edge, cyan trail, then a
/// quick fade through deep blue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SparkStage {
    Flash,
    Trail,
    Fade,
}

/// One expanding code glyph. The glyph itself is re-rolled every tick for
/// the rapid character-switching look.
#[derive(Clone, Debug)]
pub struct Spark {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub life: u32,
    pub glyph: char,
    pub size: f32,
    pub alpha: f32,
}

impl Spark {
    pub fn stage(&self) -> SparkStage {
        if self.life < SPARK_FLASH_END {
            SparkStage::Flash
        } else if self.life < SPARK_TRAIL_END {
            SparkStage::Trail
        } else {
            SparkStage::Fade
        }
    }
}

/// Periodic bursts of radially expanding sparks. Unlike the smoke ring's
/// fixed pool, the spark collection grows on each burst and shrinks as
/// sparks die or leave the screen; steady state is bounded by spawn rate
/// times lifetime.
pub struct Shockwave {
    sparks: Vec<Spark>,
    frame: u64,
    width: f32,
    height: f32,
    config: ShockwaveConfig,
    rng: StdRng,
}

impl Shockwave {
    pub fn new(config: ShockwaveConfig, width: f32, height: f32, seed: u64) -> Self {
        Self {
            sparks: Vec::new(),
            frame: 0,
            width,
            height,
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn sparks(&self) -> &[Spark] {
        &self.sparks
    }

    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    pub fn advance(&mut self) {
        self.frame += 1;
        if self.frame % self.config.ring_interval == 0 {
            self.spawn_ring();
        }

        let width = self.width;
        let height = self.height;
        for spark in &mut self.sparks {
            spark.life += 1;
            spark.x += spark.vx;
            spark.y += spark.vy;
            spark.glyph = *self.config.glyphs.choose(&mut self.rng).unwrap_or(&'0');
            spark.alpha = match spark.stage() {
                SparkStage::Flash => SPARK_FLASH_ALPHA,
                SparkStage::Trail => SPARK_TRAIL_ALPHA,
                SparkStage::Fade => (spark.alpha - SPARK_FADE_STEP).max(0.0),
            };
        }
        self.sparks.retain(|s| {
            s.alpha > 0.0
                && s.x >= -SHOCKWAVE_MARGIN
                && s.x <= width + SHOCKWAVE_MARGIN
                && s.y >= -SHOCKWAVE_MARGIN
                && s.y <= height + SHOCKWAVE_MARGIN
        });
    }

    /// One ring of sparks in a thick band around the center, velocity
    /// pure radial.
    fn spawn_ring(&mut self) {
        let center_x = self.width / 2.0;
        let center_y = self.height / 2.0;
        let n = self.config.particles_per_ring;

        for i in 0..n {
            let angle = std::f32::consts::TAU * i as f32 / n as f32;
            let r = self.config.spawn_radius
                + (self.rng.gen::<f32>() - 0.5) * SHOCKWAVE_SPAWN_JITTER;
            self.sparks.push(Spark {
                x: center_x + angle.cos() * r,
                y: center_y + angle.sin() * r,
                vx: angle.cos() * self.config.expansion_speed,
                vy: angle.sin() * self.config.expansion_speed,
                life: 0,
                glyph: *self.config.glyphs.choose(&mut self.rng).unwrap_or(&'0'),
                size: SHOCKWAVE_SIZE_MIN + self.rng.gen::<f32>() * SHOCKWAVE_SIZE_SPAN,
                alpha: SPARK_FLASH_ALPHA,
            });
        }
    }
}
