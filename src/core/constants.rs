// Simulation tuning constants for both canvas effects.
//
// These express intended behavior (tick increments, decay rates, clamp
// limits) and keep magic numbers out of the update loops.
//
// No inner doc comments here: this file is include!-ed by the host tests.

// ---------------- Smoke ring ----------------

// Ring geometry
pub const INITIAL_RADIUS: f32 = 80.0;
pub const EXPANSION_SPEED: f32 = 1.2; // px per tick
pub const MAX_RADIUS_SCALE: f32 = 0.58; // fraction of the viewport diagonal

// Fade curve: opacity = (1 - progress^RADIUS_EXP)^EASE_EXP
pub const FADE_RADIUS_EXP: f32 = 1.3;
pub const FADE_EASE_EXP: f32 = 0.55;

// Internal clock advance per tick
pub const TIME_STEP: f32 = 0.006;

// Particle pool
pub const PARTICLE_COUNT: usize = 700;
pub const RADIUS_OFFSET_SIGMA: f32 = 80.0; // Gaussian spread around the ring
pub const PARTICLE_SIZE_MIN: f32 = 6.0;
pub const PARTICLE_SIZE_SPAN: f32 = 10.0;
pub const NOISE_OFFSET_SPAN: f32 = 500.0; // decorrelates per-particle jitter

// Brightness dynamics
pub const BRIGHTNESS_INIT_MIN: f32 = 0.3;
pub const BRIGHTNESS_INIT_SPAN: f32 = 0.7;
pub const BRIGHTNESS_FLOOR: f32 = 0.2;
pub const BRIGHTNESS_DECAY: f32 = 0.9985; // per tick
pub const FLICKER_PROBABILITY: f32 = 0.003; // per particle per tick
pub const FLICKER_JUMP_MIN: f32 = 0.4;
pub const FLICKER_JUMP_SPAN: f32 = 0.6;

// Sideways drift (smoke dispersion)
pub const DRIFT_SPEED_MIN: f32 = 0.1;
pub const DRIFT_SPEED_SPAN: f32 = 0.3;
pub const DRIFT_AMOUNT_MIN: f32 = 10.0;
pub const DRIFT_AMOUNT_SPAN: f32 = 30.0;
pub const DRIFT_TIME_FACTOR: f32 = 10.0;
pub const DRIFT_ANGLE_SCALE: f32 = 0.003; // drift units -> radians

// Flicker oscillation applied at draw time
pub const FLICKER_OSC_BASE: f32 = 0.75;
pub const FLICKER_OSC_AMPLITUDE: f32 = 0.25;
pub const FLICKER_TIME_FACTOR: f32 = 25.0;

// Multi-octave noise field
pub const NOISE_OCTAVES: u32 = 4;
pub const NOISE_SEED_SPAN: f32 = 1000.0;
pub const NOISE_INPUT_SCALE: f32 = 0.015;
pub const NOISE_AMPLITUDE_DAMPING: f32 = 0.45;
pub const NOISE_LACUNARITY: f32 = 2.1;

// Three spatial scales feeding the distorted ring silhouette
pub const DISTORT_LARGE_WEIGHT: f32 = 90.0;
pub const DISTORT_MEDIUM_WEIGHT: f32 = 50.0;
pub const DISTORT_FINE_WEIGHT: f32 = 30.0;

// Per-particle positional jitter from two extra noise samples
pub const PARTICLE_JITTER_WEIGHT: f32 = 35.0;

// Visibility culling
pub const OFFSCREEN_MARGIN: f32 = 50.0;
pub const ALPHA_VISIBILITY_MIN: f32 = 0.03;
pub const DENSITY_FALLOFF_DIVISOR: f32 = 2800.0;

// Glyph tint: gray = GRAY_BASE + brightness * GRAY_SPAN
pub const PARTICLE_GRAY_BASE: f32 = 200.0;
pub const PARTICLE_GRAY_SPAN: f32 = 55.0;

// Glow outline layers (consumed by the renderer, validated in tests)
pub const GLOW_LAYER_COUNT: usize = 5;
pub const GLOW_LAYER_RADIUS_STEP: f32 = 18.0;
pub const GLOW_LAYER_TIME_OFFSET: f32 = 0.25;
pub const OUTLINE_SEGMENTS: u32 = 140;

// Circle/dot texture alphabet
pub const RING_GLYPHS: &str = "·•○◦◯◌◎●◉⊙⊚⊛⦿⊜⊝";

// ---------------- Hacking shockwave ----------------

pub const SHOCKWAVE_RING_INTERVAL: u64 = 30; // frames between bursts
pub const SHOCKWAVE_PARTICLES_PER_RING: usize = 60;
pub const SHOCKWAVE_SPEED: f32 = 8.0; // px per tick, pure radial
pub const SHOCKWAVE_SPAWN_RADIUS: f32 = 200.0;
pub const SHOCKWAVE_SPAWN_JITTER: f32 = 40.0; // thickness of the spawn band
pub const SHOCKWAVE_SIZE_MIN: f32 = 14.0;
pub const SHOCKWAVE_SIZE_SPAN: f32 = 6.0;
pub const SHOCKWAVE_MARGIN: f32 = 100.0; // offscreen culling margin

// Life-stage boundaries (ticks) and alphas
pub const SPARK_FLASH_END: u32 = 15;
pub const SPARK_TRAIL_END: u32 = 40;
pub const SPARK_FLASH_ALPHA: f32 = 1.0;
pub const SPARK_TRAIL_ALPHA: f32 = 0.8;
pub const SPARK_FADE_STEP: f32 = 0.05; // alpha lost per tick while fading

pub const SHOCKWAVE_GLYPHS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789$#%&@*<>[]{}";
