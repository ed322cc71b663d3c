// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod sim_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use sim_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn ring_constants_are_within_reasonable_bounds() {
    assert!(INITIAL_RADIUS > 0.0);
    assert!(EXPANSION_SPEED > 0.0);
    assert!(MAX_RADIUS_SCALE > 0.0 && MAX_RADIUS_SCALE < 1.0);
    assert!(FADE_RADIUS_EXP > 0.0);
    assert!(FADE_EASE_EXP > 0.0);
    assert!(TIME_STEP > 0.0);
    assert!(PARTICLE_COUNT > 0);
    assert!(NOISE_OCTAVES >= 1);
    assert!(!RING_GLYPHS.is_empty());
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn brightness_dynamics_are_consistent() {
    // decay must shrink, flicker jumps must land above the floor
    assert!(BRIGHTNESS_DECAY > 0.0 && BRIGHTNESS_DECAY < 1.0);
    assert!(BRIGHTNESS_FLOOR > 0.0);
    assert!(FLICKER_JUMP_MIN > BRIGHTNESS_FLOOR);
    assert!(BRIGHTNESS_INIT_MIN >= BRIGHTNESS_FLOOR);
    assert!(BRIGHTNESS_INIT_MIN + BRIGHTNESS_INIT_SPAN <= 1.0);
    assert!(FLICKER_JUMP_MIN + FLICKER_JUMP_SPAN <= 1.0);
    assert!((0.0..=1.0).contains(&FLICKER_PROBABILITY));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn noise_damping_keeps_output_bounded() {
    assert!(NOISE_AMPLITUDE_DAMPING > 0.0 && NOISE_AMPLITUDE_DAMPING < 1.0);
    assert!(NOISE_LACUNARITY > 1.0);
}

#[test]
fn every_glow_layer_keeps_positive_opacity_and_width() {
    for layer in 0..GLOW_LAYER_COUNT {
        let li = layer as f32;
        assert!(
            GLOW_OPACITY_BASE - li * GLOW_OPACITY_STEP > 0.0,
            "layer {layer} opacity factor non-positive"
        );
        assert!(
            GLOW_LINE_WIDTH_BASE - li * GLOW_LINE_WIDTH_STEP > 0.0,
            "layer {layer} stroke width non-positive"
        );
        assert!(GLOW_GRAY_BASE - li * GLOW_GRAY_STEP > 0.0);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_tint_stays_in_byte_range() {
    // brightness is clamped to [floor, 1.0]
    let max_gray = PARTICLE_GRAY_BASE + PARTICLE_GRAY_SPAN;
    assert!(max_gray <= 255.0);
    assert!(PARTICLE_GRAY_BASE + BRIGHTNESS_FLOOR * PARTICLE_GRAY_SPAN >= 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn shockwave_stages_are_ordered() {
    assert!(SPARK_FLASH_END < SPARK_TRAIL_END);
    assert!(SPARK_FADE_STEP > 0.0);
    assert!(SPARK_TRAIL_ALPHA <= SPARK_FLASH_ALPHA);
    assert!(SHOCKWAVE_RING_INTERVAL > 0);
    assert!(SHOCKWAVE_PARTICLES_PER_RING > 0);
    assert!(SHOCKWAVE_SPEED > 0.0);
    assert!(!SHOCKWAVE_GLYPHS.is_empty());
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn frame_budget_thresholds_are_sane() {
    // the warning threshold sits past two 60fps frames
    assert!(SLOW_FRAME_MS >= 2.0 * 16.0);
    assert!(SLOW_FRAME_LOG_EVERY > 0);
    assert!((0.0..=1.0).contains(&REVEAL_THRESHOLD));
}
