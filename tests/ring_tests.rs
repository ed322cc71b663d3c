// Host-side tests for the smoke ring simulation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod sim {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod noise {
        include!("../src/core/noise.rs");
    }
    pub mod ring {
        include!("../src/core/ring.rs");
    }
}

use sim::constants::*;
use sim::ring::*;

fn make_ring(width: f32, height: f32) -> SmokeRing {
    SmokeRing::new(RingConfig::default(), width, height, 42)
}

#[test]
fn fade_opacity_bounded_and_monotonic() {
    let mut prev = f32::INFINITY;
    for i in 0..=1000 {
        let progress = i as f32 / 1000.0;
        let o = fade_opacity(progress);
        assert!((0.0..=1.0).contains(&o), "opacity {o} out of range at {progress}");
        assert!(o <= prev, "opacity not non-increasing at {progress}");
        prev = o;
    }
}

#[test]
fn fade_opacity_clamps_out_of_range_progress() {
    assert_eq!(fade_opacity(0.0), 1.0);
    assert_eq!(fade_opacity(1.0), 0.0);
    // past full extent or before start must not produce NaN
    assert_eq!(fade_opacity(1.5), 0.0);
    assert_eq!(fade_opacity(-0.5), 1.0);
}

#[test]
fn max_radius_follows_viewport_diagonal() {
    let ring = make_ring(800.0, 600.0);
    // 0.58 * hypot(800, 600) = 0.58 * 1000
    assert!((ring.ring.max_radius - 580.0).abs() < 1e-3);

    let mut ring = make_ring(800.0, 600.0);
    ring.resize(1920.0, 1080.0);
    let expected = MAX_RADIUS_SCALE * (1920.0_f32 * 1920.0 + 1080.0 * 1080.0).sqrt();
    assert!((ring.ring.max_radius - expected).abs() < 1e-2);
}

#[test]
fn resize_preserves_particle_and_ring_state() {
    let mut ring = make_ring(800.0, 600.0);
    for _ in 0..50 {
        ring.advance();
    }
    let radius_before = ring.ring.radius;
    let offsets: Vec<f32> = ring.particles().iter().map(|p| p.radius_offset).collect();
    let glyphs: Vec<char> = ring.particles().iter().map(|p| p.glyph).collect();

    ring.resize(2560.0, 1440.0);

    assert_eq!(ring.ring.radius, radius_before);
    for (i, p) in ring.particles().iter().enumerate() {
        assert_eq!(p.radius_offset, offsets[i]);
        assert_eq!(p.glyph, glyphs[i]);
    }
}

#[test]
fn hundred_ticks_match_closed_form() {
    let mut ring = make_ring(800.0, 600.0);
    for _ in 0..100 {
        ring.advance();
    }
    let expected = INITIAL_RADIUS + 100.0 * EXPANSION_SPEED;
    assert!(
        (ring.ring.radius - expected).abs() < 1e-3,
        "radius {} != {}",
        ring.ring.radius,
        expected
    );
    let expected_opacity = fade_opacity(ring.ring.radius / ring.ring.max_radius);
    assert!((ring.ring.opacity - expected_opacity).abs() < 1e-6);
}

#[test]
fn full_cycle_resets_on_the_expected_tick() {
    let mut ring = make_ring(800.0, 600.0);
    let ticks =
        ((ring.ring.max_radius - INITIAL_RADIUS) / EXPANSION_SPEED).ceil() as usize;

    for _ in 0..ticks - 1 {
        ring.advance();
    }
    assert!(ring.ring.radius > INITIAL_RADIUS, "reset too early");
    assert!(ring.ring.radius < ring.ring.max_radius);

    ring.advance();
    assert_eq!(ring.ring.radius, INITIAL_RADIUS);
    assert_eq!(ring.ring.opacity, 1.0);
}

#[test]
fn cycle_reset_rerolls_particle_texture() {
    let mut ring = make_ring(800.0, 600.0);
    let glyphs_before: Vec<char> = ring.particles().iter().map(|p| p.glyph).collect();

    let ticks =
        ((ring.ring.max_radius - INITIAL_RADIUS) / EXPANSION_SPEED).ceil() as usize;
    for _ in 0..ticks {
        ring.advance();
    }

    // 700 glyph re-rolls from a 15-symbol alphabet will not all land on
    // their previous value
    let changed = ring
        .particles()
        .iter()
        .zip(&glyphs_before)
        .filter(|(p, g)| p.glyph != **g)
        .count();
    assert!(changed > 0, "no particle was rerolled on cycle reset");
}

#[test]
fn brightness_never_drops_below_floor() {
    let mut ring = make_ring(800.0, 600.0);
    for _ in 0..5000 {
        ring.advance();
        for p in ring.particles() {
            assert!(
                p.brightness >= BRIGHTNESS_FLOOR,
                "brightness {} under floor",
                p.brightness
            );
            assert!(p.brightness <= 1.0);
        }
    }
}

#[test]
fn particle_pool_is_fixed_and_evenly_spaced() {
    let mut ring = make_ring(800.0, 600.0);
    assert_eq!(ring.particles().len(), PARTICLE_COUNT);

    for (i, p) in ring.particles().iter().enumerate() {
        let expected = i as f32 / PARTICLE_COUNT as f32 * std::f32::consts::TAU;
        assert!((p.base_angle - expected).abs() < 1e-5);
    }

    for _ in 0..200 {
        ring.advance();
    }
    assert_eq!(ring.particles().len(), PARTICLE_COUNT, "pool size changed");
}

#[test]
fn density_falloff_dims_particles_far_from_the_ring() {
    let ring = make_ring(4000.0, 4000.0);

    let base = Particle {
        base_angle: 0.0,
        angle: 0.0,
        radius_offset: 0.0,
        glyph: '●',
        size: 10.0,
        brightness: 1.0,
        flicker_phase: 0.0,
        flicker_speed: 0.5,
        drift_phase: 0.0,
        drift_speed: 0.2,
        drift_amount: 20.0,
        noise_offset_x: 100.0,
        noise_offset_y: 200.0,
    };
    let mut far = base.clone();
    far.radius_offset = 150.0;

    let near_inst = ring.particle_instance(&base).expect("near particle visible");
    match ring.particle_instance(&far) {
        Some(inst) => assert!(inst.alpha < near_inst.alpha),
        None => {} // dimmed below the visibility threshold entirely
    }
}

#[test]
fn extreme_radius_offset_is_culled() {
    let ring = make_ring(4000.0, 4000.0);
    let p = Particle {
        base_angle: 0.0,
        angle: 0.0,
        radius_offset: 600.0,
        glyph: '●',
        size: 10.0,
        brightness: 1.0,
        flicker_phase: 0.0,
        flicker_speed: 0.5,
        drift_phase: 0.0,
        drift_speed: 0.2,
        drift_amount: 20.0,
        noise_offset_x: 100.0,
        noise_offset_y: 200.0,
    };
    // density term is e^(-600^2/2800), effectively zero
    assert!(ring.particle_instance(&p).is_none());
}

#[test]
fn visible_particles_report_sane_draw_parameters() {
    let mut ring = make_ring(1280.0, 720.0);
    for _ in 0..50 {
        ring.advance();
    }
    let mut seen = 0;
    for inst in ring.visible_particles() {
        seen += 1;
        assert!(inst.alpha >= ALPHA_VISIBILITY_MIN);
        assert!(inst.alpha <= 1.0 + 1e-6);
        assert!(inst.position.x >= -OFFSCREEN_MARGIN);
        assert!(inst.position.x <= 1280.0 + OFFSCREEN_MARGIN);
        assert!(inst.position.y >= -OFFSCREEN_MARGIN);
        assert!(inst.position.y <= 720.0 + OFFSCREEN_MARGIN);
        assert!(inst.gray as f32 >= PARTICLE_GRAY_BASE);
        assert!(RING_GLYPHS.contains(inst.glyph));
    }
    assert!(seen > 0, "expected some visible particles mid-cycle");
}
