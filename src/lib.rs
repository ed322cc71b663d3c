#![cfg(target_arch = "wasm32")]
//! Decorative canvas effects for marketing landing pages: a noise-driven
//! expanding smoke ring, a "hacking shockwave" glyph burst, and the page's
//! DOM wiring. Nothing here is load-bearing; every entry point degrades to
//! a no-op when its mount point is missing.

use crate::core::ring::{RingConfig, SmokeRing};
use crate::core::shockwave::{Shockwave, ShockwaveConfig};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod frame;
mod page;
mod render;

thread_local! {
    static EFFECTS: Rc<RefCell<frame::FrameContext>> =
        Rc::new(RefCell::new(frame::FrameContext::default()));
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("landing-fx ready");
    Ok(())
}

/// Smoke ring tunables, exposed to JS. The constructor carries the values
/// the effect was designed around; pages override what they need.
#[wasm_bindgen(getter_with_clone)]
pub struct SmokeRingOptions {
    pub particle_count: u32,
    pub expansion_speed: f32,
    pub initial_radius: f32,
    pub max_radius_scale: f32,
    pub octaves: u32,
    pub glow_layers: u32,
    pub glyphs: String,
}

#[wasm_bindgen]
impl SmokeRingOptions {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let defaults = RingConfig::default();
        Self {
            particle_count: defaults.particle_count as u32,
            expansion_speed: defaults.expansion_speed,
            initial_radius: defaults.initial_radius,
            max_radius_scale: defaults.max_radius_scale,
            octaves: defaults.octaves,
            glow_layers: defaults.glow_layers as u32,
            glyphs: defaults.glyphs.iter().collect(),
        }
    }
}

impl Default for SmokeRingOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl SmokeRingOptions {
    fn to_config(&self) -> RingConfig {
        RingConfig {
            particle_count: self.particle_count as usize,
            expansion_speed: self.expansion_speed,
            initial_radius: self.initial_radius,
            max_radius_scale: self.max_radius_scale,
            octaves: self.octaves.max(1),
            glow_layers: self.glow_layers as usize,
            glyphs: if self.glyphs.is_empty() {
                RingConfig::default().glyphs
            } else {
                self.glyphs.chars().collect()
            },
        }
    }
}

/// Mount the smoke ring into the element with `container_id`. A missing
/// container disables the effect without failing the page.
#[wasm_bindgen]
pub fn mount_smoke_ring(
    container_id: &str,
    options: Option<SmokeRingOptions>,
) -> Result<(), JsValue> {
    let Some(document) = dom::window_document() else {
        return Ok(());
    };
    let Some(container) = document.get_element_by_id(container_id) else {
        log::warn!("smoke ring mount point #{container_id} missing; effect disabled");
        return Ok(());
    };

    let config = options.map(|o| o.to_config()).unwrap_or_default();
    let surface = render::Surface::attach_to(&container)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let (w, h) = surface.sync_viewport_size();
    let state = SmokeRing::new(config, w, h, rand::random());

    EFFECTS.with(|fx| fx.borrow_mut().smoke = Some(frame::SmokeEffect { state, surface }));
    log::info!("smoke ring mounted in #{container_id} ({w}x{h})");
    ensure_loop();
    Ok(())
}

/// Mount the hacking shockwave onto an existing canvas element.
#[wasm_bindgen]
pub fn mount_shockwave(canvas_id: &str) -> Result<(), JsValue> {
    let Some(document) = dom::window_document() else {
        return Ok(());
    };
    let Some(el) = document.get_element_by_id(canvas_id) else {
        log::warn!("shockwave canvas #{canvas_id} missing; effect disabled");
        return Ok(());
    };
    let Ok(canvas) = el.dyn_into::<web::HtmlCanvasElement>() else {
        log::warn!("#{canvas_id} is not a canvas; shockwave disabled");
        return Ok(());
    };

    let surface =
        render::Surface::from_canvas(canvas).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let (w, h) = surface.sync_viewport_size();
    let state = Shockwave::new(ShockwaveConfig::default(), w, h, rand::random());

    EFFECTS.with(|fx| fx.borrow_mut().shockwave = Some(frame::ShockwaveEffect { state, surface }));
    log::info!("shockwave mounted on #{canvas_id} ({w}x{h})");
    ensure_loop();
    Ok(())
}

/// Install scroll reveal, smooth anchors, header fade, card glow, magnetic
/// buttons, the reduced-motion fallback, and embed scaling. Selectors the
/// page does not have are skipped.
#[wasm_bindgen]
pub fn wire_page_effects() {
    let Some(window) = web::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    page::wire_all(&window, &document);
}

/// Start the shared requestAnimationFrame loop and resize listener once,
/// on first mount.
fn ensure_loop() {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return;
    }
    let ctx = EFFECTS.with(|fx| fx.clone());
    let resize_ctx = ctx.clone();
    dom::add_window_listener("resize", move || resize_ctx.borrow_mut().handle_resize());
    frame::start_loop(ctx);
}
