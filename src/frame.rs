use crate::constants::{SLOW_FRAME_LOG_EVERY, SLOW_FRAME_MS};
use crate::core::ring::SmokeRing;
use crate::core::shockwave::Shockwave;
use crate::render::Surface;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct SmokeEffect {
    pub state: SmokeRing,
    pub surface: Surface,
}

pub struct ShockwaveEffect {
    pub state: Shockwave,
    pub surface: Surface,
}

/// Everything the requestAnimationFrame tick touches. Both effect slots
/// are optional; a page may mount either or both.
pub struct FrameContext {
    pub smoke: Option<SmokeEffect>,
    pub shockwave: Option<ShockwaveEffect>,
    last_instant: Instant,
    slow_frames: u32,
}

impl Default for FrameContext {
    fn default() -> Self {
        Self {
            smoke: None,
            shockwave: None,
            last_instant: Instant::now(),
            slow_frames: 0,
        }
    }
}

impl FrameContext {
    /// Advance and redraw every mounted effect. Render errors are logged
    /// and never propagate; a bad frame must not stop the loop.
    pub fn frame(&mut self) {
        let now = Instant::now();
        let frame_ms = (now - self.last_instant).as_secs_f64() * 1000.0;
        self.last_instant = now;
        if frame_ms > SLOW_FRAME_MS {
            self.slow_frames += 1;
            if self.slow_frames % SLOW_FRAME_LOG_EVERY == 1 {
                log::warn!("slow frame: {:.1}ms ({} total)", frame_ms, self.slow_frames);
            }
        }

        if let Some(effect) = &mut self.smoke {
            effect.state.advance();
            if let Err(e) = effect.surface.render_smoke(&effect.state) {
                log::error!("smoke render error: {:?}", e);
            }
        }
        if let Some(effect) = &mut self.shockwave {
            effect.state.advance();
            if let Err(e) = effect.surface.render_shockwave(&effect.state) {
                log::error!("shockwave render error: {:?}", e);
            }
        }
    }

    /// Re-derive geometry on viewport change. Runs from the resize
    /// listener, which fires between frames; in-flight particle state is
    /// untouched.
    pub fn handle_resize(&mut self) {
        if let Some(effect) = &mut self.smoke {
            let (w, h) = effect.surface.sync_viewport_size();
            effect.state.resize(w, h);
        }
        if let Some(effect) = &mut self.shockwave {
            let (w, h) = effect.surface.sync_viewport_size();
            effect.state.resize(w, h);
        }
    }
}

/// Drive the context with requestAnimationFrame until the page goes away.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
