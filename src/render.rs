use crate::constants::*;
use crate::core::constants::{GLOW_LAYER_RADIUS_STEP, GLOW_LAYER_TIME_OFFSET, OUTLINE_SEGMENTS};
use crate::core::ring::SmokeRing;
use crate::core::shockwave::{Shockwave, SparkStage};
use crate::dom;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const FULL_BLEED_CSS: &str = "position: absolute; top: 0; left: 0; width: 100%; height: 100%; pointer-events: none; z-index: 0;";

/// A canvas plus its 2D context. The only fallible step is acquiring the
/// context at construction; after that every frame is plain drawing calls.
pub struct Surface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl Surface {
    /// Create a full-bleed canvas inside `container` (smoke ring mount).
    pub fn attach_to(container: &web::Element) -> anyhow::Result<Self> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let canvas: web::HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .dyn_into()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        canvas
            .set_attribute("style", FULL_BLEED_CSS)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        container
            .append_child(&canvas)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Self::from_canvas(canvas)
    }

    /// Adopt an existing canvas element (shockwave mount).
    pub fn from_canvas(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { canvas, ctx })
    }

    /// Size the backing store to the window inner dimensions.
    pub fn sync_viewport_size(&self) -> (f32, f32) {
        let (w, h) = web::window()
            .map(|win| dom::viewport_size(&win))
            .unwrap_or((0.0, 0.0));
        self.canvas.set_width(w.max(1.0) as u32);
        self.canvas.set_height(h.max(1.0) as u32);
        (w, h)
    }

    pub fn render_smoke(&self, smoke: &SmokeRing) -> Result<(), JsValue> {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;

        self.ctx.set_fill_style_str(SMOKE_BACKGROUND_FILL);
        self.ctx.fill_rect(0.0, 0.0, w, h);

        self.draw_glow_layers(smoke);
        self.draw_leading_edge(smoke);
        self.draw_particles(smoke)?;
        self.draw_ambient(smoke, w, h)?;
        Ok(())
    }

    /// Concentric distorted outlines with decreasing opacity and
    /// increasing blur: the soft grayscale glow gradient.
    fn draw_glow_layers(&self, smoke: &SmokeRing) {
        let opacity = smoke.ring.opacity;
        for layer in 0..smoke.config().glow_layers {
            let li = layer as f32;
            let layer_opacity = opacity * (GLOW_OPACITY_BASE - li * GLOW_OPACITY_STEP);
            if layer_opacity <= 0.0 {
                continue;
            }
            let gray = (GLOW_GRAY_BASE - li * GLOW_GRAY_STEP).max(0.0) as u32;
            let line_width = (GLOW_LINE_WIDTH_BASE - li * GLOW_LINE_WIDTH_STEP).max(1.0);

            self.ctx.save();
            self.trace_outline(
                smoke,
                smoke.ring.radius + li * GLOW_LAYER_RADIUS_STEP,
                li * GLOW_LAYER_TIME_OFFSET,
            );
            self.ctx.set_stroke_style_str(&format!(
                "rgba({}, {}, {}, {})",
                gray,
                gray,
                gray + 10,
                layer_opacity
            ));
            self.ctx.set_line_width(line_width as f64);
            self.ctx
                .set_filter(&format!("blur({}px)", GLOW_BLUR_BASE + li * GLOW_BLUR_STEP));
            self.ctx.stroke();
            self.ctx.restore();
        }
    }

    /// Brighter, barely blurred outline at the exact ring radius.
    fn draw_leading_edge(&self, smoke: &SmokeRing) {
        self.ctx.save();
        self.trace_outline(smoke, smoke.ring.radius, 0.0);
        self.ctx.set_stroke_style_str(&format!(
            "rgba(255, 255, 255, {})",
            smoke.ring.opacity * EDGE_OPACITY_FACTOR
        ));
        self.ctx.set_line_width(EDGE_LINE_WIDTH);
        self.ctx.set_filter(EDGE_BLUR);
        self.ctx.stroke();
        self.ctx.restore();
    }

    fn trace_outline(&self, smoke: &SmokeRing, layer_radius: f32, time_offset: f32) {
        self.ctx.begin_path();
        for i in 0..=OUTLINE_SEGMENTS {
            let angle = i as f32 / OUTLINE_SEGMENTS as f32 * std::f32::consts::TAU;
            let p = smoke.outline_point(angle, layer_radius, time_offset);
            if i == 0 {
                self.ctx.move_to(p.x as f64, p.y as f64);
            } else {
                self.ctx.line_to(p.x as f64, p.y as f64);
            }
        }
        self.ctx.close_path();
    }

    fn draw_particles(&self, smoke: &SmokeRing) -> Result<(), JsValue> {
        self.ctx.save();
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");

        let mut glyph_buf = [0u8; 4];
        for inst in smoke.visible_particles() {
            if inst.alpha > PARTICLE_GLOW_THRESHOLD {
                self.ctx.set_shadow_color(&format!(
                    "rgba(255, 255, 255, {})",
                    inst.alpha * PARTICLE_GLOW_ALPHA_FACTOR
                ));
                self.ctx.set_shadow_blur(PARTICLE_GLOW_BLUR);
            } else {
                self.ctx.set_shadow_blur(0.0);
            }
            self.ctx
                .set_font(&format!("{}px {}", inst.size, PARTICLE_FONT_FAMILY));
            self.ctx.set_fill_style_str(&format!(
                "rgba({}, {}, {}, {})",
                inst.gray, inst.gray, inst.gray, inst.alpha
            ));
            self.ctx.fill_text(
                inst.glyph.encode_utf8(&mut glyph_buf),
                inst.position.x as f64,
                inst.position.y as f64,
            )?;
        }

        self.ctx.restore();
        Ok(())
    }

    /// Faint radial gradient centered on the viewport.
    fn draw_ambient(&self, smoke: &SmokeRing, w: f64, h: f64) -> Result<(), JsValue> {
        let c = smoke.center();
        let gradient = self.ctx.create_radial_gradient(
            c.x as f64,
            c.y as f64,
            0.0,
            c.x as f64,
            c.y as f64,
            AMBIENT_RADIUS,
        )?;
        gradient.add_color_stop(0.0, AMBIENT_INNER_STOP)?;
        gradient.add_color_stop(1.0, "transparent")?;
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(0.0, 0.0, w, h);
        Ok(())
    }

    pub fn render_shockwave(&self, wave: &Shockwave) -> Result<(), JsValue> {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, w, h);

        self.ctx.save();
        // additive blending for the digital glow overlap
        self.ctx.set_global_composite_operation("lighter")?;
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");

        let mut glyph_buf = [0u8; 4];
        for spark in wave.sparks() {
            let (color, shadow_color, shadow_blur) = match spark.stage() {
                SparkStage::Flash => (SPARK_FLASH_COLOR, SPARK_FLASH_COLOR, SPARK_FLASH_SHADOW_BLUR),
                SparkStage::Trail => (SPARK_TRAIL_COLOR, SPARK_TRAIL_COLOR, SPARK_TRAIL_SHADOW_BLUR),
                SparkStage::Fade => (SPARK_FADE_COLOR, SPARK_TRAIL_COLOR, SPARK_TRAIL_SHADOW_BLUR),
            };
            self.ctx.set_global_alpha(spark.alpha as f64);
            self.ctx.set_fill_style_str(color);
            self.ctx.set_shadow_color(shadow_color);
            self.ctx.set_shadow_blur(shadow_blur);
            self.ctx
                .set_font(&format!("bold {}px monospace", spark.size));
            self.ctx.fill_text(
                spark.glyph.encode_utf8(&mut glyph_buf),
                spark.x as f64,
                spark.y as f64,
            )?;
        }

        self.ctx.restore();
        Ok(())
    }
}
