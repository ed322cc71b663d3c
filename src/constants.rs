// Render-side and page-wiring constants (colors, fonts, CSS, thresholds).
// Simulation tuning lives in `core::constants`.
// No inner doc comments here: this file is include!-ed by the host tests.

// Smoke ring surface
pub const SMOKE_BACKGROUND_FILL: &str = "rgba(5, 5, 8, 1)";
pub const PARTICLE_FONT_FAMILY: &str = "\"Fira Code\", \"Consolas\", monospace";

// Glow layer styling: opacity, stroke width, and blur all vary with the
// layer index to build a soft depth gradient in grayscale only.
pub const GLOW_OPACITY_BASE: f32 = 0.12;
pub const GLOW_OPACITY_STEP: f32 = 0.018;
pub const GLOW_GRAY_BASE: f32 = 220.0;
pub const GLOW_GRAY_STEP: f32 = 15.0;
pub const GLOW_LINE_WIDTH_BASE: f32 = 90.0;
pub const GLOW_LINE_WIDTH_STEP: f32 = 14.0;
pub const GLOW_BLUR_BASE: f32 = 28.0;
pub const GLOW_BLUR_STEP: f32 = 8.0;

// Sharp leading edge at the undampened ring radius
pub const EDGE_OPACITY_FACTOR: f32 = 0.2;
pub const EDGE_LINE_WIDTH: f64 = 3.0;
pub const EDGE_BLUR: &str = "blur(2px)";

// Particle glow kicks in above this alpha
pub const PARTICLE_GLOW_THRESHOLD: f32 = 0.3;
pub const PARTICLE_GLOW_BLUR: f64 = 10.0;
pub const PARTICLE_GLOW_ALPHA_FACTOR: f32 = 0.6;

// Ambient center fill
pub const AMBIENT_RADIUS: f64 = 200.0;
pub const AMBIENT_INNER_STOP: &str = "rgba(255, 255, 255, 0.01)";

// Shockwave stage palette: white leading edge -> cyan -> deep blue
pub const SPARK_FLASH_COLOR: &str = "#FFFFFF";
pub const SPARK_TRAIL_COLOR: &str = "#00CCFF";
pub const SPARK_FADE_COLOR: &str = "#3300FF";
pub const SPARK_FLASH_SHADOW_BLUR: f64 = 15.0;
pub const SPARK_TRAIL_SHADOW_BLUR: f64 = 5.0;

// Frame loop: warn when a frame blows well past the ~16ms budget,
// rate-limited so a slow machine does not flood the console.
pub const SLOW_FRAME_MS: f64 = 33.0;
pub const SLOW_FRAME_LOG_EVERY: u32 = 300;

// Page wiring
pub const HEADER_SCROLL_THRESHOLD: f64 = 100.0;
pub const MAGNETIC_PULL: f64 = 0.15;
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_SELECTOR: &str = ".reveal, .reveal-left, .reveal-right, .reveal-scale";
