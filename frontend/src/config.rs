use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Viewports narrower than this are treated as mobile.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

// Scroll reveal
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_BOTTOM_MARGIN: i32 = -100;
pub const VIDEO_ITEM_STEP_MS: u32 = 100;
pub const VIDEO_PREVIEW_DELAY_MS: u32 = 300;
pub const SCROLL_THROTTLE_MS: u32 = 20; // ~50 checks per second
pub const FALLBACK_VIEWPORT_RATIO: f64 = 0.9;
pub const FADE_UP_INITIAL_Y: &str = "25px";
pub const FADE_UP_DURATION: &str = "0.5s";

// Skills
pub const SKILLS_THRESHOLD: f64 = 0.2;
pub const SKILLS_BOTTOM_MARGIN: i32 = -100;
pub const SKILL_BAR_STEP_MS: u32 = 200;

// Stats
pub const STATS_THRESHOLD: f64 = 0.3;
pub const STATS_BOTTOM_MARGIN: i32 = -50;
pub const COUNTER_STEP_MS: u32 = 250;
pub const COUNTER_DURATION_MS: f64 = 2000.0;
