// Page timing and interaction tuning constants

pub const ONE_MIN_MS: i64 = 60 * 1000;
pub const MINUTES_PER_HOUR: i64 = 60;
pub const MINUTES_PER_DAY: i64 = 24 * 60;

// Elapsed-time display refresh period
pub const TIMER_REFRESH_MS: i32 = 15_000;
// Resize events re-paint the display through a trailing-edge throttle
pub const RESIZE_THROTTLE_MS: u64 = 500;

// Nickname rotation period (floored) and fade transition length
pub const NICKNAME_INTERVAL_MS: i32 = 2_800;
pub const NICKNAME_INTERVAL_FLOOR_MS: i32 = 1_200;
pub const NICKNAME_FADE_MS: i32 = 200;

// Typewriter pacing
pub const TYPE_CHAR_DELAY_MS: (u64, u64) = (28, 60);
pub const TYPE_LINE_PAUSE_MS: u64 = 800;
pub const TYPE_REDUCED_HOLD_MS: u64 = 200;

// Hidden perf-toggle reveal gesture: hold inside the corner, abort on drift
pub const REVEAL_CORNER_PX: f32 = 96.0;
pub const REVEAL_HOLD_MS: i32 = 800;
pub const REVEAL_SLOP_PX: f32 = 20.0;

// Loading overlay: image-decode deadline and fade-out length
pub const LOADER_TIMEOUT_MS: i32 = 1_200;
pub const LOADER_FADE_MS: i32 = 600;
