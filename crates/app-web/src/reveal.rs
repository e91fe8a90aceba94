// Pure geometry for the hidden perf-toggle reveal gesture.

use glam::Vec2;

/// Whether a pointer position falls inside the bottom-right reveal corner.
#[inline]
pub fn in_corner(x: f32, y: f32, view_w: f32, view_h: f32, corner: f32) -> bool {
    x > view_w - corner && y > view_h - corner
}

/// Whether the pointer has drifted far enough from where the hold started
/// to abort the gesture.
#[inline]
pub fn drift_exceeds(start_x: f32, start_y: f32, x: f32, y: f32, slop: f32) -> bool {
    Vec2::new(x - start_x, y - start_y).length() > slop
}
