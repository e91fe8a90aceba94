// Host-side tests for the pure reveal-gesture geometry.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod reveal {
    include!("../src/reveal.rs");
}

use reveal::*;

const VIEW_W: f32 = 1280.0;
const VIEW_H: f32 = 800.0;
const CORNER: f32 = 96.0;
const SLOP: f32 = 20.0;

#[test]
fn bottom_right_corner_contains_the_gesture() {
    assert!(in_corner(VIEW_W - 1.0, VIEW_H - 1.0, VIEW_W, VIEW_H, CORNER));
    assert!(in_corner(VIEW_W - 95.0, VIEW_H - 95.0, VIEW_W, VIEW_H, CORNER));
}

#[test]
fn corner_bounds_are_strict() {
    // Exactly on the corner edge does not count
    assert!(!in_corner(VIEW_W - CORNER, VIEW_H - 1.0, VIEW_W, VIEW_H, CORNER));
    assert!(!in_corner(VIEW_W - 1.0, VIEW_H - CORNER, VIEW_W, VIEW_H, CORNER));
}

#[test]
fn positions_outside_the_corner_miss() {
    assert!(!in_corner(0.0, 0.0, VIEW_W, VIEW_H, CORNER));
    assert!(!in_corner(VIEW_W - 1.0, 0.0, VIEW_W, VIEW_H, CORNER));
    assert!(!in_corner(0.0, VIEW_H - 1.0, VIEW_W, VIEW_H, CORNER));
    assert!(!in_corner(VIEW_W / 2.0, VIEW_H / 2.0, VIEW_W, VIEW_H, CORNER));
}

#[test]
fn small_drift_keeps_the_hold_alive() {
    assert!(!drift_exceeds(100.0, 100.0, 100.0, 100.0, SLOP));
    // 3-4-5 triangle scaled to exactly the slop distance
    assert!(!drift_exceeds(0.0, 0.0, 12.0, 16.0, SLOP));
}

#[test]
fn large_drift_aborts_the_hold() {
    assert!(drift_exceeds(0.0, 0.0, 13.0, 16.0, SLOP));
    assert!(drift_exceeds(100.0, 100.0, 100.0, 121.0, SLOP));
    assert!(drift_exceeds(100.0, 100.0, 79.0, 100.0, SLOP));
}
