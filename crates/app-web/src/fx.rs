//! Heart-particle spawning. Each particle is a short-lived `<span>` in the
//! `#fx-layer`, animated by the page stylesheet and removed (with its budget
//! slot) when its animation ends.

use app_core::{clamp_burst, sample_particle, ParticleSpec};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::{dom, Session};

/// One throttled pointer-down's worth of spawning.
#[derive(Clone, Copy, Debug)]
pub struct SpawnArgs {
    pub x: f64,
    pub y: f64,
    pub count: u32,
}

/// Spawn up to `args.count` particles at the pointer position, stopping
/// early once the live-count ceiling is reached.
pub fn spawn_burst(document: &web::Document, session: &Session, args: SpawnArgs) {
    let Some(layer) = document.get_element_by_id("fx-layer") else {
        return;
    };
    let preset = session.preset.get();
    let mut rng = rand::thread_rng();
    for _ in 0..clamp_burst(args.count) {
        if !session.budget.borrow_mut().try_spawn() {
            break;
        }
        let spec = sample_particle(&mut rng, &preset);
        match build_particle(document, args.x, args.y, &spec) {
            Some(span) => {
                wire_cleanup(session, &span);
                if layer.append_child(&span).is_err() {
                    session.budget.borrow_mut().on_removed();
                    break;
                }
            }
            None => {
                session.budget.borrow_mut().on_removed();
                break;
            }
        }
    }
}

fn build_particle(
    document: &web::Document,
    x: f64,
    y: f64,
    spec: &ParticleSpec,
) -> Option<web::Element> {
    let span = document.create_element("span").ok()?;
    span.set_class_name("heart");
    let _ = span.set_attribute("aria-hidden", "true");
    span.set_text_content(Some("\u{2764}"));

    let style = dom::style(&span)?;
    let _ = style.set_property(
        "color",
        &format!(
            "hsl({} {}% {}%)",
            spec.hue, spec.saturation, spec.lightness
        ),
    );
    let _ = style.set_property("left", &format!("{}px", x - spec.size_px as f64 / 2.0));
    let _ = style.set_property("top", &format!("{}px", y - spec.size_px as f64 / 2.0));
    let _ = style.set_property("font-size", &format!("{}px", spec.size_px));
    let _ = style.set_property("--dx", &format!("{}px", spec.drift_px));
    let _ = style.set_property("--dy", "0px");
    let _ = style.set_property("--s", &format!("{}", spec.scale));
    let _ = style.set_property("animation-duration", &format!("{}ms", spec.duration_ms));
    Some(span)
}

// A once-closure frees itself after the single animationend it handles.
fn wire_cleanup(session: &Session, span: &web::Element) {
    let budget = session.budget.clone();
    let span_cb = span.clone();
    let cleanup = Closure::once_into_js(move |_ev: web::Event| {
        span_cb.remove();
        budget.borrow_mut().on_removed();
    });
    let _ = span.add_event_listener_with_callback("animationend", cleanup.unchecked_ref());
}
