//! Performance tier selection and the tier-aware pointer handler.
//!
//! The pointer handler is rebuilt whenever the tier changes: the old
//! listener comes off the document and its armed trailing timer is cleared,
//! so a stale throttle window can never fire a burst under the new preset.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use app_core::{
    burst_count, choose_tier, DeviceSignals, Gate, PerfTier, Throttle, REVEAL_CORNER_PX,
    REVEAL_HOLD_MS, REVEAL_SLOP_PX,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::{dom, fx, prefs, reveal, time, Session};

/// The live pointer wiring: the listener closure, its throttle state, and
/// the id of the armed trailing timer, if any.
pub struct PointerHandler {
    closure: Closure<dyn FnMut(web::PointerEvent)>,
    throttle: Rc<RefCell<Throttle<fx::SpawnArgs>>>,
    timer: Rc<Cell<Option<i32>>>,
}

/// Tier for this session: persisted choice, else reduced-motion floor, else
/// device heuristics.
pub fn determine_tier(window: &web::Window, reduced_motion: bool) -> PerfTier {
    choose_tier(prefs::load_tier(), reduced_motion, &device_signals(window))
}

fn device_signals(window: &web::Window) -> DeviceSignals {
    let navigator = window.navigator();
    let cores = navigator.hardware_concurrency();
    let cpu_cores = (cores > 0.0).then_some(cores as u32);

    // saveData, effectiveType and deviceMemory are draft APIs with no stable
    // web-sys binding; read them reflectively and treat absence as unset.
    let nav: &JsValue = navigator.as_ref();
    let connection = js_sys::Reflect::get(nav, &JsValue::from_str("connection"))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null());
    let save_data = connection
        .as_ref()
        .and_then(|c| js_sys::Reflect::get(c, &JsValue::from_str("saveData")).ok())
        .and_then(|v| v.as_bool())
        .unwrap_or(false);
    let effective_type = connection
        .as_ref()
        .and_then(|c| js_sys::Reflect::get(c, &JsValue::from_str("effectiveType")).ok())
        .and_then(|v| v.as_string());
    let device_memory_gb = js_sys::Reflect::get(nav, &JsValue::from_str("deviceMemory"))
        .ok()
        .and_then(|v| v.as_f64());

    DeviceSignals {
        save_data,
        effective_type,
        device_memory_gb,
        cpu_cores,
    }
}

/// Switch the session to `tier`: update the preset and budget ceiling,
/// persist the choice, refresh the toggle's tooltip, and rebuild the
/// pointer handler.
pub fn apply_tier(session: &Rc<Session>, document: &web::Document, tier: PerfTier) {
    let preset = tier.preset();
    session.tier.set(tier);
    session.preset.set(preset);
    session.budget.borrow_mut().set_ceiling(preset.max_alive);
    prefs::store_tier(tier);
    if let Some(btn) = document.get_element_by_id("perfToggle") {
        let _ = btn.set_attribute("title", &format!("performance tier: {}", tier.as_str()));
    }
    rebind_pointer(session, document);
    log::info!("[perf] tier {}", tier.as_str());
}

/// Replace the document's pointerdown handler with one built around the
/// active preset's throttle interval.
pub fn rebind_pointer(session: &Rc<Session>, document: &web::Document) {
    if let Some(old) = session.pointer.borrow_mut().take() {
        let _ = document.remove_event_listener_with_callback(
            "pointerdown",
            old.closure.as_ref().unchecked_ref(),
        );
        if let Some(id) = old.timer.take() {
            time::clear_timeout(id);
        }
        old.throttle.borrow_mut().cancel();
    }

    let throttle = Rc::new(RefCell::new(Throttle::new(session.preset.get().throttle_ms)));
    let timer: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let closure = {
        let session = session.clone();
        let document = document.clone();
        let throttle = throttle.clone();
        let timer = timer.clone();
        Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            if session.reduced_motion {
                return;
            }
            let args = fx::SpawnArgs {
                x: ev.client_x() as f64,
                y: ev.client_y() as f64,
                count: burst_count(&mut rand::thread_rng(), &session.preset.get()),
            };
            let gate = throttle.borrow_mut().submit(session.now_ms(), args);
            match gate {
                Gate::Run(args) => fx::spawn_burst(&document, &session, args),
                Gate::Arm { delay_ms } => {
                    let session = session.clone();
                    let document = document.clone();
                    let throttle = throttle.clone();
                    let timer_done = timer.clone();
                    let cb = Closure::once_into_js(move || {
                        timer_done.set(None);
                        if let Some(args) = throttle.borrow_mut().take_pending(session.now_ms()) {
                            fx::spawn_burst(&document, &session, args);
                        }
                    });
                    if let Some(id) = time::set_timeout(cb.unchecked_ref(), delay_ms as i32) {
                        timer.set(Some(id));
                    }
                }
                Gate::Pending => {}
            }
        }) as Box<dyn FnMut(_)>)
    };
    let _ =
        document.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    *session.pointer.borrow_mut() = Some(PointerHandler {
        closure,
        throttle,
        timer,
    });
}

/// Manual tier toggle: high -> medium -> low -> high.
pub fn wire_toggle(session: &Rc<Session>, document: &web::Document) {
    let session = session.clone();
    let doc = document.clone();
    dom::add_click_listener(document, "perfToggle", move || {
        let next = session.tier.get().next();
        apply_tier(&session, &doc, next);
    });
}

/// Hidden-toggle reveal: hold pointer-down in the bottom-right corner for
/// the hold duration; drifting or lifting aborts. A persisted flag reveals
/// the toggle on later visits without the gesture.
pub fn wire_reveal(window: &web::Window, document: &web::Document) {
    if document.get_element_by_id("perfToggle").is_none() {
        return;
    }
    if prefs::toggle_shown() {
        reveal_button(document);
    }

    let hold: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let origin: Rc<Cell<Option<(f32, f32)>>> = Rc::new(Cell::new(None));

    {
        let hold = hold.clone();
        let origin = origin.clone();
        let win = window.clone();
        let doc = document.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let x = ev.client_x() as f32;
            let y = ev.client_y() as f32;
            let view_w = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
            let view_h = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
            if !reveal::in_corner(x, y, view_w, view_h, REVEAL_CORNER_PX) {
                return;
            }
            origin.set(Some((x, y)));
            let doc = doc.clone();
            let hold_done = hold.clone();
            let origin_done = origin.clone();
            let cb = Closure::once_into_js(move || {
                hold_done.set(None);
                origin_done.set(None);
                reveal_button(&doc);
                prefs::set_toggle_shown();
            });
            if let Some(id) = time::set_timeout(cb.unchecked_ref(), REVEAL_HOLD_MS) {
                hold.set(Some(id));
            }
        }) as Box<dyn FnMut(_)>);
        let _ = document
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let hold = hold.clone();
        let origin = origin.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let Some((sx, sy)) = origin.get() else {
                return;
            };
            if hold.get().is_none() {
                return;
            }
            if reveal::drift_exceeds(
                sx,
                sy,
                ev.client_x() as f32,
                ev.client_y() as f32,
                REVEAL_SLOP_PX,
            ) {
                abort_hold(&hold, &origin);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = document
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    for event in ["pointerup", "pointercancel"] {
        let hold = hold.clone();
        let origin = origin.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            abort_hold(&hold, &origin);
        }) as Box<dyn FnMut(_)>);
        let _ =
            document.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn abort_hold(hold: &Rc<Cell<Option<i32>>>, origin: &Rc<Cell<Option<(f32, f32)>>>) {
    if let Some(id) = hold.take() {
        time::clear_timeout(id);
    }
    origin.set(None);
}

fn reveal_button(document: &web::Document) {
    if let Some(btn) = document.get_element_by_id("perfToggle") {
        let _ = btn.class_list().add_1("revealed");
    }
}
