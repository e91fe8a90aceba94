//! Elapsed-time counter: paints whole days/hours/minutes since the start
//! instant and keeps the display fresh across tab switches and resizes.

use std::cell::RefCell;
use std::rc::Rc;

use app_core::{elapsed_dhm, elapsed_ms, Gate, Throttle, RESIZE_THROTTLE_MS, TIMER_REFRESH_MS};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{FALLBACK_START_MS, START_ISO};
use crate::{time, Session};

/// Start instant as epoch milliseconds, via the browser's own ISO parser.
pub fn start_ms() -> f64 {
    let parsed = js_sys::Date::parse(START_ISO);
    if parsed.is_nan() {
        FALLBACK_START_MS
    } else {
        parsed
    }
}

/// Repaint the counter. Skipped silently unless all three targets exist.
pub fn paint(document: &web::Document) {
    let (Some(days_el), Some(hours_el), Some(mins_el)) = (
        document.get_element_by_id("days"),
        document.get_element_by_id("hours"),
        document.get_element_by_id("mins"),
    ) else {
        return;
    };
    let dhm = elapsed_dhm(elapsed_ms(start_ms(), time::now_wall_ms()));
    days_el.set_text_content(Some(&dhm.days.to_string()));
    hours_el.set_text_content(Some(&dhm.hours.to_string()));
    mins_el.set_text_content(Some(&dhm.minutes.to_string()));
}

/// Periodic refresh plus repaint on visibility/focus/resize, the resize
/// path rate-limited through a trailing-edge throttle.
pub fn wire_refresh(session: &Rc<Session>, window: &web::Window, document: &web::Document) {
    {
        let doc = document.clone();
        let closure = Closure::wrap(Box::new(move || paint(&doc)) as Box<dyn FnMut()>);
        let _ = time::set_interval(closure.as_ref().unchecked_ref(), TIMER_REFRESH_MS);
        closure.forget();
    }

    {
        let doc = document.clone();
        let closure = Closure::wrap(Box::new(move || {
            if !doc.hidden() {
                paint(&doc);
            }
        }) as Box<dyn FnMut()>);
        let _ = document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let doc = document.clone();
        let closure = Closure::wrap(Box::new(move || paint(&doc)) as Box<dyn FnMut()>);
        let _ = window.add_event_listener_with_callback("focus", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let doc = document.clone();
        let session = session.clone();
        let throttle = Rc::new(RefCell::new(Throttle::<()>::new(RESIZE_THROTTLE_MS)));
        let closure = Closure::wrap(Box::new(move || {
            let gate = throttle.borrow_mut().submit(session.now_ms(), ());
            match gate {
                Gate::Run(()) => paint(&doc),
                Gate::Arm { delay_ms } => {
                    let doc = doc.clone();
                    let session = session.clone();
                    let throttle = throttle.clone();
                    let cb = Closure::once_into_js(move || {
                        if throttle.borrow_mut().take_pending(session.now_ms()).is_some() {
                            paint(&doc);
                        }
                    });
                    let _ = time::set_timeout(cb.unchecked_ref(), delay_ms as i32);
                }
                Gate::Pending => {}
            }
        }) as Box<dyn FnMut()>);
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
