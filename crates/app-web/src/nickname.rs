//! Nickname label rotation with a short opacity fade around each swap.

use std::cell::RefCell;
use std::rc::Rc;

use app_core::{NicknameRotator, NICKNAME_FADE_MS, NICKNAME_INTERVAL_FLOOR_MS};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::{dom, time};

/// Inert when the label element is missing or the name list is empty.
pub fn start_rotation(document: &web::Document, names: &[&str], interval_ms: i32) {
    let Some(el) = document.get_element_by_id("nickname") else {
        return;
    };
    let rotator = NicknameRotator::new(names.iter().map(|s| s.to_string()).collect());
    if rotator.is_empty() {
        return;
    }
    let rotator = Rc::new(RefCell::new(rotator));
    let period = interval_ms.max(NICKNAME_INTERVAL_FLOOR_MS);

    let closure = Closure::wrap(Box::new(move || {
        let name = {
            let mut r = rotator.borrow_mut();
            match r.advance() {
                Some(n) => n.to_string(),
                None => return,
            }
        };
        if let Some(style) = dom::style(&el) {
            let _ = style.set_property("opacity", "0");
        }
        let el = el.clone();
        let cb = Closure::once_into_js(move || {
            el.set_text_content(Some(&name));
            if let Some(style) = dom::style(&el) {
                let _ = style.set_property("opacity", "1");
            }
        });
        let _ = time::set_timeout(cb.unchecked_ref(), NICKNAME_FADE_MS);
    }) as Box<dyn FnMut()>);
    let _ = time::set_interval(closure.as_ref().unchecked_ref(), period);
    closure.forget();
}
