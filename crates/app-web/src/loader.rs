//! Loading overlay teardown: wait for the hero image to decode (or give up
//! after a deadline), fade the overlay out, then drop it from the tree.

use app_core::{LOADER_FADE_MS, LOADER_TIMEOUT_MS};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

use crate::time;

pub fn finish(document: &web::Document) {
    let Some(overlay) = document.get_element_by_id("loader") else {
        return;
    };
    let img = document
        .get_element_by_id("cake-img")
        .and_then(|el| el.dyn_into::<web::HtmlImageElement>().ok());

    spawn_local(async move {
        let deadline = time::timeout_promise(LOADER_TIMEOUT_MS);
        match img {
            Some(img) => {
                // decode rejection counts as ready
                let race = js_sys::Promise::race(&js_sys::Array::of2(&img.decode(), &deadline));
                let _ = JsFuture::from(race).await;
            }
            None => {
                let _ = JsFuture::from(deadline).await;
            }
        }
        let _ = overlay.class_list().add_1("fade-out");
        time::sleep(LOADER_FADE_MS).await;
        overlay.remove();
    });
}
