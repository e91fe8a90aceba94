//! Typewriter caption: lines parsed once from the `#tw-lines` template and
//! played into `#typewriter` by an async task driving the core step machine.

use std::cell::Cell;
use std::rc::Rc;

use app_core::{TypeAction, TypewriterConfig, TypewriterScript};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

use crate::constants::TYPEWRITER_FALLBACK_LINE;
use crate::time;

/// Template paragraphs, trimmed, empties dropped, in document order.
pub fn read_lines(document: &web::Document) -> Vec<String> {
    let Some(tpl) = document
        .get_element_by_id("tw-lines")
        .and_then(|el| el.dyn_into::<web::HtmlTemplateElement>().ok())
    else {
        return Vec::new();
    };
    let Ok(nodes) = tpl.content().query_selector_all("p") else {
        return Vec::new();
    };
    let mut lines = Vec::new();
    for i in 0..nodes.length() {
        if let Some(node) = nodes.item(i) {
            if let Some(text) = node.text_content() {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    lines.push(trimmed.to_string());
                }
            }
        }
    }
    lines
}

/// Start the caption task. Returns a cancellation flag a harness can set to
/// stop a looping script between steps; `None` when nothing was started.
pub fn start(document: &web::Document, reduced_motion: bool) -> Option<Rc<Cell<bool>>> {
    let target = document.get_element_by_id("typewriter")?;
    let lines = read_lines(document);
    if lines.is_empty() {
        target.set_text_content(Some(TYPEWRITER_FALLBACK_LINE));
        return None;
    }
    let cancel = Rc::new(Cell::new(false));
    let flag = cancel.clone();
    spawn_local(async move {
        play(target, lines, TypewriterConfig::default(), reduced_motion, flag).await;
    });
    Some(cancel)
}

async fn play(
    target: web::Element,
    lines: Vec<String>,
    config: TypewriterConfig,
    reduced_motion: bool,
    cancel: Rc<Cell<bool>>,
) {
    let mut script = TypewriterScript::new(lines, config, reduced_motion);
    let mut rng = StdRng::from_entropy();
    while let Some(step) = script.next_step(&mut rng) {
        if cancel.get() {
            break;
        }
        match step.action {
            TypeAction::SetText(text) => target.set_text_content(Some(&text)),
            TypeAction::AppendChar(ch) => {
                let mut text = target.text_content().unwrap_or_default();
                text.push(ch);
                target.set_text_content(Some(&text));
            }
            TypeAction::Hold => {}
        }
        if step.delay_ms > 0 {
            time::sleep(step.delay_ms as i32).await;
        }
    }
}
