#![cfg(target_arch = "wasm32")]

pub mod constants;
pub mod dom;
pub mod fx;
pub mod loader;
pub mod nickname;
pub mod perf;
pub mod prefs;
pub mod reveal;
pub mod time;
pub mod timer;
pub mod typewriter;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use app_core::{ParticleBudget, PerfTier, TierPreset, NICKNAME_INTERVAL_MS};
use instant::Instant;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Single-instance page state: the active tier, the live-particle budget,
/// and the currently bound pointer handler. Everything that mutates at
/// runtime lives here rather than in module-level globals.
pub struct Session {
    pub reduced_motion: bool,
    pub tier: Cell<PerfTier>,
    pub preset: Cell<TierPreset>,
    pub budget: Rc<RefCell<ParticleBudget>>,
    pub pointer: RefCell<Option<perf::PointerHandler>>,
    epoch: Instant,
}

impl Session {
    pub fn new(window: &web::Window) -> Rc<Self> {
        let reduced_motion = window
            .match_media("(prefers-reduced-motion: reduce)")
            .ok()
            .flatten()
            .map(|m| m.matches())
            .unwrap_or(false);
        let tier = PerfTier::default();
        let preset = tier.preset();
        Rc::new(Self {
            reduced_motion,
            tier: Cell::new(tier),
            preset: Cell::new(preset),
            budget: Rc::new(RefCell::new(ParticleBudget::new(preset.max_alive))),
            pointer: RefCell::new(None),
            epoch: Instant::now(),
        })
    }

    /// Monotonic milliseconds since session start, for throttle windows.
    pub fn now_ms(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("evermore page starting");

    let Some(document) = dom::window_document() else {
        return Ok(());
    };
    if document.ready_state() == web::DocumentReadyState::Loading {
        let closure = Closure::wrap(Box::new(move || {
            if let Err(e) = init() {
                log::error!("init error: {e:?}");
            }
        }) as Box<dyn FnMut()>);
        let _ = document
            .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref());
        closure.forget();
    } else if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let session = Session::new(&window);
    perf::apply_tier(
        &session,
        &document,
        perf::determine_tier(&window, session.reduced_motion),
    );

    timer::paint(&document);
    timer::wire_refresh(&session, &window, &document);
    nickname::start_rotation(&document, &constants::NICKNAMES, NICKNAME_INTERVAL_MS);
    perf::wire_toggle(&session, &document);
    perf::wire_reveal(&window, &document);
    let _ = typewriter::start(&document, session.reduced_motion);
    loader::finish(&document);
    Ok(())
}
