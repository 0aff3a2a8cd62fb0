//! Browser bindings
//!
//! Exposes a [`Session`] backed by LocalStorage to a JavaScript host. The host
//! calls `tick()` from `requestAnimationFrame`, forwards input, and reads the
//! state back as JSON to draw it. Hosts that react to events call
//! `drain_events_json()` each frame; undrained events are capped, so hosts
//! that only poll `state_json()` are fine too.

use wasm_bindgen::prelude::*;

use crate::audio::LogSink;
use crate::persistence::{LocalStorage, MemoryStorage, Storage};
use crate::platform::Platform;
use crate::session::Session;
use crate::sim::GameStatus;
use crate::tuning::{GameConfig, Profile};

/// Key prefix for everything this game stores in LocalStorage
const STORAGE_PREFIX: &str = "bee_flap_";

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Bee Flap core loaded");
}

/// Store used by the browser session
///
/// Falls back to memory when LocalStorage is blocked (private mode, iframes).
enum WebStorage {
    Local(LocalStorage),
    Memory(MemoryStorage),
}

impl Storage for WebStorage {
    fn get_int(&self, key: &str, default: i64) -> i64 {
        match self {
            WebStorage::Local(s) => s.get_int(key, default),
            WebStorage::Memory(s) => s.get_int(key, default),
        }
    }

    fn put_int(&mut self, key: &str, value: i64) {
        match self {
            WebStorage::Local(s) => s.put_int(key, value),
            WebStorage::Memory(s) => s.put_int(key, value),
        }
    }

    fn get_bool(&self, key: &str, default: bool) -> bool {
        match self {
            WebStorage::Local(s) => s.get_bool(key, default),
            WebStorage::Memory(s) => s.get_bool(key, default),
        }
    }

    fn put_bool(&mut self, key: &str, value: bool) {
        match self {
            WebStorage::Local(s) => s.put_bool(key, value),
            WebStorage::Memory(s) => s.put_bool(key, value),
        }
    }
}

/// Game session handle for JavaScript
#[wasm_bindgen]
pub struct WebGame {
    session: Session<WebStorage>,
}

#[wasm_bindgen]
impl WebGame {
    /// Create an idle session for a canvas of the given size
    ///
    /// `profile` is one of "android", "ios", "desktop"; anything else uses the
    /// detected platform.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, profile: &str) -> WebGame {
        let profile = Profile::from_str(profile).unwrap_or_else(|| Platform::current().profile());
        let storage = match LocalStorage::open(STORAGE_PREFIX) {
            Ok(s) => WebStorage::Local(s),
            Err(e) => {
                log::warn!("{} - best score will not persist", e);
                WebStorage::Memory(MemoryStorage::new())
            }
        };
        let seed = js_sys::Date::now() as u64;
        let config = GameConfig::new(profile, width, height);
        WebGame {
            session: Session::new(config, storage, seed).with_sound(LogSink),
        }
    }

    pub fn start(&mut self) -> bool {
        self.session.start()
    }

    pub fn jump(&mut self) -> bool {
        self.session.jump()
    }

    pub fn restart(&mut self) {
        self.session.restart();
    }

    /// Advance one frame; returns true while the run is in progress
    pub fn tick(&mut self) -> bool {
        self.session.tick() == GameStatus::Started
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.session.resize(width, height);
    }

    pub fn sync_best_score(&mut self) {
        self.session.sync_best_score();
    }

    pub fn set_sound_enabled(&mut self, enabled: bool) {
        self.session.set_sound_enabled(enabled);
    }

    #[wasm_bindgen(getter)]
    pub fn score(&self) -> u32 {
        self.session.state().score
    }

    #[wasm_bindgen(getter)]
    pub fn best_score(&self) -> u32 {
        self.session.state().best_score
    }

    #[wasm_bindgen(getter)]
    pub fn falling_fast(&self) -> bool {
        self.session.is_falling_fast()
    }

    /// Full state snapshot as JSON
    pub fn state_json(&self) -> String {
        serde_json::to_string(self.session.state()).unwrap_or_else(|e| {
            log::error!("Failed to serialize state: {}", e);
            String::from("{}")
        })
    }

    /// Events since the last call as a JSON array
    ///
    /// Only the newest [`MAX_PENDING_EVENTS`](crate::consts::MAX_PENDING_EVENTS)
    /// are kept between calls.
    pub fn drain_events_json(&mut self) -> String {
        let events = self.session.drain_events();
        serde_json::to_string(&events).unwrap_or_else(|e| {
            log::error!("Failed to serialize events: {}", e);
            String::from("[]")
        })
    }
}
