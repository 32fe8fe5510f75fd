#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

// Pure viewport/fade math, testable on any target.
pub mod config;
pub mod fade;
pub mod geometry;
pub mod schedule;

// Only compile DOM-facing code when targeting wasm32.

// Public so the browser test crate can drive the observer/audio paths
// against fixture DOM.
#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;

    pub mod audio;
    pub mod coordinator;
    pub mod dom;
    pub mod input;
    pub mod observers;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let page = dom::Page::query(&document);
        let state = Rc::new(RefCell::new(dom::UiState::default()));

        dom::preload_hero();
        observers::init_reveal(&page)?;
        observers::init_lazy_images(&page)?;
        audio::init(&page, state.clone())?;
        input::init(&document, &page, state.clone())?;
        coordinator::init(&window, page, state)?;

        dom::reveal_hero_after(&window, crate::config::HERO_REVEAL_DELAY_MS)?;
        dom::log_load_time(&window)?;

        web_sys::console::log_1(&"story page initialized".into());
        Ok(())
    }
}

// When compiling for non-wasm targets (e.g., `cargo test` on host),
// provide an empty stub so the crate still builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
