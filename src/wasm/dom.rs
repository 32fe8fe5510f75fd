//! One-time DOM element lookup and small boot-time helpers.
//!
//! Every lookup is optional: a page that lacks the audio widget or has no
//! lazy images simply gets a no-op for that feature.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlAudioElement, HtmlElement, HtmlImageElement, Window};

use crate::config;

/// Handles to every element the presentation drives, resolved once at start.
#[derive(Clone)]
pub struct Page {
    pub progress_bar: Option<HtmlElement>,
    pub audio_toggle: Option<HtmlElement>,
    pub ambient_audio: Option<HtmlAudioElement>,
    pub nav_dots: Vec<HtmlElement>,
    pub sections: Vec<HtmlElement>,
    /// Each parallax layer paired with its owning section.
    pub parallax_layers: Vec<(HtmlElement, HtmlElement)>,
    pub animated: Vec<Element>,
    pub lazy_images: Vec<HtmlImageElement>,
}

impl Page {
    pub fn query(document: &Document) -> Page {
        let parallax_layers = by_selector::<HtmlElement>(document, ".parallax-bg")
            .into_iter()
            .filter_map(|layer| {
                let section = layer
                    .closest(".section")
                    .ok()
                    .flatten()?
                    .dyn_into::<HtmlElement>()
                    .ok()?;
                Some((layer, section))
            })
            .collect();

        Page {
            progress_bar: by_id(document, "progress-bar"),
            audio_toggle: by_id(document, "audio-toggle"),
            ambient_audio: by_id(document, "ambient-audio"),
            nav_dots: by_selector(document, ".nav-dot"),
            sections: by_selector(document, ".section"),
            parallax_layers,
            animated: by_selector(
                document,
                ".animate-fade-up, .animate-slide-up, .animate-slide-left",
            ),
            lazy_images: by_selector(document, "img[data-src]"),
        }
    }
}

/// Transient UI state mutated only by event handlers.
pub struct UiState {
    /// Id of the section whose nav dot is highlighted.
    pub current_section: String,
    pub audio_playing: bool,
    /// Last scroll offset recorded by the scroll listener.
    pub scroll_y: f64,
}

impl Default for UiState {
    fn default() -> Self {
        UiState {
            current_section: "hero".to_string(),
            audio_playing: false,
            scroll_y: 0.0,
        }
    }
}

fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

pub fn by_selector<T: JsCast>(document: &Document, selector: &str) -> Vec<T> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

/// Warm the browser cache for the hero image before it is scrolled into view.
pub fn preload_hero() {
    if let Ok(img) = HtmlImageElement::new() {
        img.set_src(config::HERO_IMAGE);
    }
}

/// Release the hero section's entrance animations shortly after init.
pub fn reveal_hero_after(window: &Window, delay_ms: i32) -> Result<(), JsValue> {
    let show = Closure::wrap(Box::new(move || {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        for el in by_selector::<Element>(&document, ".hero-content .animate-fade-up") {
            let _ = el.class_list().add_1("visible");
        }
    }) as Box<dyn FnMut()>);
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        show.as_ref().unchecked_ref(),
        delay_ms,
    )?;
    show.forget();
    Ok(())
}

/// Log total page load time once the `load` event has run to completion.
/// The zero-delay timeout lets `loadEventEnd` settle before it is read.
pub fn log_load_time(window: &Window) -> Result<(), JsValue> {
    let on_load = Closure::wrap(Box::new(move || {
        let Some(window) = web_sys::window() else {
            return;
        };
        let report = Closure::wrap(Box::new(|| {
            let Some(timing) = web_sys::window()
                .and_then(|w| w.performance())
                .map(|p| p.timing())
            else {
                return;
            };
            let load_ms = timing.load_event_end() - timing.navigation_start();
            web_sys::console::log_1(&format!("page load time: {load_ms}ms").into());
        }) as Box<dyn FnMut()>);
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(report.as_ref().unchecked_ref(), 0);
        report.forget();
    }) as Box<dyn FnMut()>);
    window.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())?;
    on_load.forget();
    Ok(())
}
