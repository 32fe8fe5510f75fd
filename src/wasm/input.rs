//! Click, keyboard, and touch wiring for section navigation.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    AddEventListenerOptions, Document, Event, HtmlElement, KeyboardEvent, ScrollBehavior,
    ScrollIntoViewOptions, TouchEvent,
};

use super::dom::{Page, UiState};
use crate::config;
use crate::geometry;

pub fn init(document: &Document, page: &Page, state: Rc<RefCell<UiState>>) -> Result<(), JsValue> {
    init_nav_dots(page)?;
    init_keyboard(document, page, state)?;
    init_touch(document)?;
    Ok(())
}

fn scroll_to(section: &HtmlElement) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    section.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Each dot's `href` is a fragment selector for its section.
fn init_nav_dots(page: &Page) -> Result<(), JsValue> {
    for dot in &page.nav_dots {
        let on_click = Closure::wrap(Box::new({
            let dot = dot.clone();
            move |event: Event| {
                event.prevent_default();
                let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                    return;
                };
                let Some(href) = dot.get_attribute("href") else {
                    return;
                };
                if let Ok(Some(section)) = document.query_selector(&href) {
                    if let Ok(section) = section.dyn_into::<HtmlElement>() {
                        scroll_to(&section);
                    }
                }
            }
        }) as Box<dyn FnMut(Event)>);
        dot.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    Ok(())
}

/// Arrow/Page keys step between sections, Home/End jump, `m` toggles audio
/// by delegating to the toggle button's click handler.
fn init_keyboard(
    document: &Document,
    page: &Page,
    state: Rc<RefCell<UiState>>,
) -> Result<(), JsValue> {
    let sections = page.sections.clone();
    let audio_toggle = page.audio_toggle.clone();

    let on_key = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        // -1 when the tracked id matches no section; stepping then clamps
        // to the first section rather than skipping to the second.
        let current = {
            let state = state.borrow();
            sections
                .iter()
                .position(|s| s.id() == state.current_section)
                .map(|i| i as isize)
                .unwrap_or(-1)
        };
        match event.key().as_str() {
            "ArrowDown" | "PageDown" => {
                event.prevent_default();
                let next = geometry::step_index(current, 1, sections.len());
                if let Some(section) = sections.get(next) {
                    scroll_to(section);
                }
            }
            "ArrowUp" | "PageUp" => {
                event.prevent_default();
                let prev = geometry::step_index(current, -1, sections.len());
                if let Some(section) = sections.get(prev) {
                    scroll_to(section);
                }
            }
            "Home" => {
                event.prevent_default();
                if let Some(section) = sections.first() {
                    scroll_to(section);
                }
            }
            "End" => {
                event.prevent_default();
                if let Some(section) = sections.last() {
                    scroll_to(section);
                }
            }
            "m" | "M" => {
                if let Some(toggle) = &audio_toggle {
                    toggle.click();
                }
            }
            _ => {}
        }
    }) as Box<dyn FnMut(KeyboardEvent)>);
    document.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())?;
    on_key.forget();
    Ok(())
}

/// Record touch travel. Swipes are classified against the threshold but no
/// section snapping is applied; natural momentum scrolling is left alone.
fn init_touch(document: &Document) -> Result<(), JsValue> {
    let start_y = Rc::new(Cell::new(0.0f64));
    let passive = AddEventListenerOptions::new();
    passive.set_passive(true);

    let on_start = Closure::wrap(Box::new({
        let start_y = start_y.clone();
        move |event: TouchEvent| {
            if let Some(touch) = event.changed_touches().get(0) {
                start_y.set(touch.screen_y() as f64);
            }
        }
    }) as Box<dyn FnMut(TouchEvent)>);
    document.add_event_listener_with_callback_and_add_event_listener_options(
        "touchstart",
        on_start.as_ref().unchecked_ref(),
        &passive,
    )?;
    on_start.forget();

    let on_end = Closure::wrap(Box::new(move |event: TouchEvent| {
        if let Some(touch) = event.changed_touches().get(0) {
            let travel = start_y.get() - touch.screen_y() as f64;
            let _is_swipe = travel.abs() >= config::SWIPE_THRESHOLD;
        }
    }) as Box<dyn FnMut(TouchEvent)>);
    document.add_event_listener_with_callback_and_add_event_listener_options(
        "touchend",
        on_end.as_ref().unchecked_ref(),
        &passive,
    )?;
    on_end.forget();

    Ok(())
}
