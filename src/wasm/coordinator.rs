//! Frame-batched scroll coordination.
//!
//! The scroll listener records the offset and schedules at most one
//! `requestAnimationFrame` callback; however many scroll events land within
//! a frame, the visual updates (progress bar, parallax layers, nav dots)
//! run once. Resize shares the same updaters behind a debounce.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Window};

use super::dom::{Page, UiState};
use crate::config;
use crate::geometry::{self, SectionBounds};
use crate::schedule::FrameGate;

fn scroll_top(window: &Window) -> f64 {
    window.page_y_offset().unwrap_or(0.0)
}

fn viewport_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

fn section_bounds(page: &Page) -> Vec<SectionBounds> {
    page.sections
        .iter()
        .map(|s| SectionBounds {
            top: s.offset_top() as f64,
            height: s.offset_height() as f64,
        })
        .collect()
}

fn update_progress(window: &Window, page: &Page) {
    let Some(bar) = &page.progress_bar else {
        return;
    };
    let scroll_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|root| root.scroll_height() as f64)
        .unwrap_or(0.0);
    let progress = geometry::progress_percent(
        scroll_top(window),
        scroll_height,
        viewport_height(window),
    );
    let _ = bar.style().set_property("width", &format!("{progress}%"));
}

fn update_parallax(window: &Window, page: &Page) {
    let st = scroll_top(window);
    let vh = viewport_height(window);
    for (layer, section) in &page.parallax_layers {
        let top = section.offset_top() as f64;
        let height = section.offset_height() as f64;
        // Off-screen sections keep their last transform; nobody can see them.
        if geometry::section_in_view(st, vh, top, height) {
            let offset = geometry::parallax_offset(st, top, config::PARALLAX_STRENGTH);
            let _ = layer
                .style()
                .set_property("transform", &format!("translate3d(0, {offset}px, 0)"));
        }
    }
}

fn update_nav_dots(window: &Window, page: &Page, state: &Rc<RefCell<UiState>>) {
    let bounds = section_bounds(page);
    let index = geometry::active_section(scroll_top(window), viewport_height(window), &bounds);
    let current = page
        .sections
        .get(index)
        .map(|s| s.id())
        .unwrap_or_else(|| "hero".to_string());

    // Change-detect to avoid rewriting class lists every frame.
    if state.borrow().current_section == current {
        return;
    }
    state.borrow_mut().current_section = current.clone();

    for dot in &page.nav_dots {
        let _ = dot.class_list().remove_1("active");
        if dot.get_attribute("data-section").as_deref() == Some(current.as_str()) {
            let _ = dot.class_list().add_1("active");
        }
    }
}

fn run_batch(window: &Window, page: &Page, state: &Rc<RefCell<UiState>>) {
    update_progress(window, page);
    update_parallax(window, page);
    update_nav_dots(window, page, state);
}

/// Wire the scroll and resize listeners and run the initial update.
pub fn init(window: &Window, page: Page, state: Rc<RefCell<UiState>>) -> Result<(), JsValue> {
    let gate = Rc::new(FrameGate::new());

    // The frame closure outlives this function; the scroll closure keeps it
    // alive through the Rc and re-schedules it on demand.
    let frame: Rc<Closure<dyn FnMut()>> = Rc::new(Closure::wrap(Box::new({
        let window = window.clone();
        let page = page.clone();
        let state = state.clone();
        let gate = gate.clone();
        move || {
            run_batch(&window, &page, &state);
            gate.complete();
        }
    }) as Box<dyn FnMut()>));

    let passive = AddEventListenerOptions::new();
    passive.set_passive(true);

    let on_scroll = Closure::wrap(Box::new({
        let window = window.clone();
        let state = state.clone();
        let gate = gate.clone();
        let frame = frame.clone();
        move || {
            state.borrow_mut().scroll_y = scroll_top(&window);
            if gate.try_schedule() {
                let _ = window
                    .request_animation_frame(frame.as_ref().as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut()>);
    window.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        on_scroll.as_ref().unchecked_ref(),
        &passive,
    )?;
    on_scroll.forget();

    // Resize recomputes layout-dependent pieces after the window settles.
    let recompute: Rc<Closure<dyn FnMut()>> = Rc::new(Closure::wrap(Box::new({
        let window = window.clone();
        let page = page.clone();
        let state = state.clone();
        move || {
            update_parallax(&window, &page);
            update_nav_dots(&window, &page, &state);
        }
    }) as Box<dyn FnMut()>));

    let pending_resize = Rc::new(Cell::new(0));
    let on_resize = Closure::wrap(Box::new({
        let window = window.clone();
        let pending_resize = pending_resize.clone();
        let recompute = recompute.clone();
        move || {
            window.clear_timeout_with_handle(pending_resize.get());
            if let Ok(handle) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                recompute.as_ref().as_ref().unchecked_ref(),
                config::RESIZE_DEBOUNCE_MS,
            ) {
                pending_resize.set(handle);
            }
        }
    }) as Box<dyn FnMut()>);
    window.add_event_listener_with_callback_and_add_event_listener_options(
        "resize",
        on_resize.as_ref().unchecked_ref(),
        &passive,
    )?;
    on_resize.forget();

    // Paint the initial state before the first scroll arrives.
    update_progress(window, &page);
    update_nav_dots(window, &page, &state);

    Ok(())
}
