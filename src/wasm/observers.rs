//! Viewport-intersection driven effects: reveal-on-scroll and lazy images.
//!
//! Both run off IntersectionObserver callbacks, independent of the scroll
//! coordinator's frame batching.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    HtmlImageElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use super::dom::Page;
use crate::config;

/// Mark animated elements `visible` once enough of them enters the viewport.
/// Elements stay observed so the marker is simply re-added if they re-enter;
/// the class add is idempotent.
pub fn init_reveal(page: &Page) -> Result<(), JsValue> {
    if page.animated.is_empty() {
        return Ok(());
    }

    let on_intersect = Closure::wrap(Box::new(move |entries: js_sys::Array| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if entry.is_intersecting() {
                let _ = entry.target().class_list().add_1("visible");
            }
        }
    }) as Box<dyn FnMut(js_sys::Array)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)?;
    for el in &page.animated {
        observer.observe(el);
    }
    on_intersect.forget();
    Ok(())
}

/// Swap `data-src` images in as they approach the viewport. One-shot: the
/// element is unobserved after its first intersection, success or failure.
pub fn init_lazy_images(page: &Page) -> Result<(), JsValue> {
    if page.lazy_images.is_empty() {
        return Ok(());
    }

    let on_intersect = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Ok(img) = target.clone().dyn_into::<HtmlImageElement>() {
                    if let Some(src) = img.get_attribute("data-src") {
                        load_real_image(&img, &src);
                    }
                }
                observer.unobserve(&target);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin(config::LAZY_ROOT_MARGIN);
    options.set_threshold(&JsValue::from_f64(0.0));
    let observer =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)?;
    for img in &page.lazy_images {
        // Placeholder keeps layout stable while the real asset loads.
        img.set_src(config::LAZY_PLACEHOLDER);
        observer.observe(img);
    }
    on_intersect.forget();
    Ok(())
}

/// Fetch the real image off-path, then swap it in. Failure substitutes the
/// fixed fallback; either way `data-src` is cleared so the element cannot
/// be re-queued.
fn load_real_image(img: &HtmlImageElement, src: &str) {
    let Ok(preload) = HtmlImageElement::new() else {
        return;
    };

    let on_load = Closure::wrap(Box::new({
        let img = img.clone();
        let src = src.to_string();
        move || {
            img.set_src(&src);
            let _ = img.remove_attribute("data-src");
            let _ = img.class_list().add_1("loaded");
        }
    }) as Box<dyn FnMut()>);

    let on_error = Closure::wrap(Box::new({
        let img = img.clone();
        move || {
            img.set_src(config::LAZY_FALLBACK);
            let _ = img.remove_attribute("data-src");
        }
    }) as Box<dyn FnMut()>);

    preload.set_onload(Some(on_load.as_ref().unchecked_ref()));
    preload.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    on_load.forget();
    on_error.forget();
    preload.set_src(src);
}
