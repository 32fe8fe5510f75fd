#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlAudioElement, HtmlImageElement};

use story_wasm::config;
use story_wasm::wasm::{audio, dom, observers};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    let _ = JsFuture::from(promise).await;
}

async fn wait_until(mut done: impl FnMut() -> bool) -> bool {
    for _ in 0..150 {
        if done() {
            return true;
        }
        sleep(20).await;
    }
    false
}

fn lazy_img(data_src: &str) -> HtmlImageElement {
    let doc = document();
    let img: HtmlImageElement = doc.create_element("img").unwrap().dyn_into().unwrap();
    img.set_attribute("data-src", data_src).unwrap();
    doc.body().unwrap().append_child(&img).unwrap();
    img
}

// Data URLs decode (or fail to) without touching the network.
const GOOD_IMAGE: &str = r#"data:image/svg+xml,%3Csvg xmlns="http://www.w3.org/2000/svg" width="4" height="4"%3E%3C/svg%3E"#;
const BAD_IMAGE: &str = "data:image/png;base64,bm90IGFuIGltYWdl";

#[wasm_bindgen_test]
async fn lazy_image_success_swaps_real_source_in() {
    let img = lazy_img(GOOD_IMAGE);
    let page = dom::Page::query(&document());
    observers::init_lazy_images(&page).unwrap();

    // The placeholder is applied synchronously at observe time.
    assert_eq!(
        img.get_attribute("src").as_deref(),
        Some(config::LAZY_PLACEHOLDER)
    );

    assert!(
        wait_until(|| img.get_attribute("data-src").is_none()).await,
        "lazy load never completed"
    );
    assert_eq!(img.get_attribute("src").as_deref(), Some(GOOD_IMAGE));
    assert!(img.class_list().contains("loaded"));
    img.remove();
}

#[wasm_bindgen_test]
async fn lazy_image_failure_substitutes_fallback() {
    let img = lazy_img(BAD_IMAGE);
    let page = dom::Page::query(&document());
    observers::init_lazy_images(&page).unwrap();

    assert!(
        wait_until(|| img.get_attribute("data-src").is_none()).await,
        "error path never ran"
    );
    assert_eq!(
        img.get_attribute("src").as_deref(),
        Some(config::LAZY_FALLBACK)
    );

    // One-shot: the element was unobserved after its first intersection, so
    // restoring data-src must not trigger a second load attempt.
    img.set_attribute("data-src", BAD_IMAGE).unwrap();
    sleep(200).await;
    assert_eq!(img.get_attribute("data-src").as_deref(), Some(BAD_IMAGE));
    assert_eq!(
        img.get_attribute("src").as_deref(),
        Some(config::LAZY_FALLBACK)
    );
    img.remove();
}

#[wasm_bindgen_test]
async fn reveal_marks_elements_visible() {
    let doc = document();
    let el = doc.create_element("div").unwrap();
    el.class_list().add_1("animate-fade-up").unwrap();
    el.set_attribute("style", "width:120px;height:120px").unwrap();
    doc.body().unwrap().append_child(&el).unwrap();

    let page = dom::Page::query(&doc);
    observers::init_reveal(&page).unwrap();

    assert!(
        wait_until(|| el.class_list().contains("visible")).await,
        "element was never revealed"
    );
    el.remove();
}

#[wasm_bindgen_test]
async fn fade_out_lands_on_zero_and_completes_once() {
    let player = HtmlAudioElement::new().unwrap();
    player.set_volume(0.3);

    let completions = Rc::new(Cell::new(0u32));
    let seen = completions.clone();
    audio::fade(
        &player,
        0.0,
        100.0,
        Some(Box::new(move || seen.set(seen.get() + 1))),
    );

    assert!(
        wait_until(|| completions.get() > 0).await,
        "fade never completed"
    );
    // Let any stray interval ticks land before asserting the count.
    sleep(100).await;
    assert_eq!(completions.get(), 1);
    assert_eq!(player.volume(), 0.0);
}
