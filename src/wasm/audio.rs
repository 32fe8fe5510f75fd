//! Ambient audio toggle with fade-in/out.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlAudioElement, HtmlElement};

use super::dom::{Page, UiState};
use crate::config;
use crate::fade::FadePlan;

/// Wire the toggle button. Paused -> Playing starts playback then fades the
/// volume up; Playing -> Paused fades down and pauses from the fade's
/// completion callback. Rapid toggling can interleave fades; see [`FadePlan`].
pub fn init(page: &Page, state: Rc<RefCell<UiState>>) -> Result<(), JsValue> {
    let (Some(toggle), Some(audio)) = (page.audio_toggle.clone(), page.ambient_audio.clone())
    else {
        return Ok(());
    };

    audio.set_volume(config::BASE_VOLUME);

    let button = toggle.clone();
    let on_click = Closure::wrap(Box::new(move || {
        let playing = state.borrow().audio_playing;
        if playing {
            let pausing = audio.clone();
            fade(
                &audio,
                0.0,
                config::AUDIO_FADE_MS,
                Some(Box::new(move || {
                    let _ = pausing.pause();
                })),
            );
        } else {
            start_playback(&audio);
        }
        set_icon(&button, !playing);
        state.borrow_mut().audio_playing = !playing;
    }) as Box<dyn FnMut()>);
    toggle.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}

/// Flip the on/off glyphs inside the toggle button.
/// The icon tracks the requested state, not playback reality: a rejected
/// `play()` leaves it showing "on" even though nothing is audible.
fn set_icon(toggle: &HtmlElement, playing: bool) {
    let (show, hide) = if playing {
        (".audio-on", ".audio-off")
    } else {
        (".audio-off", ".audio-on")
    };
    if let Ok(Some(el)) = toggle.query_selector(show) {
        let _ = el.class_list().remove_1("hidden");
    }
    if let Ok(Some(el)) = toggle.query_selector(hide) {
        let _ = el.class_list().add_1("hidden");
    }
}

/// Start playback and fade in once the play promise resolves. Rejection
/// (typically autoplay policy) is logged and otherwise ignored.
fn start_playback(audio: &HtmlAudioElement) {
    let promise = match audio.play() {
        Ok(promise) => promise,
        Err(err) => {
            web_sys::console::log_2(&"audio playback failed:".into(), &err);
            return;
        }
    };

    let resolved = Closure::wrap(Box::new({
        let audio = audio.clone();
        move |_: JsValue| {
            audio.set_volume(0.0);
            fade(&audio, config::BASE_VOLUME, config::AUDIO_FADE_MS, None);
        }
    }) as Box<dyn FnMut(JsValue)>);

    let rejected = Closure::wrap(Box::new(|err: JsValue| {
        web_sys::console::log_2(&"audio playback failed:".into(), &err);
    }) as Box<dyn FnMut(JsValue)>);

    let _ = promise.then(&resolved).catch(&rejected);
    resolved.forget();
    rejected.forget();
}

/// Drive a [`FadePlan`] from an interval timer, clearing the interval on the
/// final step and firing `on_complete` exactly once. Nothing cancels an
/// in-flight fade; overlapping calls race on the element's volume.
pub fn fade(
    audio: &HtmlAudioElement,
    target: f64,
    duration_ms: f64,
    mut on_complete: Option<Box<dyn FnOnce()>>,
) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let plan = FadePlan::new(audio.volume(), target);
    let interval_ms = plan.step_interval_ms(duration_ms) as i32;
    let handle = Rc::new(Cell::new(0));
    let step = Rc::new(Cell::new(0u32));

    let tick = Closure::wrap(Box::new({
        let audio = audio.clone();
        let window = window.clone();
        let handle = handle.clone();
        let step = step.clone();
        move || {
            step.set(step.get() + 1);
            audio.set_volume(plan.volume_at(step.get()));
            if step.get() >= plan.steps() {
                window.clear_interval_with_handle(handle.get());
                if let Some(done) = on_complete.take() {
                    done();
                }
            }
        }
    }) as Box<dyn FnMut()>);

    if let Ok(id) = window.set_interval_with_callback_and_timeout_and_arguments_0(
        tick.as_ref().unchecked_ref(),
        interval_ms,
    ) {
        handle.set(id);
        tick.forget();
    }
}
