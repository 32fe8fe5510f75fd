//! Tunables for the scroll presentation. Everything that feels like a
//! design decision lives here so the wasm modules stay free of magic numbers.

/// Vertical parallax speed relative to scroll speed.
pub const PARALLAX_STRENGTH: f64 = 0.3;

/// Fraction of an animated element that must enter the viewport before it
/// is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.15;

/// Extra margin around the viewport inside which lazy images start loading.
pub const LAZY_ROOT_MARGIN: &str = "100px";

/// Ambient audio fade duration.
pub const AUDIO_FADE_MS: f64 = 500.0;

/// Ambient audio resting volume.
pub const BASE_VOLUME: f64 = 0.3;

/// Resize recomputation is debounced by this many milliseconds.
pub const RESIZE_DEBOUNCE_MS: i32 = 250;

/// Hero animations are released this long after page init.
pub const HERO_REVEAL_DELAY_MS: i32 = 100;

/// Minimum touch travel (screen px) that counts as a swipe.
pub const SWIPE_THRESHOLD: f64 = 50.0;

/// Inline SVG shown in a lazy image slot until the real asset arrives.
pub const LAZY_PLACEHOLDER: &str = r#"data:image/svg+xml,%3Csvg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 800 600"%3E%3Crect fill="%231a1a1a" width="800" height="600"/%3E%3C/svg%3E"#;

/// Fixed substitute when a lazy image fails to fetch.
pub const LAZY_FALLBACK: &str =
    "https://placehold.co/800x600/1a1a1a/666666?text=Image+Unavailable";

/// Above-the-fold hero image, warmed as soon as the module starts.
pub const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1533738363-b7f9aef128ce?w=1920";
