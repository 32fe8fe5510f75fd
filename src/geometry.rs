//! Viewport math shared by the scroll coordinator and keyboard navigation.
//!
//! Pure functions over scroll offsets and element geometry so the logic can
//! be exercised on the host without a DOM.

/// Vertical extent of one page section, in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

/// Scroll progress through the document as a percentage, clamped to [0, 100].
///
/// `scroll_height` is the full document height; the scrollable range is what
/// remains after subtracting one viewport. An unscrollable document reports 0.
pub fn progress_percent(scroll_top: f64, scroll_height: f64, viewport: f64) -> f64 {
    let max_scroll = scroll_height - viewport;
    if max_scroll <= 0.0 {
        return 0.0;
    }
    (scroll_top / max_scroll * 100.0).clamp(0.0, 100.0)
}

/// Vertical translation for a parallax layer: proportional to how far the
/// viewport has scrolled into the layer's owning section.
pub fn parallax_offset(scroll_top: f64, section_top: f64, strength: f64) -> f64 {
    (scroll_top - section_top) * strength
}

/// True while any part of the section is inside the viewport. Parallax
/// transforms are only written for sections that pass this test.
pub fn section_in_view(scroll_top: f64, viewport: f64, top: f64, height: f64) -> bool {
    scroll_top + viewport > top && scroll_top < top + height
}

/// Index of the section owning the current scroll position.
///
/// A section is active while `scroll_top` lies in
/// `[top - viewport/2, top + height - viewport/2)`. When no section matches
/// (above the fold, or between ranges after a resize) the hero section at
/// index 0 stays active. The last match wins if ranges ever overlap.
pub fn active_section(scroll_top: f64, viewport: f64, sections: &[SectionBounds]) -> usize {
    let mut active = 0;
    for (index, section) in sections.iter().enumerate() {
        let lo = section.top - viewport / 2.0;
        let hi = section.top + section.height - viewport / 2.0;
        if scroll_top >= lo && scroll_top < hi {
            active = index;
        }
    }
    active
}

/// Neighbor section index for keyboard navigation, clamped to the valid
/// range. `current` is -1 when the tracked section id matches nothing;
/// stepping in either direction from there lands on the first section.
pub fn step_index(current: isize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current + delta).clamp(0, len as isize - 1) as usize
}
