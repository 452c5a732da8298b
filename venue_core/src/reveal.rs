//! One-shot reveal of page sections.
//!
//! A section starts hidden and offset downward. The first time it enters the
//! viewport its latch flips to [`RevealState::Revealed`] and the CSS
//! transition carries it to its settled position. Nothing ever flips it back.

use std::time::Duration;

use crate::config::RevealConfig;
use crate::easing::Tween;
use crate::viewport::{ElementBounds, ScrollSample, enters_viewport};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Pending,
    Revealed,
}

/// Per-element latch. The only transition is `Pending -> Revealed`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    state: RevealState,
}

impl RevealLatch {
    pub const fn new() -> Self {
        Self {
            state: RevealState::Pending,
        }
    }

    /// A latch that is already open, for environments without scroll
    /// observation where content must stay readable.
    pub const fn revealed() -> Self {
        Self {
            state: RevealState::Revealed,
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }

    /// Feed one intersection reading. Returns `true` only on the call that
    /// opens the latch.
    pub fn observe(&mut self, intersects: bool) -> bool {
        if intersects && self.state == RevealState::Pending {
            self.state = RevealState::Revealed;
            return true;
        }
        false
    }
}

/// Interpolated reveal values at a point in time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealFrame {
    pub opacity: f64,
    pub offset_px: f64,
}

/// How an element moves when revealed, and when it counts as in view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealMotion {
    pub offset_px: f64,
    pub margin_px: f64,
    pub tween: Tween,
}

impl RevealMotion {
    /// Section reveal with a declared stagger delay.
    pub fn section(config: &RevealConfig, delay: Duration) -> Self {
        Self {
            offset_px: config.offset_px,
            margin_px: config.margin_px,
            tween: Tween::new(config.duration()).with_delay(delay),
        }
    }

    /// Review card reveal, staggered by its position in the grid.
    pub fn card(config: &RevealConfig, index: usize) -> Self {
        Self {
            offset_px: config.card_offset_px,
            margin_px: 0.0,
            tween: config.card_tween(index),
        }
    }

    /// Whether `bounds` counts as on screen for `viewport`, on both axes.
    pub fn in_view(&self, bounds: ElementBounds, viewport: ScrollSample) -> bool {
        enters_viewport(bounds, viewport, self.margin_px)
    }

    /// Values `elapsed` after the latch opened.
    pub fn frame_at(&self, elapsed: Duration) -> RevealFrame {
        RevealFrame {
            opacity: self.tween.value_at(elapsed, 0.0, 1.0),
            offset_px: self.tween.value_at(elapsed, self.offset_px, 0.0),
        }
    }

    /// Inline style. The browser runs the transition once the revealed
    /// style replaces the hidden one.
    pub fn style(&self, revealed: bool) -> String {
        if revealed {
            format!(
                "opacity: 1; transform: translateY(0px); transition: {}, {};",
                self.tween.css_transition("opacity"),
                self.tween.css_transition("transform"),
            )
        } else {
            format!(
                "opacity: 0; transform: translateY({}px);",
                self.offset_px
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_opens_once() {
        let mut latch = RevealLatch::new();
        assert!(!latch.observe(false));
        assert_eq!(latch.state(), RevealState::Pending);
        assert!(latch.observe(true));
        assert!(latch.is_revealed());
        // Already open: no second transition, no way back.
        assert!(!latch.observe(true));
        assert!(!latch.observe(false));
        assert!(latch.is_revealed());
    }

    #[test]
    fn degraded_latch_starts_open() {
        let mut latch = RevealLatch::revealed();
        assert!(latch.is_revealed());
        assert!(!latch.observe(true));
    }

    #[test]
    fn section_frame_runs_from_hidden_to_settled() {
        let motion = RevealMotion::section(&RevealConfig::default(), Duration::from_millis(200));
        let start = motion.frame_at(Duration::ZERO);
        assert_eq!(start, RevealFrame { opacity: 0.0, offset_px: 50.0 });

        let mid = motion.frame_at(Duration::from_millis(650));
        assert!(mid.opacity > 0.5 && mid.opacity < 1.0);
        assert!(mid.offset_px > 0.0 && mid.offset_px < 25.0);

        let end = motion.frame_at(Duration::from_millis(1100));
        assert_eq!(end, RevealFrame { opacity: 1.0, offset_px: 0.0 });
        assert_eq!(motion.frame_at(Duration::from_secs(60)), end);
    }

    #[test]
    fn card_motion_staggers() {
        let config = RevealConfig::default();
        let second = RevealMotion::card(&config, 2);
        assert_eq!(second.tween.delay, Duration::from_millis(300));
        assert_eq!(second.offset_px, 30.0);
        assert_eq!(second.margin_px, 0.0);
    }

    #[test]
    fn style_strings() {
        let motion = RevealMotion::section(&RevealConfig::default(), Duration::ZERO);
        assert_eq!(motion.style(false), "opacity: 0; transform: translateY(50px);");
        let shown = motion.style(true);
        assert!(shown.starts_with("opacity: 1; transform: translateY(0px);"));
        assert!(shown.contains("opacity 0.9s cubic-bezier(0, 0, 0.58, 1) 0s"));
        assert!(shown.contains("transform 0.9s"));
    }

    #[test]
    fn in_view_uses_margin() {
        let motion = RevealMotion::section(&RevealConfig::default(), Duration::ZERO);
        let vp = ScrollSample::new(0.0, 1280.0, 800.0);
        assert!(!motion.in_view(ElementBounds::new(0.0, 750.0, 1280.0, 1000.0), vp));
        assert!(motion.in_view(ElementBounds::new(0.0, 700.0, 1280.0, 1000.0), vp));
    }

    #[test]
    fn offscreen_carousel_card_stays_pending() {
        let config = RevealConfig::default();
        let phone = ScrollSample::new(0.0, 390.0, 800.0);
        let mut latch = RevealLatch::new();
        let motion = RevealMotion::card(&config, 3);

        // Row is on screen vertically, card parked to the right of the strip.
        let parked = ElementBounds::new(900.0, 300.0, 1230.0, 600.0);
        assert!(!latch.observe(motion.in_view(parked, phone)));
        assert!(!latch.is_revealed());

        // Swiped into view.
        let shown = ElementBounds::new(29.0, 300.0, 360.0, 600.0);
        assert!(latch.observe(motion.in_view(shown, phone)));
    }
}
