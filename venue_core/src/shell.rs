//! Page shell: section order, navigation targets and the load-in fade.

use std::time::Duration;

use crate::config::ShellConfig;
use crate::easing::Tween;

/// Page sections in render order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Experience,
    Reviews,
    Location,
    Footer,
}

impl Section {
    /// Fixed render order. The quick-action dock floats above all of them.
    pub const ORDER: [Section; 6] = [
        Section::Hero,
        Section::About,
        Section::Experience,
        Section::Reviews,
        Section::Location,
        Section::Footer,
    ];

    /// Sections reachable from the navbar, with their link labels.
    pub const NAV: [(Section, &'static str); 4] = [
        (Section::About, "About"),
        (Section::Experience, "Experience"),
        (Section::Reviews, "Reviews"),
        (Section::Location, "Visit Us"),
    ];

    /// DOM id of the section element.
    pub const fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Experience => "experience",
            Section::Reviews => "reviews",
            Section::Location => "location",
            Section::Footer => "footer",
        }
    }
}

/// Cosmetic load-in: keep the page transparent for `delay`, then fade it in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoadGate {
    pub delay: Duration,
    pub fade: Tween,
}

impl LoadGate {
    pub fn new(config: &ShellConfig) -> Self {
        Self {
            delay: Duration::from_millis(config.delay_ms),
            fade: Tween::new(Duration::from_millis(config.fade_ms)),
        }
    }

    /// Page opacity `elapsed` after mount.
    pub fn opacity_at(&self, elapsed: Duration) -> f64 {
        let Some(since_loaded) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        self.fade.value_at(since_loaded, 0.0, 1.0)
    }

    /// True once the fade has fully settled; nothing changes afterwards.
    pub fn is_settled(&self, elapsed: Duration) -> bool {
        elapsed >= self.delay + self.fade.end()
    }

    /// Inline style for the page wrapper before and after the delay fires.
    pub fn style(&self, loaded: bool) -> String {
        let opacity = if loaded { 1 } else { 0 };
        format!(
            "opacity: {opacity}; transition: {};",
            self.fade.css_transition("opacity")
        )
    }
}

impl Default for LoadGate {
    fn default() -> Self {
        Self::new(&ShellConfig::default())
    }
}

/// Slide-in motion of the quick-action dock. Unlike section reveals this one
/// follows the dock flag both ways.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DockMotion {
    pub slide_px: f64,
    pub tween: Tween,
}

impl DockMotion {
    pub fn new(config: &ShellConfig) -> Self {
        Self {
            slide_px: config.dock_slide_px,
            tween: Tween::new(Duration::from_millis(config.dock_transition_ms)),
        }
    }

    pub fn style(&self, visible: bool) -> String {
        let (y, opacity, events) = if visible {
            (0.0, 1, "auto")
        } else {
            (self.slide_px, 0, "none")
        };
        format!(
            "transform: translate(-50%, {y}px); opacity: {opacity}; pointer-events: {events}; transition: {}, {};",
            self.tween.css_transition("transform"),
            self.tween.css_transition("opacity"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_is_fixed() {
        let ids: Vec<_> = Section::ORDER.iter().map(|s| s.id()).collect();
        assert_eq!(
            ids,
            vec!["hero", "about", "experience", "reviews", "location", "footer"]
        );
    }

    #[test]
    fn nav_targets_exist_in_order() {
        for (section, _) in Section::NAV {
            assert!(Section::ORDER.contains(&section));
        }
        assert_eq!(Section::NAV[3], (Section::Location, "Visit Us"));
    }

    #[test]
    fn gate_is_transparent_until_delay() {
        let gate = LoadGate::default();
        assert_eq!(gate.opacity_at(Duration::ZERO), 0.0);
        assert_eq!(gate.opacity_at(Duration::from_millis(100)), 0.0);
        assert!(gate.opacity_at(Duration::from_millis(400)) > 0.0);
        assert!(!gate.is_settled(Duration::from_millis(1099)));
    }

    #[test]
    fn gate_settles_at_one() {
        let gate = LoadGate::default();
        assert!(gate.is_settled(Duration::from_millis(1100)));
        for ms in [1100, 1500, 10_000, 3_600_000] {
            assert_eq!(gate.opacity_at(Duration::from_millis(ms)), 1.0);
        }
    }

    #[test]
    fn gate_style() {
        let gate = LoadGate::default();
        assert_eq!(
            gate.style(false),
            "opacity: 0; transition: opacity 1s cubic-bezier(0, 0, 0.58, 1) 0s;"
        );
        assert!(gate.style(true).starts_with("opacity: 1;"));
    }

    #[test]
    fn dock_style_follows_flag() {
        let dock = DockMotion::new(&ShellConfig::default());
        assert!(dock.style(false).starts_with("transform: translate(-50%, 80px); opacity: 0;"));
        assert!(dock.style(true).starts_with("transform: translate(-50%, 0px); opacity: 1;"));
        assert!(dock.style(true).contains("transform 0.5s"));
    }
}
