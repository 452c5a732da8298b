//! Horizontal review carousel: extent flags and arrow commands.

use crate::config::CarouselConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Scroll geometry of the strip, as read from the DOM.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CarouselMetrics {
    pub scroll_left: f64,
    pub scroll_width: f64,
    pub client_width: f64,
}

/// Which arrows are enabled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselFlags {
    pub can_scroll_left: bool,
    pub can_scroll_right: bool,
}

impl Default for CarouselFlags {
    /// Before the first measurement the strip is assumed left-aligned with
    /// more content to the right.
    fn default() -> Self {
        Self {
            can_scroll_left: false,
            can_scroll_right: true,
        }
    }
}

impl CarouselFlags {
    pub fn allows(&self, direction: Direction) -> bool {
        match direction {
            Direction::Left => self.can_scroll_left,
            Direction::Right => self.can_scroll_right,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Carousel {
    slack: f64,
    step_fraction: f64,
}

impl Carousel {
    pub fn new(config: &CarouselConfig) -> Self {
        Self {
            slack: config.slack_px,
            step_fraction: config.step_fraction,
        }
    }

    /// Recompute the arrow flags. Call on every scroll event and once after
    /// the strip is mounted.
    pub fn flags(&self, m: CarouselMetrics) -> CarouselFlags {
        CarouselFlags {
            can_scroll_left: m.scroll_left > self.slack,
            can_scroll_right: m.scroll_left < m.scroll_width - m.client_width - self.slack,
        }
    }

    /// Signed horizontal distance for one arrow press.
    pub fn scroll_delta(&self, direction: Direction, client_width: f64) -> f64 {
        let amount = client_width * self.step_fraction;
        match direction {
            Direction::Left => -amount,
            Direction::Right => amount,
        }
    }
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new(&CarouselConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(scroll_left: f64, scroll_width: f64, client_width: f64) -> CarouselMetrics {
        CarouselMetrics {
            scroll_left,
            scroll_width,
            client_width,
        }
    }

    #[test]
    fn initial_flags() {
        assert_eq!(
            CarouselFlags::default(),
            CarouselFlags {
                can_scroll_left: false,
                can_scroll_right: true,
            }
        );
    }

    #[test]
    fn left_aligned_strip() {
        let flags = Carousel::default().flags(metrics(0.0, 2000.0, 400.0));
        assert!(!flags.can_scroll_left);
        assert!(flags.can_scroll_right);
    }

    #[test]
    fn content_that_fits_disables_both() {
        let flags = Carousel::default().flags(metrics(0.0, 400.0, 400.0));
        assert!(!flags.can_scroll_left);
        assert!(!flags.can_scroll_right);
    }

    #[test]
    fn slack_absorbs_subpixel_rounding() {
        let carousel = Carousel::default();
        assert!(!carousel.flags(metrics(9.6, 2000.0, 400.0)).can_scroll_left);
        assert!(carousel.flags(metrics(10.5, 2000.0, 400.0)).can_scroll_left);
        assert!(!carousel.flags(metrics(1591.0, 2000.0, 400.0)).can_scroll_right);
        assert!(carousel.flags(metrics(1589.0, 2000.0, 400.0)).can_scroll_right);
    }

    #[test]
    fn flags_match_formula() {
        let carousel = Carousel::default();
        let (w, v) = (2400.0, 375.0);
        for s in (0..=2100).step_by(7).map(f64::from) {
            let flags = carousel.flags(metrics(s, w, v));
            assert_eq!(flags.can_scroll_left, s > 10.0);
            assert_eq!(flags.can_scroll_right, s < w - v - 10.0);
        }
    }

    #[test]
    fn step_is_eighty_percent_of_visible_width() {
        let carousel = Carousel::default();
        assert_eq!(carousel.scroll_delta(Direction::Right, 500.0), 400.0);
        assert_eq!(carousel.scroll_delta(Direction::Left, 500.0), -400.0);
    }

    #[test]
    fn allows_matches_direction() {
        let flags = CarouselFlags {
            can_scroll_left: true,
            can_scroll_right: false,
        };
        assert!(flags.allows(Direction::Left));
        assert!(!flags.allows(Direction::Right));
    }
}
