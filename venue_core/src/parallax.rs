//! Hero parallax: scroll progress through the hero mapped to transforms.

use crate::config::ParallaxConfig;

/// Clamped linear map from `domain` to `range`.
///
/// Inputs outside the domain hold at the nearest boundary output.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearMap {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearMap {
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 || !span.is_finite() {
            return r0;
        }
        let t = ((x - d0) / span).clamp(0.0, 1.0);
        r0 + t * (r1 - r0)
    }
}

/// Progress through a region that starts when its top reaches the viewport
/// top (0) and ends when its bottom does (1). `top` is relative to the
/// viewport, so it goes negative as the page scrolls.
pub fn region_progress(top: f64, height: f64) -> f64 {
    if height <= 0.0 || !height.is_finite() {
        return 0.0;
    }
    (-top / height).clamp(0.0, 1.0)
}

/// Transform values for one progress reading.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxFrame {
    /// Downward shift of the image layer, percent of its own height.
    pub translate_pct: f64,
    /// Opacity of the hero copy.
    pub opacity: f64,
    pub scale: f64,
}

impl ParallaxFrame {
    pub fn layer_style(&self) -> String {
        format!("transform: translateY({:.3}%);", self.translate_pct)
    }

    pub fn image_style(&self) -> String {
        format!("transform: scale({:.4});", self.scale)
    }

    pub fn content_style(&self) -> String {
        format!("opacity: {:.4};", self.opacity)
    }
}

/// The three hero mappings sharing one progress input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxMapper {
    pub translate: LinearMap,
    pub opacity: LinearMap,
    pub scale: LinearMap,
}

impl ParallaxMapper {
    pub fn new(config: &ParallaxConfig) -> Self {
        let [t0, t1] = config.translate_pct;
        let [f0, f1] = config.fade_window;
        let [s0, s1] = config.scale;
        Self {
            translate: LinearMap::new((0.0, 1.0), (t0, t1)),
            opacity: LinearMap::new((f0, f1), (1.0, 0.0)),
            scale: LinearMap::new((0.0, 1.0), (s0, s1)),
        }
    }

    /// Map progress `p`; clamped to `[0, 1]` first.
    pub fn frame(&self, p: f64) -> ParallaxFrame {
        let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
        ParallaxFrame {
            translate_pct: self.translate.map(p),
            opacity: self.opacity.map(p),
            scale: self.scale.map(p),
        }
    }
}

impl Default for ParallaxMapper {
    fn default() -> Self {
        Self::new(&ParallaxConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn endpoints() {
        let mapper = ParallaxMapper::default();
        assert_eq!(
            mapper.frame(0.0),
            ParallaxFrame {
                translate_pct: 0.0,
                opacity: 1.0,
                scale: 1.0,
            }
        );
        let end = mapper.frame(1.0);
        assert!(close(end.translate_pct, 30.0));
        assert_eq!(end.opacity, 0.0);
        assert!(close(end.scale, 1.15));
    }

    #[test]
    fn clamps_outside_domain() {
        let mapper = ParallaxMapper::default();
        assert_eq!(mapper.frame(-2.0), mapper.frame(0.0));
        assert_eq!(mapper.frame(3.0), mapper.frame(1.0));
        assert_eq!(mapper.frame(f64::NAN), mapper.frame(0.0));
    }

    #[test]
    fn opacity_is_gone_at_eighty_percent() {
        let mapper = ParallaxMapper::default();
        assert!(close(mapper.frame(0.4).opacity, 0.5));
        assert_eq!(mapper.frame(0.8).opacity, 0.0);
        assert_eq!(mapper.frame(0.9).opacity, 0.0);
    }

    #[test]
    fn interpolation_is_linear_and_monotonic() {
        let mapper = ParallaxMapper::default();
        let mut last = mapper.frame(0.0);
        for step in 1..=100 {
            let p = step as f64 / 100.0;
            let f = mapper.frame(p);
            assert!(close(f.translate_pct, 30.0 * p));
            assert!(close(f.scale, 1.0 + 0.15 * p));
            assert!(f.translate_pct >= last.translate_pct);
            assert!(f.scale >= last.scale);
            assert!(f.opacity <= last.opacity);
            last = f;
        }
    }

    #[test]
    fn degenerate_domain_returns_range_start() {
        let map = LinearMap::new((0.5, 0.5), (2.0, 4.0));
        assert_eq!(map.map(0.0), 2.0);
        assert_eq!(map.map(9.0), 2.0);
    }

    #[test]
    fn region_progress_tracks_scroll() {
        assert_eq!(region_progress(0.0, 800.0), 0.0);
        assert_eq!(region_progress(100.0, 800.0), 0.0);
        assert_eq!(region_progress(-400.0, 800.0), 0.5);
        assert_eq!(region_progress(-800.0, 800.0), 1.0);
        assert_eq!(region_progress(-5000.0, 800.0), 1.0);
        assert_eq!(region_progress(-10.0, 0.0), 0.0);
    }

    #[test]
    fn styles() {
        let frame = ParallaxMapper::default().frame(0.5);
        assert_eq!(frame.layer_style(), "transform: translateY(15.000%);");
        assert_eq!(frame.image_style(), "transform: scale(1.0750);");
        assert_eq!(frame.content_style(), "opacity: 0.3750;");
    }
}
