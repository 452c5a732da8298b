//! Site configuration.
//!
//! Motion constants and contact endpoints, compiled in from `content/site.toml`.
//! Every field has a default so a partial file is valid.

use std::time::Duration;

use serde::Deserialize;

use crate::easing::Tween;
use crate::error::Result;

const EMBEDDED_SITE: &str = include_str!("../content/site.toml");

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub thresholds: ThresholdConfig,
    pub reveal: RevealConfig,
    pub parallax: ParallaxConfig,
    pub carousel: CarouselConfig,
    pub shell: ShellConfig,
    pub contact: ContactConfig,
}

/// Scroll offsets (px) that flip the navbar chrome and the quick-action dock.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    pub nav_chrome_px: f64,
    pub dock_px: f64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            nav_chrome_px: 60.0,
            dock_px: 400.0,
        }
    }
}

/// Section reveal motion.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub duration_ms: u64,
    /// Initial downward offset before the section settles.
    pub offset_px: f64,
    /// The viewport is shrunk by this much before testing intersection.
    pub margin_px: f64,
    pub card_duration_ms: u64,
    pub card_offset_px: f64,
    /// Per-card stagger in the reviews grid.
    pub card_stagger_ms: u64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            duration_ms: 900,
            offset_px: 50.0,
            margin_px: 80.0,
            card_duration_ms: 700,
            card_offset_px: 30.0,
            card_stagger_ms: 150,
        }
    }
}

impl RevealConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn card_tween(&self, index: usize) -> Tween {
        Tween::new(Duration::from_millis(self.card_duration_ms))
            .with_delay(Duration::from_millis(self.card_stagger_ms * index as u64))
    }
}

/// Output ranges of the hero parallax.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    pub translate_pct: [f64; 2],
    /// Progress window over which the hero copy fades out.
    pub fade_window: [f64; 2],
    pub scale: [f64; 2],
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            translate_pct: [0.0, 30.0],
            fade_window: [0.0, 0.8],
            scale: [1.0, 1.15],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Slack absorbing sub-pixel rounding at the scroll extremes.
    pub slack_px: f64,
    /// Fraction of the visible width moved per arrow press.
    pub step_fraction: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            slack_px: 10.0,
            step_fraction: 0.8,
        }
    }
}

/// Initial page fade-in.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub delay_ms: u64,
    pub fade_ms: u64,
    pub dock_slide_px: f64,
    pub dock_transition_ms: u64,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            delay_ms: 100,
            fade_ms: 1000,
            dock_slide_px: 80.0,
            dock_transition_ms: 500,
        }
    }
}

/// Outbound endpoints. Opened optimistically, never verified.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub directions_url: String,
    /// National number dialled through `tel:`.
    pub phone: String,
    /// International number used for the messaging deep link.
    pub whatsapp_number: String,
    pub map_embed_url: String,
    pub instagram_url: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            directions_url: "https://maps.app.goo.gl/fvJKZ1YgDREkeJm38".into(),
            phone: "08009188327".into(),
            whatsapp_number: "918009188327".into(),
            map_embed_url: String::new(),
            instagram_url: String::new(),
        }
    }
}

impl ContactConfig {
    pub fn tel_uri(&self) -> String {
        format!("tel:{}", self.phone)
    }

    pub fn whatsapp_url(&self) -> String {
        format!("https://wa.me/{}", self.whatsapp_number)
    }
}

impl SiteConfig {
    /// Parse a configuration document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// The configuration compiled into the binary.
    /// Returns default config if the embedded file is invalid.
    pub fn embedded() -> Self {
        match Self::from_toml_str(EMBEDDED_SITE) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("[venue][config] falling back to defaults: {e}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.thresholds.nav_chrome_px, 60.0);
        assert_eq!(config.thresholds.dock_px, 400.0);
        assert_eq!(config.reveal.duration(), Duration::from_millis(900));
        assert_eq!(config.carousel.slack_px, 10.0);
        assert_eq!(config.shell.delay_ms, 100);
    }

    #[test]
    fn test_embedded_config_parses() {
        let config = SiteConfig::from_toml_str(EMBEDDED_SITE).expect("embedded site.toml");
        assert_eq!(config.thresholds, ThresholdConfig::default());
        assert_eq!(config.parallax, ParallaxConfig::default());
        assert!(config.contact.map_embed_url.starts_with("https://www.google.com/maps/embed"));
        assert_eq!(SiteConfig::embedded(), config);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
[thresholds]
dock_px = 500.0
"#,
        )
        .expect("partial config");
        assert_eq!(config.thresholds.dock_px, 500.0);
        assert_eq!(config.thresholds.nav_chrome_px, 60.0);
        assert_eq!(config.reveal, RevealConfig::default());
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let err = SiteConfig::from_toml_str("[thresholds]\ndock_px = \"far\"").unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn test_contact_links() {
        let contact = ContactConfig::default();
        assert_eq!(contact.tel_uri(), "tel:08009188327");
        assert_eq!(contact.whatsapp_url(), "https://wa.me/918009188327");
    }

    #[test]
    fn test_card_stagger() {
        let reveal = RevealConfig::default();
        assert_eq!(reveal.card_tween(0).delay, Duration::ZERO);
        assert_eq!(reveal.card_tween(3).delay, Duration::from_millis(450));
        assert_eq!(reveal.card_tween(3).duration, Duration::from_millis(700));
    }
}
