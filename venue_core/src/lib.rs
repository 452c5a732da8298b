//! # venue-core
//!
//! State and motion logic for the venue landing page, kept free of browser
//! APIs so it can be tested natively.
//!
//! ## Modules
//!
//! - [`viewport`] - scroll samples, thresholds, viewport entry, the
//!   [`viewport::ViewportSource`] seam and frame coalescing
//! - [`reveal`] - one-shot section reveal latch and motion
//! - [`parallax`] - hero scroll progress mapped to translate/opacity/scale
//! - [`carousel`] - review strip arrow flags and step size
//! - [`shell`] - section order, nav targets, load-in fade, dock motion
//! - [`easing`] - cubic-bezier curves and tweens
//! - [`content`] - compiled-in page copy and its validation rules
//! - [`config`] - compiled-in motion constants and contact endpoints
//!
//! ## Example
//!
//! ```rust
//! use venue_core::parallax::ParallaxMapper;
//! use venue_core::viewport::ChromeFlags;
//! use venue_core::SiteConfig;
//!
//! let config = SiteConfig::embedded();
//! let flags = ChromeFlags::at(&config.thresholds, 120.0);
//! assert!(flags.nav_scrolled && !flags.dock_visible);
//!
//! let frame = ParallaxMapper::new(&config.parallax).frame(1.0);
//! assert_eq!(frame.opacity, 0.0);
//! ```

pub mod carousel;
pub mod config;
pub mod content;
pub mod easing;
pub mod error;
pub mod parallax;
pub mod reveal;
pub mod shell;
pub mod viewport;

pub use config::SiteConfig;
pub use content::{ReviewLayout, SiteContent};
pub use error::{ContentError, Result};
