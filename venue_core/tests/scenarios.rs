//! End-to-end page scenarios driven through a synthetic viewport.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use venue_core::carousel::{Carousel, CarouselMetrics, Direction};
use venue_core::parallax::{ParallaxMapper, region_progress};
use venue_core::reveal::{RevealLatch, RevealMotion};
use venue_core::shell::LoadGate;
use venue_core::viewport::{
    ChromeFlags, ElementBounds, SyntheticViewport, ViewportSource, subscribe_scoped,
};
use venue_core::{ReviewLayout, SiteConfig, SiteContent};

#[test]
fn embedded_reviews_split_between_grid_and_carousel() {
    let content = SiteContent::embedded().expect("embedded content");
    assert_eq!(content.reviews.len(), 6);
    assert_eq!(content.reviews.iter().filter(|r| r.featured).count(), 1);

    let layout = ReviewLayout::build(&content.reviews).expect("one featured review");
    let featured = layout.featured.expect("featured slot");
    assert_eq!(featured.author, "Rajesh Kumar");

    let non_featured: Vec<_> = content.reviews.iter().filter(|r| !r.featured).collect();
    let grid: Vec<_> = layout.grid.iter().map(|r| r.author.clone()).collect();
    let expected: Vec<_> = non_featured[..4].iter().map(|r| r.author.clone()).collect();
    assert_eq!(grid, expected);
    // The fifth non-featured review only appears in the carousel.
    assert!(!grid.contains(&non_featured[4].author));
    assert_eq!(layout.carousel, content.reviews);
}

#[test]
fn carousel_at_right_extreme_disables_right_arrow() {
    let carousel = Carousel::new(&SiteConfig::embedded().carousel);
    // Six cards at 85vw on a 390px phone, 20px gaps.
    let client_width = 390.0;
    let scroll_width = 6.0 * 331.5 + 5.0 * 20.0;
    let mut offset = 0.0;
    let mut flags = carousel.flags(CarouselMetrics {
        scroll_left: offset,
        scroll_width,
        client_width,
    });
    assert!(!flags.can_scroll_left && flags.can_scroll_right);

    while flags.allows(Direction::Right) {
        offset = (offset + carousel.scroll_delta(Direction::Right, client_width))
            .min(scroll_width - client_width);
        flags = carousel.flags(CarouselMetrics {
            scroll_left: offset,
            scroll_width,
            client_width,
        });
    }

    assert_eq!(offset, scroll_width - client_width);
    assert!(!flags.can_scroll_right);
    assert!(flags.can_scroll_left);
}

#[test]
fn carousel_cards_reveal_as_they_are_swiped_in() {
    let config = SiteConfig::embedded();
    let carousel = Carousel::new(&config.carousel);
    let viewport = SyntheticViewport::new(390.0, 800.0);
    // Strip row is on screen vertically; six 340px cards, 40px gaps,
    // starting 25px in from the left edge.
    let (card_width, gap, inset) = (340.0, 40.0, 25.0);
    let motions: Vec<_> = (0..6)
        .map(|i| RevealMotion::card(&config.reveal, i))
        .collect();
    let mut latches = [RevealLatch::new(); 6];

    let mut observe = |strip_left: f64| {
        let sample = viewport.sample();
        for (i, latch) in latches.iter_mut().enumerate() {
            let left = inset + i as f64 * (card_width + gap) - strip_left;
            let bounds = ElementBounds::new(left, 300.0, left + card_width, 600.0);
            latch.observe(motions[i].in_view(bounds, sample));
        }
        latches.map(|l| l.is_revealed())
    };

    assert_eq!(observe(0.0), [true, false, false, false, false, false]);

    let step = carousel.scroll_delta(Direction::Right, 390.0);
    assert_eq!(observe(step), [true, true, false, false, false, false]);
    assert_eq!(observe(3.0 * step), [true, true, true, true, false, false]);
    // Swiping back never hides anything.
    assert_eq!(observe(0.0), [true, true, true, true, false, false]);
}

#[test]
fn page_fades_in_once_and_stays() {
    let gate = LoadGate::new(&SiteConfig::embedded().shell);
    assert_eq!(gate.opacity_at(Duration::ZERO), 0.0);
    assert_eq!(gate.opacity_at(Duration::from_millis(1100)), 1.0);
    let after: Vec<f64> = (11..100)
        .map(|tenth| gate.opacity_at(Duration::from_millis(tenth * 100)))
        .collect();
    assert!(after.iter().all(|o| *o == 1.0));
}

#[test]
fn chrome_flags_follow_synthetic_scroll() {
    let config = SiteConfig::embedded();
    let viewport = Rc::new(SyntheticViewport::new(1280.0, 800.0));
    let seen = Rc::new(RefCell::new(Vec::new()));

    let _guard = {
        let seen = Rc::clone(&seen);
        let thresholds = config.thresholds.clone();
        subscribe_scoped(
            &viewport,
            Box::new(move |sample| {
                seen.borrow_mut()
                    .push(ChromeFlags::at(&thresholds, sample.offset))
            }),
        )
    };

    for offset in [0.0, 61.0, 399.0, 401.0, 30.0] {
        viewport.scroll_to(offset);
    }

    let seen = seen.borrow();
    let nav: Vec<_> = seen.iter().map(|f| f.nav_scrolled).collect();
    let dock: Vec<_> = seen.iter().map(|f| f.dock_visible).collect();
    assert_eq!(nav, vec![false, true, true, true, false]);
    assert_eq!(dock, vec![false, false, false, true, false]);
}

#[test]
fn section_reveals_once_even_after_scrolling_back() {
    let config = SiteConfig::embedded();
    let motion = RevealMotion::section(&config.reveal, Duration::ZERO);
    let viewport = Rc::new(SyntheticViewport::new(1280.0, 800.0));
    // Section sits 1200px down the page, 500px tall.
    let (page_top, height) = (1200.0, 500.0);

    let latch = Rc::new(RefCell::new(RevealLatch::new()));
    let history = Rc::new(RefCell::new(Vec::new()));
    let _guard = {
        let latch = Rc::clone(&latch);
        let history = Rc::clone(&history);
        subscribe_scoped(
            &viewport,
            Box::new(move |sample| {
                let top = page_top - sample.offset;
                let bounds = ElementBounds::new(0.0, top, sample.viewport_width, top + height);
                let opened = latch.borrow_mut().observe(motion.in_view(bounds, sample));
                history.borrow_mut().push((opened, latch.borrow().is_revealed()));
            }),
        )
    };

    for offset in [0.0, 300.0, 600.0, 0.0, 2500.0, 700.0] {
        viewport.scroll_to(offset);
    }

    assert_eq!(
        *history.borrow(),
        vec![
            (false, false),
            (false, false),
            (true, true),
            (false, true),
            (false, true),
            (false, true),
        ]
    );
    assert_eq!(viewport.sample().offset, 700.0);
}

#[test]
fn hero_parallax_follows_scroll() {
    let config = SiteConfig::embedded();
    let mapper = ParallaxMapper::new(&config.parallax);
    let viewport = SyntheticViewport::new(1440.0, 900.0);
    // The hero fills the first screen.
    let hero_height = 900.0;

    let mut frames = Vec::new();
    for offset in [0.0, 225.0, 720.0, 900.0, 1800.0] {
        viewport.scroll_to(offset);
        let top = -viewport.sample().offset;
        frames.push(mapper.frame(region_progress(top, hero_height)));
    }

    assert_eq!(frames[0].opacity, 1.0);
    assert!((frames[1].translate_pct - 7.5).abs() < 1e-9);
    assert_eq!(frames[2].opacity, 0.0);
    assert!((frames[3].scale - 1.15).abs() < 1e-9);
    assert_eq!(frames[3], frames[4]);
}
