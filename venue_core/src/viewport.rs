//! Scroll tracking: offsets, thresholds and viewport entry.
//!
//! The browser is hidden behind [`ViewportSource`] so everything downstream
//! (reveal, parallax, chrome flags) can be driven by a scripted
//! [`SyntheticViewport`] in tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::config::ThresholdConfig;

/// One reading of the window's scroll state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSample {
    /// Vertical scroll offset of the document, px.
    pub offset: f64,
    /// Width of the visible viewport, px.
    pub viewport_width: f64,
    /// Height of the visible viewport, px.
    pub viewport_height: f64,
}

impl ScrollSample {
    pub const fn new(offset: f64, viewport_width: f64, viewport_height: f64) -> Self {
        Self {
            offset,
            viewport_width,
            viewport_height,
        }
    }
}

/// "Has the page scrolled past `T` pixels?"
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollThreshold(pub f64);

impl ScrollThreshold {
    pub fn is_past(self, offset: f64) -> bool {
        offset > self.0
    }
}

/// Flags derived from the scroll offset for the fixed page chrome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChromeFlags {
    /// Navbar switches to its opaque, blurred style.
    pub nav_scrolled: bool,
    /// Quick-action dock is shown.
    pub dock_visible: bool,
}

impl ChromeFlags {
    pub fn at(thresholds: &ThresholdConfig, offset: f64) -> Self {
        Self {
            nav_scrolled: ScrollThreshold(thresholds.nav_chrome_px).is_past(offset),
            dock_visible: ScrollThreshold(thresholds.dock_px).is_past(offset),
        }
    }
}

/// Bounding box of an element relative to the viewport's top-left corner, px.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementBounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl ElementBounds {
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }
}

/// Whether `[start, end)` overlaps `[0, extent)` shrunk by `margin` at both
/// ends. The margin is dropped when the extent is too short to keep a band.
fn overlaps(start: f64, end: f64, extent: f64, margin: f64) -> bool {
    let margin = if extent > 2.0 * margin { margin } else { 0.0 };
    end > margin && start < extent - margin
}

/// Whether `bounds` intersects the viewport shrunk inward by `margin` on
/// every edge. Each axis drops the margin on its own when the viewport is
/// shorter (or narrower) than twice the margin.
pub fn enters_viewport(bounds: ElementBounds, viewport: ScrollSample, margin: f64) -> bool {
    overlaps(bounds.top, bounds.bottom, viewport.viewport_height, margin)
        && overlaps(bounds.left, bounds.right, viewport.viewport_width, margin)
}

/// Handle for a registered scroll listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// A source of scroll samples.
///
/// Listeners are called in subscription order, at most once per frame for
/// real sources.
pub trait ViewportSource {
    /// Current scroll state.
    fn sample(&self) -> ScrollSample;

    /// Register a listener. It stays registered until [`unsubscribe`] is called.
    ///
    /// [`unsubscribe`]: ViewportSource::unsubscribe
    fn subscribe(&self, listener: Box<dyn FnMut(ScrollSample)>) -> ListenerId;

    fn unsubscribe(&self, id: ListenerId);
}

/// Subscribe and get a guard that unsubscribes when dropped.
pub fn subscribe_scoped<S>(
    source: &Rc<S>,
    listener: Box<dyn FnMut(ScrollSample)>,
) -> Subscription<S>
where
    S: ViewportSource + ?Sized,
{
    let id = source.subscribe(listener);
    Subscription {
        source: Rc::clone(source),
        id,
    }
}

/// Scoped listener registration. Dropping it releases the listener.
pub struct Subscription<S: ViewportSource + ?Sized> {
    source: Rc<S>,
    id: ListenerId,
}

impl<S: ViewportSource + ?Sized> Subscription<S> {
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl<S: ViewportSource + ?Sized> Drop for Subscription<S> {
    fn drop(&mut self) {
        self.source.unsubscribe(self.id);
    }
}

type Listener = Rc<RefCell<Box<dyn FnMut(ScrollSample)>>>;

/// In-memory viewport driven by explicit `scroll_to` calls.
pub struct SyntheticViewport {
    sample: Cell<ScrollSample>,
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(ListenerId, Listener)>>,
}

impl SyntheticViewport {
    pub fn new(viewport_width: f64, viewport_height: f64) -> Self {
        Self {
            sample: Cell::new(ScrollSample::new(0.0, viewport_width, viewport_height)),
            next_id: Cell::new(0),
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// Move to `offset` and notify every listener.
    pub fn scroll_to(&self, offset: f64) {
        self.emit(ScrollSample {
            offset,
            ..self.sample.get()
        });
    }

    /// Change the viewport size and notify every listener.
    pub fn resize(&self, viewport_width: f64, viewport_height: f64) {
        let current = self.sample.get();
        self.emit(ScrollSample::new(
            current.offset,
            viewport_width,
            viewport_height,
        ));
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn emit(&self, sample: ScrollSample) {
        self.sample.set(sample);
        // Snapshot so listeners may subscribe or unsubscribe while running.
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        for listener in listeners {
            (*listener.borrow_mut())(sample);
        }
    }
}

impl ViewportSource for SyntheticViewport {
    fn sample(&self) -> ScrollSample {
        self.sample.get()
    }

    fn subscribe(&self, listener: Box<dyn FnMut(ScrollSample)>) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners
            .borrow_mut()
            .push((id, Rc::new(RefCell::new(listener))));
        id
    }

    fn unsubscribe(&self, id: ListenerId) {
        self.listeners.borrow_mut().retain(|(lid, _)| *lid != id);
    }
}

/// Collapses bursts of scroll/resize events into one recomputation per
/// animation frame.
#[derive(Debug, Default)]
pub struct FrameCoalescer {
    pending: bool,
}

impl FrameCoalescer {
    /// Note that an event arrived. Returns `true` when the caller must
    /// schedule a frame, `false` when one is already queued.
    pub fn request(&mut self) -> bool {
        !std::mem::replace(&mut self.pending, true)
    }

    /// Called from the frame callback. Returns whether work was pending.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_strict() {
        let t = ThresholdConfig::default();
        assert_eq!(ChromeFlags::at(&t, 0.0), ChromeFlags::default());
        assert!(!ChromeFlags::at(&t, 60.0).nav_scrolled);
        assert!(ChromeFlags::at(&t, 60.5).nav_scrolled);
        assert!(!ChromeFlags::at(&t, 400.0).dock_visible);
        assert_eq!(
            ChromeFlags::at(&t, 401.0),
            ChromeFlags {
                nav_scrolled: true,
                dock_visible: true
            }
        );
    }

    #[test]
    fn thresholds_hold_for_all_offsets() {
        let t = ThresholdConfig::default();
        for s in (-100..2000).map(|s| s as f64 * 0.5) {
            let flags = ChromeFlags::at(&t, s);
            assert_eq!(flags.nav_scrolled, s > 60.0);
            assert_eq!(flags.dock_visible, s > 400.0);
        }
    }

    fn desktop() -> ScrollSample {
        ScrollSample::new(0.0, 1280.0, 800.0)
    }

    /// Full-width band at the given vertical extent.
    fn band(top: f64, bottom: f64) -> ElementBounds {
        ElementBounds::new(0.0, top, 1280.0, bottom)
    }

    #[test]
    fn viewport_entry_respects_margin() {
        let vp = desktop();
        // Below the fold.
        assert!(!enters_viewport(band(900.0, 1300.0), vp, 80.0));
        // Peeking in by 50px, still inside the margin band.
        assert!(!enters_viewport(band(750.0, 1150.0), vp, 80.0));
        // Past the margin.
        assert!(enters_viewport(band(700.0, 1100.0), vp, 80.0));
        // Scrolled above, bottom still within the top margin band.
        assert!(!enters_viewport(band(-400.0, 60.0), vp, 80.0));
        assert!(enters_viewport(band(-400.0, 100.0), vp, 80.0));
        // Without a margin any overlap counts.
        assert!(enters_viewport(band(799.0, 900.0), vp, 0.0));
    }

    #[test]
    fn tiny_viewport_drops_margin() {
        let vp = ScrollSample::new(0.0, 1280.0, 120.0);
        assert!(enters_viewport(band(50.0, 60.0), vp, 80.0));
    }

    #[test]
    fn card_beside_the_viewport_is_not_in_view() {
        // 390px phone, carousel row fully inside vertically.
        let phone = ScrollSample::new(0.0, 390.0, 800.0);
        let parked_right = ElementBounds::new(900.0, 300.0, 1230.0, 600.0);
        assert!(!enters_viewport(parked_right, phone, 0.0));
        let parked_left = ElementBounds::new(-700.0, 300.0, -370.0, 600.0);
        assert!(!enters_viewport(parked_left, phone, 0.0));

        let on_screen = ElementBounds::new(29.0, 300.0, 360.0, 600.0);
        assert!(enters_viewport(on_screen, phone, 0.0));
        assert!(enters_viewport(on_screen, phone, 80.0));
        // Sliver at the right edge is inside the side margin.
        let sliver = ElementBounds::new(350.0, 300.0, 680.0, 600.0);
        assert!(enters_viewport(sliver, phone, 0.0));
        assert!(!enters_viewport(sliver, phone, 80.0));
    }

    #[test]
    fn listeners_fire_in_subscription_order() {
        let viewport = Rc::new(SyntheticViewport::new(1280.0, 800.0));
        let log = Rc::new(RefCell::new(Vec::new()));

        let first = {
            let log = Rc::clone(&log);
            subscribe_scoped(
                &viewport,
                Box::new(move |s| log.borrow_mut().push(("first", s.offset))),
            )
        };
        let _second = {
            let log = Rc::clone(&log);
            subscribe_scoped(
                &viewport,
                Box::new(move |s| log.borrow_mut().push(("second", s.offset))),
            )
        };

        viewport.scroll_to(120.0);
        assert_eq!(*log.borrow(), vec![("first", 120.0), ("second", 120.0)]);

        drop(first);
        viewport.scroll_to(10.0);
        assert_eq!(log.borrow().last(), Some(&("second", 10.0)));
        assert_eq!(log.borrow().len(), 3);
    }

    #[test]
    fn dropping_subscription_releases_listener() {
        let viewport = Rc::new(SyntheticViewport::new(1280.0, 600.0));
        {
            let _guard = subscribe_scoped(&viewport, Box::new(|_| {}));
            assert_eq!(viewport.listener_count(), 1);
        }
        assert_eq!(viewport.listener_count(), 0);
    }

    #[test]
    fn resize_keeps_offset() {
        let viewport = SyntheticViewport::new(1280.0, 600.0);
        viewport.scroll_to(300.0);
        viewport.resize(390.0, 900.0);
        assert_eq!(viewport.sample(), ScrollSample::new(300.0, 390.0, 900.0));
        viewport.scroll_to(20.0);
        assert_eq!(viewport.sample().viewport_width, 390.0);
    }

    #[test]
    fn coalescer_schedules_once_per_frame() {
        let mut frames = FrameCoalescer::default();
        assert!(frames.request());
        assert!(!frames.request());
        assert!(!frames.request());
        assert!(frames.is_pending());
        assert!(frames.take());
        assert!(!frames.take());
        assert!(frames.request());
    }
}
