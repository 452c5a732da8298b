// Browser side of scroll tracking
// Developed by the Agrahari Web Team (c)2025

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use leptos::prelude::*;
use venue_core::SiteConfig;
use venue_core::viewport::{
    ElementBounds, FrameCoalescer, ListenerId, ScrollSample, ViewportSource, subscribe_scoped,
};
use wasm_bindgen::prelude::*;

type Listener = Rc<RefCell<Box<dyn FnMut(ScrollSample)>>>;

#[derive(Default)]
struct Shared {
    frames: FrameCoalescer,
    next_id: u64,
    listeners: Vec<(ListenerId, Listener)>,
}

/// `ViewportSource` backed by the real window.
///
/// Scroll and resize events are coalesced into one sample per animation
/// frame. The window listeners are removed when the last handle is dropped.
pub struct WindowViewport {
    window: web_sys::Window,
    shared: Rc<RefCell<Shared>>,
    on_event: Closure<dyn FnMut()>,
}

const EVENTS: [&str; 2] = ["scroll", "resize"];

impl WindowViewport {
    /// Returns `None` when there is no window (scroll effects stay off).
    pub fn attach() -> Option<Rc<Self>> {
        let window = web_sys::window()?;
        let shared = Rc::new(RefCell::new(Shared::default()));

        let on_event = {
            let shared = Rc::clone(&shared);
            let window = window.clone();
            Closure::wrap(Box::new(move || {
                if !shared.borrow_mut().frames.request() {
                    return;
                }
                let shared = Rc::clone(&shared);
                let window = window.clone();
                request_animation_frame(move || {
                    if shared.borrow_mut().frames.take() {
                        dispatch(&shared, read_sample(&window));
                    }
                });
            }) as Box<dyn FnMut()>)
        };

        for event in EVENTS {
            if let Err(e) =
                window.add_event_listener_with_callback(event, on_event.as_ref().unchecked_ref())
            {
                log::warn!("[venue][viewport] cannot listen for {event}: {e:?}");
            }
        }

        Some(Rc::new(Self {
            window,
            shared,
            on_event,
        }))
    }
}

impl Drop for WindowViewport {
    fn drop(&mut self) {
        for event in EVENTS {
            let _ = self
                .window
                .remove_event_listener_with_callback(event, self.on_event.as_ref().unchecked_ref());
        }
    }
}

impl ViewportSource for WindowViewport {
    fn sample(&self) -> ScrollSample {
        read_sample(&self.window)
    }

    fn subscribe(&self, listener: Box<dyn FnMut(ScrollSample)>) -> ListenerId {
        let mut shared = self.shared.borrow_mut();
        let id = ListenerId(shared.next_id);
        shared.next_id += 1;
        shared.listeners.push((id, Rc::new(RefCell::new(listener))));
        id
    }

    fn unsubscribe(&self, id: ListenerId) {
        self.shared
            .borrow_mut()
            .listeners
            .retain(|(lid, _)| *lid != id);
    }
}

fn read_sample(window: &web_sys::Window) -> ScrollSample {
    let offset = window.scroll_y().unwrap_or(0.0);
    let extent = |value: Result<JsValue, JsValue>| value.ok().and_then(|v| v.as_f64());
    let viewport_width = extent(window.inner_width()).unwrap_or(0.0);
    let viewport_height = extent(window.inner_height()).unwrap_or(0.0);
    ScrollSample::new(offset, viewport_width, viewport_height)
}

fn dispatch(shared: &Rc<RefCell<Shared>>, sample: ScrollSample) {
    // Snapshot first: listeners write signals, which may run effects that
    // touch the listener list.
    let listeners: Vec<Listener> = shared
        .borrow()
        .listeners
        .iter()
        .map(|(_, l)| Rc::clone(l))
        .collect();
    for listener in listeners {
        (*listener.borrow_mut())(sample);
    }
}

/// Scroll state shared with every section through context.
#[derive(Clone, Copy)]
pub struct ViewportSignal {
    pub sample: ReadSignal<ScrollSample>,
    /// False when scroll observation is unavailable; animated content then
    /// renders in its settled state.
    pub live: bool,
}

impl ViewportSignal {
    fn inert() -> Self {
        let (sample, _) = signal(ScrollSample::default());
        Self {
            sample,
            live: false,
        }
    }
}

/// Attach to the window and publish samples for the lifetime of the
/// calling component.
pub fn provide_viewport() -> ViewportSignal {
    let Some(source) = WindowViewport::attach() else {
        log::warn!("[venue][viewport] no window, scroll effects disabled");
        let inert = ViewportSignal::inert();
        provide_context(inert);
        return inert;
    };

    let (sample, set_sample) = signal(source.sample());
    let guard = subscribe_scoped(&source, Box::new(move |s| set_sample.set(s)));
    log::debug!("[venue][viewport] listening as {:?}", guard.id());

    let slot = StoredValue::new_local(Some(guard));
    on_cleanup(move || {
        slot.try_update_value(|guard| drop(guard.take()));
    });

    let ctx = ViewportSignal { sample, live: true };
    provide_context(ctx);
    ctx
}

pub fn use_viewport() -> ViewportSignal {
    use_context::<ViewportSignal>().unwrap_or_else(ViewportSignal::inert)
}

pub fn provide_config(config: SiteConfig) -> Arc<SiteConfig> {
    let config = Arc::new(config);
    provide_context(Arc::clone(&config));
    config
}

pub fn use_config() -> Arc<SiteConfig> {
    use_context::<Arc<SiteConfig>>().unwrap_or_default()
}

pub fn element_bounds(el: &web_sys::Element) -> ElementBounds {
    let rect = el.get_bounding_client_rect();
    ElementBounds::new(rect.left(), rect.top(), rect.right(), rect.bottom())
}

/// Smooth-scroll the element with DOM id `id` into view.
pub fn scroll_to_section(id: &str) {
    let Some(target) = document().get_element_by_id(id) else {
        log::debug!("[venue][nav] no element #{id}");
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}
