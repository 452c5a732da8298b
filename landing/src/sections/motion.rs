//! Shared building blocks for scroll-revealed content.

use std::time::Duration;

use leptos::html;
use leptos::prelude::*;
use venue_core::reveal::{RevealLatch, RevealMotion};

use crate::viewport::{element_bounds, use_config, use_viewport};

/// Scroll ticks from an inner scroll container, such as the review strip.
///
/// Content inside one can enter view without the window moving, so
/// `use_reveal` re-measures on these ticks too.
#[derive(Clone, Copy)]
pub struct InnerScroll(pub ReadSignal<u64>);

/// Latch `node` open the first time it scrolls into view.
///
/// The returned signal goes `false -> true` at most once. Without scroll
/// observation it starts `true` so the content is never stuck hidden.
pub fn use_reveal(node: NodeRef<html::Div>, motion: RevealMotion) -> ReadSignal<bool> {
    let viewport = use_viewport();
    let inner = use_context::<InnerScroll>();
    let initial = if viewport.live {
        RevealLatch::new()
    } else {
        RevealLatch::revealed()
    };
    let latch = StoredValue::new(initial);
    let (revealed, set_revealed) = signal(initial.is_revealed());

    Effect::new(move || {
        let sample = viewport.sample.get();
        if let Some(InnerScroll(ticks)) = inner {
            ticks.track();
        }
        let Some(el) = node.get() else {
            return;
        };
        if revealed.get_untracked() {
            return;
        }
        let intersects = motion.in_view(element_bounds(&el), sample);
        let opened = latch
            .try_update_value(|latch| latch.observe(intersects))
            .unwrap_or(false);
        if opened {
            log::debug!("[venue][reveal] opened at offset {:.0}", sample.offset);
            set_revealed.set(true);
        }
    });

    revealed
}

/// Wrapper that fades and lifts its children in on first view.
#[component]
pub fn Reveal(
    /// Stagger delay before the transition starts
    #[prop(optional)]
    delay_ms: u64,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let config = use_config();
    let motion = RevealMotion::section(&config.reveal, Duration::from_millis(delay_ms));
    let node = NodeRef::<html::Div>::new();
    let revealed = use_reveal(node, motion);

    view! {
        <div node_ref=node class=class style=move || motion.style(revealed.get())>
            {children()}
        </div>
    }
}

#[component]
pub fn SectionLabel(label: &'static str) -> impl IntoView {
    view! {
        <div class="section-label">
            <span class="rule rule-left"></span>
            <span class="section-label-text">{label}</span>
            <span class="rule rule-right"></span>
        </div>
    }
}

#[component]
pub fn GlassCard(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    view! { <div class=format!("glass-card {class}")>{children()}</div> }
}
