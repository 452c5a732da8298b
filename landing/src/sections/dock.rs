use leptos::prelude::*;
use venue_core::shell::DockMotion;
use venue_core::viewport::ChromeFlags;

use crate::icons::{ICON_MAP_PIN, ICON_PHONE, ICON_WHATSAPP, Icon};
use crate::viewport::{use_config, use_viewport};

/// Floating quick actions for small screens. Slides in past the dock
/// threshold and back out above it.
#[component]
pub fn Dock() -> impl IntoView {
    let config = use_config();
    let viewport = use_viewport();
    let thresholds = config.thresholds.clone();
    let visible =
        Memo::new(move |_| ChromeFlags::at(&thresholds, viewport.sample.get().offset).dock_visible);
    let motion = DockMotion::new(&config.shell);
    let contact = &config.contact;

    view! {
        <div
            class="dock"
            aria-hidden=move || (!visible.get()).to_string()
            style=move || motion.style(visible.get())
        >
            <div class="dock-bar">
                <a href=contact.tel_uri() class="dock-action" aria-label="Call us">
                    <Icon path=ICON_PHONE />
                    <span>"Call"</span>
                </a>
                <a
                    href=contact.directions_url.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="dock-action"
                    aria-label="Get directions"
                >
                    <Icon path=ICON_MAP_PIN />
                    <span>"Location"</span>
                </a>
                <a
                    href=contact.whatsapp_url()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="dock-action"
                    aria-label="Chat on WhatsApp"
                >
                    <Icon path=ICON_WHATSAPP filled=true />
                    <span>"WhatsApp"</span>
                </a>
            </div>
        </div>
    }
}
