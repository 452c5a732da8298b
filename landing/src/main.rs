// Venue landing page — Leptos 0.8 Edition
// Developed by the Agrahari Web Team (c)2025

mod icons;
mod sections;
mod styles;
mod viewport;

use leptos::prelude::*;
use sections::*;
use venue_core::shell::LoadGate;
use venue_core::{SiteConfig, SiteContent};
use wasm_bindgen::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("logger already set: {e}")));
    }
    print_banner();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    let config = viewport::provide_config(SiteConfig::embedded());
    viewport::provide_viewport();
    let content = load_content();

    // Cosmetic load-in: transparent for a moment, then fade in.
    let gate = LoadGate::new(&config.shell);
    let (loaded, set_loaded) = signal(false);
    match set_timeout_with_handle(move || set_loaded.set(true), gate.delay) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => {
            log::warn!("[venue][shell] load timer unavailable: {e:?}");
            set_loaded.set(true);
        }
    }

    let SiteContent {
        venue,
        stats,
        aggregate,
        experiences,
        reviews,
    } = content;

    view! {
        <style>{styles::SITE_CSS}</style>
        <div class="page" style=move || gate.style(loaded.get())>
            <Nav venue=venue.clone() />
            <main>
                <Hero venue=venue.clone() />
                <About stats=stats />
                <Experiences experiences=experiences />
                <Reviews reviews=reviews aggregate=aggregate />
                <Location venue=venue.clone() />
            </main>
            <Footer venue=venue />
        </div>
        <Dock />
    }
}

/// Compiled-in page copy. A broken file renders an empty page rather than
/// no page at all.
fn load_content() -> SiteContent {
    let content = SiteContent::embedded().unwrap_or_else(|e| {
        log::error!("[venue][content] {e}; rendering without content");
        SiteContent::default()
    });
    if let Err(e) = content.validate() {
        log::warn!("[venue][content] {e}");
    }
    content
}

const BANNER: &str = r#"
  +-----------------------------------------+
  |   A G R A H A R I                       |
  |   Marriage Hall . Restaurant . Shopping |
  +-----------------------------------------+
  The Royal Landmark of Siddharth Nagar
"#;

fn print_banner() {
    web_sys::console::log_2(
        &JsValue::from_str(&format!("%c{BANNER}")),
        &JsValue::from_str("color: #d4af37; font-family: monospace; font-size: 11px;"),
    );
    web_sys::console::log_2(
        &JsValue::from_str("%cBookings: scroll down to Visit Us, or call the Executive Desk."),
        &JsValue::from_str("color: #a89a6a;"),
    );
}
