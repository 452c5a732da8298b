use leptos::prelude::*;
use venue_core::content::Venue;
use venue_core::shell::Section;
use venue_core::viewport::ChromeFlags;

use crate::icons::{ICON_CLOSE, ICON_MENU, ICON_SPARKLES, Icon};
use crate::viewport::{scroll_to_section, use_config, use_viewport};

#[component]
pub fn Nav(venue: Venue) -> impl IntoView {
    let config = use_config();
    let viewport = use_viewport();
    let thresholds = config.thresholds.clone();
    let scrolled =
        Memo::new(move |_| ChromeFlags::at(&thresholds, viewport.sample.get().offset).nav_scrolled);
    let (menu_open, set_menu_open) = signal(false);

    let go = move |section: Section| {
        set_menu_open.set(false);
        scroll_to_section(section.id());
    };

    let desktop_links = Section::NAV
        .into_iter()
        .map(|(section, label)| {
            view! {
                <button class="nav-link" on:click=move |_| go(section)>
                    {label}
                </button>
            }
        })
        .collect_view();

    let mobile_links = Section::NAV
        .into_iter()
        .map(|(section, label)| {
            view! {
                <button class="nav-link mobile" on:click=move |_| go(section)>
                    {label}
                </button>
            }
        })
        .collect_view();

    let directions = config.contact.directions_url.clone();
    let name = venue.name.to_uppercase();

    view! {
        <nav class="nav" class:scrolled=move || scrolled.get()>
            <div class="container nav-inner">
                <button class="nav-brand" on:click=move |_| go(Section::Hero)>
                    <Icon path=ICON_SPARKLES class="icon text-gold" />
                    <span class="nav-brand-text">
                        {name}
                        <span class="nav-brand-sub">{venue.subtitle.to_uppercase()}</span>
                    </span>
                </button>

                <div class="nav-links">
                    {desktop_links}
                    <a href=directions.clone() target="_blank" rel="noopener noreferrer" class="btn btn-gold btn-sm">
                        "Get Directions"
                    </a>
                </div>

                <button
                    class="nav-toggle"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || {
                        if menu_open.get() {
                            view! { <Icon path=ICON_CLOSE /> }
                        } else {
                            view! { <Icon path=ICON_MENU /> }
                        }
                    }}
                </button>
            </div>

            <div class="nav-mobile" class:open=move || menu_open.get()>
                {mobile_links}
                <a
                    href=directions
                    target="_blank"
                    rel="noopener noreferrer"
                    class="btn btn-gold"
                    on:click=move |_| set_menu_open.set(false)
                >
                    "Get Directions"
                </a>
            </div>
        </nav>
    }
}
