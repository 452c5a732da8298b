use leptos::prelude::*;
use venue_core::content::Venue;
use venue_core::shell::Section;

use super::motion::{GlassCard, Reveal, SectionLabel};
use crate::icons::{
    ICON_ARROW_RIGHT, ICON_CLOCK, ICON_COMPASS, ICON_MAP_PIN, ICON_NAVIGATION, ICON_PHONE, Icon,
};
use crate::viewport::use_config;

#[component]
pub fn Location(venue: Venue) -> impl IntoView {
    let contact = use_config().contact.clone();
    let tel = contact.tel_uri();
    let map_url = contact.map_embed_url.clone();
    let map_directions = contact.directions_url.clone();
    let card_directions = contact.directions_url.clone();
    let phone = contact.phone.clone();
    let address = venue
        .address
        .into_iter()
        .map(|line| view! { <span class="address-line">{line}</span> })
        .collect_view();

    view! {
        <section id=Section::Location.id() class="section location">
            <div class="container">
                <Reveal class="section-head">
                    <SectionLabel label="The Destination" />
                    <h2 class="section-title">
                        "Navigate to " <em class="text-gold">"Paradise"</em>
                    </h2>
                </Reveal>

                <div class="two-col">
                    <Reveal>
                        <div class="map-frame">
                            <iframe
                                src=map_url
                                title="Venue location map"
                                referrerpolicy="no-referrer-when-downgrade"
                            ></iframe>
                            <div class="map-border"></div>
                            <a
                                href=map_directions
                                target="_blank"
                                rel="noopener noreferrer"
                                class="btn btn-gold map-cta"
                            >
                                <Icon path=ICON_MAP_PIN class="icon-sm" />
                                "Get Directions"
                                <Icon path=ICON_ARROW_RIGHT class="icon-sm" />
                            </a>
                        </div>
                    </Reveal>

                    <Reveal delay_ms=200 class="location-details">
                        <GlassCard class="concierge">
                            <div class="concierge-head">
                                <Icon path=ICON_COMPASS class="icon text-gold" />
                                <h3>"Concierge Desk"</h3>
                            </div>
                            <p>
                                "For Royal Bookings & Marriage Hall Enquiries, contact our Executive Desk."
                            </p>
                        </GlassCard>

                        <div class="facts">
                            <div class="fact">
                                <div class="fact-icon">
                                    <Icon path=ICON_MAP_PIN class="icon-sm" />
                                </div>
                                <div>
                                    <span class="fact-label">"Address"</span>
                                    <p class="fact-value">{address}</p>
                                </div>
                            </div>
                            <div class="fact">
                                <div class="fact-icon">
                                    <Icon path=ICON_PHONE class="icon-sm" />
                                </div>
                                <div>
                                    <span class="fact-label">"Executive Desk"</span>
                                    <a href=tel.clone() class="fact-value link">{phone}</a>
                                </div>
                            </div>
                            <div class="fact">
                                <div class="fact-icon">
                                    <Icon path=ICON_CLOCK class="icon-sm" />
                                </div>
                                <div>
                                    <span class="fact-label">"Hours"</span>
                                    <p class="fact-value">{venue.hours}</p>
                                </div>
                            </div>
                        </div>

                        <a href=tel class="btn btn-outline concierge-call">
                            <Icon path=ICON_PHONE class="icon-sm text-gold" />
                            <span>"Speak with our Concierge"</span>
                        </a>

                        <a
                            href=card_directions
                            target="_blank"
                            rel="noopener noreferrer"
                            class="navigate-card"
                        >
                            <GlassCard class="navigate">
                                <div class="navigate-icon">
                                    <Icon path=ICON_NAVIGATION class="icon text-gold" />
                                </div>
                                <div>
                                    <span class="navigate-title">{format!("Navigate to {}", first_word(&venue.name))}</span>
                                    <span class="navigate-sub">"Open in Google Maps"</span>
                                </div>
                            </GlassCard>
                        </a>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

fn first_word(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigate_card_uses_short_name() {
        assert_eq!(first_word("Agrahari Marriage Hall"), "Agrahari");
        assert_eq!(first_word(""), "");
    }
}
