use leptos::prelude::*;
use venue_core::content::Venue;
use venue_core::shell::Section;

use crate::icons::{ICON_INSTAGRAM, ICON_SPARKLES, Icon};
use crate::viewport::use_config;

/// `@handle` from a profile URL such as `https://www.instagram.com/name/`.
fn profile_handle(url: &str) -> Option<String> {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|h| !h.is_empty() && !h.contains(':'))
        .map(|h| format!("@{h}"))
}

#[component]
pub fn Footer(venue: Venue) -> impl IntoView {
    let instagram = use_config().contact.instagram_url.clone();
    let handle = profile_handle(&instagram).unwrap_or_default();
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer id=Section::Footer.id() class="footer">
            <div class="footer-fade"></div>
            <div class="container footer-row">
                <div class="footer-brand">
                    <Icon path=ICON_SPARKLES class="icon-sm text-gold-dim" />
                    <span>
                        {format!("{},", venue.name.to_uppercase())}
                        <br />
                        <span class="footer-brand-sub">{venue.subtitle.to_uppercase()}</span>
                    </span>
                </div>
                <p class="footer-tagline">{venue.tagline.to_uppercase()}</p>
                <p class="footer-copy">
                    {format!("\u{a9} {year} {}, {}", venue.name, venue.subtitle)}
                </p>
            </div>
            <div class="footer-credit">
                <div class="rule-center"></div>
                <a href=instagram target="_blank" rel="noopener noreferrer" class="credit-link">
                    <span>"Designed & Developed by"</span>
                    <span class="text-gold-dim">"Aman Gupta"</span>
                    <span class="muted">"|"</span>
                    <Icon path=ICON_INSTAGRAM class="icon-xs text-gold-dim" />
                    <span class="text-gold-dim">{handle}</span>
                </a>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_from_profile_url() {
        assert_eq!(
            profile_handle("https://www.instagram.com/amangupta.yt").as_deref(),
            Some("@amangupta.yt")
        );
        assert_eq!(
            profile_handle("https://www.instagram.com/amangupta.yt/").as_deref(),
            Some("@amangupta.yt")
        );
        assert_eq!(profile_handle(""), None);
        assert_eq!(profile_handle("https://"), None);
    }
}
