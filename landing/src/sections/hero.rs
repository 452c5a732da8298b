use std::time::Duration;

use leptos::html;
use leptos::prelude::*;
use venue_core::content::Venue;
use venue_core::easing::Tween;
use venue_core::parallax::{ParallaxMapper, region_progress};
use venue_core::reveal::RevealMotion;
use venue_core::shell::Section;

use crate::icons::{ICON_ARROW_RIGHT, Icon};
use crate::viewport::{element_bounds, scroll_to_section, use_config, use_viewport};

/// Mount-time entrance of the hero copy: (delay ms, duration ms, rise px)
/// for the eyebrow, title, tagline, actions and scroll cue.
const INTRO: [(u64, u64, f64); 5] = [
    (0, 1200, 30.0),
    (200, 1400, 40.0),
    (600, 1000, 30.0),
    (1000, 1000, 20.0),
    (1800, 1500, 0.0),
];

fn intro_motion(step: usize) -> RevealMotion {
    let (delay, duration, rise) = INTRO[step.min(INTRO.len() - 1)];
    RevealMotion {
        offset_px: rise,
        margin_px: 0.0,
        tween: Tween::new(Duration::from_millis(duration))
            .with_delay(Duration::from_millis(delay)),
    }
}

#[component]
pub fn Hero(venue: Venue) -> impl IntoView {
    let config = use_config();
    let viewport = use_viewport();
    let mapper = ParallaxMapper::new(&config.parallax);
    let node = NodeRef::<html::Section>::new();

    let frame = Memo::new(move |_| {
        let _ = viewport.sample.get();
        let progress = node
            .get()
            .map(|el| {
                let bounds = element_bounds(&el);
                region_progress(bounds.top, bounds.height())
            })
            .unwrap_or(0.0);
        mapper.frame(progress)
    });

    // Two frames so the hidden styles are painted before the transition.
    let (intro, set_intro) = signal(false);
    request_animation_frame(move || request_animation_frame(move || set_intro.set(true)));
    let step = move |i: usize| move || intro_motion(i).style(intro.get());

    let directions = config.contact.directions_url.clone();

    view! {
        <section id=Section::Hero.id() class="hero" node_ref=node>
            <div class="hero-layer" style=move || frame.get().layer_style()>
                <img
                    src="/images/hero-dining.png"
                    alt="Dining hall at dusk"
                    class="hero-image"
                    style=move || frame.get().image_style()
                />
                <div class="hero-shade"></div>
            </div>

            <div class="hero-content" style=move || frame.get().content_style()>
                <div class="hero-eyebrow" style=step(0)>
                    <span class="rule rule-left wide"></span>
                    <span>{venue.established}</span>
                    <span class="rule rule-right wide"></span>
                </div>

                <h1 class="hero-title" style=step(1)>
                    "Experience the "
                    <em class="text-gold">"Pinnacle"</em>
                    <br />
                    "of Elegance"
                </h1>

                <p class="hero-tagline" style=step(2)>{venue.tagline}</p>

                <div class="hero-actions" style=step(3)>
                    <a href=directions target="_blank" rel="noopener noreferrer" class="btn btn-gold btn-lg">
                        "Visit Us Now"
                        <Icon path=ICON_ARROW_RIGHT class="icon-sm" />
                    </a>
                    <button
                        class="btn btn-ghost btn-lg"
                        on:click=move |_| scroll_to_section(Section::Experience.id())
                    >
                        "Explore"
                    </button>
                </div>

                <div class="hero-cue" style=step(4)>
                    <div class="hero-cue-line"></div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intro_steps_are_staggered() {
        let delays: Vec<_> = (0..INTRO.len())
            .map(|i| intro_motion(i).tween.delay.as_millis())
            .collect();
        assert_eq!(delays, vec![0, 200, 600, 1000, 1800]);
        assert!(delays.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn scroll_cue_only_fades() {
        let cue = intro_motion(4);
        assert_eq!(cue.offset_px, 0.0);
        assert_eq!(cue.style(false), "opacity: 0; transform: translateY(0px);");
        // Out-of-range steps reuse the last entry.
        assert_eq!(intro_motion(99), cue);
    }
}
