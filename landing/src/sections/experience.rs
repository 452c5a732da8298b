use leptos::prelude::*;
use venue_core::content::{Experience, ExperienceIcon};
use venue_core::shell::Section;

use super::motion::{GlassCard, Reveal, SectionLabel};
use crate::icons::{ICON_CROWN, ICON_SHOPPING_BAG, ICON_UTENSILS, Icon};

/// Rows start their entrance slightly after they cross into view.
const ROW_DELAY_MS: u64 = 100;

fn icon_path(icon: ExperienceIcon) -> &'static str {
    match icon {
        ExperienceIcon::Dining => ICON_UTENSILS,
        ExperienceIcon::Crown => ICON_CROWN,
        ExperienceIcon::ShoppingBag => ICON_SHOPPING_BAG,
    }
}

#[component]
pub fn Experiences(experiences: Vec<Experience>) -> impl IntoView {
    let rows = experiences
        .into_iter()
        .enumerate()
        .map(|(i, exp)| view! { <ExperienceRow exp=exp flipped={i % 2 == 1} /> })
        .collect_view();

    view! {
        <section id=Section::Experience.id() class="section experience">
            <div class="container">
                <Reveal class="section-head">
                    <SectionLabel label="The Experience" />
                    <h2 class="section-title">
                        "Three Wings of"
                        <br />
                        <em class="text-gold">"Unparalleled Excellence"</em>
                    </h2>
                </Reveal>
                <div class="experience-list">{rows}</div>
            </div>
        </section>
    }
}

/// Image and copy side by side; odd rows put the image on the right.
#[component]
fn ExperienceRow(exp: Experience, flipped: bool) -> impl IntoView {
    let highlights = exp
        .highlights
        .into_iter()
        .map(|h| view! { <span class="chip">{h}</span> })
        .collect_view();

    view! {
        <Reveal delay_ms=ROW_DELAY_MS>
            <div class="two-col experience-row" class:flipped=flipped>
                <div class="photo experience-photo">
                    <img src=exp.image alt=exp.title.clone() loading="lazy" />
                    <div class="photo-shade"></div>
                    <div class="photo-badge">
                        <GlassCard class="badge">
                            <Icon path=icon_path(exp.icon) class="icon-sm text-gold" />
                            <span>{exp.subtitle}</span>
                        </GlassCard>
                    </div>
                </div>
                <div class="experience-copy">
                    <h3 class="experience-title">{exp.title}</h3>
                    <p class="prose-p">{exp.description}</p>
                    <div class="chips">{highlights}</div>
                </div>
            </div>
        </Reveal>
    }
}
