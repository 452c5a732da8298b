use leptos::prelude::*;
use venue_core::content::Stat;
use venue_core::shell::Section;

use super::motion::{GlassCard, Reveal, SectionLabel};

#[component]
pub fn About(stats: Vec<Stat>) -> impl IntoView {
    let last = stats.len().saturating_sub(1);
    let stats = stats
        .into_iter()
        .enumerate()
        .map(|(i, stat)| {
            view! {
                <div class="stat">
                    <span class="stat-value">{stat.value}</span>
                    <span class="stat-label">{stat.label}</span>
                </div>
                {(i < last).then(|| view! { <div class="stat-divider"></div> })}
            }
        })
        .collect_view();

    view! {
        <section id=Section::About.id() class="section about">
            <div class="container two-col">
                <Reveal>
                    <SectionLabel label="Our Legacy" />
                    <h2 class="section-title">
                        "Where Tradition"
                        <br />
                        "Meets " <em class="text-gold">"Grandeur"</em>
                    </h2>
                    <div class="prose">
                        <p>
                            "Nestled in the heart of Dumariyaganj, Agrahari Marriage Hall, Restaurant & Shopping Centre "
                            "stands as a testament to refined taste and timeless elegance. Our establishment "
                            "brings together the finest culinary traditions, a majestic celebration venue, "
                            "and an exquisite retail experience under one roof."
                        </p>
                        <p>
                            "Every corner of our space is designed to evoke a sense of wonder, from the "
                            "aromatic flavors of our gourmet kitchen to the chandelier-lit grandeur of our "
                            "imperial ballroom. Welcome to the royal landmark of Siddharth Nagar."
                        </p>
                    </div>
                    <GlassCard class="stats">{stats}</GlassCard>
                </Reveal>

                <Reveal delay_ms=200 class="framed">
                    <div class="photo">
                        <img src="/images/exterior.png" alt="Venue exterior" loading="lazy" />
                        <div class="photo-shade"></div>
                    </div>
                    <div class="frame-corner bottom-left"></div>
                    <div class="frame-corner top-right"></div>
                </Reveal>
            </div>
        </section>
    }
}
