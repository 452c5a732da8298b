use leptos::html;
use leptos::prelude::*;
use venue_core::ReviewLayout;
use venue_core::carousel::{Carousel, CarouselFlags, CarouselMetrics, Direction};
use venue_core::content::{AggregateRating, Review};
use venue_core::reveal::RevealMotion;
use venue_core::shell::Section;

use super::motion::{GlassCard, InnerScroll, Reveal, SectionLabel, use_reveal};
use crate::icons::{
    ICON_CHEVRON_LEFT, ICON_CHEVRON_RIGHT, ICON_EXTERNAL_LINK, ICON_QUOTE, ICON_STAR, Icon,
};
use crate::viewport::{use_config, use_viewport};

#[component]
pub fn Reviews(reviews: Vec<Review>, aggregate: AggregateRating) -> impl IntoView {
    let ReviewLayout {
        featured,
        grid,
        carousel,
    } = ReviewLayout::lenient(&reviews);

    let subtitle = format!(
        "{} Average Rating on {}",
        aggregate.score,
        aggregate.sources.iter().take(2).cloned().collect::<Vec<_>>().join(" & ")
    );

    // Wide screens: featured card spanning two rows, then the grid.
    let featured_card = featured.map(|review| {
        view! { <ReviewCard review=review placement=Placement::Featured index=0 /> }
    });
    let grid_cards = grid
        .into_iter()
        .enumerate()
        .map(|(i, review)| {
            view! { <ReviewCard review=review placement=Placement::Grid index={i + 1} /> }
        })
        .collect_view();

    view! {
        <section id=Section::Reviews.id() class="section reviews">
            <div class="container">
                <Reveal class="section-head">
                    <SectionLabel label="Guest Experiences" />
                    <h2 class="section-title">
                        "Voices of Our " <em class="text-gold">"Elite Guests"</em>
                    </h2>
                    <p class="section-subtitle">{subtitle}</p>
                </Reveal>

                <div class="review-grid">
                    {featured_card
                        .map(|card| view! { <div class="review-featured-slot">{card}</div> })}
                    {grid_cards}
                </div>

                <ReviewCarousel reviews=carousel />

                <Reveal class="aggregate">
                    <GlassCard class="aggregate-badge">
                        <div class="aggregate-score">
                            <span class="stars">
                                {(0..5)
                                    .map(|_| {
                                        view! {
                                            <Icon path=ICON_STAR class="icon-sm star filled" filled=true />
                                        }
                                    })
                                    .collect_view()}
                            </span>
                            <span class="aggregate-value">{aggregate.score}</span>
                        </div>
                        <div class="stat-divider"></div>
                        <span class="aggregate-sources">{aggregate.sources.join(" \u{b7} ")}</span>
                    </GlassCard>
                </Reveal>
            </div>
        </section>
    }
}

/// Narrow screens: every review in a horizontally scrolling strip.
#[component]
fn ReviewCarousel(reviews: Vec<Review>) -> impl IntoView {
    let config = use_config();
    let viewport = use_viewport();
    let carousel = Carousel::new(&config.carousel);
    let strip = NodeRef::<html::Div>::new();
    let (flags, set_flags) = signal(CarouselFlags::default());
    // Swiping moves cards into view without a window scroll.
    let (swipes, set_swipes) = signal(0u64);
    provide_context(InnerScroll(swipes));

    let refresh = move || {
        if let Some(el) = strip.get_untracked() {
            set_flags.set(carousel.flags(metrics(&el)));
        }
    };

    // Initial reading once mounted, and again whenever the window resizes.
    Effect::new(move || {
        let _ = viewport.sample.get();
        if strip.get().is_some() {
            refresh();
        }
    });

    let step = move |direction: Direction| {
        let Some(el) = strip.get_untracked() else {
            return;
        };
        if !flags.get_untracked().allows(direction) {
            return;
        }
        let delta = carousel.scroll_delta(direction, f64::from(el.client_width()));
        log::debug!("[venue][carousel] {direction:?} by {delta:.0}px");
        let options = web_sys::ScrollToOptions::new();
        options.set_left(delta);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        el.scroll_by_with_scroll_to_options(&options);
    };

    let cards = reviews
        .into_iter()
        .enumerate()
        .map(|(i, review)| {
            view! {
                <div class="carousel-item">
                    <ReviewCard review=review placement=Placement::Strip index=i />
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="review-carousel">
            <div
                class="carousel-strip"
                node_ref=strip
                on:scroll=move |_| {
                    refresh();
                    set_swipes.update(|n| *n += 1);
                }
            >
                {cards}
            </div>
            <div class="carousel-controls">
                <button
                    class="carousel-arrow"
                    aria-label="Previous review"
                    disabled=move || !flags.get().allows(Direction::Left)
                    on:click=move |_| step(Direction::Left)
                >
                    <Icon path=ICON_CHEVRON_LEFT class="icon-sm" />
                </button>
                <button
                    class="carousel-arrow"
                    aria-label="Next review"
                    disabled=move || !flags.get().allows(Direction::Right)
                    on:click=move |_| step(Direction::Right)
                >
                    <Icon path=ICON_CHEVRON_RIGHT class="icon-sm" />
                </button>
            </div>
        </div>
    }
}

fn metrics(el: &web_sys::Element) -> CarouselMetrics {
    CarouselMetrics {
        scroll_left: f64::from(el.scroll_left()),
        scroll_width: f64::from(el.scroll_width()),
        client_width: f64::from(el.client_width()),
    }
}

/// Where a card sits on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Placement {
    /// Spans two grid rows, with the quote mark.
    Featured,
    Grid,
    /// Plain card in the narrow-screen strip, even for the featured review.
    Strip,
}

impl Placement {
    fn class(self) -> &'static str {
        match self {
            Placement::Featured => "review-card glass-card featured",
            Placement::Grid | Placement::Strip => "review-card glass-card",
        }
    }

    fn shows_quote(self) -> bool {
        self == Placement::Featured
    }
}

#[component]
fn ReviewCard(
    review: Review,
    placement: Placement,
    /// Position in its list, used to stagger the entrance
    index: usize,
) -> impl IntoView {
    let config = use_config();
    let motion = RevealMotion::card(&config.reveal, index);
    let node = NodeRef::<html::Div>::new();
    let revealed = use_reveal(node, motion);

    let stars = review
        .stars()
        .into_iter()
        .map(|filled| {
            view! {
                <span class="star" class:filled=filled>
                    <Icon path=ICON_STAR class="icon-xs" filled=true />
                </span>
            }
        })
        .collect_view();

    view! {
        <div
            node_ref=node
            class=placement.class()
            style=move || motion.style(revealed.get())
        >
            {placement
                .shows_quote()
                .then(|| {
                    view! {
                        <div class="review-quote">
                            <Icon path=ICON_QUOTE class="icon-lg" />
                        </div>
                    }
                })}
            <div class="review-meta">
                <div class="stars" aria-label=format!("{} out of 5 stars", review.rating)>
                    {stars}
                </div>
                <div class="review-source">
                    <span>{review.source}</span>
                    <Icon path=ICON_EXTERNAL_LINK class="icon-xs" />
                </div>
            </div>
            <p class="review-text">{format!("\u{201c}{}\u{201d}", review.text)}</p>
            <div class="review-footer">
                <span class="review-author">{review.author}</span>
                {review.verified.then(|| view! { <span class="verified">"Verified Guest"</span> })}
            </div>
        </div>
    }
}
