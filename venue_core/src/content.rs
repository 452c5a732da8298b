//! Page copy: experiences, reviews and venue facts.
//!
//! All content is compiled in from `content/content.toml` and never changes at
//! runtime. The reviews section relies on exactly one featured review; that
//! rule is checked here and reported as a [`ContentError`] instead of being
//! papered over.

use serde::Deserialize;

use crate::error::{ContentError, Result};

const EMBEDDED_CONTENT: &str = include_str!("../content/content.toml");

/// Number of non-featured reviews shown next to the featured one on wide screens.
pub const GRID_SLOTS: usize = 4;

/// Icon shown on an experience's image badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExperienceIcon {
    Dining,
    Crown,
    ShoppingBag,
}

/// One wing of the venue.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Experience {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    /// Path of the image, resolved by the host.
    pub image: String,
    pub icon: ExperienceIcon,
    pub highlights: Vec<String>,
}

/// A customer review.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Review {
    pub author: String,
    /// 1 to 5.
    pub rating: u8,
    pub text: String,
    /// Where the review was posted, e.g. "Google".
    pub source: String,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub featured: bool,
}

impl Review {
    /// Five star slots, filled for `i < rating`.
    pub fn stars(&self) -> [bool; 5] {
        std::array::from_fn(|i| i < self.rating as usize)
    }
}

/// A headline number in the About card.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

/// Aggregate rating badge under the reviews.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AggregateRating {
    pub score: String,
    pub sources: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Venue {
    pub name: String,
    pub subtitle: String,
    pub tagline: String,
    pub established: String,
    pub address: Vec<String>,
    pub hours: String,
}

/// Everything the page renders.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub venue: Venue,
    pub stats: Vec<Stat>,
    pub aggregate: AggregateRating,
    pub experiences: Vec<Experience>,
    pub reviews: Vec<Review>,
}

impl SiteContent {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// The content compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_toml_str(EMBEDDED_CONTENT)
    }

    /// Check the content rules. Reports the first violation found.
    pub fn validate(&self) -> Result<()> {
        for exp in &self.experiences {
            if exp.highlights.is_empty() {
                return Err(ContentError::EmptyHighlights {
                    title: exp.title.clone(),
                });
            }
        }
        for review in &self.reviews {
            if !(1..=5).contains(&review.rating) {
                return Err(ContentError::RatingOutOfRange {
                    author: review.author.clone(),
                    rating: review.rating,
                });
            }
        }
        featured_review(&self.reviews).map(|_| ())
    }
}

/// The single review marked as featured.
pub fn featured_review(reviews: &[Review]) -> Result<&Review> {
    let mut featured = reviews.iter().filter(|r| r.featured);
    match (featured.next(), featured.count()) {
        (None, _) => Err(ContentError::NoFeaturedReview),
        (Some(review), 0) => Ok(review),
        (Some(_), rest) => Err(ContentError::MultipleFeaturedReviews { count: rest + 1 }),
    }
}

/// How reviews are distributed across the two layouts.
///
/// Wide screens show the featured review in a large slot next to a grid of
/// the next [`GRID_SLOTS`] non-featured reviews. Narrow screens show every
/// review in a horizontal carousel.
#[derive(Clone, Debug, PartialEq)]
pub struct ReviewLayout {
    pub featured: Option<Review>,
    pub grid: Vec<Review>,
    pub carousel: Vec<Review>,
}

impl ReviewLayout {
    /// Strict layout: fails unless exactly one review is featured.
    pub fn build(reviews: &[Review]) -> Result<Self> {
        let featured = featured_review(reviews)?.clone();
        Ok(Self {
            featured: Some(featured),
            ..Self::without_featured(reviews)
        })
    }

    /// Layout that never fails. When the featured rule is broken the error is
    /// logged and the highlighted slot is left empty.
    pub fn lenient(reviews: &[Review]) -> Self {
        match Self::build(reviews) {
            Ok(layout) => layout,
            Err(e) => {
                log::error!("[venue][reviews] {e}; rendering without a featured slot");
                Self::without_featured(reviews)
            }
        }
    }

    fn without_featured(reviews: &[Review]) -> Self {
        Self {
            featured: None,
            grid: reviews
                .iter()
                .filter(|r| !r.featured)
                .take(GRID_SLOTS)
                .cloned()
                .collect(),
            carousel: reviews.to_vec(),
        }
    }
}
