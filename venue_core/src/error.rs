//! Errors raised while loading and validating the compiled-in site data.

use thiserror::Error;

/// Problems with the embedded content or configuration files.
///
/// None of these are fatal to the page: the landing logs them and renders
/// whatever is still renderable.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The review list has no entry marked `featured = true`.
    #[error("no review is marked as featured")]
    NoFeaturedReview,

    /// More than one review is marked `featured = true`.
    #[error("{count} reviews are marked as featured, expected exactly one")]
    MultipleFeaturedReviews { count: usize },

    /// A review rating outside 1..=5.
    #[error("review by {author} has rating {rating}, expected 1-5")]
    RatingOutOfRange { author: String, rating: u8 },

    /// An experience entry without any highlight chips.
    #[error("experience '{title}' has no highlights")]
    EmptyHighlights { title: String },

    /// An embedded TOML file failed to parse.
    #[error("failed to parse embedded site data: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result alias for content loading.
pub type Result<T> = std::result::Result<T, ContentError>;
