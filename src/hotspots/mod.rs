//! Hotspot module
//!
//! This module provides the destination suggestion engine behind the chat assistant:
//! - The immutable hotspot catalog and its built-in Bhutan data
//! - Relevance scoring of chat queries against the catalog
//! - Nearby attraction lookup by destination name
//! - Seasonal, category and difficulty recommendations

pub mod catalog;
pub mod destination;
pub mod filters;
pub mod nearby;
pub mod scorer;

pub use catalog::Catalog;
pub use destination::{Destination, Difficulty, Season};
pub use nearby::{NearbyAttraction, PlaceholderAttraction};
pub use scorer::{FALLBACK_CATEGORIES, MAX_SUGGESTIONS, ScoredDestination, SuggestionEngine, score};
