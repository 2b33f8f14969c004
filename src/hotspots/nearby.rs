//! Nearby attraction lookup
//!
//! Nearby attractions are stored as plain names. They are resolved against the
//! catalog with the same case-insensitive containment rule used for the source
//! destination, and names without a catalog entry become placeholders.

use serde::Serialize;
use tracing::{debug, instrument};

use super::scorer::{MAX_SUGGESTIONS, SuggestionEngine};
use super::Destination;

pub const PLACEHOLDER_DESCRIPTION: &str = "Nearby attraction worth visiting";
pub const PLACEHOLDER_CATEGORY: &str = "attraction";

/// Minimal record for a nearby attraction that is not in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceholderAttraction {
    pub name: String,
    pub description: String,
    pub category: String,
}

impl PlaceholderAttraction {
    fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            description: PLACEHOLDER_DESCRIPTION.to_string(),
            category: PLACEHOLDER_CATEGORY.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NearbyAttraction<'a> {
    Known(&'a Destination),
    Placeholder(PlaceholderAttraction),
}

impl NearbyAttraction<'_> {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            NearbyAttraction::Known(destination) => &destination.name,
            NearbyAttraction::Placeholder(placeholder) => &placeholder.name,
        }
    }

    #[must_use]
    pub fn is_known(&self) -> bool {
        matches!(self, NearbyAttraction::Known(_))
    }
}

impl<'c> SuggestionEngine<'c> {
    /// Up to three attractions near the first destination whose name contains
    /// `hotspot_name`. Empty when no destination matches.
    #[instrument(level = "debug", skip(self))]
    pub fn get_nearby_attractions(&self, hotspot_name: &str) -> Vec<NearbyAttraction<'c>> {
        let Some(hotspot) = self.catalog.find_by_name(hotspot_name) else {
            debug!("No destination matches '{}'", hotspot_name);
            return Vec::new();
        };

        hotspot
            .nearby_attractions
            .iter()
            .take(MAX_SUGGESTIONS)
            .map(|name| match self.catalog.find_by_name(name) {
                Some(destination) => NearbyAttraction::Known(destination),
                None => NearbyAttraction::Placeholder(PlaceholderAttraction::named(name)),
            })
            .collect()
    }
}
