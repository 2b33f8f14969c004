//! Relevance scoring of catalog destinations against free-text chat queries

use serde::Serialize;
use tracing::{debug, instrument};

use super::{Catalog, Destination};

/// Upper bound on every list the engine returns
pub const MAX_SUGGESTIONS: usize = 3;

/// Categories used, in order, when a query matches nothing
pub const FALLBACK_CATEGORIES: [&str; 3] = ["monastery", "dzong", "nature"];

const KEYWORD_WEIGHT: u32 = 3;
const CATEGORY_WEIGHT: u32 = 2;
const LOCATION_WEIGHT: u32 = 2;
const NAME_WEIGHT: u32 = 5;
const INTEREST_WEIGHT: u32 = 1;

/// A destination together with the relevance score it earned for a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredDestination<'a> {
    #[serde(flatten)]
    pub destination: &'a Destination,
    pub relevance_score: u32,
}

/// Stateless suggestion engine over an immutable catalog
#[derive(Debug, Clone, Copy)]
pub struct SuggestionEngine<'c> {
    pub(super) catalog: &'c Catalog,
}

impl<'c> SuggestionEngine<'c> {
    #[must_use]
    pub fn new(catalog: &'c Catalog) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Suggest up to three destinations for a chat message.
    ///
    /// Destinations are ranked by [`score`] with ties kept in catalog order.
    /// When none of the three best candidates scores above zero, the first
    /// monastery, dzong and nature destinations are returned instead.
    /// `current_location` is accepted for callers that track it but does not
    /// influence ranking.
    #[instrument(level = "debug", skip(self, user_interests), fields(interests = user_interests.len()))]
    pub fn generate_smart_suggestions<S: AsRef<str>>(
        &self,
        query: &str,
        current_location: Option<&str>,
        user_interests: &[S],
    ) -> Vec<ScoredDestination<'c>> {
        let query = query.to_lowercase();

        let mut ranked: Vec<ScoredDestination<'c>> = self
            .catalog
            .iter()
            .map(|destination| ScoredDestination {
                destination,
                relevance_score: score(destination, &query, user_interests),
            })
            .collect();

        // sort_by is stable: equal scores keep catalog order
        ranked.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));
        ranked.truncate(MAX_SUGGESTIONS);

        if ranked.iter().all(|s| s.relevance_score == 0) {
            debug!("No query signal matched, using fallback suggestions");
            return self.fallback_suggestions();
        }

        debug!(
            "Top suggestions: {:?}",
            ranked
                .iter()
                .map(|s| (s.destination.name.as_str(), s.relevance_score))
                .collect::<Vec<_>>()
        );
        ranked
    }

    /// First destination of each fallback category, deduplicated by id
    #[must_use]
    pub fn fallback_suggestions(&self) -> Vec<ScoredDestination<'c>> {
        let mut suggestions: Vec<ScoredDestination<'c>> = Vec::with_capacity(MAX_SUGGESTIONS);
        for category in FALLBACK_CATEGORIES {
            if let Some(destination) = self.catalog.first_in_category(category) {
                if !suggestions.iter().any(|s| s.destination.id == destination.id) {
                    suggestions.push(ScoredDestination {
                        destination,
                        relevance_score: 0,
                    });
                }
            }
        }
        suggestions.truncate(MAX_SUGGESTIONS);
        suggestions
    }
}

/// Relevance of one destination for an already lowercased query.
///
/// Keywords, category, location and name count when they occur as substrings
/// of the query. Each interest that equals a keyword or the category adds one.
#[must_use]
pub fn score<S: AsRef<str>>(destination: &Destination, query: &str, user_interests: &[S]) -> u32 {
    let mut score = 0;

    for keyword in &destination.keywords {
        if query.contains(keyword.as_str()) {
            score += KEYWORD_WEIGHT;
        }
    }

    if query.contains(destination.category.as_str()) {
        score += CATEGORY_WEIGHT;
    }

    if query.contains(&destination.location.to_lowercase()) {
        score += LOCATION_WEIGHT;
    }

    if query.contains(&destination.name.to_lowercase()) {
        score += NAME_WEIGHT;
    }

    for interest in user_interests {
        let interest = interest.as_ref();
        if destination.keywords.iter().any(|k| k == interest) || destination.category == interest {
            score += INTEREST_WEIGHT;
        }
    }

    score
}
