//! Single-attribute recommendation filters

use tracing::{debug, instrument};

use super::scorer::{MAX_SUGGESTIONS, SuggestionEngine};
use super::{Destination, Difficulty, Season};

impl<'c> SuggestionEngine<'c> {
    /// Destinations whose season text mentions a month of the season `month`
    /// falls in. Months outside 1-12 are treated as spring.
    #[instrument(level = "debug", skip(self))]
    pub fn get_seasonal_recommendations(&self, month: u32) -> Vec<&'c Destination> {
        let season = Season::from_month(month);
        debug!("Month {} resolved to {}", month, season);

        self.filtered(|destination| {
            let season_text = destination.season.to_lowercase();
            season
                .month_names()
                .iter()
                .any(|name| season_text.contains(name))
        })
    }

    #[instrument(level = "debug", skip(self))]
    pub fn get_recommendations_by_category(&self, category: &str) -> Vec<&'c Destination> {
        self.filtered(|destination| destination.category == category)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn get_recommendations_by_difficulty(&self, difficulty: Difficulty) -> Vec<&'c Destination> {
        self.filtered(|destination| destination.difficulty == difficulty)
    }

    fn filtered<F>(&self, predicate: F) -> Vec<&'c Destination>
    where
        F: Fn(&Destination) -> bool,
    {
        self.catalog
            .iter()
            .filter(|destination| predicate(destination))
            .take(MAX_SUGGESTIONS)
            .collect()
    }
}
