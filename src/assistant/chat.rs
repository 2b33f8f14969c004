use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use super::{APOLOGY, GREETING, GeminiClient, GenerativeModel, build_prompt};
use crate::config::AssistantConfig;
use crate::hotspots::{Catalog, Destination, SuggestionEngine};
use crate::{Result, TourError};

/// Assistant answer to one user message
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub reply: String,
    /// True when the generative service was unavailable and `reply` is the fixed apology
    pub degraded: bool,
    pub suggestions: Vec<Destination>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Clone)]
pub struct ChatService {
    catalog: Arc<Catalog>,
    model: Option<Arc<dyn GenerativeModel>>,
}

impl ChatService {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, model: Option<Arc<dyn GenerativeModel>>) -> Self {
        Self { catalog, model }
    }

    /// Build the service with a Gemini backend when an API key is configured
    pub fn from_config(catalog: Arc<Catalog>, config: &AssistantConfig) -> Result<Self> {
        let model: Option<Arc<dyn GenerativeModel>> = match &config.api_key {
            Some(key) => {
                info!("Using generative model {}", config.model);
                Some(Arc::new(GeminiClient::new(config, key.clone())?))
            }
            None => {
                warn!("No assistant API key configured, chat replies will be degraded");
                None
            }
        };
        Ok(Self::new(catalog, model))
    }

    #[must_use]
    pub fn greeting() -> &'static str {
        GREETING
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Answer a user message and attach up to three hotspot suggestions.
    ///
    /// Only an empty message is an error. Model failures are logged and
    /// replaced by [`APOLOGY`].
    #[instrument(level = "debug", skip(self))]
    pub async fn respond(&self, message: &str) -> Result<ChatReply> {
        let message = message.trim();
        if message.is_empty() {
            return Err(TourError::validation("Message cannot be empty"));
        }

        let (reply, degraded) = match &self.model {
            Some(model) => match model.generate(&build_prompt(message)).await {
                Ok(text) => (text, false),
                Err(e) => {
                    warn!("Error communicating with the generative service: {}", e);
                    (APOLOGY.to_string(), true)
                }
            },
            None => {
                debug!("No generative model configured");
                (APOLOGY.to_string(), true)
            }
        };

        let no_interests: &[&str] = &[];
        let suggestions = SuggestionEngine::new(&self.catalog)
            .generate_smart_suggestions(message, None, no_interests)
            .into_iter()
            .map(|s| s.destination.clone())
            .collect();

        Ok(ChatReply {
            reply,
            degraded,
            suggestions,
            timestamp: Utc::now(),
        })
    }
}
