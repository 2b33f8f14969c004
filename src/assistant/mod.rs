//! Chat assistant
//!
//! Wraps an external generative-text service and pairs every reply with
//! hotspot suggestions scored from the user's message. The service is an
//! optional collaborator: when it is missing or fails, the user gets a fixed
//! apology and the suggestions are still produced.

pub mod chat;
pub mod gemini;

use async_trait::async_trait;

pub use chat::{ChatReply, ChatService};
pub use gemini::GeminiClient;

use crate::Result;

pub const GREETING: &str = "Tashi Delek! 🙏 Welcome to BhutanTour AI. I'm your personal guide to the Last Shangri-La. Ask me anything about Bhutanese culture, monasteries, festivals, or travel tips.";

pub const APOLOGY: &str = "Tashi Delek! I apologize, but I encountered an issue. Please try again or ask me something else about Bhutan.";

/// A remote text-generation backend
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Wrap a user message in the tour-guide instructions sent to the model
#[must_use]
pub fn build_prompt(message: &str) -> String {
    format!(
        "You are a Bhutan Tourism AI Assistant. {message}\n\n\
         Please provide a helpful, friendly response about Bhutanese culture, travel, or tourism. \
         Keep your tone conversational like a knowledgeable tour guide."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_message() {
        let prompt = build_prompt("Is Paro busy in April?");
        assert!(prompt.starts_with("You are a Bhutan Tourism AI Assistant. Is Paro busy in April?"));
        assert!(prompt.ends_with("like a knowledgeable tour guide."));
        assert!(prompt.contains("\n\nPlease provide"));
    }
}
