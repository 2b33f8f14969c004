//! `BhutanTour` - travel assistant for the Last Shangri-La
//!
//! This library provides the hotspot suggestion engine behind the chat
//! assistant, the optional generative-text backend, and the HTTP API that
//! exposes both.

pub mod api;
pub mod assistant;
pub mod config;
pub mod error;
pub mod hotspots;
pub mod logging;
pub mod web;

// Re-export core types for public API
pub use assistant::{ChatReply, ChatService, GeminiClient, GenerativeModel};
pub use config::TourConfig;
pub use error::TourError;
pub use hotspots::{
    Catalog, Destination, Difficulty, NearbyAttraction, ScoredDestination, Season,
    SuggestionEngine,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TourError>;
