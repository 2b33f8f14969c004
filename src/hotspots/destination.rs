//! Destination records and the labels attached to them

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::TourError;

/// A Bhutanese point of interest in the hotspot catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub location: String,
    /// Open label such as "monastery", "dzong" or "nature"
    pub category: String,
    /// Recommended visiting months, e.g. "March-May, September-November"
    pub season: String,
    pub tips: String,
    pub difficulty: Difficulty,
    /// Lowercase match terms
    pub keywords: Vec<String>,
    /// Names of related destinations. Best effort: a name need not resolve
    /// to any record in the catalog.
    #[serde(default)]
    pub nearby_attractions: Vec<String>,
    pub cultural_significance: String,
    pub best_time: String,
}

impl Destination {
    /// The chat query issued when a user picks this destination as a suggestion
    #[must_use]
    pub fn follow_up_query(&self) -> String {
        format!("Tell me about {}", self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Moderate,
}

impl Difficulty {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Moderate => "moderate",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = TourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "moderate" => Ok(Difficulty::Moderate),
            other => Err(TourError::validation(format!(
                "Unknown difficulty '{other}'. Must be one of: easy, moderate"
            ))),
        }
    }
}

/// Visiting season derived from a calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// Map a month number (1-12) to its season. Out-of-range months fall back to spring.
    #[must_use]
    pub fn from_month(month: u32) -> Self {
        match month {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Autumn,
            12 | 1 | 2 => Season::Winter,
            _ => Season::Spring,
        }
    }

    /// Lowercase English month names belonging to this season
    #[must_use]
    pub fn month_names(&self) -> &'static [&'static str] {
        match self {
            Season::Spring => &["march", "april", "may"],
            Season::Summer => &["june", "july", "august"],
            Season::Autumn => &["september", "october", "november"],
            Season::Winter => &["december", "january", "february"],
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        };
        f.write_str(name)
    }
}
