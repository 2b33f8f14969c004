//! Hotspot catalog
//!
//! The catalog is an immutable table of [`Destination`] records handed to the
//! suggestion engine at construction time. The built-in Bhutan catalog is
//! compiled into the binary; alternative catalogs can be loaded from JSON.

use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

use tracing::{debug, info};

use super::Destination;
use crate::{Result, TourError};

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::from_json(include_str!("bhutan_hotspots.json"))
        .expect("embedded hotspot catalog is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    destinations: Vec<Destination>,
}

impl Catalog {
    /// Build a catalog from records, checking ids, names and keywords.
    pub fn new(destinations: Vec<Destination>) -> Result<Self> {
        let mut seen_ids = HashSet::new();
        for destination in &destinations {
            if !seen_ids.insert(destination.id) {
                return Err(TourError::catalog(format!(
                    "duplicate destination id {}",
                    destination.id
                )));
            }
            if destination.name.trim().is_empty() {
                return Err(TourError::catalog(format!(
                    "destination {} has an empty name",
                    destination.id
                )));
            }
            if let Some(keyword) = destination
                .keywords
                .iter()
                .find(|k| k.is_empty() || **k != k.to_lowercase())
            {
                return Err(TourError::catalog(format!(
                    "destination {} has invalid keyword '{keyword}': keywords must be non-empty and lowercase",
                    destination.id
                )));
            }
        }

        let catalog = Self { destinations };
        catalog.log_unresolved_nearby();
        Ok(catalog)
    }

    /// The shared Bhutan catalog shipped with the application
    #[must_use]
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let destinations: Vec<Destination> = serde_json::from_str(json)?;
        Self::new(destinations)
    }

    /// Load a catalog from a JSON file holding an array of destinations
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json).map_err(|e| match e {
            TourError::Catalog { message } => {
                TourError::catalog(format!("{}: {message}", path.display()))
            }
            other => other,
        })?;
        info!(
            "Loaded {} destinations from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Destination> {
        self.destinations.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Destination] {
        &self.destinations
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: u32) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.id == id)
    }

    /// First destination, in catalog order, whose name contains `name`
    /// (case-insensitive).
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Destination> {
        let needle = name.to_lowercase();
        self.destinations
            .iter()
            .find(|d| d.name.to_lowercase().contains(&needle))
    }

    /// First destination, in catalog order, with exactly this category
    #[must_use]
    pub fn first_in_category(&self, category: &str) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.category == category)
    }

    fn log_unresolved_nearby(&self) {
        for destination in &self.destinations {
            for nearby in &destination.nearby_attractions {
                if self.find_by_name(nearby).is_none() {
                    debug!(
                        destination = %destination.name,
                        "Nearby attraction '{}' has no catalog entry",
                        nearby
                    );
                }
            }
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Destination;
    type IntoIter = std::slice::Iter<'a, Destination>;

    fn into_iter(self) -> Self::IntoIter {
        self.destinations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hotspots::test_support::destination;
    use std::io::Write;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 10);
        assert_eq!(catalog.as_slice()[0].name, "Tiger's Nest Monastery (Paro Taktsang)");
        assert_eq!(catalog.get(10).unwrap().name, "Trongsa Dzong");
    }

    #[test]
    fn test_builtin_keywords_are_lowercase() {
        for destination in Catalog::builtin() {
            for keyword in &destination.keywords {
                assert_eq!(keyword, &keyword.to_lowercase());
            }
        }
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Catalog::new(vec![
            destination(1, "One", "temple", &["one"]),
            destination(1, "Two", "temple", &["two"]),
        ]);
        assert!(matches!(result, Err(TourError::Catalog { .. })));
    }

    #[test]
    fn test_uppercase_keyword_rejected() {
        let result = Catalog::new(vec![destination(1, "One", "temple", &["Temple"])]);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("lowercase"));
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = Catalog::new(vec![destination(1, "  ", "temple", &["one"])]);
        assert!(result.is_err());
    }

    #[test]
    fn test_find_by_name_is_case_insensitive_substring() {
        let catalog = Catalog::builtin();
        let found = catalog.find_by_name("tiger's nest").unwrap();
        assert_eq!(found.id, 1);
        assert!(catalog.find_by_name("Paro Dzong").is_none());
    }

    #[test]
    fn test_find_by_name_returns_first_in_catalog_order() {
        let catalog = Catalog::builtin();
        // Both Punakha Dzong and Trongsa Dzong contain "dzong"
        assert_eq!(catalog.find_by_name("DZONG").unwrap().id, 2);
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let records = vec![destination(7, "Gangtey Goemba", "monastery", &["gangtey"])];
        write!(file, "{}", serde_json::to_string(&records).unwrap()).unwrap();

        let catalog = Catalog::from_path(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(7).unwrap().name, "Gangtey Goemba");
    }

    #[test]
    fn test_from_path_reports_file_on_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = Catalog::from_path(file.path()).unwrap_err();
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }

    #[test]
    fn test_from_path_missing_file_is_io_error() {
        let err = Catalog::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, TourError::Io { .. }));
    }
}
