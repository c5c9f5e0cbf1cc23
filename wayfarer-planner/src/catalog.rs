//! Reference tables the itinerary generator samples from
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;
use thiserror::Error;

const DEFAULT_CATALOG_DATA: &str =
    include_str!("../../wayfarer-web/static/assets/data/catalog.json");

static DEFAULT_CATALOG: OnceLock<ReferenceCatalog> = OnceLock::new();

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("fallback destination `{0}` is not in the catalog")]
    UnknownFallback(String),
    #[error("destination `{0}` has no accommodations")]
    EmptyStays(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityCategory {
    Sightseeing,
    Adventure,
    Cultural,
    Relaxation,
}

impl ActivityCategory {
    #[must_use]
    pub const fn i18n_key(self) -> &'static str {
        match self {
            Self::Sightseeing => "itinerary.categories.sightseeing",
            Self::Adventure => "itinerary.categories.adventure",
            Self::Cultural => "itinerary.categories.cultural",
            Self::Relaxation => "itinerary.categories.relaxation",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityTemplate {
    pub name: String,
    pub category: ActivityCategory,
    /// Cost in INR
    #[serde(default)]
    pub cost: u32,
    /// Display label such as "4 hours"
    #[serde(default)]
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccommodationTemplate {
    pub name: String,
    /// Star tier label such as "5-star"
    pub tier: String,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub price_per_night: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DestinationCatalog {
    #[serde(default)]
    pub activities: Vec<ActivityTemplate>,
    #[serde(default)]
    pub stays: Vec<AccommodationTemplate>,
}

/// Destination tables plus the shared amenity pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceCatalog {
    pub fallback: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub destinations: BTreeMap<String, DestinationCatalog>,
}

impl ReferenceCatalog {
    /// Parse and check a catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, the fallback key is missing,
    /// or any destination lists no accommodations.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check the structural guarantees the generator depends on.
    ///
    /// # Errors
    ///
    /// See [`ReferenceCatalog::from_json`].
    pub fn validate(&self) -> Result<(), CatalogError> {
        if !self.destinations.contains_key(&self.fallback) {
            return Err(CatalogError::UnknownFallback(self.fallback.clone()));
        }
        if let Some((key, _)) = self
            .destinations
            .iter()
            .find(|(_, dest)| dest.stays.is_empty())
        {
            return Err(CatalogError::EmptyStays(key.clone()));
        }
        Ok(())
    }

    /// Process-wide catalog parsed from the embedded asset on first use.
    #[must_use]
    pub fn embedded() -> &'static Self {
        DEFAULT_CATALOG.get_or_init(|| Self::from_json(DEFAULT_CATALOG_DATA).unwrap_or_default())
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.destinations.contains_key(key)
    }

    /// Resolve a destination key, falling back to the default destination.
    ///
    /// Returns the key actually used together with its tables.
    #[must_use]
    pub fn resolve<'a>(&'a self, key: &str) -> (&'a str, &'a DestinationCatalog) {
        if let Some((found, dest)) = self.destinations.get_key_value(key) {
            return (found.as_str(), dest);
        }
        match self.destinations.get_key_value(&self.fallback) {
            Some((found, dest)) => (found.as_str(), dest),
            None => (self.fallback.as_str(), empty_destination()),
        }
    }

    #[must_use]
    pub fn destination_keys(&self) -> Vec<&str> {
        self.destinations.keys().map(String::as_str).collect()
    }
}

fn empty_destination() -> &'static DestinationCatalog {
    static EMPTY: OnceLock<DestinationCatalog> = OnceLock::new();
    EMPTY.get_or_init(DestinationCatalog::default)
}

impl Default for ReferenceCatalog {
    fn default() -> Self {
        let mut destinations = BTreeMap::new();
        destinations.insert(
            String::from("kerala"),
            DestinationCatalog {
                activities: vec![ActivityTemplate {
                    name: String::from("Backwater Cruise"),
                    category: ActivityCategory::Cultural,
                    cost: 2000,
                    duration: String::from("4 hours"),
                }],
                stays: vec![AccommodationTemplate {
                    name: String::from("Backwater Resort"),
                    tier: String::from("5-star"),
                    rating: 4.8,
                    price_per_night: 15000,
                }],
            },
        );
        Self {
            fallback: String::from("kerala"),
            amenities: vec![String::from("WiFi")],
            destinations,
        }
    }
}
