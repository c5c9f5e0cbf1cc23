use anyhow::{Context, Result};
use chrono::{Days, NaiveDate};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::path::Path;
use wayfarer_planner::{
    Destination, DestinationKind, EmbeddedData, ItineraryGenerator, PlannerEngine,
    ReferenceCatalog, TripLimits, TripParameters, TripType,
};

/// Generator shared by every scenario run.
#[derive(Debug, Clone)]
pub struct TesterAssets {
    pub generator: ItineraryGenerator,
}

impl TesterAssets {
    #[must_use]
    pub fn load_default() -> Self {
        let generator = PlannerEngine::new(EmbeddedData)
            .generator()
            .unwrap_or_else(|err| {
                log::warn!("embedded data rejected ({err}); using built-in tables");
                ItineraryGenerator::default()
            });
        Self { generator }
    }

    /// Swap in a catalog read from disk, keeping the embedded tuning.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or fails validation.
    pub fn with_catalog_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog {}", path.display()))?;
        let catalog = ReferenceCatalog::from_json(&raw)
            .with_context(|| format!("invalid catalog {}", path.display()))?;
        log::info!(
            "loaded {} destinations from {}",
            catalog.destination_keys().len(),
            path.display()
        );
        let config = Self::load_default().generator.config().clone();
        Ok(Self {
            generator: ItineraryGenerator::new(catalog, config),
        })
    }
}

#[must_use]
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Random but reproducible trip inside `limits`.
#[must_use]
pub fn random_trip(seed: u64, limits: &TripLimits) -> TripParameters {
    let mut rng = seeded_rng(seed ^ 0x7472_6970);
    let kind = if rng.gen_bool(0.5) {
        DestinationKind::Domestic
    } else {
        DestinationKind::International
    };
    let options = kind.locations();
    let location = options[rng.gen_range(0..options.len())].key;
    let min_days = limits.min_days.max(1);
    let days = rng.gen_range(min_days..=limits.max_days.max(min_days));
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default()
        + Days::new(rng.gen_range(0..365));
    TripParameters {
        trip_type: TripType::ALL[rng.gen_range(0..TripType::ALL.len())],
        travelers: rng.gen_range(1..=8),
        budget: rng.gen_range(5..=200) * 1_000,
        start_date: start,
        end_date: start + Days::new(u64::from(days - 1)),
        destination: Destination::new(kind, location),
        days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfarer_planner::validate_dates;

    #[test]
    fn random_trips_validate() {
        let limits = TripLimits::default();
        for seed in 0..50 {
            let trip = random_trip(seed, &limits);
            assert_eq!(
                validate_dates(Some(trip.start_date), Some(trip.end_date), &limits),
                Ok(trip.days)
            );
            assert!(!trip.destination.location.is_empty());
        }
    }

    #[test]
    fn random_trips_replay() {
        let limits = TripLimits::default();
        assert_eq!(random_trip(9, &limits), random_trip(9, &limits));
    }

    #[test]
    fn missing_catalog_file_is_reported() {
        let err = TesterAssets::with_catalog_file(Path::new("/definitely/not/here.json"))
            .expect_err("missing file");
        assert!(format!("{err:#}").contains("failed to read catalog"));
    }
}
