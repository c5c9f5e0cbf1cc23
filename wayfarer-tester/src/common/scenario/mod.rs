use anyhow::Result;

use crate::logic::TesterAssets;

pub mod interaction;
pub mod planning;

/// A check run once per iteration with a derived seed.
pub type ScenarioCheck = fn(&TesterAssets, u64) -> Result<()>;

#[derive(Clone)]
pub struct TestScenario {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub check: ScenarioCheck,
}

impl TestScenario {
    const fn new(
        key: &'static str,
        name: &'static str,
        description: &'static str,
        check: ScenarioCheck,
    ) -> Self {
        Self {
            key,
            name,
            description,
            check,
        }
    }

    /// Run the check for one seed.
    ///
    /// # Errors
    /// Propagates the first failed expectation.
    pub fn run(&self, assets: &TesterAssets, seed: u64) -> Result<()> {
        (self.check)(assets, seed)
    }
}

#[must_use]
pub fn all_scenarios() -> Vec<TestScenario> {
    vec![
        TestScenario::new(
            "smoke",
            "Smoke",
            "Three-day Kerala trip yields three dated days",
            planning::smoke,
        ),
        TestScenario::new(
            "trip-length",
            "Trip Length Validation",
            "Inclusive day count accepted only inside the configured bounds",
            planning::trip_length,
        ),
        TestScenario::new(
            "itinerary-invariants",
            "Itinerary Invariants",
            "Random trips keep activity, stay, amenity and date guarantees",
            planning::itinerary_invariants,
        ),
        TestScenario::new(
            "destination-fallback",
            "Destination Fallback",
            "Unknown destinations draw from the fallback catalog",
            planning::destination_fallback,
        ),
        TestScenario::new(
            "weather-bounds",
            "Weather Bounds",
            "Sampled temperatures and icons stay in range",
            planning::weather_bounds,
        ),
        TestScenario::new(
            "deterministic-replay",
            "Deterministic Replay",
            "Equal seeds reproduce the same itinerary",
            planning::deterministic_replay,
        ),
        TestScenario::new(
            "chat-cancel",
            "Chat Reply Cancellation",
            "Cancelled replies never land; live ones land once",
            interaction::chat_cancel,
        ),
        TestScenario::new(
            "feedback-flow",
            "Feedback Flow",
            "Ratings clamp and every exit returns to the dashboard",
            interaction::feedback_flow,
        ),
    ]
}

#[must_use]
pub fn get_scenario(key: &str) -> Option<TestScenario> {
    all_scenarios()
        .into_iter()
        .find(|scenario| scenario.key == key)
}

#[must_use]
pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    all_scenarios()
        .iter()
        .map(|scenario| (scenario.key, scenario.description))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_keys_are_unique() {
        let keys: Vec<&str> = all_scenarios().iter().map(|s| s.key).collect();
        let mut deduped = keys.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(keys.len(), deduped.len());
    }

    #[test]
    fn lookup_by_key() {
        assert!(get_scenario("smoke").is_some());
        assert!(get_scenario("nope").is_none());
        assert_eq!(list_scenarios().len(), all_scenarios().len());
    }

    #[test]
    fn every_scenario_passes_against_embedded_data() {
        let assets = TesterAssets::load_default();
        for scenario in all_scenarios() {
            for seed in [1, 42, 1337] {
                scenario
                    .run(&assets, seed)
                    .unwrap_or_else(|err| panic!("{} failed: {err:#}", scenario.key));
            }
        }
    }
}
