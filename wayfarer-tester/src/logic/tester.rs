use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::common::scenario::TestScenario;
use crate::logic::TesterAssets;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub seed: u64,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_micros")]
    pub average_duration: Duration,
}

mod duration_micros {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(value.as_micros()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_micros)
    }
}

pub struct LogicTester<'a> {
    assets: &'a TesterAssets,
    verbose: bool,
}

impl<'a> LogicTester<'a> {
    pub const fn new(assets: &'a TesterAssets, verbose: bool) -> Self {
        Self { assets, verbose }
    }

    pub fn run_scenario(
        &self,
        scenario: &TestScenario,
        seeds: &[u64],
        iterations: usize,
    ) -> Vec<ScenarioResult> {
        seeds
            .iter()
            .map(|&seed| {
                if self.verbose {
                    println!(
                        "🧪 Testing scenario: {} (seed: {seed})",
                        scenario.name.bright_white()
                    );
                }
                self.run_single_scenario(scenario, seed, iterations)
            })
            .collect()
    }

    fn run_single_scenario(
        &self,
        scenario: &TestScenario,
        seed: u64,
        iterations: usize,
    ) -> ScenarioResult {
        let mut successes = 0;
        let mut failures = Vec::new();
        let mut timings = Vec::new();

        for i in 0..iterations {
            let iteration_seed = seed.wrapping_add(u64::try_from(i).unwrap_or(u64::MAX));
            let start = Instant::now();
            match scenario.run(self.assets, iteration_seed) {
                Ok(()) => {
                    successes += 1;
                    let elapsed = start.elapsed();
                    timings.push(elapsed);
                    if self.verbose {
                        println!("  ✅ Iteration {}/{iterations} passed ({elapsed:?})", i + 1);
                    }
                }
                Err(err) => {
                    log::debug!("{} failed on seed {iteration_seed}: {err:?}", scenario.key);
                    let line = format!("Iteration {} (seed {iteration_seed}): {err:#}", i + 1);
                    if self.verbose {
                        println!("  ❌ {}", line.red());
                    }
                    failures.push(line);
                }
            }
        }

        let average_duration = if timings.is_empty() {
            Duration::ZERO
        } else {
            timings.iter().sum::<Duration>() / u32::try_from(timings.len()).unwrap_or(1)
        };

        ScenarioResult {
            scenario_name: scenario.name.to_string(),
            seed,
            passed: failures.is_empty(),
            iterations_run: iterations,
            successful_iterations: successes,
            failures,
            average_duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::scenario::get_scenario;

    #[test]
    fn runs_one_result_per_seed() {
        let assets = TesterAssets::load_default();
        let tester = LogicTester::new(&assets, false);
        let scenario = get_scenario("smoke").unwrap();
        let results = tester.run_scenario(&scenario, &[1, 2, 3], 2);
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.passed && r.successful_iterations == 2));
    }

    #[test]
    fn failing_check_is_recorded() {
        fn always_fails(_: &TesterAssets, seed: u64) -> anyhow::Result<()> {
            anyhow::bail!("boom {seed}")
        }
        let assets = TesterAssets::load_default();
        let tester = LogicTester::new(&assets, false);
        let scenario = TestScenario {
            key: "broken",
            name: "Broken",
            description: "always fails",
            check: always_fails,
        };
        let results = tester.run_scenario(&scenario, &[10], 2);
        assert!(!results[0].passed);
        assert_eq!(results[0].failures.len(), 2);
        assert!(results[0].failures[1].contains("boom 11"));
    }

    #[test]
    fn results_serialize_durations_as_micros() {
        let result = ScenarioResult {
            scenario_name: "Smoke".into(),
            seed: 1,
            passed: true,
            iterations_run: 1,
            successful_iterations: 1,
            failures: Vec::new(),
            average_duration: Duration::from_millis(3),
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"average_duration\":3000"));
    }
}
