//! Planner tuning loaded from `planner.json`
use serde::{Deserialize, Serialize};

const DEFAULT_PLANNER_DATA: &str =
    include_str!("../../wayfarer-web/static/assets/data/planner.json");

/// Inclusive bounds on trip length in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripLimits {
    #[serde(default = "default_min_days")]
    pub min_days: u32,
    #[serde(default = "default_max_days")]
    pub max_days: u32,
}

impl Default for TripLimits {
    fn default() -> Self {
        Self {
            min_days: default_min_days(),
            max_days: default_max_days(),
        }
    }
}

impl TripLimits {
    #[must_use]
    pub fn contains(&self, days: i64) -> bool {
        days >= i64::from(self.min_days) && days <= i64::from(self.max_days)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRange {
    #[serde(default = "default_temp_min")]
    pub temp_min_c: i32,
    #[serde(default = "default_temp_max")]
    pub temp_max_c: i32,
    #[serde(default = "default_sunny_chance")]
    pub sunny_chance: f64,
}

impl Default for WeatherRange {
    fn default() -> Self {
        Self {
            temp_min_c: default_temp_min(),
            temp_max_c: default_temp_max(),
            sunny_chance: default_sunny_chance(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatConfig {
    #[serde(default = "default_reply_delay")]
    pub reply_delay_ms: u32,
    #[serde(default = "default_canned_reply")]
    pub canned_reply: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_reply_delay(),
            canned_reply: default_canned_reply(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    #[serde(default)]
    pub limits: TripLimits,
    #[serde(default = "default_activities_per_day")]
    pub activities_per_day: usize,
    #[serde(default = "default_amenities_per_stay")]
    pub amenities_per_stay: usize,
    #[serde(default)]
    pub weather: WeatherRange,
    #[serde(default)]
    pub chat: ChatConfig,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            limits: TripLimits::default(),
            activities_per_day: default_activities_per_day(),
            amenities_per_stay: default_amenities_per_stay(),
            weather: WeatherRange::default(),
            chat: ChatConfig::default(),
        }
    }
}

impl PlannerConfig {
    /// Load planner configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed or describes an empty range.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let mut config: Self =
            serde_json::from_str(json).map_err(|e| format!("JSON parse error: {e}"))?;
        config.validate()?;
        config.weather.sunny_chance = config.weather.sunny_chance.clamp(0.0, 1.0);
        Ok(config)
    }

    fn validate(&self) -> Result<(), String> {
        if self.limits.min_days > self.limits.max_days {
            return Err(format!(
                "Trip limits are inverted: {} > {}",
                self.limits.min_days, self.limits.max_days
            ));
        }
        if self.weather.temp_min_c > self.weather.temp_max_c {
            return Err(format!(
                "Temperature range is inverted: {} > {}",
                self.weather.temp_min_c, self.weather.temp_max_c
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(DEFAULT_PLANNER_DATA).unwrap_or_default()
    }

    #[must_use]
    pub fn default_config() -> Self {
        Self::load_from_static()
    }
}

const fn default_min_days() -> u32 {
    1
}

const fn default_max_days() -> u32 {
    10
}

const fn default_temp_min() -> i32 {
    20
}

const fn default_temp_max() -> i32 {
    34
}

const fn default_sunny_chance() -> f64 {
    0.5
}

const fn default_reply_delay() -> u32 {
    1000
}

fn default_canned_reply() -> String {
    String::from(
        "I'm your AI travel assistant. I can help you with recommendations, local tips, and travel advice. How can I assist you today?",
    )
}

const fn default_activities_per_day() -> usize {
    3
}

const fn default_amenities_per_stay() -> usize {
    4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_matches_builtin_defaults() {
        let cfg = PlannerConfig::load_from_static();
        assert_eq!(cfg, PlannerConfig::default());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg = PlannerConfig::from_json(r#"{ "limits": { "max_days": 14 } }"#).unwrap();
        assert_eq!(cfg.limits.min_days, 1);
        assert_eq!(cfg.limits.max_days, 14);
        assert_eq!(cfg.activities_per_day, 3);
        assert_eq!(cfg.weather.temp_max_c, 34);
    }

    #[test]
    fn inverted_ranges_are_rejected() {
        let err = PlannerConfig::from_json(r#"{ "limits": { "min_days": 5, "max_days": 2 } }"#)
            .unwrap_err();
        assert!(err.contains("inverted"));
        let err = PlannerConfig::from_json(r#"{ "weather": { "temp_min_c": 40 } }"#).unwrap_err();
        assert!(err.contains("Temperature"));
        assert!(PlannerConfig::from_json("not json").is_err());
    }

    #[test]
    fn limits_contain_inclusive_bounds() {
        let limits = TripLimits::default();
        assert!(!limits.contains(0));
        assert!(limits.contains(1));
        assert!(limits.contains(10));
        assert!(!limits.contains(11));
    }
}
