//! Mock daily weather
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::WeatherRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCondition {
    Sunny,
    Cloudy,
}

impl WeatherCondition {
    /// Icon shown next to the condition
    #[must_use]
    pub const fn icon(self) -> WeatherIcon {
        match self {
            Self::Sunny => WeatherIcon::Sun,
            Self::Cloudy => WeatherIcon::Cloud,
        }
    }

    #[must_use]
    pub const fn i18n_key(self) -> &'static str {
        match self {
            Self::Sunny => "weather.sunny",
            Self::Cloudy => "weather.cloudy",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherIcon {
    Sun,
    Cloud,
}

impl WeatherIcon {
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Sun => "\u{2600}",
            Self::Cloud => "\u{2601}",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherSample {
    pub temperature_c: i32,
    pub condition: WeatherCondition,
    pub icon: WeatherIcon,
}

impl WeatherSample {
    #[must_use]
    pub const fn new(temperature_c: i32, condition: WeatherCondition) -> Self {
        Self {
            temperature_c,
            condition,
            icon: condition.icon(),
        }
    }
}

/// Draw one day's weather from `range`.
pub fn sample_weather<R: Rng + ?Sized>(range: &WeatherRange, rng: &mut R) -> WeatherSample {
    let (low, high) = if range.temp_min_c <= range.temp_max_c {
        (range.temp_min_c, range.temp_max_c)
    } else {
        (range.temp_max_c, range.temp_min_c)
    };
    let temperature_c = rng.gen_range(low..=high);
    let condition = if rng.gen_bool(range.sunny_chance.clamp(0.0, 1.0)) {
        WeatherCondition::Sunny
    } else {
        WeatherCondition::Cloudy
    };
    WeatherSample::new(temperature_c, condition)
}
