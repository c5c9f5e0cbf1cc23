//! Trip parameters as entered on the planning form
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::TripLimits;
use crate::validate::{TripValidationError, validate_dates};

/// Who is travelling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TripType {
    #[default]
    Solo,
    Couple,
    Family,
    Friends,
}

impl TripType {
    pub const ALL: [Self; 4] = [Self::Solo, Self::Couple, Self::Family, Self::Friends];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Solo => "solo",
            Self::Couple => "couple",
            Self::Family => "family",
            Self::Friends => "friends",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.key() == key)
    }

    /// Get i18n key for the trip type label
    #[must_use]
    pub const fn i18n_key(self) -> &'static str {
        match self {
            Self::Solo => "planner.trip_types.solo",
            Self::Couple => "planner.trip_types.couple",
            Self::Family => "planner.trip_types.family",
            Self::Friends => "planner.trip_types.friends",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DestinationKind {
    #[default]
    Domestic,
    International,
}

impl DestinationKind {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Domestic => "domestic",
            Self::International => "international",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "domestic" => Some(Self::Domestic),
            "international" => Some(Self::International),
            _ => None,
        }
    }

    /// Locations offered by the planning form for this destination type.
    #[must_use]
    pub const fn locations(self) -> &'static [DestinationOption] {
        match self {
            Self::Domestic => DOMESTIC_LOCATIONS,
            Self::International => INTERNATIONAL_LOCATIONS,
        }
    }
}

/// A selectable location on the planning form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DestinationOption {
    pub key: &'static str,
    pub label: &'static str,
}

const fn opt(key: &'static str, label: &'static str) -> DestinationOption {
    DestinationOption { key, label }
}

pub const DOMESTIC_LOCATIONS: &[DestinationOption] = &[
    opt("kerala", "Kerala"),
    opt("rajasthan", "Rajasthan"),
    opt("goa", "Goa"),
    opt("himachal", "Himachal Pradesh"),
    opt("kashmir", "Kashmir"),
    opt("tamil-nadu", "Tamil Nadu"),
    opt("karnataka", "Karnataka"),
    opt("maharashtra", "Maharashtra"),
    opt("gujarat", "Gujarat"),
    opt("madhya-pradesh", "Madhya Pradesh"),
    opt("west-bengal", "West Bengal"),
    opt("assam", "Assam"),
    opt("odisha", "Odisha"),
    opt("punjab", "Punjab"),
    opt("uttarakhand", "Uttarakhand"),
];

pub const INTERNATIONAL_LOCATIONS: &[DestinationOption] = &[
    opt("thailand", "Thailand"),
    opt("singapore", "Singapore"),
    opt("dubai", "Dubai"),
    opt("maldives", "Maldives"),
    opt("bali", "Bali"),
    opt("japan", "Japan"),
    opt("south-korea", "South Korea"),
    opt("vietnam", "Vietnam"),
    opt("malaysia", "Malaysia"),
    opt("nepal", "Nepal"),
    opt("sri-lanka", "Sri Lanka"),
    opt("australia", "Australia"),
    opt("new-zealand", "New Zealand"),
    opt("egypt", "Egypt"),
    opt("turkey", "Turkey"),
];

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Destination {
    pub kind: DestinationKind,
    /// Free-form catalog key such as `kerala`; may be empty.
    #[serde(default)]
    pub location: String,
}

impl Destination {
    #[must_use]
    pub fn new(kind: DestinationKind, location: impl Into<String>) -> Self {
        Self {
            kind,
            location: location.into(),
        }
    }

    /// Human label from the option list, or the raw location when it is not listed.
    #[must_use]
    pub fn label(&self) -> &str {
        self.kind
            .locations()
            .iter()
            .find(|opt| opt.key == self.location)
            .map_or(self.location.as_str(), |opt| opt.label)
    }
}

/// Validated trip parameters handed from the planning form to the itinerary view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripParameters {
    pub trip_type: TripType,
    pub travelers: u32,
    /// Budget in INR
    pub budget: u64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub destination: Destination,
    /// Inclusive day count, already checked against the trip limits.
    pub days: u32,
}

impl TripParameters {
    /// Calendar date for the zero-based day offset.
    #[must_use]
    pub fn date_for_offset(&self, offset: u32) -> NaiveDate {
        self.start_date + chrono::Days::new(u64::from(offset))
    }
}

/// In-progress form state; dates stay optional until both are picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripDraft {
    pub trip_type: TripType,
    pub travelers: u32,
    pub budget: u64,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub destination: Destination,
}

impl Default for TripDraft {
    fn default() -> Self {
        Self {
            trip_type: TripType::Solo,
            travelers: 1,
            budget: 0,
            start_date: None,
            end_date: None,
            destination: Destination::default(),
        }
    }
}

impl TripDraft {
    /// Check the draft's date range without consuming it.
    ///
    /// # Errors
    ///
    /// Returns an error when a date is missing or the range violates `limits`.
    pub fn check_dates(&self, limits: &TripLimits) -> Result<u32, TripValidationError> {
        validate_dates(self.start_date, self.end_date, limits)
    }

    /// Switch destination type; the previously picked location belongs to the
    /// other list so it is cleared.
    pub fn set_destination_kind(&mut self, kind: DestinationKind) {
        if self.destination.kind != kind {
            self.destination = Destination::new(kind, String::new());
        }
    }

    /// Validate the dates and produce trip parameters.
    ///
    /// Only the date range is checked; budget, traveler count and destination
    /// pass through as entered.
    ///
    /// # Errors
    ///
    /// Returns an error when a date is missing or the range violates `limits`.
    pub fn finalize(&self, limits: &TripLimits) -> Result<TripParameters, TripValidationError> {
        let days = self.check_dates(limits)?;
        let (Some(start_date), Some(end_date)) = (self.start_date, self.end_date) else {
            return Err(TripValidationError::MissingDates);
        };
        Ok(TripParameters {
            trip_type: self.trip_type,
            travelers: self.travelers,
            budget: self.budget,
            start_date,
            end_date,
            destination: self.destination.clone(),
            days,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn trip_type_keys_roundtrip() {
        for ty in TripType::ALL {
            assert_eq!(TripType::from_key(ty.key()), Some(ty));
        }
        assert_eq!(TripType::from_key("crowd"), None);
        let json = serde_json::to_string(&TripType::Friends).unwrap();
        assert_eq!(json, "\"friends\"");
    }

    #[test]
    fn destination_label_prefers_listed_name() {
        let listed = Destination::new(DestinationKind::Domestic, "tamil-nadu");
        assert_eq!(listed.label(), "Tamil Nadu");
        let unlisted = Destination::new(DestinationKind::International, "atlantis");
        assert_eq!(unlisted.label(), "atlantis");
    }

    #[test]
    fn location_lists_match_form_options() {
        assert_eq!(DestinationKind::Domestic.locations().len(), 15);
        assert_eq!(DestinationKind::International.locations().len(), 15);
        assert_eq!(DestinationKind::Domestic.locations()[0].key, "kerala");
        assert!(
            DestinationKind::International
                .locations()
                .iter()
                .any(|o| o.key == "sri-lanka" && o.label == "Sri Lanka")
        );
    }

    #[test]
    fn draft_defaults_mirror_empty_form() {
        let draft = TripDraft::default();
        assert_eq!(draft.trip_type, TripType::Solo);
        assert_eq!(draft.travelers, 1);
        assert_eq!(draft.budget, 0);
        assert!(draft.start_date.is_none());
        assert_eq!(draft.destination.kind, DestinationKind::Domestic);
        assert!(draft.destination.location.is_empty());
    }

    #[test]
    fn switching_destination_kind_clears_location() {
        let mut draft = TripDraft {
            destination: Destination::new(DestinationKind::Domestic, "goa"),
            ..TripDraft::default()
        };
        draft.set_destination_kind(DestinationKind::Domestic);
        assert_eq!(draft.destination.location, "goa");
        draft.set_destination_kind(DestinationKind::International);
        assert_eq!(draft.destination.kind, DestinationKind::International);
        assert!(draft.destination.location.is_empty());
    }

    #[test]
    fn finalize_carries_unvalidated_fields_through() {
        let draft = TripDraft {
            trip_type: TripType::Family,
            travelers: 0,
            budget: 0,
            start_date: Some(date(2024, 6, 1)),
            end_date: Some(date(2024, 6, 3)),
            destination: Destination::new(DestinationKind::Domestic, ""),
        };
        let params = draft.finalize(&TripLimits::default()).unwrap();
        assert_eq!(params.days, 3);
        assert_eq!(params.travelers, 0);
        assert_eq!(params.date_for_offset(2), date(2024, 6, 3));
    }

    #[test]
    fn finalize_rejects_missing_dates() {
        let draft = TripDraft {
            start_date: Some(date(2024, 6, 1)),
            ..TripDraft::default()
        };
        assert_eq!(
            draft.finalize(&TripLimits::default()),
            Err(TripValidationError::MissingDates)
        );
    }
}
