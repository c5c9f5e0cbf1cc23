//! Wayfarer Planner
//!
//! Platform-agnostic trip planning core: date validation, reference catalog,
//! itinerary generation, and the chat and feedback form state used by the
//! web front end. This crate has no UI or browser dependencies.

pub mod catalog;
pub mod chat;
pub mod config;
pub mod feedback;
pub mod itinerary;
pub mod rng;
pub mod trip;
pub mod validate;
pub mod weather;

// Re-export commonly used types
pub use catalog::{
    AccommodationTemplate, ActivityCategory, ActivityTemplate, CatalogError, DestinationCatalog,
    ReferenceCatalog,
};
pub use chat::{ChatAuthor, ChatMessage, ChatSession, ReplyTicket};
pub use config::{ChatConfig, PlannerConfig, TripLimits, WeatherRange};
pub use feedback::{FeedbackForm, FeedbackOutcome};
pub use itinerary::{
    Accommodation, Activity, DayPlan, Itinerary, ItineraryGenerator, generate_itinerary,
    generate_with_bundle,
};
pub use rng::{CountingRng, RngBundle, StreamDraws};
pub use trip::{
    Destination, DestinationKind, DestinationOption, TripDraft, TripParameters, TripType,
};
pub use validate::{
    TripValidationError, is_valid_range, parse_form_date, trip_length, validate_dates,
};
pub use weather::{WeatherCondition, WeatherIcon, WeatherSample, sample_weather};

use thiserror::Error;

/// Trait for abstracting where catalog and tuning data come from.
/// Platform-specific implementations should provide this
pub trait DataLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the destination catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be read or fails validation.
    fn load_catalog(&self) -> Result<ReferenceCatalog, Self::Error>;

    /// Load planner tuning
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be read or parsed.
    fn load_config(&self) -> Result<PlannerConfig, Self::Error>;
}

/// Loader over the assets compiled into the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedData;

impl DataLoader for EmbeddedData {
    type Error = CatalogError;

    fn load_catalog(&self) -> Result<ReferenceCatalog, Self::Error> {
        Ok(ReferenceCatalog::embedded().clone())
    }

    fn load_config(&self) -> Result<PlannerConfig, Self::Error> {
        Ok(PlannerConfig::default_config())
    }
}

#[derive(Debug, Error)]
pub enum PlanError<E: std::error::Error + 'static> {
    #[error(transparent)]
    Invalid(#[from] TripValidationError),
    #[error("failed to load planner data: {0}")]
    Data(#[source] E),
}

/// Form-to-itinerary pipeline over a [`DataLoader`].
pub struct PlannerEngine<L>
where
    L: DataLoader,
{
    data_loader: L,
}

impl<L> PlannerEngine<L>
where
    L: DataLoader,
{
    /// Create a new engine with the provided data loader
    pub const fn new(data_loader: L) -> Self {
        Self { data_loader }
    }

    /// Build a generator from freshly loaded data.
    ///
    /// # Errors
    ///
    /// Returns an error if either data source fails to load.
    pub fn generator(&self) -> Result<ItineraryGenerator, L::Error> {
        let catalog = self.data_loader.load_catalog()?;
        let config = self.data_loader.load_config()?;
        Ok(ItineraryGenerator::new(catalog, config))
    }

    /// Validate a draft and generate its itinerary from `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::Invalid`] when the dates fail validation, in which
    /// case no itinerary is produced, or [`PlanError::Data`] when loading fails.
    pub fn plan(&self, draft: &TripDraft, seed: u64) -> Result<Itinerary, PlanError<L::Error>> {
        let generator = self.generator().map_err(PlanError::Data)?;
        let params = draft.finalize(&generator.config().limits)?;
        Ok(generator.generate_seeded(&params, seed))
    }
}
