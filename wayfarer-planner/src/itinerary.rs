//! Day-by-day itinerary generation
use chrono::NaiveDate;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::catalog::{
    AccommodationTemplate, ActivityCategory, ActivityTemplate, DestinationCatalog,
    ReferenceCatalog,
};
use crate::config::PlannerConfig;
use crate::rng::RngBundle;
use crate::trip::TripParameters;
use crate::weather::{WeatherSample, sample_weather};

/// Activities per day stay inline up to this count.
pub const INLINE_ACTIVITIES: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// `act-{day_index}-{slot}`; not stable across regenerations.
    pub id: String,
    pub name: String,
    pub category: ActivityCategory,
    pub cost: u32,
    pub duration: String,
    pub description: String,
}

impl Activity {
    fn from_template(template: &ActivityTemplate, day_index: u32, slot: usize, place: &str) -> Self {
        Self {
            id: format!("act-{day_index}-{slot}"),
            name: template.name.clone(),
            category: template.category,
            cost: template.cost,
            duration: template.duration.clone(),
            description: format!("Experience {} in {place}", template.name.to_lowercase()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accommodation {
    pub name: String,
    pub tier: String,
    pub rating: f32,
    pub price_per_night: u32,
    pub amenities: Vec<String>,
}

impl Accommodation {
    fn from_template(template: &AccommodationTemplate, amenities: Vec<String>) -> Self {
        Self {
            name: template.name.clone(),
            tier: template.tier.clone(),
            rating: template.rating,
            price_per_night: template.price_per_night,
            amenities,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    /// 1-based day number
    pub day: u32,
    pub date: NaiveDate,
    pub weather: WeatherSample,
    pub activities: SmallVec<[Activity; INLINE_ACTIVITIES]>,
    pub accommodation: Accommodation,
}

impl DayPlan {
    #[must_use]
    pub fn activity_cost(&self) -> u64 {
        self.activities.iter().map(|a| u64::from(a.cost)).sum()
    }

    /// Activities plus one night at the day's accommodation.
    #[must_use]
    pub fn total_cost(&self) -> u64 {
        self.activity_cost() + u64::from(self.accommodation.price_per_night)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    pub params: TripParameters,
    /// Catalog key the days were drawn from after fallback.
    pub destination_key: String,
    pub days: Vec<DayPlan>,
}

impl Itinerary {
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    #[must_use]
    pub fn estimated_total(&self) -> u64 {
        self.days.iter().map(DayPlan::total_cost).sum()
    }

    #[must_use]
    pub fn within_budget(&self) -> bool {
        self.estimated_total() <= self.params.budget
    }
}

/// Shuffle the activity catalog and keep the first `count`.
fn pick_activities<'a, R: Rng + ?Sized>(
    pool: &'a [ActivityTemplate],
    count: usize,
    rng: &mut R,
) -> Vec<&'a ActivityTemplate> {
    let mut shuffled: Vec<&ActivityTemplate> = pool.iter().collect();
    shuffled.shuffle(rng);
    shuffled.truncate(count);
    shuffled
}

fn pick_stay<'a, R: Rng + ?Sized>(
    stays: &'a [AccommodationTemplate],
    rng: &mut R,
) -> Option<&'a AccommodationTemplate> {
    stays.choose(rng)
}

/// Up to `count` distinct amenities in random order.
fn pick_amenities<R: Rng + ?Sized>(pool: &[String], count: usize, rng: &mut R) -> Vec<String> {
    let mut picked: Vec<String> = Vec::with_capacity(pool.len());
    for amenity in pool {
        if !picked.contains(amenity) {
            picked.push(amenity.clone());
        }
    }
    picked.shuffle(rng);
    picked.truncate(count);
    picked
}

fn placeholder_stay() -> AccommodationTemplate {
    AccommodationTemplate {
        name: String::new(),
        tier: String::new(),
        rating: 0.0,
        price_per_night: 0,
    }
}

/// Destination tables and display name shared by every day of one itinerary.
struct DayContext<'a> {
    params: &'a TripParameters,
    tables: &'a DestinationCatalog,
    place: &'a str,
}

impl DayContext<'_> {
    fn assemble(
        &self,
        index: u32,
        picked: &[&ActivityTemplate],
        stay: Option<&AccommodationTemplate>,
        amenities: Vec<String>,
        weather: WeatherSample,
    ) -> DayPlan {
        let activities = picked
            .iter()
            .enumerate()
            .map(|(slot, template)| Activity::from_template(template, index, slot, self.place))
            .collect();
        let accommodation = match stay {
            Some(stay) => Accommodation::from_template(stay, amenities),
            None => Accommodation::from_template(&placeholder_stay(), amenities),
        };
        DayPlan {
            day: index + 1,
            date: self.params.date_for_offset(index),
            weather,
            activities,
            accommodation,
        }
    }
}

fn resolve<'a>(
    params: &'a TripParameters,
    catalog: &'a ReferenceCatalog,
) -> (&'a str, DayContext<'a>) {
    let (key, tables) = catalog.resolve(&params.destination.location);
    let place = if params.destination.location.is_empty() {
        key
    } else {
        params.destination.location.as_str()
    };
    (
        key,
        DayContext {
            params,
            tables,
            place,
        },
    )
}

/// Generate `days` day plans drawing every choice from a single random source.
///
/// Days past the catalog's reach simply repeat draws; `days == 0` yields an
/// empty itinerary. A destination with no stays gets an unnamed, unrated
/// placeholder accommodation at no cost. Catalogs that passed
/// [`ReferenceCatalog::validate`] never hit that case.
pub fn generate_itinerary<R: Rng + ?Sized>(
    params: &TripParameters,
    days: u32,
    catalog: &ReferenceCatalog,
    cfg: &PlannerConfig,
    rng: &mut R,
) -> Itinerary {
    let (key, ctx) = resolve(params, catalog);
    let plans = (0..days)
        .map(|index| {
            let picked = pick_activities(&ctx.tables.activities, cfg.activities_per_day, rng);
            let stay = pick_stay(&ctx.tables.stays, rng);
            let amenities = pick_amenities(&catalog.amenities, cfg.amenities_per_stay, rng);
            let weather = sample_weather(&cfg.weather, rng);
            ctx.assemble(index, &picked, stay, amenities, weather)
        })
        .collect();
    Itinerary {
        params: params.clone(),
        destination_key: key.to_string(),
        days: plans,
    }
}

/// Generate using the domain-separated streams of an [`RngBundle`].
///
/// Same placeholder rule as [`generate_itinerary`] for stay-less destinations.
pub fn generate_with_bundle(
    params: &TripParameters,
    days: u32,
    catalog: &ReferenceCatalog,
    cfg: &PlannerConfig,
    bundle: &RngBundle,
) -> Itinerary {
    let (key, ctx) = resolve(params, catalog);
    let plans = (0..days)
        .map(|index| {
            let picked = pick_activities(
                &ctx.tables.activities,
                cfg.activities_per_day,
                &mut *bundle.activities(),
            );
            let stay = pick_stay(&ctx.tables.stays, &mut *bundle.lodging());
            let amenities = pick_amenities(
                &catalog.amenities,
                cfg.amenities_per_stay,
                &mut *bundle.amenities(),
            );
            let weather = sample_weather(&cfg.weather, &mut *bundle.weather());
            ctx.assemble(index, &picked, stay, amenities, weather)
        })
        .collect();
    Itinerary {
        params: params.clone(),
        destination_key: key.to_string(),
        days: plans,
    }
}

/// Catalog and tuning bundled for repeated generation.
#[derive(Debug, Clone, PartialEq)]
pub struct ItineraryGenerator {
    catalog: ReferenceCatalog,
    config: PlannerConfig,
}

impl Default for ItineraryGenerator {
    fn default() -> Self {
        Self::from_static()
    }
}

impl ItineraryGenerator {
    /// Wrap an already checked catalog.
    ///
    /// The catalog is not re-validated here; see [`generate_itinerary`] for
    /// what an empty stay list produces.
    #[must_use]
    pub const fn new(catalog: ReferenceCatalog, config: PlannerConfig) -> Self {
        Self { catalog, config }
    }

    /// Generator over the embedded catalog and planner configuration.
    #[must_use]
    pub fn from_static() -> Self {
        Self::new(
            ReferenceCatalog::embedded().clone(),
            PlannerConfig::default_config(),
        )
    }

    #[must_use]
    pub const fn catalog(&self) -> &ReferenceCatalog {
        &self.catalog
    }

    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Generate for the validated trip length using `rng`.
    pub fn generate<R: Rng + ?Sized>(&self, params: &TripParameters, rng: &mut R) -> Itinerary {
        generate_itinerary(params, params.days, &self.catalog, &self.config, rng)
    }

    /// Deterministic generation from a user-visible seed.
    #[must_use]
    pub fn generate_seeded(&self, params: &TripParameters, seed: u64) -> Itinerary {
        let bundle = RngBundle::from_user_seed(seed);
        generate_with_bundle(params, params.days, &self.catalog, &self.config, &bundle)
    }

    /// Fresh content on every call, seeded from the thread-local generator.
    #[cfg(not(target_arch = "wasm32"))]
    #[must_use]
    pub fn generate_unseeded(&self, params: &TripParameters) -> Itinerary {
        let seed: u64 = rand::thread_rng().r#gen();
        self.generate_seeded(params, seed)
    }
}
