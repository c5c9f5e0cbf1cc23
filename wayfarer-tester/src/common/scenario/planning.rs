use anyhow::{Context, Result, ensure};
use chrono::NaiveDate;
use wayfarer_planner::{
    Destination, DestinationKind, Itinerary, TripDraft, TripParameters, TripType,
    TripValidationError, WeatherCondition, WeatherIcon, sample_weather,
};

use crate::logic::{TesterAssets, random_trip, seeded_rng};

fn date(y: i32, m: u32, d: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d).with_context(|| format!("bad date {y}-{m}-{d}"))
}

fn draft(start: NaiveDate, end: NaiveDate, location: &str) -> TripDraft {
    TripDraft {
        trip_type: TripType::Friends,
        travelers: 3,
        budget: 45_000,
        start_date: Some(start),
        end_date: Some(end),
        destination: Destination::new(DestinationKind::Domestic, location),
    }
}

pub fn smoke(assets: &TesterAssets, seed: u64) -> Result<()> {
    let limits = assets.generator.config().limits;
    let params = draft(date(2024, 6, 1)?, date(2024, 6, 3)?, "kerala")
        .finalize(&limits)
        .context("three-day trip should validate")?;
    ensure!(params.days == 3, "expected 3 days, got {}", params.days);
    let itinerary = assets.generator.generate_seeded(&params, seed);
    let dates: Vec<NaiveDate> = itinerary.days.iter().map(|d| d.date).collect();
    ensure!(
        dates == [date(2024, 6, 1)?, date(2024, 6, 2)?, date(2024, 6, 3)?],
        "unexpected dates {dates:?}"
    );
    Ok(())
}

pub fn trip_length(assets: &TesterAssets, _seed: u64) -> Result<()> {
    let limits = assets.generator.config().limits;
    let start = date(2024, 6, 1)?;
    let too_long = draft(start, date(2024, 6, 15)?, "goa");
    match too_long.finalize(&limits) {
        Err(err @ TripValidationError::DurationOutOfRange { days: 15, .. }) => {
            ensure!(
                err.to_string() == "Trip duration must be between 1 and 10 days",
                "unexpected message: {err}"
            );
        }
        other => anyhow::bail!("15-day trip should be rejected, got {other:?}"),
    }
    let single = draft(start, start, "goa").finalize(&limits)?;
    ensure!(single.days == 1, "same-day trip should last 1 day");
    let ten = draft(start, date(2024, 6, 10)?, "goa").finalize(&limits)?;
    ensure!(ten.days == 10, "ten-day trip should be accepted");
    ensure!(
        draft(start, date(2024, 6, 11)?, "goa")
            .finalize(&limits)
            .is_err(),
        "eleven-day trip should be rejected"
    );
    ensure!(
        draft(date(2024, 6, 3)?, start, "goa")
            .finalize(&limits)
            .is_err(),
        "reversed range should be rejected"
    );
    Ok(())
}

fn check_itinerary(assets: &TesterAssets, params: &TripParameters, itinerary: &Itinerary) -> Result<()> {
    let catalog = assets.generator.catalog();
    let cfg = assets.generator.config();
    let (_, tables) = catalog.resolve(&params.destination.location);
    let want_activities = cfg.activities_per_day.min(tables.activities.len());
    let want_amenities = cfg.amenities_per_stay;

    ensure!(
        itinerary.len() == params.days as usize,
        "expected {} days, got {}",
        params.days,
        itinerary.len()
    );
    for (offset, day) in (0_u32..).zip(&itinerary.days) {
        ensure!(day.day == offset + 1, "day numbers must be 1-based");
        ensure!(
            day.date == params.date_for_offset(offset),
            "day {} dated {}",
            day.day,
            day.date
        );
        ensure!(
            day.activities.len() == want_activities,
            "day {} has {} activities",
            day.day,
            day.activities.len()
        );
        let amenities = &day.accommodation.amenities;
        ensure!(amenities.len() <= want_amenities, "too many amenities");
        for (i, amenity) in amenities.iter().enumerate() {
            ensure!(
                catalog.amenities.contains(amenity),
                "amenity {amenity} not in pool"
            );
            ensure!(
                !amenities[..i].contains(amenity),
                "amenity {amenity} repeated"
            );
        }
        ensure!(
            tables
                .stays
                .iter()
                .any(|stay| stay.name == day.accommodation.name),
            "stay {} not from catalog",
            day.accommodation.name
        );
    }
    Ok(())
}

pub fn itinerary_invariants(assets: &TesterAssets, seed: u64) -> Result<()> {
    let params = random_trip(seed, &assets.generator.config().limits);
    let itinerary = assets.generator.generate_seeded(&params, seed);
    check_itinerary(assets, &params, &itinerary)
        .with_context(|| format!("trip to {} for {} days", params.destination.location, params.days))
}

pub fn destination_fallback(assets: &TesterAssets, seed: u64) -> Result<()> {
    let catalog = assets.generator.catalog();
    let mut params = random_trip(seed, &assets.generator.config().limits);
    params.destination = Destination::new(DestinationKind::International, "atlantis");
    let itinerary = assets.generator.generate_seeded(&params, seed);
    ensure!(
        itinerary.destination_key == catalog.fallback,
        "expected fallback {}, got {}",
        catalog.fallback,
        itinerary.destination_key
    );
    check_itinerary(assets, &params, &itinerary)
}

pub fn weather_bounds(assets: &TesterAssets, seed: u64) -> Result<()> {
    let range = &assets.generator.config().weather;
    let mut rng = seeded_rng(seed);
    for _ in 0..200 {
        let sample = sample_weather(range, &mut rng);
        ensure!(
            (range.temp_min_c..=range.temp_max_c).contains(&sample.temperature_c),
            "temperature {} out of range",
            sample.temperature_c
        );
        let expected_icon = match sample.condition {
            WeatherCondition::Sunny => WeatherIcon::Sun,
            WeatherCondition::Cloudy => WeatherIcon::Cloud,
        };
        ensure!(sample.icon == expected_icon, "icon does not match condition");
    }
    Ok(())
}

pub fn deterministic_replay(assets: &TesterAssets, seed: u64) -> Result<()> {
    let params = random_trip(seed, &assets.generator.config().limits);
    let first = assets.generator.generate_seeded(&params, seed);
    let second = assets.generator.generate_seeded(&params, seed);
    ensure!(first == second, "seed {seed} did not replay");
    Ok(())
}
