use chrono::NaiveDate;
use futures::executor::block_on;
use std::rc::Rc;
use wayfarer_planner::{
    Destination, DestinationKind, FeedbackForm, ItineraryGenerator, TripDraft, TripLimits,
    TripParameters, TripType,
};
use wayfarer_web::pages::{
    dashboard::{DashboardPage, DashboardPageProps},
    feedback::{FeedbackPage, FeedbackPageProps},
    itinerary::{ItineraryPage, ItineraryPageProps},
    landing::{LandingPage, LandingPageProps},
    not_found::{NotFound, Props as NotFoundProps},
    plan_trip::{PlanTripPage, PlanTripPageProps},
};
use yew::{Callback, LocalServerRenderer};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn kerala_trip() -> TripParameters {
    TripParameters {
        trip_type: TripType::Couple,
        travelers: 2,
        budget: 60_000,
        start_date: date(2024, 6, 1),
        end_date: date(2024, 6, 3),
        destination: Destination::new(DestinationKind::Domestic, "kerala"),
        days: 3,
    }
}

#[test]
fn landing_page_lists_four_features() {
    wayfarer_web::i18n::set_lang("en");
    let props = LandingPageProps {
        on_get_started: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<LandingPage>::with_props(props).render());
    assert!(html.contains("Plan Your Perfect Journey"));
    assert!(html.contains("Get Started"));
    for title in [
        "Smart Recommendations",
        "Group Planning",
        "Dynamic Itineraries",
        "Extensive Coverage",
    ] {
        assert!(html.contains(title), "missing feature {title}");
    }
}

#[test]
fn dashboard_mentions_last_trip_only_when_present() {
    let props = DashboardPageProps {
        last_trip: None,
        on_plan_trip: Callback::noop(),
        on_feedback: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<DashboardPage>::with_props(props).render());
    assert!(html.contains("Plan a New Trip"));
    assert!(!html.contains("Last planned"));

    let props = DashboardPageProps {
        last_trip: Some(kerala_trip()),
        on_plan_trip: Callback::noop(),
        on_feedback: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<DashboardPage>::with_props(props).render());
    assert!(html.contains("Last planned: Kerala, 3 days"));
}

#[test]
fn plan_trip_blocks_fifteen_day_range() {
    let props = PlanTripPageProps {
        initial: TripDraft {
            start_date: Some(date(2024, 6, 1)),
            end_date: Some(date(2024, 6, 15)),
            ..TripDraft::default()
        },
        limits: TripLimits::default(),
        on_submit: Callback::noop(),
        on_draft_change: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<PlanTripPage>::with_props(props).render());
    assert!(html.contains("Trip duration must be between 1 and 10 days"));
    assert!(html.contains("disabled"));
}

#[test]
fn plan_trip_with_only_start_date_stays_submittable() {
    let props = PlanTripPageProps {
        initial: TripDraft {
            start_date: Some(date(2024, 6, 1)),
            end_date: None,
            ..TripDraft::default()
        },
        limits: TripLimits::default(),
        on_submit: Callback::noop(),
        on_draft_change: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<PlanTripPage>::with_props(props).render());
    assert!(html.contains("Generate Itinerary"));
    assert!(!html.contains("disabled"));
    assert!(!html.contains("Trip duration must be between"));
}

#[test]
fn plan_trip_offers_destination_lists() {
    let props = PlanTripPageProps {
        initial: TripDraft {
            start_date: Some(date(2024, 6, 1)),
            end_date: Some(date(2024, 6, 3)),
            destination: Destination::new(DestinationKind::International, ""),
            ..TripDraft::default()
        },
        limits: TripLimits::default(),
        on_submit: Callback::noop(),
        on_draft_change: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<PlanTripPage>::with_props(props).render());
    assert!(!html.contains("Trip duration must be between"));
    assert!(html.contains("Select a destination"));
    assert!(html.contains("New Zealand"));
    assert!(!html.contains("Rajasthan"));
    assert!(!html.contains("disabled"));
}

fn itinerary_props(seed: u64, chat_open: bool) -> ItineraryPageProps {
    ItineraryPageProps {
        trip: kerala_trip(),
        generator: Rc::new(ItineraryGenerator::from_static()),
        seed: Some(seed),
        chat_open,
        on_feedback: Callback::noop(),
    }
}

#[test]
fn itinerary_page_renders_each_day_with_dates() {
    let props = itinerary_props(7, false);
    let html = block_on(LocalServerRenderer::<ItineraryPage>::with_props(props).render());
    assert!(html.contains("Your Travel Itinerary"));
    assert!(html.contains("Day 1 - June 1, 2024"));
    assert!(html.contains("Day 2 - June 2, 2024"));
    assert!(html.contains("Day 3 - June 3, 2024"));
    assert!(!html.contains("Day 4 -"));
    assert_eq!(html.matches("day-card").count(), 3);
    assert!(html.contains("Estimated total:"));
    assert!(!html.contains("Ask me anything"));
}

#[test]
fn itinerary_page_draws_a_new_plan_each_mount() {
    let generator = ItineraryGenerator::from_static();
    let expected = generator.generate_seeded(&kerala_trip(), 21);
    let first = block_on(
        LocalServerRenderer::<ItineraryPage>::with_props(itinerary_props(21, false)).render(),
    );
    for activity in &expected.days[0].activities {
        assert!(first.contains(&activity.name));
    }
    let again = block_on(
        LocalServerRenderer::<ItineraryPage>::with_props(itinerary_props(21, false)).render(),
    );
    assert_eq!(first, again);
    let remounted = block_on(
        LocalServerRenderer::<ItineraryPage>::with_props(itinerary_props(22, false)).render(),
    );
    assert_ne!(first, remounted);
}

#[test]
fn itinerary_page_can_open_with_assistant() {
    let props = itinerary_props(11, true);
    let html = block_on(LocalServerRenderer::<ItineraryPage>::with_props(props).render());
    assert!(html.contains("AI Travel Assistant"));
    assert!(html.contains("Ask me anything about your trip..."));
}

#[test]
fn feedback_page_fills_stars_up_to_rating() {
    let mut form = FeedbackForm::default();
    form.set_rating(3);
    let props = FeedbackPageProps {
        initial: form,
        on_done: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<FeedbackPage>::with_props(props).render());
    assert!(html.contains("Trip Feedback"));
    assert_eq!(html.matches("data-filled=\"true\"").count(), 3);
    assert_eq!(html.matches("data-filled=\"false\"").count(), 2);
    assert!(html.contains("Submit Feedback"));
    assert!(html.contains("Cancel"));
}

#[test]
fn not_found_offers_way_home() {
    let props = NotFoundProps {
        on_go_home: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<NotFound>::with_props(props).render());
    assert!(html.contains("Page not found"));
    assert!(html.contains("Back to home"));
}
