#[cfg(target_arch = "wasm32")]
use wayfarer_web::dom;
use std::collections::BTreeMap;
use wayfarer_web::i18n;
use wayfarer_web::input::{is_date_input_complete, parse_date_input};
use wayfarer_web::router::Route;
use yew_router::Routable;

#[cfg(target_arch = "wasm32")]
#[test]
fn dom_helpers_find_window() {
    assert!(dom::window().is_some());
    assert!(dom::document().is_some());
}

#[test]
fn i18n_bundle_switches_and_formats() {
    i18n::set_lang("en");
    assert_eq!(i18n::current_lang(), "en");

    let mut vars = BTreeMap::new();
    vars.insert("min", "1");
    vars.insert("max", "10");
    assert_eq!(
        i18n::tr("planner.errors.duration", Some(&vars)),
        "Trip duration must be between 1 and 10 days"
    );
    assert_eq!(i18n::t("missing.key"), "missing.key");
    assert_eq!(i18n::tr_count("planner.days", 1), "1 day");
    assert_eq!(i18n::tr_count("planner.days", 7), "7 days");
    assert_eq!(i18n::fmt_inr(1500), "\u{20b9}1500");
}

#[test]
fn hindi_translates_landing_features() {
    i18n::set_lang("hi");
    assert_eq!(i18n::current_lang(), "hi");
    assert_ne!(i18n::t("app.title"), "app.title");
    assert_eq!(i18n::t("nav.language"), "भाषा");
    assert_eq!(
        i18n::t("landing.features.coverage.body"),
        "देशी और विदेशी दोनों गंतव्य"
    );
    i18n::set_lang("en");
}

#[test]
fn routes_cover_every_view() {
    assert_eq!(Route::recognize("/plan-trip"), Some(Route::PlanTrip));
    assert_eq!(Route::recognize("/feedback"), Some(Route::Feedback));
    assert_eq!(Route::Dashboard.title_key(), "dashboard.title");
}

#[test]
fn itinerary_guard_redirects_without_trip() {
    use wayfarer_web::app::{ItineraryAccess, itinerary_access, redirect_for};
    assert_eq!(itinerary_access(None), ItineraryAccess::RedirectToPlanner);
    assert_eq!(
        redirect_for(&Route::Itinerary, None),
        Some(Route::PlanTrip)
    );
}

#[test]
fn date_inputs_follow_picker_format() {
    assert!(is_date_input_complete("2024-06-01"));
    assert!(parse_date_input("").unwrap().is_none());
    assert!(parse_date_input("June 1").is_err());
}
