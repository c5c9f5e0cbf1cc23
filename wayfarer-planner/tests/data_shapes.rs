use wayfarer_planner::trip::{DOMESTIC_LOCATIONS, INTERNATIONAL_LOCATIONS};
use wayfarer_planner::{
    ActivityCategory, CatalogError, ChatConfig, DataLoader, EmbeddedData, PlannerConfig,
    ReferenceCatalog,
};

#[test]
fn shipped_assets_load_through_the_embedded_loader() {
    let catalog = EmbeddedData.load_catalog().unwrap();
    let config = EmbeddedData.load_config().unwrap();
    assert!(catalog.validate().is_ok());
    assert_eq!(config.limits.min_days, 1);
    assert_eq!(config.limits.max_days, 10);
    assert_eq!(config.activities_per_day, 3);
    assert_eq!(config.amenities_per_stay, 4);
    assert_eq!(config.chat, ChatConfig::default());
}

#[test]
fn catalog_destinations_are_offered_on_the_form() {
    let catalog = ReferenceCatalog::embedded();
    for key in catalog.destination_keys() {
        assert!(
            DOMESTIC_LOCATIONS
                .iter()
                .chain(INTERNATIONAL_LOCATIONS)
                .any(|opt| opt.key == key),
            "{key} has no form option"
        );
    }
}

#[test]
fn every_destination_covers_at_least_one_category() {
    let catalog = ReferenceCatalog::embedded();
    for key in catalog.destination_keys() {
        let (_, tables) = catalog.resolve(key);
        assert!(tables.activities.len() >= 3, "{key} needs a full day of activities");
        assert!(
            tables
                .activities
                .iter()
                .any(|a| a.category == ActivityCategory::Cultural)
        );
        for stay in &tables.stays {
            assert!((0.0..=5.0).contains(&stay.rating));
            assert!(stay.price_per_night > 0);
        }
    }
}

#[test]
fn overriding_catalog_json_is_validated() {
    let json = r#"{
        "fallback": "goa",
        "amenities": ["WiFi", "Pool"],
        "destinations": {
            "goa": {
                "activities": [
                    { "name": "Beach Shack Crawl", "category": "relaxation", "cost": 800, "duration": "3 hours" }
                ],
                "stays": [
                    { "name": "Shoreline Inn", "tier": "3-star", "rating": 4.1, "price_per_night": 5000 }
                ]
            }
        }
    }"#;
    let catalog = ReferenceCatalog::from_json(json).unwrap();
    assert_eq!(catalog.resolve("kerala").0, "goa");

    let bad = json.replace("\"fallback\": \"goa\"", "\"fallback\": \"kerala\"");
    assert!(matches!(
        ReferenceCatalog::from_json(&bad),
        Err(CatalogError::UnknownFallback(_))
    ));
}

#[test]
fn config_round_trips_through_json() {
    let cfg = PlannerConfig::default_config();
    let json = serde_json::to_string(&cfg).unwrap();
    assert_eq!(PlannerConfig::from_json(&json).unwrap(), cfg);
}
