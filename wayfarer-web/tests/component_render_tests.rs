use chrono::NaiveDate;
use futures::executor::block_on;
use smallvec::smallvec;
use wayfarer_planner::{
    Accommodation, Activity, ActivityCategory, ChatConfig, DayPlan, WeatherCondition,
    WeatherSample,
};
use wayfarer_web::components::chat_panel::{ChatPanel, Props as ChatPanelProps};
use wayfarer_web::components::day_card::{DayCard, Props as DayCardProps, day_heading};
use wayfarer_web::components::daisy_ui::{
    Alert, AlertProps, Badge, BadgeProps, DaisyColor, Select, SelectOption, SelectProps,
};
use wayfarer_web::components::header::{Header, Props as HeaderProps};
use yew::{AttrValue, Callback, LocalServerRenderer};

fn sample_day() -> DayPlan {
    DayPlan {
        day: 2,
        date: NaiveDate::from_ymd_opt(2024, 6, 2).unwrap(),
        weather: WeatherSample::new(27, WeatherCondition::Cloudy),
        activities: smallvec![Activity {
            id: "act-1-0".into(),
            name: "Backwater Cruise".into(),
            category: ActivityCategory::Relaxation,
            cost: 2000,
            duration: "4 hours".into(),
            description: "Backwater Cruise in kerala".into(),
        }],
        accommodation: Accommodation {
            name: "Lakeside Homestay".into(),
            tier: "Homestay".into(),
            rating: 4.5,
            price_per_night: 3500,
            amenities: vec!["WiFi".into(), "Breakfast".into()],
        },
    }
}

#[test]
fn day_card_shows_weather_activities_and_stay() {
    let props = DayCardProps { plan: sample_day() };
    let html = block_on(LocalServerRenderer::<DayCard>::with_props(props).render());
    assert!(html.contains("Day 2 - June 2, 2024"));
    assert!(html.contains("Cloudy"));
    assert!(html.contains("27°C"));
    assert!(html.contains("Backwater Cruise"));
    assert!(html.contains("Relaxation"));
    assert!(html.contains("Duration: 4 hours"));
    assert!(html.contains("Lakeside Homestay"));
    assert!(html.contains("Rating: 4.5/5"));
    assert!(html.contains("WiFi"));
    assert!(html.contains("Breakfast"));
    assert!(html.contains("data-activity-id=\"act-1-0\""));
}

#[test]
fn day_heading_uses_long_dates() {
    assert_eq!(day_heading(&sample_day()), "Day 2 - June 2, 2024");
}

#[test]
fn chat_panel_starts_empty() {
    let props = ChatPanelProps {
        config: ChatConfig::default(),
        on_close: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ChatPanel>::with_props(props).render());
    assert!(html.contains("AI Travel Assistant"));
    assert!(html.contains("Ask about sights, food, or getting around."));
    assert!(html.contains("Send"));
}

#[test]
fn header_offers_navigation_and_locales() {
    let props = HeaderProps {
        current_lang: "en".into(),
        on_lang_change: Callback::noop(),
        on_navigate: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Header>::with_props(props).render());
    assert!(html.contains("Plan a Trip"));
    assert!(html.contains("Dashboard"));
    assert!(html.contains("English"));
    assert!(html.contains("हिन्दी"));
}

#[test]
fn alert_uses_error_role_for_errors() {
    let props = AlertProps {
        message: Some(AttrValue::from("Trip duration must be between 1 and 10 days")),
        variant: Some(DaisyColor::Error),
        class: yew::Classes::new(),
        children: yew::Children::default(),
    };
    let html = block_on(LocalServerRenderer::<Alert>::with_props(props).render());
    assert!(html.contains("alert-error"));
    assert!(html.contains("role=\"alert\""));
}

#[test]
fn badge_and_select_render_options() {
    let props = BadgeProps {
        label: "Within budget".into(),
        variant: Some(DaisyColor::Success),
        size: None,
        class: yew::Classes::new(),
    };
    let html = block_on(LocalServerRenderer::<Badge>::with_props(props).render());
    assert!(html.contains("badge-success"));

    let props = SelectProps {
        id: Some("trip-type".into()),
        options: vec![
            SelectOption::new("solo", "Solo"),
            SelectOption::new("family", "Family"),
        ],
        placeholder: None,
        value: Some("family".into()),
        class: yew::Classes::new(),
        on_change: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Select>::with_props(props).render());
    assert!(html.contains("Solo"));
    assert!(html.contains("Family"));
}
