mod handlers;
mod routes;

pub use handlers::AppHandlers;

use crate::app::state::AppState;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::Navigator;

pub fn render_app(state: &AppState, route: Option<&Route>, navigator: Option<Navigator>) -> Html {
    let handlers = AppHandlers::new(state, navigator);
    let main_view = routes::render_main_view(state, &handlers, route);

    html! {
        <>
            <crate::components::header::Header
                current_lang={(*state.current_language).clone()}
                on_lang_change={handlers.lang_change.clone()}
                on_navigate={handlers.navigate.clone()}
            />
            <main id="main" role="main" class="container mx-auto min-h-[70vh] p-4">
                { main_view }
            </main>
            <crate::components::footer::Footer />
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::use_app_state;
    use chrono::NaiveDate;
    use futures::executor::block_on;
    use wayfarer_planner::{Destination, DestinationKind, TripParameters, TripType};
    use yew::LocalServerRenderer;

    #[derive(Properties, PartialEq)]
    struct HarnessProps {
        route: Route,
        #[prop_or_default]
        trip: Option<TripParameters>,
    }

    #[function_component(RenderHarness)]
    fn render_harness(props: &HarnessProps) -> Html {
        let mut state = use_app_state();
        let trip = props.trip.clone();
        state.trip = use_state(move || trip);
        render_app(&state, Some(&props.route), None)
    }

    fn render_with(route: Route, trip: Option<TripParameters>) -> String {
        block_on(
            LocalServerRenderer::<RenderHarness>::with_props(HarnessProps { route, trip }).render(),
        )
    }

    fn render(route: Route) -> String {
        render_with(route, None)
    }

    fn rajasthan_trip() -> TripParameters {
        let start = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        TripParameters {
            trip_type: TripType::Solo,
            travelers: 1,
            budget: 40_000,
            start_date: start,
            end_date: start + chrono::Days::new(1),
            destination: Destination::new(DestinationKind::Domestic, "rajasthan"),
            days: 2,
        }
    }

    #[test]
    fn landing_route_renders_hero_and_chrome() {
        let html = render(Route::Landing);
        assert!(html.contains("Plan Your Perfect Journey"));
        assert!(html.contains("Why Choose Us?"));
        assert!(html.contains("Itineraries are illustrative"));
    }

    #[test]
    fn itinerary_without_trip_renders_nothing() {
        let html = render(Route::Itinerary);
        assert!(!html.contains("Your Travel Itinerary"));
        assert!(html.contains("Wayfarer"));
    }

    #[test]
    fn itinerary_route_draws_from_the_stored_trip() {
        let html = render_with(Route::Itinerary, Some(rajasthan_trip()));
        assert!(html.contains("Your Travel Itinerary"));
        assert_eq!(html.matches("day-card").count(), 2);
        assert!(html.contains("Day 2 - June 2, 2024"));
    }

    #[test]
    fn other_routes_carry_no_plan() {
        let html = render_with(Route::Feedback, Some(rajasthan_trip()));
        assert!(!html.contains("day-card"));
        assert!(!html.contains("Your Travel Itinerary"));
    }

    #[test]
    fn plan_trip_route_shows_form() {
        let html = render(Route::PlanTrip);
        assert!(html.contains("Plan Your Trip"));
        assert!(html.contains("Generate Itinerary"));
    }
}
