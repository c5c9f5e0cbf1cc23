use crate::app::routing::redirect_for;
use crate::app::state::AppState;
use crate::app::view::handlers::AppHandlers;
use crate::pages::{
    DashboardPage, FeedbackPage, ItineraryPage, LandingPage, NotFound, PlanTripPage,
};
use crate::router::Route;
use yew::prelude::*;

fn emit_route(navigate: &Callback<Route>, route: Route) -> Callback<()> {
    let navigate = navigate.clone();
    Callback::from(move |()| navigate.emit(route.clone()))
}

pub fn render_main_view(state: &AppState, handlers: &AppHandlers, route: Option<&Route>) -> Html {
    let route = route.cloned().unwrap_or(Route::NotFound);
    if redirect_for(&route, (*state.trip).as_ref()).is_some() {
        // The guard hook replaces the route.
        return Html::default();
    }
    let generator = &*state.generator;
    match route {
        Route::Landing => html! {
            <LandingPage on_get_started={emit_route(&handlers.navigate, Route::Dashboard)} />
        },
        Route::Dashboard => html! {
            <DashboardPage
                last_trip={(*state.trip).clone()}
                on_plan_trip={emit_route(&handlers.navigate, Route::PlanTrip)}
                on_feedback={emit_route(&handlers.navigate, Route::Feedback)}
            />
        },
        Route::PlanTrip => html! {
            <PlanTripPage
                initial={(*state.draft).clone()}
                limits={generator.config().limits}
                on_submit={handlers.submit_trip.clone()}
                on_draft_change={handlers.draft_change.clone()}
            />
        },
        Route::Itinerary => (*state.trip).clone().map_or_else(Html::default, |trip| {
            html! {
                <ItineraryPage
                    trip={trip}
                    generator={(*state.generator).clone()}
                    on_feedback={emit_route(&handlers.navigate, Route::Feedback)}
                />
            }
        }),
        Route::Feedback => html! {
            <FeedbackPage on_done={handlers.feedback_done.clone()} />
        },
        Route::NotFound => html! {
            <NotFound on_go_home={emit_route(&handlers.navigate, Route::Landing)} />
        },
    }
}
