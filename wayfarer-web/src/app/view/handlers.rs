use crate::app::state::AppState;
use crate::router::Route;
use wayfarer_planner::{FeedbackOutcome, TripDraft, TripParameters};
use yew::prelude::*;
use yew_router::prelude::Navigator;

#[derive(Clone)]
pub struct AppHandlers {
    pub navigate: Callback<Route>,
    pub lang_change: Callback<String>,
    pub draft_change: Callback<TripDraft>,
    pub submit_trip: Callback<TripParameters>,
    pub feedback_done: Callback<FeedbackOutcome>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState, navigator: Option<Navigator>) -> Self {
        let navigate = build_navigate(navigator);
        Self {
            lang_change: build_lang_change(state),
            draft_change: build_draft_change(state),
            submit_trip: build_submit_trip(state, &navigate),
            feedback_done: build_feedback_done(&navigate),
            navigate,
        }
    }
}

fn build_navigate(navigator: Option<Navigator>) -> Callback<Route> {
    Callback::from(move |route: Route| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&route);
        }
    })
}

fn build_lang_change(state: &AppState) -> Callback<String> {
    let current_language = state.current_language.clone();
    Callback::from(move |code: String| current_language.set(code))
}

fn build_draft_change(state: &AppState) -> Callback<TripDraft> {
    let draft = state.draft.clone();
    Callback::from(move |next: TripDraft| draft.set(next))
}

fn build_submit_trip(state: &AppState, navigate: &Callback<Route>) -> Callback<TripParameters> {
    let trip = state.trip.clone();
    let navigate = navigate.clone();
    Callback::from(move |params: TripParameters| {
        log::debug!("trip accepted for `{}`", params.destination.label());
        trip.set(Some(params));
        navigate.emit(Route::Itinerary);
    })
}

fn build_feedback_done(navigate: &Callback<Route>) -> Callback<FeedbackOutcome> {
    let navigate = navigate.clone();
    Callback::from(move |outcome: FeedbackOutcome| match outcome {
        FeedbackOutcome::ReturnToDashboard => navigate.emit(Route::Dashboard),
    })
}
