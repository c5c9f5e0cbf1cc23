use std::rc::Rc;
use wayfarer_planner::{ItineraryGenerator, TripDraft, TripParameters};
use yew::prelude::*;

#[derive(Clone)]
pub struct AppState {
    pub generator: UseStateHandle<Rc<ItineraryGenerator>>,
    pub draft: UseStateHandle<TripDraft>,
    /// Set by the planning form; the itinerary view is guarded on it.
    pub trip: UseStateHandle<Option<TripParameters>>,
    pub current_language: UseStateHandle<String>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        generator: use_state(|| Rc::new(crate::app::bootstrap::load_generator())),
        draft: use_state(TripDraft::default),
        trip: use_state(|| None::<TripParameters>),
        current_language: use_state(crate::i18n::current_lang),
    }
}
