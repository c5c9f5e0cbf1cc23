use crate::router::Route;
use wayfarer_planner::TripParameters;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::Navigator;

/// What the itinerary route should do with the current trip handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItineraryAccess {
    Render,
    RedirectToPlanner,
}

#[must_use]
pub const fn itinerary_access(trip: Option<&TripParameters>) -> ItineraryAccess {
    match trip {
        Some(_) => ItineraryAccess::Render,
        None => ItineraryAccess::RedirectToPlanner,
    }
}

/// Route to replace `route` with, if it cannot be shown.
#[must_use]
pub fn redirect_for(route: &Route, trip: Option<&TripParameters>) -> Option<Route> {
    if !route.requires_trip() {
        return None;
    }
    match itinerary_access(trip) {
        ItineraryAccess::Render => None,
        ItineraryAccess::RedirectToPlanner => Some(Route::PlanTrip),
    }
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_itinerary_guard(
    trip: &UseStateHandle<Option<TripParameters>>,
    navigator: Option<Navigator>,
    active_route: Option<Route>,
) {
    let trip = trip.clone();
    use_effect_with((trip, active_route), move |(trip, route)| {
        if let (Some(nav), Some(route)) = (navigator.as_ref(), route.as_ref())
            && let Some(target) = redirect_for(route, (**trip).as_ref())
        {
            log::info!("no trip parameters for {route:?}, redirecting");
            nav.replace(&target);
        }
    });
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_document_title(route: Option<Route>) {
    use_effect_with(route, move |route| {
        if let Some(doc) = crate::dom::document() {
            let key = route.as_ref().map_or("app.title", Route::title_key);
            doc.set_title(&format!(
                "{} | {}",
                crate::i18n::t(key),
                crate::i18n::t("app.title")
            ));
        }
    });
}
