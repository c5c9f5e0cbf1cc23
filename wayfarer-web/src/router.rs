use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Landing,
    #[at("/dashboard")]
    Dashboard,
    #[at("/plan-trip")]
    PlanTrip,
    #[at("/itinerary")]
    Itinerary,
    #[at("/feedback")]
    Feedback,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// i18n key for the document title shown on this route.
    #[must_use]
    pub const fn title_key(&self) -> &'static str {
        match self {
            Self::Landing => "landing.title",
            Self::Dashboard => "dashboard.title",
            Self::PlanTrip => "planner.title",
            Self::Itinerary => "itinerary.title",
            Self::Feedback => "feedback.title",
            Self::NotFound => "not_found.title",
        }
    }

    /// Whether the view needs trip parameters carried over from the form.
    #[must_use]
    pub const fn requires_trip(&self) -> bool {
        matches!(self, Self::Itinerary)
    }
}
