pub mod dashboard;
pub mod feedback;
pub mod itinerary;
pub mod landing;
pub mod not_found;
pub mod plan_trip;

pub use dashboard::DashboardPage;
pub use feedback::FeedbackPage;
pub use itinerary::ItineraryPage;
pub use landing::LandingPage;
pub use not_found::NotFound;
pub use plan_trip::PlanTripPage;
