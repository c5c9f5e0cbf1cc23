use crate::i18n::{t, tr, tr_count};
use std::collections::BTreeMap;
use wayfarer_planner::TripParameters;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct DashboardPageProps {
    #[prop_or_default]
    pub last_trip: Option<TripParameters>,
    pub on_plan_trip: Callback<()>,
    pub on_feedback: Callback<()>,
}

fn last_trip_summary(trip: &TripParameters) -> String {
    let days = tr_count("planner.days", u64::from(trip.days));
    let mut args = BTreeMap::new();
    args.insert("destination", trip.destination.label());
    args.insert("days", days.as_str());
    tr("dashboard.last_trip", Some(&args))
}

#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardPageProps) -> Html {
    let plan = {
        let cb = props.on_plan_trip.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let feedback = {
        let cb = props.on_feedback.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    html! {
        <section class="flex flex-col gap-6" data-testid="dashboard">
            <header>
                <h1 class="text-3xl font-bold">{ t("dashboard.title") }</h1>
                <p class="text-base-content/70">{ t("dashboard.subtitle") }</p>
            </header>
            { props.last_trip.as_ref().map(|trip| html! {
                <p class="alert">{ last_trip_summary(trip) }</p>
            }).unwrap_or_default() }
            <div class="flex flex-wrap gap-4">
                <button type="button" class="btn btn-primary" onclick={plan}>
                    { t("dashboard.plan_trip") }
                </button>
                <button type="button" class="btn btn-outline" onclick={feedback}>
                    { t("dashboard.feedback") }
                </button>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::last_trip_summary;
    use chrono::NaiveDate;
    use wayfarer_planner::{Destination, DestinationKind, TripParameters, TripType};

    #[test]
    fn summary_names_destination_and_length() {
        let trip = TripParameters {
            trip_type: TripType::Couple,
            travelers: 2,
            budget: 50_000,
            start_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            destination: Destination::new(DestinationKind::Domestic, "kerala"),
            days: 3,
        };
        assert_eq!(last_trip_summary(&trip), "Last planned: Kerala, 3 days");
    }
}
