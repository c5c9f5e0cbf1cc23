use crate::components::daisy_ui::{Badge, Card, DaisyColor, DaisySize};
use crate::i18n::{fmt_date_long, fmt_inr, t, tr};
use std::collections::BTreeMap;
use wayfarer_planner::{Accommodation, Activity, DayPlan};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub plan: DayPlan,
}

fn tr1(key: &str, name: &str, value: &str) -> String {
    let mut args = BTreeMap::new();
    args.insert(name, value);
    tr(key, Some(&args))
}

/// "Day N - June 1, 2024" for the card heading.
#[must_use]
pub fn day_heading(plan: &DayPlan) -> String {
    let day = plan.day.to_string();
    let date = fmt_date_long(plan.date);
    let mut args = BTreeMap::new();
    args.insert("day", day.as_str());
    args.insert("date", date.as_str());
    tr("itinerary.day_heading", Some(&args))
}

fn activity_item(activity: &Activity) -> Html {
    html! {
        <li class="rounded-box border border-base-300 p-3" data-activity-id={activity.id.clone()}>
            <div class="flex items-center justify-between gap-2">
                <span class="font-semibold">{ activity.name.clone() }</span>
                <Badge label={t(activity.category.i18n_key())} variant={DaisyColor::Info} size={DaisySize::Sm} />
            </div>
            <p class="text-sm">{ activity.description.clone() }</p>
            <p class="text-xs text-base-content/70">
                { tr1("itinerary.duration", "duration", &activity.duration) }
                { " · " }
                { tr1("itinerary.cost", "amount", &fmt_inr(u64::from(activity.cost))) }
            </p>
        </li>
    }
}

fn stay_block(stay: &Accommodation) -> Html {
    let rating = format!("{:.1}", stay.rating);
    html! {
        <section class="mt-4" aria-label={t("itinerary.accommodation")}>
            <h4 class="font-semibold">{ t("itinerary.accommodation") }</h4>
            <p class="font-medium">{ stay.name.clone() }</p>
            <p class="text-sm">{ tr1("itinerary.tier", "tier", &stay.tier) }</p>
            <p class="text-sm">{ tr1("itinerary.rating", "rating", &rating) }</p>
            <p class="text-sm">
                { tr1("itinerary.price", "amount", &fmt_inr(u64::from(stay.price_per_night))) }
            </p>
            <div class="flex flex-wrap items-center gap-1 text-sm">
                <span>{ t("itinerary.amenities") }</span>
                { for stay.amenities.iter().map(|amenity| html! {
                    <Badge label={AttrValue::from(amenity.clone())} variant={DaisyColor::Neutral} size={DaisySize::Sm} />
                }) }
            </div>
        </section>
    }
}

#[function_component(DayCard)]
pub fn day_card(p: &Props) -> Html {
    let plan = &p.plan;
    let temperature = tr1(
        "weather.temperature",
        "temp",
        &plan.weather.temperature_c.to_string(),
    );
    let subtitle = format!(
        "{} {} {}",
        plan.weather.icon.glyph(),
        t(plan.weather.condition.i18n_key()),
        temperature
    );
    html! {
        <Card
            title={AttrValue::from(day_heading(plan))}
            subtitle={AttrValue::from(subtitle)}
            class={classes!("day-card")}
        >
            <h4 class="font-semibold">{ t("itinerary.activities") }</h4>
            <ul class="flex flex-col gap-2">
                { for plan.activities.iter().map(activity_item) }
            </ul>
            { stay_block(&plan.accommodation) }
        </Card>
    }
}
