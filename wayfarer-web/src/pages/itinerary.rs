use crate::components::chat_panel::ChatPanel;
use crate::components::daisy_ui::{Badge, DaisyColor};
use crate::components::day_card::DayCard;
use crate::i18n::{fmt_inr, t, tr, tr_count};
use std::collections::BTreeMap;
use std::rc::Rc;
use wayfarer_planner::{Itinerary, ItineraryGenerator, TripParameters};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ItineraryPageProps {
    pub trip: TripParameters,
    pub generator: Rc<ItineraryGenerator>,
    /// Seed for the draw made on mount; a fresh one when unset.
    #[prop_or_default]
    pub seed: Option<u64>,
    #[prop_or_default]
    pub chat_open: bool,
    pub on_feedback: Callback<()>,
}

/// Seed for a fresh itinerary draw.
#[must_use]
pub fn fresh_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now().to_bits() ^ js_sys::Math::random().to_bits().rotate_left(17)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |elapsed| {
                u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX)
            })
    }
}

fn draw(generator: &ItineraryGenerator, trip: &TripParameters, seed: u64) -> Itinerary {
    let plan = generator.generate_seeded(trip, seed);
    log::info!(
        "generated {} day itinerary for `{}` (seed {seed:#x})",
        plan.len(),
        plan.destination_key
    );
    plan
}

fn estimate_line(itinerary: &Itinerary) -> String {
    let amount = fmt_inr(itinerary.estimated_total());
    let mut args = BTreeMap::new();
    args.insert("amount", amount.as_str());
    tr("itinerary.estimate", Some(&args))
}

#[function_component(ItineraryPage)]
pub fn itinerary_page(props: &ItineraryPageProps) -> Html {
    // Owned by this view only; leaving the route drops it.
    let itinerary = {
        let generator = props.generator.clone();
        let trip = props.trip.clone();
        let seed = props.seed;
        use_state(move || draw(&generator, &trip, seed.unwrap_or_else(fresh_seed)))
    };
    let chat_open = {
        let initial = props.chat_open;
        use_state(move || initial)
    };
    let toggle_chat = {
        let chat_open = chat_open.clone();
        Callback::from(move |_: MouseEvent| chat_open.set(!*chat_open))
    };
    let close_chat = {
        let chat_open = chat_open.clone();
        Callback::from(move |()| chat_open.set(false))
    };
    let regenerate = {
        let itinerary = itinerary.clone();
        let generator = props.generator.clone();
        let trip = props.trip.clone();
        Callback::from(move |_: MouseEvent| itinerary.set(draw(&generator, &trip, fresh_seed())))
    };
    let feedback = {
        let cb = props.on_feedback.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let itinerary = &*itinerary;
    let params = &itinerary.params;
    let (budget_label, budget_color) = if itinerary.within_budget() {
        (t("itinerary.within_budget"), DaisyColor::Success)
    } else {
        (t("itinerary.over_budget"), DaisyColor::Warning)
    };
    let subtitle = format!(
        "{} · {} · {}",
        params.destination.label(),
        tr_count("planner.days", u64::from(params.days)),
        t(params.trip_type.i18n_key())
    );

    html! {
        <section class="flex flex-col gap-6" data-testid="itinerary">
            <header class="flex flex-wrap items-start justify-between gap-4">
                <div>
                    <h1 class="text-3xl font-bold">{ t("itinerary.title") }</h1>
                    <p class="text-base-content/70">{ subtitle }</p>
                    <p class="flex items-center gap-2">
                        { estimate_line(itinerary) }
                        <Badge label={AttrValue::from(budget_label)} variant={budget_color} />
                    </p>
                </div>
                <div class="flex flex-wrap gap-2">
                    <button type="button" class="btn btn-secondary" onclick={toggle_chat}>
                        { t("itinerary.assistant") }
                    </button>
                    <button type="button" class="btn btn-outline" onclick={regenerate}>
                        { t("itinerary.regenerate") }
                    </button>
                    <button type="button" class="btn btn-primary" onclick={feedback}>
                        { t("itinerary.feedback") }
                    </button>
                </div>
            </header>
            <div class="grid gap-4">
                { for itinerary.days.iter().map(|plan| html! {
                    <DayCard key={plan.day} plan={plan.clone()} />
                }) }
            </div>
            if *chat_open {
                <ChatPanel config={props.generator.config().chat.clone()} on_close={close_chat} />
            }
        </section>
    }
}
