use crate::components::daisy_ui::{Alert, DaisyColor, Input, Select, SelectOption};
use crate::i18n::{t, tr};
use crate::input::{parse_date_input, parse_whole_number, today_iso};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use wayfarer_planner::{
    DestinationKind, TripDraft, TripLimits, TripParameters, TripType, TripValidationError,
};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PlanTripPageProps {
    #[prop_or_default]
    pub initial: TripDraft,
    pub limits: TripLimits,
    pub on_submit: Callback<TripParameters>,
    #[prop_or_default]
    pub on_draft_change: Callback<TripDraft>,
}

/// Localised text for a validation error.
#[must_use]
pub fn validation_message(err: &TripValidationError) -> String {
    match err {
        TripValidationError::DurationOutOfRange { min, max, .. } => {
            let min = min.to_string();
            let max = max.to_string();
            let mut args = BTreeMap::new();
            args.insert("min", min.as_str());
            args.insert("max", max.as_str());
            tr(err.i18n_key(), Some(&args))
        }
        _ => t(err.i18n_key()),
    }
}

/// Inline range error; shown only once both dates are picked.
///
/// Missing dates are reported on submit instead.
#[must_use]
pub fn date_range_error(draft: &TripDraft, limits: &TripLimits) -> Option<String> {
    if draft.start_date.is_none() || draft.end_date.is_none() {
        return None;
    }
    draft
        .check_dates(limits)
        .err()
        .map(|err| validation_message(&err))
}

/// Finalize the draft on submit, or the message to show instead.
///
/// # Errors
///
/// Returns the localised validation message when the draft is incomplete or
/// the range is out of bounds.
pub fn submit_draft(draft: &TripDraft, limits: &TripLimits) -> Result<TripParameters, String> {
    draft.finalize(limits).map_err(|err| validation_message(&err))
}

fn iso(date: Option<NaiveDate>) -> AttrValue {
    date.map(|d| AttrValue::from(d.format("%Y-%m-%d").to_string()))
        .unwrap_or_default()
}

fn edit<T: 'static>(
    draft: &UseStateHandle<TripDraft>,
    on_change: &Callback<TripDraft>,
    apply: impl Fn(&mut TripDraft, T) + 'static,
) -> Callback<T> {
    let draft = draft.clone();
    let on_change = on_change.clone();
    Callback::from(move |value: T| {
        let mut next = (*draft).clone();
        apply(&mut next, value);
        on_change.emit(next.clone());
        draft.set(next);
    })
}

fn date_edit(
    draft: &UseStateHandle<TripDraft>,
    on_change: &Callback<TripDraft>,
    input_error: &UseStateHandle<Option<String>>,
    set: fn(&mut TripDraft, Option<NaiveDate>),
) -> Callback<String> {
    let input_error = input_error.clone();
    edit(draft, on_change, move |next, raw: String| {
        match parse_date_input(&raw) {
            Ok(date) => {
                set(next, date);
                input_error.set(None);
            }
            Err(err) => {
                log::debug!("rejected date input: {err}");
                set(next, None);
                input_error.set(Some(t("planner.errors.invalid_date")));
            }
        }
    })
}

#[function_component(PlanTripPage)]
pub fn plan_trip_page(props: &PlanTripPageProps) -> Html {
    let draft = {
        let initial = props.initial.clone();
        use_state(move || initial)
    };
    let input_error = use_state(|| None::<String>);
    let on_change = props.on_draft_change.clone();

    let on_trip_type = edit(&draft, &on_change, |next, key: AttrValue| {
        if let Some(ty) = TripType::from_key(&key) {
            next.trip_type = ty;
        }
    });
    let on_travelers = edit(&draft, &on_change, |next, raw: String| {
        if let Ok(n) = parse_whole_number(&raw) {
            next.travelers = u32::try_from(n).unwrap_or(u32::MAX).max(1);
        }
    });
    let on_budget = edit(&draft, &on_change, |next, raw: String| {
        next.budget = if raw.trim().is_empty() {
            0
        } else {
            parse_whole_number(&raw).unwrap_or(next.budget)
        };
    });
    let on_kind = edit(&draft, &on_change, |next, key: AttrValue| {
        if let Some(kind) = DestinationKind::from_key(&key) {
            next.set_destination_kind(kind);
        }
    });
    let on_location = edit(&draft, &on_change, |next, key: AttrValue| {
        next.destination.location = key.to_string();
    });
    let on_start = date_edit(&draft, &on_change, &input_error, |next, date| {
        next.start_date = date;
    });
    let on_end = date_edit(&draft, &on_change, &input_error, |next, date| {
        next.end_date = date;
    });

    let limits = props.limits;
    let range_error = date_range_error(&draft, &limits);
    let has_range_error = range_error.is_some();

    let on_submit = {
        let draft = draft.clone();
        let input_error = input_error.clone();
        let cb = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match submit_draft(&draft, &limits) {
                Ok(params) => {
                    log::info!(
                        "trip submitted: {} days to {}",
                        params.days,
                        params.destination.label()
                    );
                    cb.emit(params);
                }
                Err(message) => input_error.set(Some(message)),
            }
        })
    };

    let trip_types: Vec<SelectOption> = TripType::ALL
        .iter()
        .map(|ty| SelectOption::new(ty.key(), t(ty.i18n_key())))
        .collect();
    let kinds: Vec<SelectOption> = [DestinationKind::Domestic, DestinationKind::International]
        .iter()
        .map(|kind| {
            SelectOption::new(
                kind.key(),
                t(&format!("planner.destination_types.{}", kind.key())),
            )
        })
        .collect();
    let locations: Vec<SelectOption> = draft
        .destination
        .kind
        .locations()
        .iter()
        .map(|opt| SelectOption::new(opt.key, opt.label))
        .collect();
    let min_date = today_iso().map(AttrValue::from);

    html! {
        <section class="mx-auto max-w-2xl" data-testid="plan-trip">
            <h1 class="mb-6 text-3xl font-bold">{ t("planner.title") }</h1>
            <form class="grid gap-4 md:grid-cols-2" onsubmit={on_submit} novalidate={true}>
                <label class="form-control">
                    <span class="label-text">{ t("planner.trip_type") }</span>
                    <Select
                        id={AttrValue::from("trip-type")}
                        options={trip_types}
                        value={Some(AttrValue::from(draft.trip_type.key()))}
                        on_change={on_trip_type}
                    />
                </label>
                <label class="form-control">
                    <span class="label-text">{ t("planner.travelers") }</span>
                    <Input
                        id={AttrValue::from("travelers")}
                        input_type={AttrValue::from("number")}
                        min={AttrValue::from("1")}
                        value={AttrValue::from(draft.travelers.to_string())}
                        oninput={on_travelers}
                    />
                </label>
                <label class="form-control">
                    <span class="label-text">{ t("planner.budget") }</span>
                    <Input
                        id={AttrValue::from("budget")}
                        input_type={AttrValue::from("number")}
                        min={AttrValue::from("0")}
                        step={AttrValue::from("1000")}
                        value={AttrValue::from(draft.budget.to_string())}
                        oninput={on_budget}
                    />
                </label>
                <label class="form-control">
                    <span class="label-text">{ t("planner.destination_type") }</span>
                    <Select
                        id={AttrValue::from("destination-type")}
                        options={kinds}
                        value={Some(AttrValue::from(draft.destination.kind.key()))}
                        on_change={on_kind}
                    />
                </label>
                <label class="form-control">
                    <span class="label-text">{ t("planner.start_date") }</span>
                    <Input
                        id={AttrValue::from("start-date")}
                        input_type={AttrValue::from("date")}
                        min={min_date.clone()}
                        value={iso(draft.start_date)}
                        invalid={has_range_error}
                        oninput={on_start}
                    />
                </label>
                <label class="form-control">
                    <span class="label-text">{ t("planner.end_date") }</span>
                    <Input
                        id={AttrValue::from("end-date")}
                        input_type={AttrValue::from("date")}
                        min={draft.start_date.map(|d| iso(Some(d))).or(min_date)}
                        value={iso(draft.end_date)}
                        invalid={has_range_error}
                        oninput={on_end}
                    />
                </label>
                <label class="form-control md:col-span-2">
                    <span class="label-text">{ t("planner.destination") }</span>
                    <Select
                        id={AttrValue::from("destination")}
                        options={locations}
                        placeholder={AttrValue::from(t("planner.select_destination"))}
                        value={Some(AttrValue::from(draft.destination.location.clone()))}
                        on_change={on_location}
                    />
                </label>
                { range_error.or_else(|| (*input_error).clone()).map(|message| html! {
                    <Alert
                        class={classes!("md:col-span-2")}
                        variant={DaisyColor::Error}
                        message={AttrValue::from(message)}
                    />
                }).unwrap_or_default() }
                <button type="submit" class="btn btn-primary md:col-span-2" disabled={has_range_error}>
                    { t("planner.submit") }
                </button>
            </form>
        </section>
    }
}
