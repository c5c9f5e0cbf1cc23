use crate::components::daisy_ui::foundation as f;
use wayfarer_planner::feedback::MAX_RATING;

#[derive(f::Properties, PartialEq, Clone)]
pub struct RatingProps {
    /// Current stars, 0 when unset.
    #[prop_or_default]
    pub value: u8,
    #[prop_or_default]
    pub label: Option<f::AttrValue>,
    #[prop_or(f::DaisySize::Lg)]
    pub size: f::DaisySize,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub on_change: f::Callback<u8>,
}

/// Star buttons; every star up to the current value renders filled.
#[f::function_component(Rating)]
pub fn rating(props: &RatingProps) -> f::Html {
    let mut class = f::class_list(&["rating", "gap-1"], &props.class);
    class.push(props.size.class("rating"));
    f::html! {
        <div class={class} role="radiogroup" aria-label={f::attr_value(&props.label)}>
            { for (1..=MAX_RATING).map(|star| {
                let filled = props.value >= star;
                let on_click = {
                    let cb = props.on_change.clone();
                    f::Callback::from(move |_: f::MouseEvent| cb.emit(star))
                };
                let star_class = if filled {
                    "mask mask-star-2 bg-amber-400"
                } else {
                    "mask mask-star-2 bg-base-300"
                };
                f::html! {
                    <button
                        type="button"
                        class={star_class}
                        role="radio"
                        aria-checked={if props.value == star { "true" } else { "false" }}
                        aria-label={crate::i18n::tr_count("feedback.star", u64::from(star))}
                        data-filled={filled.to_string()}
                        onclick={on_click}
                    />
                }
            }) }
        </div>
    }
}
