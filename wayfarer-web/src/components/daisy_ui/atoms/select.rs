use crate::components::daisy_ui::foundation as f;
use f::TargetCast;

#[derive(Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub label: f::AttrValue,
    pub value: f::AttrValue,
}

impl SelectOption {
    #[must_use]
    pub fn new(value: impl Into<f::AttrValue>, label: impl Into<f::AttrValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(f::Properties, PartialEq, Clone)]
pub struct SelectProps {
    #[prop_or_default]
    pub id: Option<f::AttrValue>,
    pub options: Vec<SelectOption>,
    /// Leading empty-valued option, e.g. "Select a destination".
    #[prop_or_default]
    pub placeholder: Option<f::AttrValue>,
    #[prop_or_default]
    pub value: Option<f::AttrValue>,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub on_change: f::Callback<f::AttrValue>,
}

#[f::function_component(Select)]
pub fn select(props: &SelectProps) -> f::Html {
    let class = f::class_list(&["select", "select-bordered", "w-full"], &props.class);
    let on_change = {
        let cb = props.on_change.clone();
        f::Callback::from(move |e: f::Event| {
            if let Some(sel) = e.target_dyn_into::<f::HtmlSelectElement>() {
                cb.emit(sel.value().into());
            }
        })
    };
    let current = props.value.clone().unwrap_or_default();
    f::html! {
        <select
            id={f::attr_value(&props.id)}
            class={class}
            value={current.clone()}
            onchange={on_change}
        >
            { props.placeholder.as_ref().map(|label| f::html! {
                <option value="" selected={current.is_empty()}>{ label.clone() }</option>
            }).unwrap_or_default() }
            { for props.options.iter().map(|opt| {
                f::html! {
                    <option value={opt.value.clone()} selected={opt.value == current}>
                        { opt.label.clone() }
                    </option>
                }
            })}
        </select>
    }
}
