use crate::components::daisy_ui::{Select, SelectOption};
use crate::i18n::{locales, set_lang, t};
use crate::router::Route;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub current_lang: String,
    pub on_lang_change: Callback<String>,
    pub on_navigate: Callback<Route>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let on_change = {
        let cb = p.on_lang_change.clone();
        Callback::from(move |code: AttrValue| {
            set_lang(&code);
            cb.emit(code.to_string());
        })
    };
    let nav_button = |route: Route, label_key: &str| {
        let cb = p.on_navigate.clone();
        let target = route.clone();
        let onclick = Callback::from(move |_: MouseEvent| cb.emit(target.clone()));
        html! {
            <li><button type="button" class="btn btn-ghost btn-sm" onclick={onclick}>{ t(label_key) }</button></li>
        }
    };
    let options: Vec<SelectOption> = locales()
        .iter()
        .map(|meta| SelectOption::new(meta.code, meta.name))
        .collect();
    html! {
        <header role="banner" class="navbar bg-base-100 shadow-sm">
            <a href="#main" class="sr-only">{ t("ui.skip_to_content") }</a>
            <div class="navbar-start">
                <span class="text-xl font-bold">{ t("app.title") }</span>
            </div>
            <nav class="navbar-center" aria-label={t("app.title")}>
                <ul class="menu menu-horizontal gap-1">
                    { nav_button(Route::Landing, "nav.home") }
                    { nav_button(Route::Dashboard, "nav.dashboard") }
                    { nav_button(Route::PlanTrip, "nav.plan_trip") }
                </ul>
            </nav>
            <div class="navbar-end">
                <label for="lang-select" class="sr-only">{ t("nav.language") }</label>
                <Select
                    id={AttrValue::from("lang-select")}
                    options={options}
                    value={Some(AttrValue::from(p.current_lang.clone()))}
                    class={classes!("select-sm", "w-auto")}
                    on_change={on_change}
                />
            </div>
        </header>
    }
}
