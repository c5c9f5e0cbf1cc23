use crate::components::daisy_ui::Card;
use crate::i18n::t;
use yew::prelude::*;

/// Feature highlights: (i18n group, glyph).
const FEATURES: [(&str, &str); 4] = [
    ("recommendations", "✨"),
    ("groups", "👥"),
    ("itineraries", "🗓"),
    ("coverage", "🌏"),
];

#[derive(Properties, PartialEq, Clone)]
pub struct LandingPageProps {
    pub on_get_started: Callback<()>,
}

#[function_component(LandingPage)]
pub fn landing_page(props: &LandingPageProps) -> Html {
    let get_started = {
        let cb = props.on_get_started.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    html! {
        <div class="flex flex-col gap-12" data-testid="landing">
            <section class="hero min-h-[40vh] bg-base-200 rounded-box">
                <div class="hero-content text-center">
                    <div class="max-w-xl">
                        <h1 class="text-4xl font-bold">{ t("landing.title") }</h1>
                        <p class="py-6">{ t("landing.subtitle") }</p>
                        <button type="button" class="btn btn-primary" onclick={get_started}>
                            { t("landing.cta") }
                        </button>
                    </div>
                </div>
            </section>
            <section aria-labelledby="features-heading">
                <h2 id="features-heading" class="mb-6 text-center text-2xl font-semibold">
                    { t("landing.features_title") }
                </h2>
                <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-4">
                    { for FEATURES.iter().map(|(group, glyph)| html! {
                        <Card
                            title={AttrValue::from(t(&format!("landing.features.{group}.title")))}
                            icon={AttrValue::from(*glyph)}
                        >
                            <p>{ t(&format!("landing.features.{group}.body")) }</p>
                        </Card>
                    }) }
                </div>
            </section>
        </div>
    }
}
