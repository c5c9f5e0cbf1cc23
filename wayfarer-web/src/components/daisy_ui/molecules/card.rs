use crate::components::daisy_ui::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct CardProps {
    #[prop_or_default]
    pub title: Option<f::AttrValue>,
    #[prop_or_default]
    pub subtitle: Option<f::AttrValue>,
    /// Small leading glyph shown before the title.
    #[prop_or_default]
    pub icon: Option<f::AttrValue>,
    #[prop_or_default]
    pub actions: Option<f::Html>,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub children: f::Children,
}

#[f::function_component(Card)]
pub fn card(props: &CardProps) -> f::Html {
    let class = f::class_list(&["card", "bg-base-100", "shadow"], &props.class);
    let heading = props.title.as_ref().map(|title| {
        f::html! {
            <header class="card-title flex items-center justify-between gap-2 px-6 pt-4">
                <h3 class="flex items-center gap-2">
                    { props.icon.as_ref().map(|icon| f::html! {
                        <span aria-hidden="true">{ icon.clone() }</span>
                    }).unwrap_or_default() }
                    { title.clone() }
                </h3>
                { props.subtitle.as_ref().map(|sub| f::html! {
                    <p class="text-sm font-normal text-base-content/60">{ sub.clone() }</p>
                }).unwrap_or_default() }
            </header>
        }
    });
    f::html! {
        <article class={class}>
            { heading.unwrap_or_default() }
            <div class="card-body">
                { for props.children.iter() }
            </div>
            { props.actions.clone().map(|actions| f::html! {
                <footer class="card-actions justify-end px-6 pb-4">{ actions }</footer>
            }).unwrap_or_default() }
        </article>
    }
}
