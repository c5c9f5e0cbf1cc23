use crate::i18n::t;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer footer-center p-4 text-sm text-base-content/60">
            { t("footer.copyright") }
        </footer>
    }
}
