use crate::components::daisy_ui::{Rating, Textarea};
use crate::i18n::t;
use wayfarer_planner::{FeedbackForm, FeedbackOutcome};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FeedbackPageProps {
    #[prop_or_default]
    pub initial: FeedbackForm,
    /// Both submit and cancel report where to go next.
    pub on_done: Callback<FeedbackOutcome>,
}

#[function_component(FeedbackPage)]
pub fn feedback_page(props: &FeedbackPageProps) -> Html {
    let form = {
        let initial = props.initial.clone();
        use_state(move || initial)
    };
    let on_rate = {
        let form = form.clone();
        Callback::from(move |stars: u8| {
            let mut next = (*form).clone();
            next.set_rating(stars);
            form.set(next);
        })
    };
    let on_comment = {
        let form = form.clone();
        Callback::from(move |text: String| {
            let mut next = (*form).clone();
            next.set_comment(text);
            form.set(next);
        })
    };
    let on_submit = {
        let form = form.clone();
        let cb = props.on_done.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            log::info!("feedback submitted with {} stars", form.rating);
            cb.emit(form.submit());
        })
    };
    let on_cancel = {
        let form = form.clone();
        let cb = props.on_done.clone();
        Callback::from(move |_: MouseEvent| cb.emit(form.cancel()))
    };

    html! {
        <section class="mx-auto max-w-xl" data-testid="feedback">
            <h1 class="mb-6 text-3xl font-bold">{ t("feedback.title") }</h1>
            <form class="flex flex-col gap-4" onsubmit={on_submit}>
                <div class="form-control">
                    <span class="label-text">{ t("feedback.rate") }</span>
                    <Rating
                        value={form.rating}
                        label={AttrValue::from(t("feedback.rate"))}
                        on_change={on_rate}
                    />
                </div>
                <label class="form-control">
                    <span class="label-text">{ t("feedback.comment") }</span>
                    <Textarea
                        id={AttrValue::from("feedback-comment")}
                        value={AttrValue::from(form.comment.clone())}
                        placeholder={AttrValue::from(t("feedback.placeholder"))}
                        oninput={on_comment}
                    />
                </label>
                <div class="flex justify-end gap-2">
                    <button type="button" class="btn btn-ghost" onclick={on_cancel}>
                        { t("feedback.cancel") }
                    </button>
                    <button type="submit" class="btn btn-primary">
                        { t("feedback.submit") }
                    </button>
                </div>
            </form>
        </section>
    }
}
