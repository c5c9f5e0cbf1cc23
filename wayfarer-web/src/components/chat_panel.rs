use crate::components::daisy_ui::{Chat, ChatPosition, Input};
use crate::i18n::t;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wayfarer_planner::{ChatConfig, ChatMessage, ChatSession};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub config: ChatConfig,
    pub on_close: Callback<()>,
}

fn message_item(message: &ChatMessage) -> Html {
    let (author, position) = if message.is_user() {
        (t("chat.you"), ChatPosition::End)
    } else {
        (t("chat.assistant"), ChatPosition::Start)
    };
    html! {
        <Chat
            author={AttrValue::from(author)}
            message={AttrValue::from(message.text.clone())}
            position={position}
        />
    }
}

/// Reply timers still waiting to fire, each paired with its fired flag.
struct ReplyTimers<T> {
    entries: Vec<(Rc<Cell<bool>>, T)>,
}

impl<T> Default for ReplyTimers<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> ReplyTimers<T> {
    /// Keep `timer` until its flag is set; fired timers are dropped here.
    fn track(&mut self, timer: T, fired: Rc<Cell<bool>>) {
        self.prune();
        self.entries.push((fired, timer));
    }

    fn prune(&mut self) {
        self.entries.retain(|(fired, _)| !fired.get());
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Queue a reply for `text`. Whitespace-only input is ignored.
fn send(
    session: &Rc<RefCell<ChatSession>>,
    timers: &Rc<RefCell<ReplyTimers<crate::dom::Timeout>>>,
    refresh: &Callback<()>,
    text: &str,
) {
    let Some(ticket) = session.borrow_mut().submit(text) else {
        return;
    };
    log::info!("chat message queued, {} reply pending", session.borrow().pending());
    refresh.emit(());
    let delay = session.borrow().reply_delay_ms();
    let fired = Rc::new(Cell::new(false));
    let deliver = {
        let session = Rc::clone(session);
        let refresh = refresh.clone();
        let fired = Rc::clone(&fired);
        move || {
            fired.set(true);
            if session.borrow_mut().deliver(ticket) {
                refresh.emit(());
            }
        }
    };
    match crate::dom::Timeout::schedule(delay, deliver) {
        Ok(timer) => timers.borrow_mut().track(timer, fired),
        Err(err) => {
            log::warn!(
                "could not schedule chat reply: {}",
                crate::dom::js_error_message(&err)
            );
        }
    }
}

/// Assistant overlay. Replies land after the configured delay; closing the
/// panel cancels anything still pending.
#[function_component(ChatPanel)]
pub fn chat_panel(p: &Props) -> Html {
    let session = {
        let cfg = p.config.clone();
        use_mut_ref(move || ChatSession::new(&cfg))
    };
    let timers = use_mut_ref(ReplyTimers::<crate::dom::Timeout>::default);
    let draft = use_state(String::new);
    let update = use_force_update();
    let refresh = Callback::from(move |()| update.force_update());

    {
        let session = session.clone();
        let timers = timers.clone();
        use_effect_with((), move |_| {
            move || {
                session.borrow_mut().cancel_pending();
                timers.borrow_mut().clear();
            }
        });
    }

    let submit = {
        let session = session.clone();
        let timers = timers.clone();
        let draft = draft.clone();
        let refresh = refresh.clone();
        Callback::from(move |()| {
            send(&session, &timers, &refresh, &draft);
            draft.set(String::new());
        })
    };
    let on_input = {
        let draft = draft.clone();
        Callback::from(move |value: String| draft.set(value))
    };
    let on_send_click = {
        let submit = submit.clone();
        Callback::from(move |_: MouseEvent| submit.emit(()))
    };
    let on_close = {
        let cb = p.on_close.clone();
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            session.borrow_mut().cancel_pending();
            cb.emit(());
        })
    };

    let log_view = {
        let current = session.borrow();
        if current.messages().is_empty() {
            html! { <p class="text-sm text-base-content/60">{ t("chat.empty") }</p> }
        } else {
            html! { <>{ for current.messages().iter().map(message_item) }</> }
        }
    };

    html! {
        <aside class="chat-panel fixed bottom-4 right-4 z-40 w-80 card bg-base-100 shadow-xl" aria-label={t("chat.title")}>
            <header class="flex items-center justify-between border-b border-base-300 p-3">
                <h3 class="font-semibold">{ t("chat.title") }</h3>
                <button type="button" class="btn btn-ghost btn-sm" aria-label={t("chat.close")} onclick={on_close}>
                    { "✕" }
                </button>
            </header>
            <div class="h-72 overflow-y-auto p-3" role="list" aria-live="polite">
                { log_view }
            </div>
            <div class="flex gap-2 border-t border-base-300 p-3">
                <Input
                    id={AttrValue::from("chat-input")}
                    value={AttrValue::from((*draft).clone())}
                    placeholder={AttrValue::from(t("chat.placeholder"))}
                    class={classes!("input-sm")}
                    oninput={on_input}
                    on_enter={submit}
                />
                <button type="button" class="btn btn-primary btn-sm" onclick={on_send_click}>
                    { t("chat.send") }
                </button>
            </div>
        </aside>
    }
}
