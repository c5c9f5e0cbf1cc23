use crate::components::daisy_ui::foundation as f;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatPosition {
    #[default]
    Start,
    End,
}

#[derive(f::Properties, PartialEq, Clone)]
pub struct ChatProps {
    pub author: f::AttrValue,
    pub message: f::AttrValue,
    #[prop_or_default]
    pub position: ChatPosition,
    #[prop_or_default]
    pub class: f::Classes,
}

/// One chat bubble; the user's own messages sit on the end side.
#[f::function_component(Chat)]
pub fn chat(props: &ChatProps) -> f::Html {
    let mut class = f::class_list(&["chat"], &props.class);
    let bubble = match props.position {
        ChatPosition::Start => {
            class.push("chat-start");
            "chat-bubble"
        }
        ChatPosition::End => {
            class.push("chat-end");
            "chat-bubble chat-bubble-primary"
        }
    };
    f::html! {
        <div class={class} role="listitem">
            <div class="chat-header text-xs opacity-70">{ props.author.clone() }</div>
            <div class={bubble}>{ props.message.clone() }</div>
        </div>
    }
}
