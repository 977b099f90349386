//! Left sidebar: own avatar, search box, tabs and the conversation list

pub mod conversation_list;

use dioxus::prelude::*;

use crate::app::AppState;
use crate::chat::ChatTab;
use crate::storage::demo::SELF_AVATAR;
use crate::ui::chat::message::Avatar;
use conversation_list::ConversationList;

#[component]
pub fn Sidebar() -> Element {
    let app_state = use_context::<AppState>();
    let mut filter = app_state.filter;
    let mut show_profile = app_state.show_profile;

    let initials = app_state.settings.read().user_initials.clone();
    let query = filter.read().query.clone();
    let active_tab = filter.read().tab;

    rsx! {
        div { class: "sidebar",
            div { class: "sidebar-header",
                div { class: "sidebar-top",
                    div {
                        class: "clickable",
                        onclick: move |_| show_profile.set(true),
                        Avatar { src: SELF_AVATAR, fallback: initials }
                    }
                    div { class: "sidebar-actions",
                        button { class: "icon-button", title: "New chat", "+" }
                        button { class: "icon-button", title: "Settings", "⚙" }
                    }
                }
                input {
                    class: "search",
                    r#type: "search",
                    placeholder: "Search chats",
                    value: "{query}",
                    oninput: move |evt| filter.write().query = evt.value(),
                }
            }

            div { class: "tabs",
                for tab in ChatTab::TABS {
                    TabButton {
                        key: "{tab:?}",
                        active: tab == active_tab,
                        onclick: move |_| filter.write().tab = tab,
                        label: tab.label(),
                    }
                }
            }

            ConversationList {}
        }
    }
}

#[component]
fn TabButton(active: bool, onclick: EventHandler<MouseEvent>, label: String) -> Element {
    let classes = if active { "tab active" } else { "tab" };

    rsx! {
        button {
            class: "{classes}",
            onclick: onclick,
            "{label}"
        }
    }
}
