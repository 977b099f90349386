//! Slide-in profile panel

use dioxus::prelude::*;

use crate::app::AppState;
use crate::ui::chat::message::Avatar;

#[component]
pub fn ProfilePanel() -> Element {
    let app_state = use_context::<AppState>();
    let mut show_profile = app_state.show_profile;
    let profile = app_state.profile.clone();

    let panel_class = if show_profile() {
        "profile-panel open"
    } else {
        "profile-panel"
    };

    rsx! {
        div { class: "{panel_class}",
            div { class: "profile-header",
                h2 { "Profile" }
                button {
                    class: "icon-button",
                    title: "Close",
                    onclick: move |_| show_profile.set(false),
                    "✕"
                }
            }

            div { class: "profile-body",
                div { class: "profile-identity",
                    Avatar { src: profile.avatar.clone(), fallback: profile.initials.clone() }
                    h3 { "{profile.name}" }
                    p { class: "muted", "{profile.headline}" }
                }

                section {
                    h4 { "About" }
                    p { class: "muted", "{profile.about}" }
                }

                section { class: "profile-facts",
                    div { "✉ {profile.email}" }
                    div { "⌖ {profile.location}" }
                    div { "▦ {profile.created}" }
                    if let Some(handle) = profile.connected_to.clone() {
                        div { "🔗 Connected to {handle}" }
                    }
                }

                hr {}

                section {
                    h4 { "Personality Traits" }
                    div { class: "chips",
                        for item in profile.traits.iter() {
                            span { key: "{item}", class: "chip", "{item}" }
                        }
                    }
                }

                hr {}

                section {
                    h4 { "Interests" }
                    div { class: "chips",
                        for item in profile.interests.iter() {
                            span { key: "{item}", class: "chip", "{item}" }
                        }
                    }
                }
            }

            div { class: "profile-footer",
                button { class: "outline-button", "Edit Profile" }
            }
        }
    }
}
