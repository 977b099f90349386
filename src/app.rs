//! Root Dioxus application component
//!
//! This module contains the main App component that serves as the root of the UI tree.

use std::sync::Arc;

use dioxus::prelude::*;

use crate::auth::Toast;
use crate::chat::{ChatDirectory, ConversationFilter};
use crate::reply::SimulatedReplyService;
use crate::storage::demo::demo_profile;
use crate::storage::settings::{load_settings, AppSettings};
use crate::types::profile::Profile;
use crate::ui::Layout;

/// Top level screens
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Screen {
    Login,
    Chat,
}

/// Application state shared across components through context
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<ChatDirectory>,
    pub profile: Arc<Profile>,
    pub settings: Signal<AppSettings>,
    pub screen: Signal<Screen>,
    /// Id of the conversation shown in the thread view
    pub selected_conversation: Signal<String>,
    /// Sidebar search text and tab
    pub filter: Signal<ConversationFilter>,
    pub show_profile: Signal<bool>,
    pub toast: Signal<Option<Toast>>,
}

impl AppState {
    pub fn new() -> Self {
        let settings = load_settings();
        let service = Arc::new(SimulatedReplyService::from_settings(&settings));
        let directory = ChatDirectory::demo(service);
        let selected = directory
            .default_conversation()
            .map(|c| c.id.clone())
            .unwrap_or_default();

        tracing::info!(
            conversations = directory.conversations().len(),
            reply_delay_ms = settings.reply_delay_ms,
            "AppState initialized"
        );

        Self {
            directory: Arc::new(directory),
            profile: Arc::new(demo_profile()),
            settings: Signal::new(settings),
            screen: Signal::new(Screen::Login),
            selected_conversation: Signal::new(selected),
            filter: Signal::new(ConversationFilter::default()),
            show_profile: Signal::new(false),
            toast: Signal::new(None),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn App() -> Element {
    use_context_provider(AppState::new);

    rsx! {
        Layout {}
    }
}
