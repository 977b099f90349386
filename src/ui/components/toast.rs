//! Transient notification shown at the bottom of the window

use dioxus::prelude::*;
use tokio::time::{sleep, Duration};

use crate::app::AppState;
use crate::auth::ToastKind;

const TOAST_LIFETIME: Duration = Duration::from_secs(3);

#[component]
pub fn ToastHost() -> Element {
    let app_state = use_context::<AppState>();
    let mut toast = app_state.toast;

    // Dismiss each toast after a while, unless a newer one replaced it
    use_effect(move || {
        let Some(shown) = toast() else {
            return;
        };
        spawn(async move {
            sleep(TOAST_LIFETIME).await;
            if *toast.peek() == Some(shown) {
                toast.set(None);
            }
        });
    });

    let Some(current) = toast() else {
        return rsx! {};
    };
    let class = match current.kind {
        ToastKind::Success => "toast success",
    };

    rsx! {
        div {
            class: "{class}",
            onclick: move |_| toast.set(None),
            "{current.message}"
        }
    }
}
