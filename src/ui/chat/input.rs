//! Chat input component - rounded text box with the send button inside

use dioxus::prelude::*;

/// Estimate how many rows the textarea needs based on content
fn compute_rows(text: &str) -> usize {
    let newlines = text.chars().filter(|&c| c == '\n').count();
    // Each visual line ~ 70 chars for our input width
    let wrap_lines: usize = text
        .lines()
        .map(|line| line.chars().count().saturating_sub(1) / 70)
        .sum();
    (newlines + wrap_lines + 1).clamp(1, 6)
}

#[component]
pub fn ChatInput(
    draft: String,
    can_send: bool,
    on_input: EventHandler<String>,
    on_send: EventHandler<()>,
) -> Element {
    let handle_keydown = move |evt: KeyboardEvent| {
        if evt.key() == Key::Enter && !evt.modifiers().contains(Modifiers::SHIFT) {
            evt.prevent_default();
            if can_send {
                on_send.call(());
            }
        }
    };

    let rows = compute_rows(&draft).to_string();
    let send_class = if can_send { "send-button" } else { "send-button disabled" };

    rsx! {
        div { class: "composer",
            button { class: "icon-button", title: "Attach file", "📎" }
            button { class: "icon-button", title: "Send image", "🖼" }
            button { class: "icon-button", title: "Emoji", "☺" }

            textarea {
                class: "composer-input",
                placeholder: "Type a message",
                value: "{draft}",
                rows: "{rows}",
                oninput: move |evt| on_input.call(evt.value()),
                onkeydown: handle_keydown,
            }

            button {
                class: "{send_class}",
                disabled: !can_send,
                title: "Send (Enter)",
                onclick: move |_| {
                    if can_send {
                        on_send.call(());
                    }
                },
                svg {
                    width: "16",
                    height: "16",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    line { x1: "22", y1: "2", x2: "11", y2: "13" }
                    polygon { points: "22 2 15 22 11 13 2 9 22 2" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_rows() {
        assert_eq!(compute_rows(""), 1);
        assert_eq!(compute_rows("hello"), 1);
        assert_eq!(compute_rows("one\ntwo\nthree"), 3);
        assert_eq!(compute_rows(&"x".repeat(150)), 3);
        assert_eq!(compute_rows(&"\n".repeat(20)), 6);
    }
}
