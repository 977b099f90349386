//! UI components for Companion Chat
//!
//! This module contains all user interface components built with Dioxus.

pub mod chat;
pub mod components;
pub mod login;
pub mod profile;
pub mod sidebar;

use dioxus::prelude::*;

use crate::app::{AppState, Screen};
use chat::ChatView;
use components::toast::ToastHost;
use login::LoginScreen;
use profile::ProfilePanel;
use sidebar::Sidebar;

const STYLE: &str = r#"
:root { --bg: #0f1115; --bg-elevated: #181b22; --border: #262a33; --text: #eceff4; --muted: #8b93a1; --primary: #6d8cff; --secondary: #222631; --online: #22c55e; --error: #ef4444; }
.light { --bg: #ffffff; --bg-elevated: #f5f6f8; --border: #e4e6eb; --text: #111318; --muted: #6b7280; --secondary: #eef0f4; }
* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, sans-serif; }
.app { display: flex; height: 100vh; background: var(--bg); color: var(--text); overflow: hidden; position: relative; }
.muted { color: var(--muted); }
.small { font-size: 12px; }
.center { text-align: center; }
.truncate { overflow: hidden; white-space: nowrap; text-overflow: ellipsis; max-width: 140px; }
.clickable { cursor: pointer; }
button { font: inherit; color: inherit; }
.icon-button { background: none; border: none; padding: 6px; border-radius: 8px; cursor: pointer; }
.icon-button:hover { background: var(--secondary); }
.avatar { position: relative; width: 40px; height: 40px; border-radius: 50%; overflow: hidden; background: var(--secondary); display: flex; align-items: center; justify-content: center; flex-shrink: 0; }
.avatar.small { width: 32px; height: 32px; font-size: 12px; }
.avatar-image { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; }
.presence-holder { position: relative; }
.online-dot { position: absolute; right: 0; bottom: 0; width: 12px; height: 12px; border-radius: 50%; background: var(--online); border: 2px solid var(--bg); }
.badge { font-size: 11px; padding: 2px 6px; border-radius: 999px; background: rgba(109,140,255,0.12); color: var(--primary); margin-left: 6px; }
.sidebar { width: 320px; border-right: 1px solid var(--border); display: flex; flex-direction: column; }
.sidebar-header { padding: 16px; border-bottom: 1px solid var(--border); display: flex; flex-direction: column; gap: 12px; }
.sidebar-top { display: flex; justify-content: space-between; align-items: center; }
.search { width: 100%; padding: 8px 10px; border-radius: 8px; border: 1px solid var(--border); background: var(--bg-elevated); color: var(--text); }
.tabs { display: grid; grid-template-columns: repeat(3, 1fr); gap: 4px; padding: 8px; }
.tab { padding: 6px; border-radius: 8px; border: none; background: none; cursor: pointer; color: var(--muted); }
.tab.active { background: var(--secondary); color: var(--text); }
.conversation-list { flex: 1; overflow-y: auto; padding: 8px; }
.conversation-empty { padding: 24px; text-align: center; color: var(--muted); }
.conversation-row { width: 100%; display: flex; align-items: center; gap: 12px; padding: 12px; border-radius: 8px; border: none; background: none; cursor: pointer; text-align: left; }
.conversation-row:hover { background: var(--bg-elevated); }
.conversation-row.selected { background: var(--secondary); }
.conversation-text { flex: 1; min-width: 0; }
.conversation-line { display: flex; justify-content: space-between; align-items: center; }
.conversation-name { font-weight: 500; display: flex; align-items: center; }
.unread { background: var(--primary); color: white; font-size: 12px; border-radius: 999px; min-width: 20px; height: 20px; display: flex; align-items: center; justify-content: center; }
.chat-view { flex: 1; display: flex; flex-direction: column; min-width: 0; }
.chat-view.empty { align-items: center; justify-content: center; color: var(--muted); }
.chat-header { padding: 16px; border-bottom: 1px solid var(--border); display: flex; justify-content: space-between; align-items: center; }
.chat-header-who { display: flex; align-items: center; gap: 12px; }
.chat-title { display: flex; align-items: center; }
.chat-title h2 { font-size: 16px; margin: 0; }
.chat-header p { margin: 2px 0 0; font-size: 13px; }
.message-list { flex: 1; overflow-y: auto; padding: 16px; display: flex; flex-direction: column; gap: 16px; scroll-behavior: smooth; }
.message-row { display: flex; gap: 12px; max-width: 80%; }
.message-row.mine { margin-left: auto; flex-direction: row-reverse; }
.bubble { border-radius: 10px; padding: 12px; }
.bubble.sent { background: var(--primary); color: white; }
.bubble.received { background: var(--secondary); }
.bubble-text { margin: 0; white-space: pre-wrap; }
.bubble-meta { display: flex; gap: 4px; margin-top: 4px; font-size: 12px; opacity: 0.7; }
.typing-indicator { display: flex; gap: 4px; padding: 8px 12px; }
.typing-indicator .dot { width: 6px; height: 6px; border-radius: 50%; background: var(--muted); animation: bounce 1s infinite; }
.typing-indicator .dot:nth-child(2) { animation-delay: 0.15s; }
.typing-indicator .dot:nth-child(3) { animation-delay: 0.3s; }
@keyframes bounce { 0%, 100% { transform: translateY(0); } 50% { transform: translateY(-4px); } }
.composer { display: flex; align-items: flex-end; gap: 8px; padding: 16px; border-top: 1px solid var(--border); }
.composer-input { flex: 1; resize: none; padding: 10px 12px; border-radius: 8px; border: 1px solid var(--border); background: var(--bg-elevated); color: var(--text); font: inherit; }
.send-button { padding: 10px 20px; border-radius: 8px; border: none; background: var(--primary); color: white; cursor: pointer; }
.send-button.disabled { opacity: 0.4; cursor: not-allowed; }
.profile-panel { position: absolute; top: 0; right: 0; bottom: 0; width: 320px; background: var(--bg); border-left: 1px solid var(--border); transform: translateX(100%); transition: transform 200ms ease-in-out; display: flex; flex-direction: column; }
.profile-panel.open { transform: translateX(0); }
.profile-header { padding: 16px; border-bottom: 1px solid var(--border); display: flex; justify-content: space-between; align-items: center; }
.profile-header h2 { font-size: 16px; margin: 0; }
.profile-body { flex: 1; overflow-y: auto; padding: 0 24px 24px; }
.profile-identity { padding: 24px 0; display: flex; flex-direction: column; align-items: center; }
.profile-identity .avatar { width: 96px; height: 96px; margin-bottom: 16px; }
.profile-identity h3 { margin: 0; }
.profile-facts { display: flex; flex-direction: column; gap: 12px; font-size: 14px; margin: 16px 0; }
hr { border: none; border-top: 1px solid var(--border); margin: 16px 0; }
.chips { display: flex; flex-wrap: wrap; gap: 8px; }
.chip { padding: 4px 12px; border-radius: 999px; background: var(--secondary); font-size: 14px; }
.profile-footer { padding: 16px; border-top: 1px solid var(--border); }
.outline-button { width: 100%; padding: 8px; border-radius: 8px; border: 1px solid var(--border); background: none; cursor: pointer; }
.login { margin: auto; width: 100%; max-width: 380px; padding: 16px; display: flex; flex-direction: column; gap: 32px; }
.login-heading { text-align: center; }
.login-logo { display: inline-block; padding: 16px; border-radius: 10px; background: rgba(109,140,255,0.12); font-size: 28px; }
.login-heading h1 { font-size: 30px; margin: 12px 0 4px; }
.login-form { display: flex; flex-direction: column; gap: 8px; }
.login-form input { padding: 9px 10px; border-radius: 8px; border: 1px solid var(--border); background: var(--bg-elevated); color: var(--text); }
.field-error { color: var(--error); font-size: 13px; margin: 0; }
.primary-button { margin-top: 8px; padding: 10px; border-radius: 8px; border: none; background: var(--primary); color: white; cursor: pointer; }
.link-button { background: none; border: none; padding: 0; color: var(--primary); cursor: pointer; }
.toast { position: absolute; bottom: 24px; left: 50%; transform: translateX(-50%); padding: 10px 16px; border-radius: 8px; background: var(--bg-elevated); border: 1px solid var(--border); cursor: pointer; }
.toast.success { border-color: var(--online); }
"#;

/// Root layout: login screen first, then sidebar, thread and profile panel
#[component]
pub fn Layout() -> Element {
    let app_state = use_context::<AppState>();
    let theme = app_state.settings.read().theme.clone();

    rsx! {
        style { "{STYLE}" }
        div { class: "app {theme}",
            match (app_state.screen)() {
                Screen::Login => rsx! { LoginScreen {} },
                Screen::Chat => rsx! {
                    Sidebar {}
                    ChatView {}
                    ProfilePanel {}
                },
            }
            ToastHost {}
        }
    }
}
