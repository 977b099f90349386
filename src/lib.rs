//! Companion Chat Library
//!
//! Core library for the Companion Chat desktop demo.

pub mod app;
pub mod auth;
pub mod chat;
pub mod reply;
pub mod storage;
pub mod types;
pub mod ui;
