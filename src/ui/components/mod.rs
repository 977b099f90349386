//! Shared UI components

pub mod toast;
