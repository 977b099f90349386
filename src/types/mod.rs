//! Shared type definitions
//!
//! This module contains all shared data types used across the application.

pub mod conversation;
pub mod message;
pub mod profile;
