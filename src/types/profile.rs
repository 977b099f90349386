//! Profile types

use serde::{Deserialize, Serialize};

/// Biographical fields shown in the profile panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// Short role line under the name
    pub headline: String,
    pub avatar: String,
    pub initials: String,
    pub about: String,
    pub email: String,
    pub location: String,
    /// e.g. "Created March 2024"
    pub created: String,
    /// Handle of the linked human account, if any
    pub connected_to: Option<String>,
    pub traits: Vec<String>,
    pub interests: Vec<String>,
}
