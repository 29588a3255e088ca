// ABOUTME: User profile display types for the profile and author screens
// ABOUTME: UserProfile details plus the read-only PublicUser view of another account
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::Units;

/// Profile details attached to an account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Name shown in the app
    #[serde(default)]
    pub display_name: String,
    /// Short biography
    #[serde(default)]
    pub bio: String,
    /// Avatar image
    #[serde(default)]
    pub avatar: Option<String>,
    /// Birth date
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    /// Height in centimeters
    #[serde(default)]
    pub height_cm: Option<u32>,
    /// Weight in kilograms
    #[serde(default)]
    pub weight_kg: Option<f64>,
    /// Preferred measurement system
    #[serde(default)]
    pub units: Units,
    /// Verified coach badge
    #[serde(default)]
    pub is_verified: bool,
}

/// Read-only view of another user's account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicUser {
    /// Backend identifier
    pub id: i64,
    /// Unique handle
    pub username: String,
    /// First name
    #[serde(default)]
    pub first_name: String,
    /// Last name
    #[serde(default)]
    pub last_name: String,
    /// Profile details
    #[serde(default)]
    pub profile: Option<UserProfile>,
    /// Followers
    #[serde(default)]
    pub followers_count: u32,
    /// Accounts followed
    #[serde(default)]
    pub following_count: u32,
    /// Programs authored
    #[serde(default)]
    pub programs_count: u32,
}

impl PublicUser {
    /// Best name to show: profile display name, then full name, then username
    #[must_use]
    pub fn display_name(&self) -> String {
        if let Some(name) = self
            .profile
            .as_ref()
            .map(|p| p.display_name.trim())
            .filter(|n| !n.is_empty())
        {
            return name.to_owned();
        }
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_owned()
        }
    }
}
