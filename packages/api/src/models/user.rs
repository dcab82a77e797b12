//! # User profile
//!
//! [`UserProfile`] is what `GET /user/me` and `PUT /user/me` return. The
//! client reads `name`, `email`, `weight` (kg) and `height` (cm); the email
//! is never sent back. [`ProfileUpdate`] is the `PUT` body.
//!
//! The backend also computes a `bmi` column, serialised as a decimal string;
//! the client ignores it and derives BMI locally via [`crate::bmi`].

use serde::{Deserialize, Serialize};

use crate::bmi::{compute_bmi, BmiCategory};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default, rename = "createdAt", alias = "created_at")]
    pub created_at: Option<String>,
}

impl UserProfile {
    /// BMI rounded to one decimal, or `None` while weight/height are unset.
    pub fn bmi(&self) -> Option<f64> {
        compute_bmi(self.weight?, self.height?)
    }

    pub fn bmi_category(&self) -> Option<BmiCategory> {
        self.bmi().map(BmiCategory::from_bmi)
    }

    /// First letter of the name for the avatar bubble.
    pub fn initial(&self) -> String {
        self.name
            .trim()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "?".to_string())
    }
}

/// `PUT /user/me` body.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProfileUpdate {
    pub name: String,
    pub weight: f64,
    pub height: f64,
}
