//! Shared UI for the web, desktop and mobile shells.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

mod token_store;
pub use token_store::{current_token_store, load_app_config, make_token_store, PlatformStore};

mod auth;
pub use auth::{
    sign_in, sign_out, use_api, use_app_config, use_auth, use_error_reporter, AuthProvider,
    AuthState, ErrorReporter,
};

pub mod alerts;
pub use alerts::{show_alert, use_alerts, AlertHost, AlertLevel, AlertQueue};

mod screen;
pub use screen::{AuthScreen, Screen};

mod drawer;
pub use drawer::Drawer;

pub mod chart;
pub use chart::LineChart;
