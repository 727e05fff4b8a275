//! Leptos components shared across pages.

pub mod chart_host;
pub mod feature_card;
pub mod issue_form;
pub mod map_host;
pub mod navbar;
pub mod notification;
pub mod poll_card;
pub mod tracking_card;
