//! vitalscope: progressive-disclosure health assessment dashboard.
//!
//! A mocked bioenergetic assessment is presented in three layers
//! (snapshot, insights, comprehensive). The [`navigator`] module holds the
//! session state machine; [`dashboard`] hosts it behind typed commands and
//! [`render`] draws each layer as text.

pub mod assessment;
pub mod config;
pub mod dashboard;
pub mod navigator;
pub mod render;
