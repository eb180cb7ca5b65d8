//! Reusable TUI widget components for the Waitline widget.
//!
//! This module contains custom widgets built on top of [`ratatui`] that
//! provide the visual components of the landing page and signup modal. Each
//! widget is self-contained and implements ratatui's [`Widget`] trait.
//!
//! # Widget Catalog
//!
//! ## Landing Page
//! - [`hero`]: headline, tagline, and call-to-action hint
//! - [`stats_card`]: live signup counter with refreshed-at line
//!
//! ## Signup Flow
//! - [`signup_form`]: modal form (email, website, submit, inline message)
//!   and the local email validation it shares with the state machine
//!
//! # Design Principles
//!
//! - Widgets are stateless; state lives in the App
//! - Each widget handles its own layout within its allocated area
//! - Styling goes through the shared [`crate::tui::app::Theme`]
//! - Layouts degrade rather than panic on small terminals
//!
//! [`Widget`]: ratatui::widgets::Widget

pub mod hero;
pub mod signup_form;
pub mod stats_card;

pub use hero::{hero_height, HeroWidget};
pub use signup_form::{submit_label, validate_email, SignupFormWidget};
pub use stats_card::{StatsCardWidget, STATS_CARD_HEIGHT};
