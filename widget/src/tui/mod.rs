//! Terminal user interface for the Waitline widget.
//!
//! The TUI presents the waitlist landing page (hero + live counter) and the
//! modal signup form, built with [`ratatui`].
//!
//! # Architecture
//!
//! - **App** ([`app`]): state machine and event types (Model/Controller)
//! - **UI** ([`ui`]): layout and rendering (View)
//! - **Terminal** ([`terminal`]): raw-mode setup, teardown, panic handling
//! - **Widgets** ([`widgets`]): reusable UI components
//!
//! The main loop lives in the binary: it receives [`app::UiEvent`]s from an
//! [`app::EventHandler`] task and from spawned network tasks, mutates
//! [`app::AppState`], and redraws on ticks.

pub mod app;
pub mod terminal;
pub mod ui;
pub mod widgets;

pub use app::{AppState, EventHandler, UiEvent};
pub use terminal::{install_panic_hook, Tui};
