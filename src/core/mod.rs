//! # Core Application Logic
//!
//! This module contains Treasure Hunter's session logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (session data) │
//!                    │  • Selection (favorites)│
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                 ┌──────────────┴──────────────┐
//!                 ▼                             ▼
//!          ┌────────────┐                ┌────────────┐
//!          │    TUI     │                │   lookup   │
//!          │  Adapter   │ ── Effect ──▶  │ (countries,│
//!          │ (ratatui)  │ ◀── Action ──  │   gems)    │
//!          └────────────┘                └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all session state in one place
//! - [`selection`]: The `SelectionState` machine (current country, favorites, welcome)
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: Settings resolution

pub mod action;
pub mod config;
pub mod selection;
pub mod state;
