//! # Core Application Logic
//!
//! This module contains globefacts' search logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (search data)  │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • facts (detail text)  │
//!                    │                         │
//!                    │  No network. No UI.     │
//!                    └───────────┬─────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │            │ countries  │
//!            │  Adapter   │            │ (HTTP +    │
//!            │ (ratatui)  │            │  dispatch) │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all search state in one place
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`facts`]: Detail panel text for one country
//! - [`format`]: Digit grouping and list joining
//! - [`config`]: Config file, env and CLI resolution

pub mod action;
pub mod config;
pub mod facts;
pub mod format;
pub mod state;
