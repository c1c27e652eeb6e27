//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `NavBar`: logo, result counter and the themed bar background
//! - `ModeToggle`: light/dark indicator
//! - `CountryRow`: one result, summary plus optional facts panel
//! - `Loader`, `ErrorMessage`: status lines
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `SearchBox`: the search field, emits the full text on every edit
//! - `CountryList`: scrollable rows with per-row expansion
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props" (struct fields), not by
//! reaching into `App`. The palette reaches components the same way, as a
//! `Style` prop, so no component knows which appearance is active.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── nav_bar.rs       (Top bar and its slot layout)
//! ├── search_box.rs    (Search field)
//! ├── mode_toggle.rs   (Light/dark indicator)
//! ├── country_row.rs   (Single result renderer)
//! ├── country_list.rs  (Scrollable result container)
//! └── status.rs        (Loader and error line)
//! ```

pub mod country_list;
pub mod country_row;
mod mode_toggle;
pub mod nav_bar;
pub mod search_box;
mod status;

pub use country_list::{CountryList, CountryListState};
pub use mode_toggle::ModeToggle;
pub use nav_bar::{NAV_HEIGHT, NavBar, NavLayout};
pub use search_box::{SearchBox, SearchEvent};
pub use status::{ErrorMessage, Loader};
