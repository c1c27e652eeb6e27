//! # Appearance
//!
//! Light/dark mode as a set of style overrides for four screen regions.
//! Light applies no overrides at all, so switching back from dark leaves
//! the terminal's own colours untouched.
//!
//! ```text
//! Region      Dark override
//! ─────────   ──────────────────────────
//! page        bg #212529, fg cyan
//! nav_bar     bg #6741d9
//! search      bg #7950f2
//! indicator   fg cyan, knob on the right
//! ```

use ratatui::style::{Color, Style};

/// Process-wide light/dark flag. Always starts light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl Appearance {
    pub fn toggled(self) -> Self {
        match self {
            Appearance::Light => Appearance::Dark,
            Appearance::Dark => Appearance::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Appearance::Dark
    }

    pub fn palette(self) -> Palette {
        match self {
            Appearance::Light => Palette::plain(),
            Appearance::Dark => Palette::dark(),
        }
    }
}

const PAGE_BG: Color = Color::Rgb(0x21, 0x25, 0x29);
const NAV_BG: Color = Color::Rgb(0x67, 0x41, 0xd9);
const SEARCH_BG: Color = Color::Rgb(0x79, 0x50, 0xf2);
const ACCENT: Color = Color::Cyan;

/// Style overrides for the four themed regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub page: Style,
    pub nav_bar: Style,
    pub search: Style,
    pub indicator: Style,
}

impl Palette {
    /// No overrides anywhere.
    pub const fn plain() -> Self {
        Self {
            page: Style::new(),
            nav_bar: Style::new(),
            search: Style::new(),
            indicator: Style::new(),
        }
    }

    pub const fn dark() -> Self {
        Self {
            page: Style::new().bg(PAGE_BG).fg(ACCENT),
            nav_bar: Style::new().bg(NAV_BG),
            search: Style::new().bg(SEARCH_BG),
            indicator: Style::new().fg(ACCENT),
        }
    }
}
