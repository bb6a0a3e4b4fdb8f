//! # Commands
//!
//! One module per menu entry.
//!
//! ## Menu
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "1" ──► add_record::run     prompt code → quantity → method, repeat;  │
//! │                              "END" lists records and the total         │
//! │                                                                         │
//! │  "2" ──► search_record::run  one keyword, aggregated results           │
//! │                                                                         │
//! │  "3" ──► exit                                                           │
//! │                                                                         │
//! │  anything else ──► "Incorrect selection!"                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod add_record;
pub mod search_record;

/// What the menu loop does after a command returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Show the menu again.
    Continue,
    /// Input ended; leave the shell.
    Exit,
}

/// A parsed menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuSelection {
    AddRecord,
    SearchRecord,
    Exit,
}

impl MenuSelection {
    /// Exact match on `1`, `2` or `3`.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(MenuSelection::AddRecord),
            "2" => Some(MenuSelection::SearchRecord),
            "3" => Some(MenuSelection::Exit),
            _ => None,
        }
    }
}
