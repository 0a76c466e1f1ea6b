//! Terminal and NDJSON presentation for the CLI.
//!
//! `theme` holds the design tokens, `primitives` and `widgets` render
//! them, `blocks` compose widgets into reusable sections and `views`
//! turn library results into complete command output.

pub mod blocks;
pub mod context;
pub mod error;
pub mod json;
pub mod output;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
