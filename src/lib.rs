//! Activity dashboard core: intensity levels, streaks, language ranking,
//! calendar layout and pie rasterization, plus the sources, cache and
//! terminal front ends built on top of them.

pub mod cache;
pub mod calendar;
pub mod cli;
pub mod dashboard;
pub mod error;
pub mod languages;
pub mod level;
pub mod logging;
pub mod model;
pub mod output;
pub mod pie;
pub mod source;
pub mod streak;
pub mod theme;
pub mod tui;

pub use error::{AuraError, Result};
