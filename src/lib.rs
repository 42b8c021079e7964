// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod persistence;
pub mod preprocess;
pub mod ranking;

pub use crate::core::engine::{LogOddsEngine, LogOddsRun};
pub use crate::core::result::LogOddsResult;
pub use crate::core::types::{Granularity, Label, Token};
pub use crate::core::warning::{DegenerateCounts, DegenerateKind};
pub use crate::error::{LogOddsError, Result};
pub use crate::persistence::ResultStore;
pub use crate::ranking::top_tokens;
