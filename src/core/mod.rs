// src/core/mod.rs

pub mod corpus;
pub mod engine;
pub mod frequency;
pub mod odds;
pub mod progress;
pub mod result;
pub mod types;
pub mod warning;
