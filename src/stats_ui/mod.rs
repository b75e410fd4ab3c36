// src/stats_ui/mod.rs - Terminal rendering of stats tables

pub mod colors;
pub mod core;
pub mod formatting;

pub use core::*;
