// src/lib.rs

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod file;
pub mod input;
pub mod log;
pub mod progress;
pub mod records;
pub mod scrape;

pub use error::{Error, Result};
