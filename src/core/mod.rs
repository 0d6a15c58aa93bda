// src/core/mod.rs

pub mod driver;
pub mod sanitize;
pub mod webdriver;

pub use driver::{ElementHandle, PageLoader};
