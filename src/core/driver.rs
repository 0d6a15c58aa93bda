// src/core/driver.rs
//! The page-loading capability the scraper is written against.
//!
//! A loader is one long-lived browser page. The scraper only ever asks it to
//! go somewhere, wait for something, list matches and read their text, so
//! tests can stand in a scripted fake for the real WebDriver session
//! (see `core::webdriver`).

use std::time::Duration;

use crate::error::DriverError;

/// A rendered element whose visible text can be read.
pub trait ElementHandle {
    fn text(&self) -> Result<String, DriverError>;
}

pub trait PageLoader {
    type Element: ElementHandle;

    /// Load `url` in the current page.
    fn navigate(&mut self, url: &str) -> Result<(), DriverError>;

    /// Block until an element matching the CSS `selector` is present, or fail
    /// with [`DriverError::Timeout`] once `timeout` has passed.
    fn wait_for_element(&mut self, selector: &str, timeout: Duration) -> Result<Self::Element, DriverError>;

    /// All elements currently matching `selector`, in document order.
    fn find_elements(&mut self, selector: &str) -> Result<Vec<Self::Element>, DriverError>;

    /// Tear the session down. Calling it again is a no-op.
    fn close(&mut self) -> Result<(), DriverError>;
}
