// src/core/webdriver.rs
//! `PageLoader` backed by a W3C WebDriver server (geckodriver / chromedriver).
//!
//! thirtyfour is async; the session owns a current-thread tokio runtime and
//! blocks on every call, so callers stay single-threaded and sequential.

use std::rc::Rc;
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, info, warn};
use thirtyfour::prelude::*;
use thirtyfour::ChromiumLikeCapabilities;
use tokio::runtime::{Builder, Runtime};

use crate::config::consts::POLL_INTERVAL_MS;
use crate::config::options::{Browser, DriverOptions};
use crate::core::driver::{ElementHandle, PageLoader};
use crate::error::DriverError;

pub struct WebDriverSession {
    rt: Rc<Runtime>,
    driver: Option<WebDriver>,
    browser: Browser,
}

pub struct WebDriverElement {
    rt: Rc<Runtime>,
    element: WebElement,
}

/// Start a session for the selected browser only.
pub fn connect(opts: &DriverOptions) -> Result<WebDriverSession, DriverError> {
    let connect_err = |message: String| DriverError::Connect {
        browser: s!(opts.browser.as_str()),
        url: opts.webdriver_url.clone(),
        message,
    };

    let rt = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| connect_err(e.to_string()))?;

    let server = opts.webdriver_url.as_str();
    let started = match opts.browser {
        Browser::Firefox => {
            let mut caps = DesiredCapabilities::firefox();
            if opts.headless {
                caps.set_headless().map_err(|e| connect_err(e.to_string()))?;
            }
            rt.block_on(WebDriver::new(server, caps))
        }
        Browser::Chrome => {
            let mut caps = DesiredCapabilities::chrome();
            if opts.headless {
                caps.set_headless().map_err(|e| connect_err(e.to_string()))?;
            }
            rt.block_on(WebDriver::new(server, caps))
        }
    };
    let driver = started.map_err(|e| connect_err(e.to_string()))?;

    info!("{} session started at {} (headless: {})", opts.browser, server, opts.headless);
    Ok(WebDriverSession { rt: Rc::new(rt), driver: Some(driver), browser: opts.browser })
}

impl WebDriverSession {
    pub fn is_open(&self) -> bool { self.driver.is_some() }

    fn driver(&self) -> Result<&WebDriver, DriverError> {
        self.driver.as_ref().ok_or(DriverError::Closed)
    }

    fn wrap(&self, element: WebElement) -> WebDriverElement {
        WebDriverElement { rt: Rc::clone(&self.rt), element }
    }
}

impl PageLoader for WebDriverSession {
    type Element = WebDriverElement;

    fn navigate(&mut self, url: &str) -> Result<(), DriverError> {
        let driver = self.driver()?;
        debug!("goto {url}");
        self.rt
            .block_on(driver.goto(url))
            .map_err(|e| DriverError::Navigate { url: s!(url), message: e.to_string() })
    }

    /// Polls like Selenium's `WebDriverWait`: check, sleep, check again until
    /// the deadline. An empty match list is not an error, only a timeout is.
    fn wait_for_element(&mut self, selector: &str, timeout: Duration) -> Result<WebDriverElement, DriverError> {
        let poll = Duration::from_millis(POLL_INTERVAL_MS);
        let started = Instant::now();

        loop {
            let mut found = self.find_elements(selector)?;
            if !found.is_empty() {
                debug!("`{selector}` present after {:?}", started.elapsed());
                return Ok(found.remove(0));
            }

            let waited = started.elapsed();
            if waited >= timeout {
                return Err(DriverError::Timeout { selector: s!(selector), waited: timeout });
            }
            thread::sleep(poll.min(timeout - waited));
        }
    }

    fn find_elements(&mut self, selector: &str) -> Result<Vec<WebDriverElement>, DriverError> {
        let driver = self.driver()?;
        let elements = self
            .rt
            .block_on(driver.find_all(By::Css(selector)))
            .map_err(|e| DriverError::Query { selector: s!(selector), message: e.to_string() })?;
        Ok(elements.into_iter().map(|el| self.wrap(el)).collect())
    }

    fn close(&mut self) -> Result<(), DriverError> {
        let Some(driver) = self.driver.take() else { return Ok(()) };
        info!("closing {} session", self.browser);
        self.rt
            .block_on(driver.quit())
            .map_err(|e| DriverError::Close(e.to_string()))
    }
}

impl Drop for WebDriverSession {
    fn drop(&mut self) {
        if self.is_open() {
            warn!("{} session dropped while open; closing it", self.browser);
        }
        if let Err(e) = self.close() {
            warn!("{e}");
        }
    }
}

impl ElementHandle for WebDriverElement {
    fn text(&self) -> Result<String, DriverError> {
        self.rt
            .block_on(self.element.text())
            .map_err(|e| DriverError::Text(e.to_string()))
    }
}
