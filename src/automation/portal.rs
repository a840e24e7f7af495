use async_trait::async_trait;
use std::fmt;
use std::time::Duration;
use thiserror::Error;
use tokio::time::Instant;

/// How an element is found on a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    Id(&'static str),
    ClassName(&'static str),
    XPath(&'static str),
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::Id(id) => write!(f, "#{id}"),
            Locator::ClassName(class) => write!(f, ".{class}"),
            Locator::XPath(xpath) => write!(f, "{xpath}"),
        }
    }
}

#[derive(Debug, Error)]
pub enum PortalError {
    #[error("element {0} not found")]
    NotFound(Locator),

    #[error("timed out after {after:?} waiting for {waiting_for}")]
    Timeout {
        waiting_for: String,
        after: Duration,
    },

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    #[error("webdriver: {0}")]
    Driver(String),
}

impl From<thirtyfour::error::WebDriverError> for PortalError {
    fn from(err: thirtyfour::error::WebDriverError) -> Self {
        PortalError::Driver(err.to_string())
    }
}

/// The browser operations the login and booking flows need.
///
/// Lookups in `click`, `fill`, `select_value` and `attribute` are immediate;
/// callers that expect a page to still be rendering use `wait_for` first.
#[async_trait]
pub trait Portal: Send {
    async fn goto(&mut self, url: &str) -> Result<(), PortalError>;

    async fn current_url(&mut self) -> Result<String, PortalError>;

    /// Blocks until the element is present or `timeout` elapses.
    async fn wait_for(&mut self, locator: Locator, timeout: Duration) -> Result<(), PortalError>;

    async fn click(&mut self, locator: Locator) -> Result<(), PortalError>;

    async fn fill(&mut self, locator: Locator, text: &str) -> Result<(), PortalError>;

    async fn select_value(&mut self, locator: Locator, value: &str) -> Result<(), PortalError>;

    /// `None` when the element exists but has no such attribute.
    async fn attribute(&mut self, locator: Locator, name: &str)
    -> Result<Option<String>, PortalError>;

    /// Visible text of the element, `None` when it is not on the page.
    async fn text(&mut self, locator: Locator) -> Result<Option<String>, PortalError>;

    async fn quit(&mut self) -> Result<(), PortalError>;
}

/// A fixed point in time after which a polling loop gives up.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    started: Instant,
    limit: Duration,
}

impl Deadline {
    pub fn after(limit: Duration) -> Self {
        Deadline {
            started: Instant::now(),
            limit,
        }
    }

    pub fn check(&self, waiting_for: &str) -> Result<(), PortalError> {
        if self.started.elapsed() >= self.limit {
            Err(PortalError::Timeout {
                waiting_for: waiting_for.to_string(),
                after: self.limit,
            })
        } else {
            Ok(())
        }
    }
}

/// Polls an attribute until it is non-empty, returning its value.
pub async fn wait_for_attribute<P: Portal + ?Sized>(
    portal: &mut P,
    locator: Locator,
    name: &str,
    timeout: Duration,
    interval: Duration,
) -> Result<String, PortalError> {
    let deadline = Deadline::after(timeout);
    loop {
        // the indicator may not be rendered yet, treat that like an empty value
        match portal.attribute(locator.clone(), name).await {
            Ok(Some(value)) if !value.is_empty() => return Ok(value),
            Ok(_) | Err(PortalError::NotFound(_)) => {}
            Err(e) => return Err(e),
        }
        deadline.check(&format!("{name} of {locator}"))?;
        tokio::time::sleep(interval).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn deadline_expires_after_limit() {
        let deadline = Deadline::after(Duration::from_secs(5));
        assert!(deadline.check("page").is_ok());

        tokio::time::sleep(Duration::from_secs(5)).await;
        match deadline.check("page") {
            Err(PortalError::Timeout { waiting_for, after }) => {
                assert_eq!(waiting_for, "page");
                assert_eq!(after, Duration::from_secs(5));
            }
            other => panic!("expected timeout, got {other:?}"),
        }
    }

    #[test]
    fn locators_render_like_selectors() {
        assert_eq!(Locator::Id("name").to_string(), "#name");
        assert_eq!(Locator::ClassName("default_action").to_string(), ".default_action");
    }
}
