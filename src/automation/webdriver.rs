use crate::automation::constants::*;
use crate::automation::portal::{Locator, Portal, PortalError};
use async_trait::async_trait;
use std::time::Duration;
use thirtyfour::components::SelectElement;
use thirtyfour::prelude::*;
use tracing::info;

// interval used for element presence polling
const QUERY_INTERVAL: Duration = Duration::from_millis(500);

fn by(locator: &Locator) -> By {
    match *locator {
        Locator::Id(id) => By::Id(id),
        Locator::ClassName(class) => By::ClassName(class),
        Locator::XPath(xpath) => By::XPath(xpath),
    }
}

/// Only an element that never showed up is a timeout; driver failures are
/// returned as they are.
fn presence(found: bool, locator: &Locator, timeout: Duration) -> Result<(), PortalError> {
    if found {
        Ok(())
    } else {
        Err(PortalError::Timeout {
            waiting_for: locator.to_string(),
            after: timeout,
        })
    }
}

/// Chrome session driven through a running chromedriver.
pub struct WebPortal {
    driver: WebDriver,
}

impl WebPortal {
    pub async fn launch(webdriver_url: &str, headless: bool) -> Result<Self, PortalError> {
        let mut caps = DesiredCapabilities::chrome();
        if headless {
            caps.set_headless()?;
        }

        caps.add_arg("--no-sandbox")?;
        caps.add_arg("--disable-dev-shm-usage")?;
        caps.add_arg("--disable-gpu")?;
        caps.add_arg("--disable-extensions")?;
        caps.add_arg("--disable-notifications")?;
        caps.add_arg("--log-level=3")?;
        caps.add_arg("--silent")?;

        info!("Connecting to chromedriver at {}", webdriver_url);
        let driver = WebDriver::new(webdriver_url, caps).await?;
        driver
            .set_window_rect(0, 0, WINDOW_WIDTH, WINDOW_HEIGHT)
            .await?;

        Ok(WebPortal { driver })
    }

    async fn element(&self, locator: &Locator) -> Result<WebElement, PortalError> {
        self.driver
            .find_all(by(locator))
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| PortalError::NotFound(locator.clone()))
    }
}

#[async_trait]
impl Portal for WebPortal {
    async fn goto(&mut self, url: &str) -> Result<(), PortalError> {
        self.driver.goto(url).await?;
        Ok(())
    }

    async fn current_url(&mut self) -> Result<String, PortalError> {
        Ok(self.driver.current_url().await?.to_string())
    }

    async fn wait_for(&mut self, locator: Locator, timeout: Duration) -> Result<(), PortalError> {
        let found = self
            .driver
            .query(by(&locator))
            .wait(timeout, QUERY_INTERVAL)
            .exists()
            .await?;
        presence(found, &locator, timeout)
    }

    async fn click(&mut self, locator: Locator) -> Result<(), PortalError> {
        self.element(&locator).await?.click().await?;
        Ok(())
    }

    async fn fill(&mut self, locator: Locator, text: &str) -> Result<(), PortalError> {
        self.element(&locator).await?.send_keys(text).await?;
        Ok(())
    }

    async fn select_value(&mut self, locator: Locator, value: &str) -> Result<(), PortalError> {
        let elem = self.element(&locator).await?;
        SelectElement::new(&elem).await?.select_by_value(value).await?;
        Ok(())
    }

    async fn attribute(
        &mut self,
        locator: Locator,
        name: &str,
    ) -> Result<Option<String>, PortalError> {
        Ok(self.element(&locator).await?.attr(name).await?)
    }

    async fn text(&mut self, locator: Locator) -> Result<Option<String>, PortalError> {
        match self.element(&locator).await {
            Ok(elem) => Ok(Some(elem.text().await?.trim().to_string())),
            Err(PortalError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn quit(&mut self) -> Result<(), PortalError> {
        info!("Quitting Chrome session");
        self.driver.clone().quit().await?;
        Ok(())
    }
}
