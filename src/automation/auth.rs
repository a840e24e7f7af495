use crate::automation::constants::*;
use crate::automation::portal::{Deadline, Locator, Portal, PortalError};
use crate::models::credentials::Credentials;
use std::time::Duration;
use thiserror::Error;
use tokio::time::sleep;
use tracing::{debug, info};

const URL_POLL_INTERVAL: Duration = Duration::from_secs(1);
const TWO_FACTOR_POLL_INTERVAL: Duration = Duration::from_secs(2);

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("credentials not found, USERNAME and PASSWORD are required")]
    MissingCredentials,

    #[error("login rejected: {0}")]
    Rejected(String),

    #[error(transparent)]
    Portal(#[from] PortalError),
}

/// Upper bounds for each hop of the sign-on redirect chain.
#[derive(Debug, Clone, Copy)]
pub struct AuthTimeouts {
    pub login_redirect: Duration,
    pub identity_provider: Duration,
    pub two_factor: Duration,
}

impl Default for AuthTimeouts {
    fn default() -> Self {
        AuthTimeouts {
            login_redirect: Duration::from_secs(60),
            identity_provider: Duration::from_secs(120),
            two_factor: Duration::from_secs(300),
        }
    }
}

/// Signs the browser into the booking portal.
///
/// The two-factor push has to be approved on the user's phone; this only
/// clicks "trust this browser" while the approval page is showing.
pub async fn login<P: Portal + ?Sized>(
    portal: &mut P,
    credentials: &Credentials,
    timeouts: &AuthTimeouts,
) -> Result<(), AuthError> {
    if !credentials.is_complete() {
        return Err(AuthError::MissingCredentials);
    }

    portal.goto(BASE_URL).await?;
    portal.click(Locator::XPath(LOGIN_BUTTON_XPATH)).await?;

    let deadline = Deadline::after(timeouts.login_redirect);
    loop {
        let url = portal.current_url().await?;
        if url != BASE_URL {
            break;
        }
        debug!("Waiting to leave {}", url);
        deadline.check("redirect to the identity provider")?;
        sleep(URL_POLL_INTERVAL).await;
    }

    portal
        .fill(Locator::Id(USERNAME_INPUT_ID), &credentials.username)
        .await?;
    portal
        .fill(Locator::Id(PASSWORD_INPUT_ID), &credentials.password)
        .await?;
    portal.click(Locator::XPath(SUBMIT_BUTTON_XPATH)).await?;

    let deadline = Deadline::after(timeouts.identity_provider);
    while portal.current_url().await?.contains(IDENTITY_PROVIDER_MARKER) {
        if let Some(message) = portal.text(Locator::ClassName(LOGIN_ERROR_CLASS)).await? {
            if !message.is_empty() {
                return Err(AuthError::Rejected(message));
            }
        }
        debug!("Waiting to leave {}", IDENTITY_PROVIDER_MARKER);
        deadline.check("sign-in at the identity provider")?;
        sleep(URL_POLL_INTERVAL).await;
    }

    info!("Check your phone for duo authentication...");
    let deadline = Deadline::after(timeouts.two_factor);
    while portal.current_url().await?.contains(TWO_FACTOR_MARKER) {
        match portal.click(Locator::Id(TRUST_BROWSER_BUTTON_ID)).await {
            Ok(()) => debug!("Clicked trust browser button"),
            Err(e) => debug!("Trust browser button not clickable yet: {}", e),
        }
        deadline.check("two-factor approval")?;
        sleep(TWO_FACTOR_POLL_INTERVAL).await;
    }

    info!("Authentication completed");
    Ok(())
}
