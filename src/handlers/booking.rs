use crate::automation::auth::{AuthError, login};
use crate::automation::booking::run_booking;
use crate::automation::portal::Portal;
use crate::automation::webdriver::WebPortal;
use crate::cache::JOB_CACHE;
use crate::config_source::{ConfigSource, FixedConfig};
use crate::models::booking_config::BookingConfig;
use crate::models::credentials::Credentials;
use crate::models::job::{BookingJob, JobStatus};
use crate::models::outcome::{BookingReport, RoomsBooked};
use crate::settings::Settings;
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task;
use uuid::Uuid;

/// Shared by every request of the server.
pub struct AppState {
    pub settings: Settings,
    pub credentials: Credentials,
    /// Held for the whole run, so jobs execute one at a time.
    pub rooms_booked: Mutex<RoomsBooked>,
}

impl AppState {
    pub fn new(settings: Settings, credentials: Credentials) -> Self {
        AppState {
            settings,
            credentials,
            rooms_booked: Mutex::new(RoomsBooked::default()),
        }
    }
}

/// Launches Chrome and signs in, closing the browser again if login fails.
pub async fn open_session(settings: &Settings, credentials: &Credentials) -> Result<WebPortal> {
    if !credentials.is_complete() {
        return Err(AuthError::MissingCredentials.into());
    }

    let mut portal = WebPortal::launch(&settings.webdriver_url, settings.headless).await?;
    if let Err(e) = login(&mut portal, credentials, &settings.auth_timeouts()).await {
        if let Err(quit_err) = portal.quit().await {
            tracing::warn!("Failed to close browser after login error: {}", quit_err);
        }
        return Err(e.into());
    }
    Ok(portal)
}

async fn book_in_new_session(
    state: &AppState,
    source: &dyn ConfigSource,
) -> Result<BookingReport> {
    let mut rooms_booked = state.rooms_booked.lock().await;
    let mut portal = open_session(&state.settings, &state.credentials).await?;

    let result = run_booking(
        &mut portal,
        source,
        &mut rooms_booked,
        &state.settings.booking_timeouts(),
    )
    .await;

    if let Err(e) = portal.quit().await {
        tracing::warn!("Failed to close browser: {}", e);
    }

    Ok(result?)
}

/// Starts a background booking job and returns its id.
pub async fn start_booking(state: Arc<AppState>, config: BookingConfig) -> Result<Uuid> {
    config.validate()?;

    let job = BookingJob::new(config.clone());
    let id = job.id;
    JOB_CACHE.insert(id, job.clone()).await;

    task::spawn(async move {
        let status = match book_in_new_session(&state, &FixedConfig(config)).await {
            Ok(report) => JobStatus::Finished { report },
            Err(e) => {
                tracing::error!("Booking job {} failed: {:?}", id, e);
                JobStatus::Failed {
                    error: e.to_string(),
                }
            }
        };

        JOB_CACHE.insert(id, BookingJob { status, ..job }).await;
    });

    Ok(id)
}
