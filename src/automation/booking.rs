use crate::automation::constants::*;
use crate::automation::portal::{Locator, Portal, PortalError, wait_for_attribute};
use crate::config_source::ConfigSource;
use crate::models::booking_config::{BookingConfig, ConfigError};
use crate::models::outcome::{BookingOutcome, BookingReport, RoomsBooked};
use crate::models::session::{SessionWindow, SessionWindows};
use std::time::Duration;
use tracing::{error, info, warn};
use url::Url;

#[derive(Debug, Clone, Copy)]
pub struct BookingTimeouts {
    /// Bound on each form element and validation indicator.
    pub element: Duration,
    pub poll_interval: Duration,
}

impl Default for BookingTimeouts {
    fn default() -> Self {
        BookingTimeouts {
            element: Duration::from_secs(10),
            poll_interval: Duration::from_millis(500),
        }
    }
}

/// How the portal judged a filled-in reservation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckVerdict {
    Clear,
    Conflict,
    LimitReached,
}

pub fn classify_checks(conflict: &str, policy: &str) -> CheckVerdict {
    if conflict == NO_CONFLICTS && policy == NO_POLICY_CONFLICTS {
        CheckVerdict::Clear
    } else if LIMIT_MARKERS.iter().any(|marker| policy.contains(marker)) {
        CheckVerdict::LimitReached
    } else {
        CheckVerdict::Conflict
    }
}

/// Deep link that opens the reservation form pre-filled for one window.
pub fn entry_url(config: &BookingConfig, window: SessionWindow) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(BASE_URL)?.join(EDIT_ENTRY_PATH)?;
    url.query_pairs_mut()
        .append_pair("drag", "1")
        .append_pair("area", &config.area.to_string())
        .append_pair("start_seconds", &window.start.to_string())
        .append_pair("end_seconds", &window.end.to_string())
        .append_pair("rooms[]", &config.room.to_string())
        .append_pair("start_date", &config.date.format("%Y-%m-%d").to_string())
        .append_pair("top", "0");
    Ok(url)
}

/// Day view of the booked date, shown once the cap is reached.
pub fn day_view_url(config: &BookingConfig) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(BASE_URL)?.join(DAY_VIEW_PATH)?;
    url.query_pairs_mut()
        .append_pair("view", "day")
        .append_pair("page_date", &config.date.format("%Y-%m-%d").to_string())
        .append_pair("area", &config.area.to_string());
    Ok(url)
}

async fn fill_field<P: Portal + ?Sized>(
    portal: &mut P,
    id: &'static str,
    text: &str,
    timeout: Duration,
) -> Result<(), PortalError> {
    portal.wait_for(Locator::Id(id), timeout).await?;
    portal.fill(Locator::Id(id), text).await
}

async fn book_window<P: Portal + ?Sized>(
    portal: &mut P,
    config: &BookingConfig,
    window: SessionWindow,
    timeouts: &BookingTimeouts,
) -> Result<BookingOutcome, PortalError> {
    let url = entry_url(config, window)?;
    portal.goto(url.as_str()).await?;

    fill_field(portal, NAME_INPUT_ID, &config.room_title, timeouts.element).await?;
    fill_field(
        portal,
        DESCRIPTION_INPUT_ID,
        &config.room_description,
        timeouts.element,
    )
    .await?;
    portal
        .wait_for(Locator::Id(TYPE_SELECT_ID), timeouts.element)
        .await?;
    portal
        .select_value(Locator::Id(TYPE_SELECT_ID), ROOM_TYPE_VALUE)
        .await?;
    fill_field(portal, PHONE_INPUT_ID, &config.phone_number, timeouts.element).await?;
    fill_field(portal, EMAIL_INPUT_ID, &config.email, timeouts.element).await?;

    let conflict = wait_for_attribute(
        portal,
        Locator::Id(CONFLICT_CHECK_ID),
        STATUS_ATTRIBUTE,
        timeouts.element,
        timeouts.poll_interval,
    )
    .await?;
    let policy = wait_for_attribute(
        portal,
        Locator::Id(POLICY_CHECK_ID),
        STATUS_ATTRIBUTE,
        timeouts.element,
        timeouts.poll_interval,
    )
    .await?;

    let outcome = match classify_checks(&conflict, &policy) {
        CheckVerdict::Clear => {
            portal
                .wait_for(Locator::ClassName(SUBMIT_CLASS), timeouts.element)
                .await?;
            portal.click(Locator::ClassName(SUBMIT_CLASS)).await?;
            BookingOutcome::Booked
        }
        CheckVerdict::Conflict => BookingOutcome::ConflictSkipped { conflict, policy },
        CheckVerdict::LimitReached => BookingOutcome::BookingLimitReached { policy },
    };

    Ok(outcome)
}

/// Books consecutive windows of the latest configuration.
///
/// Stops when the range is used up or `rooms_booked` hits the cap; the
/// counter is reset once the cap is reached. A failure inside one window is
/// logged and the loop moves on to the next one.
pub async fn run_booking<P, S>(
    portal: &mut P,
    source: &S,
    rooms_booked: &mut RoomsBooked,
    timeouts: &BookingTimeouts,
) -> Result<BookingReport, ConfigError>
where
    P: Portal + ?Sized,
    S: ConfigSource + ?Sized,
{
    let config = source.latest().await?;
    let mut windows = SessionWindows::new(config.start_time, config.end_time, SESSION_CAP_SECS);
    let mut report = BookingReport::default();

    while !rooms_booked.at_cap() {
        let Some(window) = windows.next() else {
            break;
        };

        info!("Booking room from {}", window);
        let outcome = match book_window(portal, &config, window, timeouts).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("Error during booking attempt: {}", e);
                BookingOutcome::SubmissionError {
                    error: e.to_string(),
                }
            }
        };

        match &outcome {
            BookingOutcome::Booked => {
                info!("Room booked successfully!");
                rooms_booked.increment();
                report.booked += 1;
            }
            BookingOutcome::ConflictSkipped { conflict, policy } => {
                warn!("Conflict detected! Skipping this session.");
                warn!("Conflict: {}", conflict);
                warn!("Policy: {}", policy);
            }
            BookingOutcome::BookingLimitReached { policy } => {
                warn!("Policy: {}", policy);
                warn!("Booking limit reached.");
                rooms_booked.force_cap();
                report.limit_reached = true;
            }
            BookingOutcome::SubmissionError { .. } => {}
        }
        report.outcomes.push((window, outcome));

        if rooms_booked.at_cap() {
            rooms_booked.reset();
            match day_view_url(&config) {
                Ok(url) => {
                    if let Err(e) = portal.goto(url.as_str()).await {
                        warn!("Failed to open day view: {}", e);
                    }
                }
                Err(e) => warn!("Failed to build day view url: {}", e),
            }
            break;
        }
    }

    if windows.next_start() < config.end_time {
        report.resume_at = Some(windows.next_start());
    }

    Ok(report)
}

/// Runs the booking loop and reduces it to a pass/fail flag.
pub async fn book_room<P, S>(
    portal: &mut P,
    source: &S,
    rooms_booked: &mut RoomsBooked,
    timeouts: &BookingTimeouts,
) -> bool
where
    P: Portal + ?Sized,
    S: ConfigSource + ?Sized,
{
    match run_booking(portal, source, rooms_booked, timeouts).await {
        Ok(report) => {
            info!(
                "Booked {} of {} sessions",
                report.booked,
                report.outcomes.len()
            );
            true
        }
        Err(e) => {
            error!("Booking error: {}", e);
            false
        }
    }
}
