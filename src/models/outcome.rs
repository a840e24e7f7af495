use crate::automation::constants::MAX_ROOMS_BOOKED;
use crate::models::session::SessionWindow;
use serde::Serialize;

/// What happened to one session window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BookingOutcome {
    Booked,
    ConflictSkipped { conflict: String, policy: String },
    BookingLimitReached { policy: String },
    SubmissionError { error: String },
}

/// Successful bookings since the last cooldown.
///
/// Owned by the caller and carried across booking invocations; it resets to
/// zero each time the cap is reached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RoomsBooked(u32);

impl RoomsBooked {
    pub fn new(count: u32) -> Self {
        RoomsBooked(count)
    }

    pub fn count(&self) -> u32 {
        self.0
    }

    pub fn at_cap(&self) -> bool {
        self.0 >= MAX_ROOMS_BOOKED
    }

    pub fn increment(&mut self) {
        self.0 += 1;
    }

    pub fn force_cap(&mut self) {
        self.0 = MAX_ROOMS_BOOKED;
    }

    pub fn reset(&mut self) {
        self.0 = 0;
    }
}

/// Everything one run of the booking loop did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BookingReport {
    pub outcomes: Vec<(SessionWindow, BookingOutcome)>,
    pub booked: u32,
    pub limit_reached: bool,
    /// First window start that was not attempted, when the loop stopped early.
    pub resume_at: Option<u32>,
}
