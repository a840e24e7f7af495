use crate::models::clock::convert_seconds_to_time;
use serde::Serialize;
use std::fmt;

/// A contiguous slice of the requested range submitted as one reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionWindow {
    pub start: u32,
    pub end: u32,
}

impl fmt::Display for SessionWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            convert_seconds_to_time(self.start),
            convert_seconds_to_time(self.end)
        )
    }
}

/// Splits `[start, end)` into windows of at most `cap` seconds.
#[derive(Debug, Clone)]
pub struct SessionWindows {
    next_start: u32,
    end: u32,
    cap: u32,
}

impl SessionWindows {
    pub fn new(start: u32, end: u32, cap: u32) -> Self {
        SessionWindows {
            next_start: start,
            end,
            cap,
        }
    }

    /// Start of the first window not yet handed out.
    pub fn next_start(&self) -> u32 {
        self.next_start
    }
}

impl Iterator for SessionWindows {
    type Item = SessionWindow;

    fn next(&mut self) -> Option<SessionWindow> {
        if self.next_start >= self.end || self.cap == 0 {
            return None;
        }
        let start = self.next_start;
        let end = start.saturating_add(self.cap).min(self.end);
        self.next_start = end;
        Some(SessionWindow { start, end })
    }
}
