use crate::models::catalog;
use crate::models::clock::{self, deserialize_seconds};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

static EMAIL_RE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").ok());

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read booking config {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse booking config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid booking config: {0}")]
    Invalid(String),
}

/// One reservation request as the operator configured it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingConfig {
    pub area: u32,
    pub room: u32,
    pub date: NaiveDate,
    #[serde(deserialize_with = "deserialize_seconds")]
    pub start_time: u32,
    #[serde(deserialize_with = "deserialize_seconds")]
    pub end_time: u32,
    #[serde(default)]
    pub room_title: String,
    #[serde(default)]
    pub room_description: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub email: String,
}

fn looks_like_email(address: &str) -> bool {
    EMAIL_RE
        .as_ref()
        .is_none_or(|re| re.is_match(address))
}

impl BookingConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: BookingConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.start_time >= self.end_time {
            return Err(ConfigError::Invalid(format!(
                "start_time {} must be before end_time {}",
                clock::convert_seconds_to_time(self.start_time),
                clock::convert_seconds_to_time(self.end_time)
            )));
        }

        // the portal gets the address as typed, it does its own checking
        if !self.email.is_empty() && !looks_like_email(&self.email) {
            warn!("email address {:?} looks malformed", self.email);
        }

        // unknown ids are passed through, the portal is the authority on them
        match catalog::area_by_id(self.area) {
            Some(area) if !area.contains(self.room) => {
                warn!("room {} is not listed under area {}", self.room, area.name);
            }
            Some(_) => {}
            None => warn!("area {} is not in the room catalog", self.area),
        }

        Ok(())
    }
}
