use crate::models::booking_config::{BookingConfig, ConfigError};
use async_trait::async_trait;
use std::path::PathBuf;

/// Supplies the booking configuration, fetched fresh for every invocation so
/// edits made between runs are picked up.
#[async_trait]
pub trait ConfigSource: Send + Sync {
    async fn latest(&self) -> Result<BookingConfig, ConfigError>;
}

/// Reads a JSON config file on every call.
#[derive(Debug, Clone)]
pub struct FileConfigSource {
    path: PathBuf,
}

impl FileConfigSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileConfigSource { path: path.into() }
    }
}

#[async_trait]
impl ConfigSource for FileConfigSource {
    async fn latest(&self) -> Result<BookingConfig, ConfigError> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| ConfigError::Read {
                path: self.path.display().to_string(),
                source,
            })?;
        BookingConfig::from_json(&text)
    }
}

/// A config handed over whole, as with an HTTP request body.
#[derive(Debug, Clone)]
pub struct FixedConfig(pub BookingConfig);

#[async_trait]
impl ConfigSource for FixedConfig {
    async fn latest(&self) -> Result<BookingConfig, ConfigError> {
        self.0.validate()?;
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"{"area": 6, "room": 17, "date": "2025-03-25", "start_time": "06:00", "end_time": "08:00"}"#;

    #[tokio::test]
    async fn file_source_sees_edits_between_calls() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("booking.json");
        std::fs::write(&path, CONFIG).unwrap();

        let source = FileConfigSource::new(&path);
        assert_eq!(source.latest().await.unwrap().room, 17);

        std::fs::write(&path, CONFIG.replace("17", "23")).unwrap();
        assert_eq!(source.latest().await.unwrap().room, 23);
    }

    #[tokio::test]
    async fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileConfigSource::new(dir.path().join("nope.json"));
        assert!(matches!(source.latest().await, Err(ConfigError::Read { .. })));
    }
}
