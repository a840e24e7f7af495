use std::fmt;
use std::path::Path;
use tracing::{error, warn};

/// Portal login, read from a `KEY=value` file with USERNAME and PASSWORD.
#[derive(Clone, Default)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Reads the credentials file without exporting it into the environment.
    ///
    /// An unreadable file or missing key leaves the field empty; `login`
    /// refuses to start with incomplete credentials.
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let mut creds = Credentials::default();

        let entries = match dotenv::from_filename_iter(path) {
            Ok(entries) => entries,
            Err(e) => {
                error!("Error reading credentials from {}: {}", path.display(), e);
                return creds;
            }
        };

        for entry in entries {
            match entry {
                Ok((key, value)) => match key.as_str() {
                    "USERNAME" => creds.username = value,
                    "PASSWORD" => creds.password = value,
                    _ => {}
                },
                Err(e) => warn!("Skipping malformed credentials line: {}", e),
            }
        }

        creds
    }

    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_username_and_password_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "USERNAME=student42").unwrap();
        writeln!(file, "PASSWORD=hunter2").unwrap();
        writeln!(file, "OTHER=ignored").unwrap();

        let creds = Credentials::from_file(file.path());
        assert_eq!(creds.username, "student42");
        assert_eq!(creds.password, "hunter2");
        assert!(creds.is_complete());
    }

    #[test]
    fn missing_file_yields_incomplete_credentials() {
        let dir = tempfile::tempdir().unwrap();
        let creds = Credentials::from_file(dir.path().join("credentials.txt"));
        assert!(!creds.is_complete());
    }

    #[test]
    fn debug_output_hides_password() {
        let creds = Credentials::new("student42", "secret");
        assert!(!format!("{creds:?}").contains("secret"));
    }
}
