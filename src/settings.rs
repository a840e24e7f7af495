use crate::automation::auth::AuthTimeouts;
use crate::automation::booking::BookingTimeouts;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "study_room_booker")]
#[command(about = "Books study rooms on the campus booking portal")]
pub struct Cli {
    #[command(flatten)]
    pub settings: Settings,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Address to bind
        #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0")]
        bind: String,

        /// Port to listen on
        #[arg(long, env = "PORT", default_value_t = 8080)]
        port: u16,
    },
    /// Log in and book the configured range once
    Book,
    /// Interactive debug console with a fixed command set
    Console,
    /// List bookable areas and rooms
    Catalog,
}

/// Process wide settings, each also readable from the environment.
#[derive(Args, Debug, Clone)]
pub struct Settings {
    /// chromedriver endpoint
    #[arg(long, env = "WEBDRIVER_URL", default_value = "http://localhost:9515")]
    pub webdriver_url: String,

    /// Run Chrome without a window
    #[arg(long, env = "HEADLESS", default_value_t = true, action = clap::ArgAction::Set)]
    pub headless: bool,

    /// KEY=value file holding USERNAME and PASSWORD
    #[arg(long, env = "CREDENTIALS_FILE", default_value = "credentials.txt")]
    pub credentials_file: PathBuf,

    /// JSON booking configuration, re-read before every booking run
    #[arg(long, env = "BOOKING_CONFIG", default_value = "booking.json")]
    pub booking_config: PathBuf,

    #[arg(long, env = "LOGIN_REDIRECT_TIMEOUT_SECS", default_value_t = 60)]
    pub login_redirect_timeout_secs: u64,

    #[arg(long, env = "IDENTITY_PROVIDER_TIMEOUT_SECS", default_value_t = 120)]
    pub identity_provider_timeout_secs: u64,

    #[arg(long, env = "TWO_FACTOR_TIMEOUT_SECS", default_value_t = 300)]
    pub two_factor_timeout_secs: u64,

    /// Bound on each reservation form element
    #[arg(long, env = "ELEMENT_TIMEOUT_SECS", default_value_t = 10)]
    pub element_timeout_secs: u64,
}

impl Settings {
    pub fn auth_timeouts(&self) -> AuthTimeouts {
        AuthTimeouts {
            login_redirect: Duration::from_secs(self.login_redirect_timeout_secs),
            identity_provider: Duration::from_secs(self.identity_provider_timeout_secs),
            two_factor: Duration::from_secs(self.two_factor_timeout_secs),
        }
    }

    pub fn booking_timeouts(&self) -> BookingTimeouts {
        BookingTimeouts {
            element: Duration::from_secs(self.element_timeout_secs),
            ..BookingTimeouts::default()
        }
    }
}
