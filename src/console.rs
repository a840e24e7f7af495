//! Development console for poking at a live browser session.
//!
//! Only the commands in [`DebugCommand`] are accepted; input is never
//! evaluated.

use crate::automation::auth::login;
use crate::automation::booking::book_room;
use crate::automation::constants::{ELEMENT_IDS, STATUS_ATTRIBUTE, element_id};
use crate::automation::portal::{Locator, Portal};
use crate::config_source::FileConfigSource;
use crate::models::credentials::Credentials;
use crate::models::outcome::RoomsBooked;
use crate::settings::Settings;
use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{error, info};

pub const HELP: &str = "commands: goto <url> | url | login | book | text <id> | help | exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebugCommand {
    Goto(String),
    Url,
    Login,
    Book,
    /// Text and title of one of the portal's known elements.
    Text(&'static str),
    Help,
    Exit,
}

impl DebugCommand {
    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let command = match parts.next()?.to_ascii_lowercase().as_str() {
            "goto" => DebugCommand::Goto(parts.next()?.to_string()),
            "url" => DebugCommand::Url,
            "login" => DebugCommand::Login,
            "book" => DebugCommand::Book,
            "text" => DebugCommand::Text(element_id(parts.next()?)?),
            "help" => DebugCommand::Help,
            "exit" | "quit" => DebugCommand::Exit,
            _ => return None,
        };
        // trailing words are a typo, not an argument
        if parts.next().is_some() {
            return None;
        }
        Some(command)
    }
}

/// Reads commands line by line until `exit` or end of input.
pub async fn run_console<P, R>(
    portal: &mut P,
    input: R,
    settings: &Settings,
    credentials: &Credentials,
) -> Result<()>
where
    P: Portal + ?Sized,
    R: AsyncBufRead + Unpin,
{
    let source = FileConfigSource::new(&settings.booking_config);
    let mut rooms_booked = RoomsBooked::default();
    let mut lines = input.lines();

    println!("{HELP}");
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let Some(command) = DebugCommand::parse(&line) else {
            println!("unknown command, {HELP}");
            println!("known ids: {}", ELEMENT_IDS.join(", "));
            continue;
        };

        match command {
            DebugCommand::Exit => break,
            DebugCommand::Help => println!("{HELP}"),
            DebugCommand::Goto(url) => {
                if let Err(e) = portal.goto(&url).await {
                    error!("Error: {}", e);
                }
            }
            DebugCommand::Url => match portal.current_url().await {
                Ok(url) => println!("{url}"),
                Err(e) => error!("Error: {}", e),
            },
            DebugCommand::Login => {
                if let Err(e) = login(portal, credentials, &settings.auth_timeouts()).await {
                    error!("Error: {}", e);
                }
            }
            DebugCommand::Book => {
                let success = book_room(
                    portal,
                    &source,
                    &mut rooms_booked,
                    &settings.booking_timeouts(),
                )
                .await;
                info!("Booking finished, success: {}", success);
            }
            DebugCommand::Text(id) => {
                match portal.text(Locator::Id(id)).await {
                    Ok(Some(text)) => println!("{id}: {text}"),
                    Ok(None) => println!("{id}: not on this page"),
                    Err(e) => println!("{id}: {e}"),
                }
                // the validation indicators keep their message in the title
                if let Ok(Some(title)) = portal.attribute(Locator::Id(id), STATUS_ATTRIBUTE).await {
                    println!("{id} title: {title}");
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_fixed_command_set() {
        assert_eq!(
            DebugCommand::parse("goto https://example.com"),
            Some(DebugCommand::Goto("https://example.com".into()))
        );
        assert_eq!(DebugCommand::parse("  URL "), Some(DebugCommand::Url));
        assert_eq!(DebugCommand::parse("quit"), Some(DebugCommand::Exit));
        assert_eq!(
            DebugCommand::parse("text conflict_check"),
            Some(DebugCommand::Text("conflict_check"))
        );
        assert_eq!(
            DebugCommand::parse("TEXT f_email"),
            Some(DebugCommand::Text("f_email"))
        );
    }

    #[test]
    fn rejects_anything_else() {
        assert_eq!(DebugCommand::parse("driver.quit()"), None);
        assert_eq!(DebugCommand::parse("goto"), None);
        assert_eq!(DebugCommand::parse("login now"), None);
        assert_eq!(DebugCommand::parse("text"), None);
        assert_eq!(DebugCommand::parse("text document.cookie"), None);
    }
}
