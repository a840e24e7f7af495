use actix_web::{App, HttpServer, web};
use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;
use study_room_booker::automation::booking::book_room;
use study_room_booker::automation::portal::Portal;
use study_room_booker::automation::webdriver::WebPortal;
use study_room_booker::config_source::FileConfigSource;
use study_room_booker::console::run_console;
use study_room_booker::handlers::booking::{AppState, open_session};
use study_room_booker::models::catalog::AREAS;
use study_room_booker::models::credentials::Credentials;
use study_room_booker::models::outcome::RoomsBooked;
use study_room_booker::routes;
use study_room_booker::settings::{Cli, Command, Settings};
use tokio::io::BufReader;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    if dotenv().is_err() {
        info!("No .env file found, using environment and flags");
    }

    let cli = Cli::parse();
    match cli.command {
        Command::Serve { bind, port } => serve(cli.settings, bind, port).await,
        Command::Book => book_once(&cli.settings).await,
        Command::Console => console(&cli.settings).await,
        Command::Catalog => {
            print_catalog();
            Ok(())
        }
    }
}

async fn serve(settings: Settings, bind: String, port: u16) -> Result<()> {
    let credentials = Credentials::from_file(&settings.credentials_file);
    if !credentials.is_complete() {
        warn!("Credentials incomplete, booking jobs will fail until they are provided");
    }

    let state = web::Data::new(AppState::new(settings, credentials));
    info!("Listening on {}:{}", bind, port);
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(routes::init)
    })
    .bind((bind.as_str(), port))?
    .run()
    .await?;
    Ok(())
}

async fn book_once(settings: &Settings) -> Result<()> {
    let credentials = Credentials::from_file(&settings.credentials_file);
    let mut portal = open_session(settings, &credentials).await?;

    let source = FileConfigSource::new(&settings.booking_config);
    let mut rooms_booked = RoomsBooked::default();
    let success = book_room(
        &mut portal,
        &source,
        &mut rooms_booked,
        &settings.booking_timeouts(),
    )
    .await;

    portal.quit().await?;
    if !success {
        std::process::exit(1);
    }
    Ok(())
}

async fn console(settings: &Settings) -> Result<()> {
    let credentials = Credentials::from_file(&settings.credentials_file);
    let mut portal = WebPortal::launch(&settings.webdriver_url, settings.headless).await?;

    let result = run_console(
        &mut portal,
        BufReader::new(tokio::io::stdin()),
        settings,
        &credentials,
    )
    .await;

    portal.quit().await?;
    result
}

fn print_catalog() {
    for area in AREAS.iter() {
        println!("{} (area {})", area.name, area.id);
        for room in area.rooms() {
            println!("    {} (room {})", room.name, room.id);
        }
    }
}
