//! Source Recognition GUI - Main entry point
//!
//! Initializes application-level logging, builds the HTTP client for the
//! prediction endpoint, and launches the iced event loop.

use iced::Size;

use srg_core::client::PredictionClient;
use srg_core::logging::{init_tracing, LogLevel};

mod app;
mod handlers;
mod logic;
mod model;
mod pages;
mod theme;

use app::App;

fn main() -> iced::Result {
    init_tracing(LogLevel::Info);

    tracing::info!("Source Recognition GUI starting");
    tracing::info!("Core version: {}", srg_core::version());

    let client = match PredictionClient::new() {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to build HTTP client: {}", e);
            eprintln!("Error: failed to build HTTP client: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!("Prediction endpoint: {}", client.endpoint());

    iced::application(move || App::new(client.clone()), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .window_size(Size::new(560.0, 700.0))
        .run()
}
