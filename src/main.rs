// Carebook - clinic appointment booking form
// Main entry point for iced application

use std::sync::Arc;

use iced::{Application, Settings as IcedSettings};
use log::{info, warn};

use carebook::utils::logging::{init_logging, log_error_with_context};
use carebook::{AppConfig, AppFlags, CarebookApp, SimulatedSubmitter};

#[tokio::main]
async fn main() -> iced::Result {
    if let Err(e) = init_logging() {
        eprintln!("Logger already initialized: {}", e);
    }

    info!("Starting Carebook with iced UI");

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log_error_with_context(&anyhow::Error::new(e), "Failed to load configuration");
            warn!("Continuing with the built-in catalog and timings");
            AppConfig::default()
        }
    };

    let submitter = Arc::new(SimulatedSubmitter::new(config.timings.submission_delay()));

    CarebookApp::run(IcedSettings {
        flags: AppFlags { config, submitter },
        window: iced::window::Settings {
            size: iced::Size::new(1100.0, 860.0),
            resizable: true,
            // Close goes through the app so pending timers are torn down first
            exit_on_close_request: false,
            ..Default::default()
        },
        id: None,
        fonts: vec![],
        default_font: Default::default(),
        default_text_size: iced::Pixels(16.0),
        antialiasing: false,
    })
}
