//! Notecards Desktop Application
//!
//! Titled notes with inline images, kept in a hosted realtime database.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod services;
mod state;
mod views;

use dioxus::desktop::{Config, WindowBuilder};

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("notecards=debug".parse().unwrap()),
        )
        .init();

    tracing::info!("Starting Notecards...");

    let config = Config::new().with_window(WindowBuilder::new().with_title("Notecards"));

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .launch(app::App);
}
