mod backend_bridge;
mod controller;
mod ui;

use anyhow::anyhow;
use clap::Parser;
use client_core::{config::normalize_base_url, load_settings};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::CustomerManagerApp;

#[derive(Parser, Debug)]
struct Args {
    /// Overrides the configured backend base url.
    #[arg(long)]
    api_url: Option<String>,
    /// Accept self-signed certificates from the backend.
    #[arg(long)]
    insecure: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    let args = Args::parse();

    let mut settings = load_settings()?;
    if let Some(url) = &args.api_url {
        settings.api_base_url = normalize_base_url(url)?;
    }
    settings.accept_invalid_certs |= args.insecure;

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(settings.clone(), cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Customer Management")
            .with_inner_size([1100.0, 680.0])
            .with_min_inner_size([720.0, 420.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Customer Management",
        options,
        Box::new(move |_cc| Ok(Box::new(CustomerManagerApp::new(&settings, cmd_tx, ui_rx)))),
    )
    .map_err(|err| anyhow!("gui exited with error: {err}"))
}
