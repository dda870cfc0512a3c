//! CRSHR - standalone window for the bit-crusher editor.

use clap::Parser;
use crshr_gui::{CrshrApp, InitialValues};
use crshr_gui_core::Theme;
use crshr_gui_core::panel::PANEL_TITLE;
use eframe::egui;

/// CRSHR editor.
#[derive(Parser, Debug)]
#[command(name = "crshr-gui")]
#[command(about = "Two-knob editor for the CRSHR bit-crusher")]
#[command(version)]
struct Args {
    /// UI scale factor (window, fonts, and knobs)
    #[arg(long, default_value = "1.0")]
    scale: f32,

    /// Initial Crush value sent by the host, 2..512
    #[arg(long)]
    crush: Option<f32>,

    /// Initial Mix percentage sent by the host, 0..100
    #[arg(long)]
    mix: Option<f32>,
}

fn main() -> eframe::Result<()> {
    use tracing_subscriber::EnvFilter;

    // Initialize tracing subscriber; bridge log:: calls from eframe/egui
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    tracing_log::LogTracer::init().ok();

    let args = Args::parse();
    let theme = Theme::default().with_scale(args.scale);

    tracing::info!("Starting CRSHR editor");
    tracing::info!(scale = theme.scale_factor, "ui config");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(theme.window_size())
            .with_resizable(false)
            .with_title(PANEL_TITLE),
        ..Default::default()
    };

    let initial = InitialValues {
        crush: args.crush,
        mix: args.mix,
    };
    eframe::run_native(
        PANEL_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(CrshrApp::new(cc, theme, initial)))),
    )
}
