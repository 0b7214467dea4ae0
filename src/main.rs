//! Application entry point for MuteSpeak.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Load [`AppConfig`] from disk (returns default on first run).
//! 3. Load the voice settings into a [`Session`].
//! 4. Create [`tokio`] runtime (multi-thread, 2 workers).
//! 5. Create speech channels (`command`, `result`) and spawn the worker.
//! 6. Run [`eframe::run_native`], which blocks the main thread until the window
//!    is closed.  The app issues the startup probe on construction.

use std::sync::Arc;

use mutespeak::{
    app::MuteSpeakApp,
    config::AppConfig,
    session::Session,
    speech::{run_speaker, Launcher, ProcessLauncher, SpeechCommand, SpeechResult},
    voice::SettingsStore,
};
use tokio::sync::mpsc;

use eframe::egui;

fn native_options(config: &AppConfig) -> eframe::NativeOptions {
    let mut vp = egui::ViewportBuilder::default()
        .with_title("MuteSpeak")
        .with_inner_size([380.0, 330.0])
        .with_min_inner_size([320.0, 280.0]);

    if config.ui.always_on_top {
        vp = vp.with_always_on_top();
    }

    eframe::NativeOptions {
        viewport: vp,
        ..Default::default()
    }
}

fn main() -> eframe::Result<()> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("MuteSpeak starting up");

    // 2. Configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        AppConfig::default()
    });

    // 3. Voice settings
    let session = Session::new(&config, SettingsStore::new());

    // 4. Tokio runtime; speech runs on its blocking pool
    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .expect("failed to create tokio runtime");

    // 5. Speech worker
    let (command_tx, command_rx) = mpsc::channel::<SpeechCommand>(16);
    let (result_tx, result_rx) = mpsc::channel::<SpeechResult>(16);
    let launcher: Arc<dyn Launcher> = Arc::new(ProcessLauncher);
    rt.spawn(run_speaker(launcher, command_rx, result_tx));

    // 6. UI (blocks until the window is closed)
    let app = MuteSpeakApp::new(session, command_tx, result_rx);
    let options = native_options(&config);

    eframe::run_native(
        "MuteSpeak",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
}
