//! Desktop host for the Codex editing engine.
//!
//! Exposes a `run` helper so the workspace root can launch the native UI
//! without duplicating initialization logic.

mod app;

use app::CodexApp;
use codex_core::EditorConfig;
use eframe::egui;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "codex=warn,codex_core=info,codex_gui=info";

fn suppress_vulkan_loader_debug() {
    if std::env::var("CODEX_KEEP_VK_DEBUG").is_ok() {
        return;
    }
    std::env::remove_var("VK_LOADER_DEBUG");
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

/// Start the native UI with tracing enabled.
///
/// # Returns
/// The result of `eframe::run_native`.
///
/// # Errors
/// Propagates any `eframe` initialization or runtime error.
pub fn run() -> eframe::Result<()> {
    suppress_vulkan_loader_debug();
    init_tracing();

    let config = EditorConfig::from_env();
    tracing::info!(
        font_size = config.font_size,
        line_height = config.line_height,
        "starting codex"
    );
    let app = CodexApp::new(config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(app::DEFAULT_WINDOW_SIZE)
            .with_min_inner_size(app::MIN_WINDOW_SIZE)
            .with_title("Codex"),
        ..Default::default()
    };

    eframe::run_native("Codex", options, Box::new(|_cc| Ok(Box::new(app))))
}
