/**
 * egui Native Desktop App - Main Entry Point
 *
 * Builds the tokio runtime the server runs on, then hands the main thread
 * to eframe. The relay waker requests a repaint for every server event.
 */
use eframe::egui;
use localfetch::backend::server::load_config;
use localfetch::egui_app::theme::styles;
use localfetch::egui_app::{views, AppState, ThemePreference, RELAY_POLL_INTERVAL};
use localfetch::shared::event_relay_with_waker;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("localfetch-server")
        .build()?;
    let config = load_config();
    let theme_store = ThemePreference::default_location();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("LocalFetch Server")
            .with_inner_size([750.0, 550.0])
            .with_min_inner_size([600.0, 450.0]),
        ..Default::default()
    };

    eframe::run_native(
        "LocalFetch Server",
        options,
        Box::new(move |cc| {
            let ctx = cc.egui_ctx.clone();
            let (relay, events) = event_relay_with_waker(move || ctx.request_repaint());

            let mut state = AppState::new(runtime, config, relay, events, theme_store);
            styles::apply_theme(&cc.egui_ctx, state.theme);
            state.start_server();

            Ok(Box::new(LocalFetchApp { state }))
        }),
    )?;
    Ok(())
}

/// Main application state
struct LocalFetchApp {
    state: AppState,
}

impl eframe::App for LocalFetchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.process_events();

        if ctx.input(|i| i.viewport().close_requested()) && !self.state.on_close_requested() {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
        }

        views::render_top_bar(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);
        views::dialogs::render_error_dialog(ctx, &mut self.state);
        views::dialogs::render_quit_dialog(ctx, &mut self.state);

        ctx.request_repaint_after(RELAY_POLL_INTERVAL);
    }
}
