/**
 * LocalFetch Headless Server Entry Point
 *
 * Runs the shared text server without the desktop app. Relay events are
 * forwarded to the tracing output instead of a GUI.
 */

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use localfetch::backend::server::{load_config, ServerController};
    use localfetch::backend::text::SharedTextStore;
    use localfetch::shared::{event_relay, RelayEvent};

    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = load_config();
    let (relay, mut events) = event_relay();
    let store = SharedTextStore::new(config.initial_text.clone(), relay.clone());
    let mut controller = ServerController::new(config, store, relay);

    let forwarder = tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            match event {
                RelayEvent::LogMessage(line) => tracing::info!("{}", line),
                RelayEvent::TextChanged { text, origin } => {
                    tracing::info!("Shared text updated by {} ({} bytes)", origin, text.len())
                }
                RelayEvent::ServerStatus { state, detail } => {
                    tracing::info!("Status: {} - {}", state, detail)
                }
            }
        }
    });

    controller.start().await?;
    tracing::info!("Press Ctrl+C to shut down");

    tokio::signal::ctrl_c().await?;
    tracing::info!("Received Ctrl+C, initiating shutdown");
    controller.stop().await;

    drop(controller);
    let _ = forwarder.await;
    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    eprintln!("Server requires the 'ssr' feature to be enabled.");
    eprintln!("Run with: cargo run --bin localfetch-server --features ssr");
    std::process::exit(1);
}
