//! HealthFAQ: multilingual FAQ-matching healthcare chat server.

use std::path::PathBuf;
use std::sync::Arc;

use healthfaq_core::HealthFaqConfig;
use healthfaq_nlp::{create_pipeline, Normalizer};
use healthfaq_server::state::resolve_data_dir;
use healthfaq_server::{build_router, check, AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let data_dir_override = std::env::var_os("HEALTHFAQ_DATA_DIR");
    let args: Vec<String> = std::env::args().collect();

    // Handle CLI subcommands
    if args.len() > 1 {
        match args[1].as_str() {
            "--check" | "check" => {
                let data_dir = args
                    .get(2)
                    .map(PathBuf::from)
                    .unwrap_or_else(|| resolve_data_dir(data_dir_override.clone()));
                let config = HealthFaqConfig::from_env(&data_dir);
                let normalizer = Normalizer::new(create_pipeline(config.pipeline));
                let report = check::check(&data_dir, &normalizer);
                check::print_report(&report);
                std::process::exit(if report.is_usable() { 0 } else { 1 });
            }
            "--help" | "-h" | "help" => {
                println!("HealthFAQ: multilingual healthcare FAQ chat server");
                println!();
                println!("Usage: healthfaq [command]");
                println!();
                println!("Commands:");
                println!("  (none)                   Start the server");
                println!("  check [data-dir]         Validate the FAQ corpus files");
                println!("  help                     Show this help message");
                println!();
                println!("Environment:");
                println!("  PORT                     Listen port (default 5000)");
                println!("  HEALTHFAQ_DATA_DIR       Corpus directory (default ./data)");
                println!("  HEALTHFAQ_MATCH_THRESHOLD  Minimum match score (default 0.15)");
                println!("  HEALTHFAQ_HISTORY_LIMIT  Messages kept per user (default 50)");
                println!("  HEALTHFAQ_NLP_PIPELINE   snowball | simple");
                return Ok(());
            }
            _ => {
                eprintln!("Unknown command: {}. Use 'healthfaq help' for usage.", args[1]);
                std::process::exit(1);
            }
        }
    }

    // Normal server startup
    let data_dir = resolve_data_dir(data_dir_override);
    info!("Data directory: {}", data_dir.display());

    let config = HealthFaqConfig::from_env(&data_dir);
    let port = config.port;
    info!(
        "Match threshold {}, history limit {}",
        config.match_threshold, config.history_limit
    );

    // Build indexes and state
    let state = Arc::new(AppState::load(config));

    // Build router
    let app = build_router(state);

    // Start server

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("HealthFAQ server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
