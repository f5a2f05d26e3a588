use dotenv::dotenv;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use myjantes_backend::app::app::App;
use myjantes_backend::config::LogConfig;
use myjantes_backend::util::logger::Logger;


#[tokio::main]
async fn main() {
    // Load environment variables from .env file before anything reads them
    let dotenv_result = dotenv();

    let _logger = match Logger::new(&LogConfig::from_env()) {
        Ok(logger) => Some(logger),
        Err(e) => {
            // Console only
            let env_filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"));
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(true)
                .with_thread_ids(true)
                .with_level(true)
                .with_ansi(true)
                .init();
            warn!("⚠️ File logging disabled: {}", e);
            None
        }
    };

    info!("🚀 Starting MY JANTES Backend Application");
    match dotenv_result {
        Ok(_) => info!("✅ Successfully loaded .env file"),
        Err(e) => warn!("⚠️ Failed to load .env file: {} (using system env vars)", e),
    }

    let app = match App::new().await {
        Ok(app) => app,
        Err(e) => {
            error!("Failed to initialize application: {}", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = app.start().await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
