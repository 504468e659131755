use imagen::logger::{self, LoggerConfig};
use imagen::{server, upstream, Config};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env before anything reads the environment
    let dotenv_loaded = dotenv::dotenv().is_ok();

    logger::init_with_config(LoggerConfig::development())?;

    if dotenv_loaded {
        log::info!("✅ .env file loaded successfully");
    } else {
        log::warn!("⚠️  No .env file found, using system environment variables");
    }

    let config = Config::from_env();
    log::info!("⚙️  Configuration loaded:");
    log::info!("   Port: {}", config.port);
    log::info!("   Frontend origin: {}", config.frontend_url);
    log::info!("   Upstream endpoint: {}", config.upstream_url);

    let generator = upstream::from_config(&config)?;

    server::run(config, generator).await?;

    Ok(())
}
