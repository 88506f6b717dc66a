// Main entry point
use actix_web::{App, HttpServer};
use agent_proxy::infrastructure::config::{self, Config, Logging};
use agent_proxy::interfaces::cli::Cli;
use agent_proxy::interfaces::http::{cors_headers, mount, PROCESS_PATH};
use agent_proxy::state::AppState;
use clap::Parser;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if cli.generate_config {
        config::generate_config_sample(cli.config.as_deref())?;
        return Ok(());
    }

    let config = resolve_config(&cli)?;

    // Initialize logging
    if config.logging.enable {
        init_logging(&config.logging)?;
    }

    if config.anthropic.api_key().is_none() {
        warn!(
            "{} is not set; requests will fail until a key is configured",
            config::ENV_API_KEY
        );
    }

    let bind_addr = (config.server.host.clone(), config.server.port);
    let workers = config.server.workers;
    let max_body_bytes = config.server.max_body_bytes;
    let state = actix_web::web::Data::new(AppState::new(config)?);

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(cors_headers())
            .configure(move |cfg| mount(cfg, max_body_bytes))
    });
    if let Some(workers) = workers {
        server = server.workers(workers);
    }

    let server = server.bind(bind_addr.clone())?.run();
    info!(
        "Listening on http://{}:{}{}",
        bind_addr.0, bind_addr.1, PROCESS_PATH
    );

    // actix handles SIGINT/SIGTERM and drains in-flight requests
    server.await?;
    info!("Server stopped");

    Ok(())
}

/// File config, then environment, then command-line flags
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = config::load_config(cli.config.as_deref())?;
    config::apply_env_overrides(&mut config, |key| std::env::var(key).ok());

    if let Some(host) = &cli.host {
        config.server.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    Ok(config)
}

/// Initialize logging with path and level configuration
fn init_logging(logging: &Logging) -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let level = logging.filter_directive();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if let Some(path) = &logging.path {
        if !path.is_empty() {
            // Log to file
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .init();
            return Ok(());
        }
    }

    // Log to stderr (default)
    tracing_subscriber::fmt().with_env_filter(filter).init();

    Ok(())
}
