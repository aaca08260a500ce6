use anyhow::Result;
use nth_max_service::{app, config, logging};

#[tokio::main]
async fn main() -> Result<()> {
    // Configuration first, it carries the log filter
    let config = config::load_config()?;
    logging::init_logging(&config.log_filter)?;
    tracing::info!(
        "Loaded config: bind_addr={}, max_file_size={}, fractional_policy={}",
        config.bind_addr,
        config.max_file_size,
        config.fractional_policy
    );
    let addr = config.bind_addr;

    // Build our application with its routes
    let app = app(config);

    // Run it
    tracing::info!("listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
