use phone_registry::config::ServerConfig;
use phone_registry::phones;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            eprintln!(
                "Usage: phone_registry [--bind <addr:port>] [--kv-url <url> --kv-token <token>] [--log-level <level>]"
            );
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    // 1. Store:
    let store = config.build_store();

    // 2. HTTP Router:
    let app = phones::router(store);

    // 3. Start HTTP server:
    tracing::info!("HTTP server listening on {}", config.bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
