use std::sync::Arc;

use anyhow::Context;
use nextwave::config::ServiceConfig;
use nextwave::service::{
    GeminiGenerator, PathwayGenerator, PathwayRouteState, PathwayService, pathway_routes,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = ServiceConfig::from_env();

    // Without GEMINI_API_KEY the service logs a warning and serves fallbacks
    let generator = GeminiGenerator::from_config(&config)
        .context("building Gemini client")?
        .map(|g| Arc::new(g) as Arc<dyn PathwayGenerator>);

    eprintln!("🎓 Next Wave pathway service v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Model: {}", config.gemini_model);
    eprintln!("   Endpoint: http://0.0.0.0:{}/pathway", config.port);

    let state = PathwayRouteState {
        service: Arc::new(PathwayService::new(generator)),
    };
    let app = pathway_routes(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!(%addr, "Pathway service listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down");
        })
        .await?;

    Ok(())
}
