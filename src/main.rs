//! Dossier server binary.
//!
//! Starts the HTTP server by default, or runs a single research query from
//! the terminal via the `research` subcommand.

use anyhow::Context;
use axum::{extract::Request, middleware::Next, response::Response};
use dossier::cli::output::Output;
use dossier::cli::{Cli, Commands};
use dossier::llm::OllamaClient;
use dossier::research::{format_brief, ResearchCoordinator};
use dossier::search::GoogleSearch;
use dossier::{AppState, Config, LanguageModel, SearchProvider};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, info_span, Instrument};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();

    init_tracing(cli.verbose);

    let output = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            output.error(&format!("Configuration error: {}", e));
            return Err(e.into());
        }
    };

    match cli.command {
        Some(Commands::Research {
            query,
            json,
            max_results,
        }) => run_research(config, query, json, max_results, &output).await,
        Some(Commands::Serve) | None => serve(config, &output).await,
    }
}

/// Request ID middleware - adds unique ID to each request for tracing
async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        uri = %uri,
    );

    let response = next.run(request).instrument(span).await;

    let duration = start.elapsed();
    info!(
        request_id = %request_id,
        method = %method,
        uri = %uri,
        status = %response.status().as_u16(),
        duration_ms = duration.as_millis(),
        "Request completed"
    );

    response
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn build_state(config: Config) -> anyhow::Result<AppState> {
    let llm: Arc<dyn LanguageModel> = Arc::new(OllamaClient::new(
        config.llm.ollama_url.clone(),
        config.llm.model.clone(),
    ));
    let search: Arc<dyn SearchProvider> = Arc::new(GoogleSearch::new(
        &config.search,
        config.research.search_timeout(),
    )?);

    Ok(AppState {
        config: Arc::new(config),
        llm,
        search,
    })
}

async fn serve(config: Config, output: &Output) -> anyhow::Result<()> {
    output.banner();

    if !config.search.is_configured() {
        output.warning("Google search credentials not set; briefs will cite internal knowledge only");
    }

    let state = build_state(config)?;

    output.kv("Host", &state.config.server.host);
    output.kv("Port", &state.config.server.port.to_string());
    output.kv("Model", state.llm.model_name());
    output.info(&format!("Ollama endpoint: {}", state.config.llm.ollama_url));
    output.newline();

    let app = dossier::api::routes::create_router()
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state.clone());

    let addr: SocketAddr = format!(
        "{}:{}",
        state.config.server.host, state.config.server.port
    )
    .parse()
    .context("invalid server address")?;

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    output.success(&format!("Server running on http://{}", addr));
    output.hint("API documentation at /api/openapi.json");
    info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

async fn run_research(
    mut config: Config,
    query: String,
    json: bool,
    max_results: Option<usize>,
    output: &Output,
) -> anyhow::Result<()> {
    if let Some(max_results) = max_results {
        config.research.max_results_per_task = max_results;
    }
    if !json && !config.search.is_configured() {
        output.warning("Google search credentials not set; the brief will cite internal knowledge only");
    }

    let state = build_state(config)?;
    let coordinator = ResearchCoordinator::new(
        Arc::clone(&state.llm),
        Arc::clone(&state.search),
        state.config.research.clone(),
    );

    let result = match coordinator.research(&query).await {
        Ok(result) => result,
        Err(e) => {
            output.error(&e.to_string());
            return Err(e.into());
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", format_brief(&result)?);
    }

    Ok(())
}

/// Handle graceful shutdown signals (Ctrl+C, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down gracefully...");
        },
        _ = terminate => {
            info!("Received SIGTERM, shutting down gracefully...");
        },
    }
}
