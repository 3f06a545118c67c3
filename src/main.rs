use anyhow::Context;
use clap::Parser; // for cli
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use tutor_gateway::cache::ExplanationCache;
use tutor_gateway::config::Args;
use tutor_gateway::llm::OpenAiClient;
use tutor_gateway::metrics::CACHE_SIZE;
use tutor_gateway::ocr::TesseractExtractor;
use tutor_gateway::router;
use tutor_gateway::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // parse cli arguments
    let args = Args::parse();
    let timeout = args.collaborator_timeout();

    let completion = OpenAiClient::new(&args.openai_url, args.api_key.clone(), args.model.clone(), timeout)
        .context("failed to build completion client")?;
    let extractor = TesseractExtractor::new(args.tesseract_cmd.clone(), timeout);

    // creating shared state
    let state = Arc::new(
        AppState::new(
            ExplanationCache::new(args.cache_ttl()).with_size_gauge(CACHE_SIZE.clone()),
            Arc::new(completion),
            Arc::new(extractor),
        )
        .with_strict_subjects(args.strict_subjects),
    );

    let app = router(state);

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!(port = args.port, "tutor gateway listening");
    tracing::info!(url = %args.openai_url, model = %args.model, "completion API");
    tracing::info!(
        cache_ttl_secs = args.cache_ttl,
        timeout_secs = args.llm_timeout,
        strict_subjects = args.strict_subjects,
        "settings"
    );
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
