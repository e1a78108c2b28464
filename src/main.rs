use std::time::Duration;

use clap::Parser;
use quizrelay::{cors::CorsConfig, names, trivia::TriviaClient, AppState};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// The address to bind to.
    #[arg(short, long, env, default_value = names::DEFAULT_ADDRESS)]
    address: String,

    /// Trivia provider endpoint.
    #[arg(long, env, default_value = names::TRIVIA_API_URL)]
    trivia_url: String,

    /// Timeout for a single provider call, in seconds.
    #[arg(long, env, default_value_t = names::DEFAULT_TIMEOUT_SECS)]
    trivia_timeout_secs: u64,

    /// Allowed CORS origins, comma separated. Empty or `*` allows any origin.
    #[arg(long, env, value_delimiter = ',')]
    cors_origins: Vec<String>,

    /// Whether cross-origin requests may carry credentials.
    #[arg(long, env, default_value_t = true, action = clap::ArgAction::Set)]
    cors_credentials: bool,

    /// Expose the provider's specific failure reason in 400 responses.
    #[arg(long, env)]
    detailed_upstream_errors: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "quizrelay=debug,tower_http=info".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    let trivia = TriviaClient::new(
        args.trivia_url,
        Duration::from_secs(args.trivia_timeout_secs),
    )?;
    let cors = CorsConfig::from_origins(args.cors_origins, args.cors_credentials);
    let state = AppState {
        trivia,
        detailed_upstream_errors: args.detailed_upstream_errors,
    };

    let app = quizrelay::router(state, &cors);

    let address = args.address.parse::<std::net::SocketAddr>()?;
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!("listening on http://{address}");
    axum::serve(listener, app).await?;

    Ok(())
}
