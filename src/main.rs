use clap::Parser;
use triviaboard::{
    db::Db,
    quiz::SessionRegistry,
    storage::Store,
    trivia::TriviaClient,
    AppState,
};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Local libSQL database, e.g. `file:triviaboard.db`.
    #[arg(long, env, default_value = "file:triviaboard.db")]
    database_url: String,

    /// Keep highscores in memory only.
    #[arg(long, env, default_value_t = false)]
    in_memory: bool,

    /// Trivia question endpoint.
    #[arg(long, env, default_value = triviaboard::names::DEFAULT_TRIVIA_API_URL)]
    trivia_api_url: url::Url,

    /// Mark cookies as `Secure` (serve over HTTPS).
    #[arg(long, env, default_value_t = false)]
    secure_cookies: bool,

    /// The address to bind to.
    #[arg(short, long, env, default_value = "127.0.0.1:1414")]
    address: String,
}

async fn open_store(args: &Args) -> Store {
    if args.in_memory {
        return Store::memory();
    }
    match Db::new(args.database_url.clone()).await {
        Ok(db) => Store::Db(db),
        Err(e) => {
            tracing::warn!("could not open {}, keeping scores in memory: {e}", args.database_url);
            Store::memory()
        }
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "tracing=info,triviaboard=debug".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    let store = open_store(&args).await;
    tracing::info!("highscores are kept in {} storage", store.kind());

    let state = AppState {
        store,
        trivia: TriviaClient::new(args.trivia_api_url.clone()),
        sessions: SessionRegistry::new(),
        secure_cookies: args.secure_cookies,
    };
    let app = triviaboard::router(state);

    let address = args.address.parse::<std::net::SocketAddr>()?;
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!("listening on {address}");
    axum::serve(listener, app).await?;

    Ok(())
}
