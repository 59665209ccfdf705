use std::sync::Arc;

use clap::Parser;
use formbase::db::MongoStore;
use formbase::AppState;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Document store connection string.
    #[arg(long, env, default_value = "mongodb://localhost:27017")]
    url: String,

    /// Name of the database holding the question and response collections.
    #[arg(long, env, default_value = "form-backend")]
    database: String,

    /// The address to bind to.
    #[arg(short, long, env, default_value = "0.0.0.0:8011")]
    address: String,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "tracing=info,formbase=debug".to_owned());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();

    let store = MongoStore::connect(&args.url, &args.database).await?;
    let routes = formbase::router(AppState {
        store: Arc::new(store),
    });

    let address = args.address.parse::<std::net::SocketAddr>()?;
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!("server is running on {address}");

    axum::serve(listener, routes)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("shutting down");
    }
}
