use std::error::Error;

mod dsn;
mod listen;
mod routes;
mod ui;

use optic_storage::RequestStorage;
use tracing::info;

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("optic-intake failed: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn Error + Send + Sync>> {
    let dsn = dsn::resolve_dsn()?;
    let storage = RequestStorage::connect(&dsn).await?;
    info!("db connected");
    storage.sync().await?;

    let app = axum::Router::new()
        .route("/", axum::routing::get(ui::intake_page))
        .merge(routes::api_router(storage))
        .fallback(axum::routing::get(ui::intake_page));

    let bind = listen::resolve_listen_addr();
    let listener = tokio::net::TcpListener::bind(&bind).await?;
    info!(addr = %bind, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new("optic_intake=info,optic_storage=info,sqlx=warn")
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
