//! encore-web - venue/artist/show listing service
//!
//! Serves the browsing, search, and listing pages over the encore database.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use encore_common::config::{database_path, resolve_root_folder};
use encore_web::{build_router, AppState};

#[derive(Debug, Parser)]
#[command(name = "encore-web", about = "Venue and artist listing service")]
struct Args {
    /// Root data folder (overrides ENCORE_ROOT_FOLDER and the config file)
    #[arg(long)]
    root_folder: Option<String>,

    /// Listen port
    #[arg(long, env = "ENCORE_PORT", default_value_t = 5730)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!(
        "Starting Encore listing service (encore-web) v{}",
        env!("CARGO_PKG_VERSION")
    );

    let args = Args::parse();

    let root_folder = resolve_root_folder(args.root_folder.as_deref(), "ENCORE_ROOT_FOLDER")?;
    std::fs::create_dir_all(&root_folder)?;

    let db_path = database_path(&root_folder);
    info!("Database path: {}", db_path.display());

    let pool = encore_common::db::init_database(&db_path).await?;

    let state = AppState::new(pool);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", args.port)).await?;
    info!("encore-web listening on http://127.0.0.1:{}", args.port);

    axum::serve(listener, app).await?;

    Ok(())
}
