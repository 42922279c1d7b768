use std::{net::SocketAddr, path::PathBuf};

use anyhow::{Context, Result};

use estudos_api::{db::Database, rest, seed, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let db_path = std::env::var("ESTUDOS_DB_PATH").unwrap_or_else(|_| "estudos.sqlite3".into());
    let bind = std::env::var("ESTUDOS_BIND").unwrap_or_else(|_| "127.0.0.1:8000".into());
    let addr: SocketAddr = bind
        .parse()
        .with_context(|| format!("invalid listen address '{bind}'"))?;

    log::info!("Sistema de Planejamento de Estudos starting up...");

    let db = Database::new(PathBuf::from(db_path))?;
    seed::initialize_disciplinas(&db).await?;

    rest::serve(AppState::new(db), addr).await
}
