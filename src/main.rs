//! Report service binary.
//!
//! Usage: `headcount-engine [config.yaml]`. The configuration path may also
//! be given through `HEADCOUNT_CONFIG`; without either, defaults are used.
//! A roster that cannot be loaded stops the service before it binds.

use std::path::PathBuf;

use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use headcount_engine::api::{create_router, AppState};
use headcount_engine::config::ConfigLoader;
use headcount_engine::roster::cached_roster;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HEADCOUNT_CONFIG").map(PathBuf::from));
    let config = ConfigLoader::load_or_default(config_path.as_deref())?;

    let roster = match cached_roster(config.roster_path()) {
        Ok(roster) => roster,
        Err(err) => {
            error!(error = %err, "Could not load roster");
            return Err(err.into());
        }
    };
    info!(
        source = %roster.source(),
        total_employees = roster.len(),
        "Roster ready"
    );

    let bind_address = config.bind_address().to_string();
    let app = create_router(AppState::new(roster, config));

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind {bind_address}"))?;
    info!("Headcount report listening on http://{}", bind_address);

    axum::serve(listener, app).await?;
    Ok(())
}
