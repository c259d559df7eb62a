use crate::cfg::Config;
use crate::state::State;
use anyhow::Result;
use idtoken::{IdTokenValidator, ValidatorConfig};
use std::fs;
use tracing::{info, Level};

//--------------------------------------------------------------------------------------------------

mod app;
mod cfg;
mod state;

//--------------------------------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<()> {
    // Load config
    let cfg: Config = config::Config::builder()
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::File::with_name("config.local").required(false))
        .add_source(config::Environment::with_prefix("IDTOKEN").separator("__"))
        .build()?
        .try_deserialize()?;

    // Initialize tracing
    let mut fmt_sub = tracing_subscriber::fmt();
    if cfg.debug {
        fmt_sub = fmt_sub.with_max_level(Level::DEBUG);
    } else {
        fmt_sub = fmt_sub.with_max_level(Level::INFO);
    }
    fmt_sub.init();

    // Read the identity provider's public key
    let public_key = fs::read(&cfg.public_key_path)?;

    // Create state
    let mut validator_cfg =
        ValidatorConfig::new(cfg.issuer, cfg.client_id, cfg.algorithm, public_key);
    if let Some(allowance) = cfg.clock_skew_allowance {
        validator_cfg = validator_cfg.with_clock_skew_allowance(allowance);
    }
    let validator = IdTokenValidator::new(validator_cfg)?;
    info!(
        "Validating ID tokens from {} for client {} using {:?}",
        validator.issuer(),
        validator.client_id(),
        validator.algorithm()
    );
    let state = State::new(validator);

    // Setup the API
    let app = app::router(state.into());

    // Run the API
    let bind_addr = format!("0.0.0.0:{}", cfg.http_port.unwrap_or(3001));
    info!("Listening on {}", bind_addr);
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

//--------------------------------------------------------------------------------------------------
