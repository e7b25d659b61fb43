//! Apple Farm Production Chain Simulator - command line entry point
//!
//! Loads a farm configuration, runs one pipeline execution, and renders
//! the resulting report as JSON.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use apple_farm_simulator::{reporting, AppleFarm, Config};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "farm_sim=info,apple_farm_simulator=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;
    config.validate()?;

    tracing::info!("Starting apple farm simulation");
    tracing::info!("Environment: {}", config.environment);

    let farm = AppleFarm::new(config);
    let report = farm.run();
    let summary = reporting::summarise(&report);

    tracing::info!(
        status = %summary.batch_status,
        total_cost = %summary.total_cost,
        product_quantity = %summary.total_product_quantity,
        unsold_kg = %summary.unsold_kg,
        "simulation complete"
    );

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
