use std::sync::Arc;

use anyhow::Result;
use log::{error, info};

use property_manager::{
    config::{self, Config},
    db::postgres::PgUnitStore,
    logger::{level_from_str, setup_logger},
    ComplexReport,
};

#[tokio::main]
async fn main() -> Result<()> {
    let config: Arc<Config> = Arc::new(config::read_config()?);

    // Initialize logger
    setup_logger(level_from_str(&config.log_level))?;

    let store = PgUnitStore::new(&config);

    match ComplexReport::collect(&store, &config.rates).await {
        Ok(report) => info!(
            "Complex at {}: {} units ({} available, {} open bedrooms), area {:.1}, cost {:.2}, {} tenants, revenue {:.2}",
            report.generated_at,
            report.units,
            report.available_units,
            report.vacancies,
            report.area,
            report.cost,
            report.tenants,
            report.revenue
        ),
        Err(err) => {
            error!("Error: {:?}", err);
            return Err(err.into());
        }
    }

    Ok(())
}
