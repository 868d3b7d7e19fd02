use std::{error::Error, process::ExitCode};

use config::{IdScheme, SeedConfig};
use seeding::{id::SequentialIds, store::MemoryStore, Seeder};

mod config;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(why) => {
            log::error!("{}", why);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let config = SeedConfig::from_env()?;
    let catalog = config.catalog()?;

    let seeder = Seeder::new(catalog, MemoryStore::new());
    let seeder = match config.id_scheme {
        IdScheme::Timestamp => seeder,
        IdScheme::Sequential => seeder.with_ids(SequentialIds::default()),
    };

    let report = seeder.seed(config.request()).await?;
    let records = seeder.store().records().await;
    println!("{}", serde_json::to_string_pretty(&records)?);

    log::info!(
        "initialization completed: {} of {} locations for {}",
        report.inserted,
        report.generated,
        report.selection
    );
    Ok(())
}
