mod args;

use std::process::ExitCode;

use anyhow::{Context as _, Result};
use args::Args;
use clap::Parser as _;
use mongodb::bson::DateTime;
use room_conditions::{
    db::{RoomConditionStore, ServiceCredentials, connect, store_room_conditions},
    remo::RemoClient,
    room_condition::RoomCondition,
};
use tracing::info;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        eprintln!("{e:#}");
        return ExitCode::from(1);
    }

    println!("Completed!");

    ExitCode::from(0)
}

async fn run() -> Result<()> {
    let args = Args::parse();

    let remo = RemoClient::new(args.remo_token).context("failed to create Remo client")?;
    let devices = remo
        .fetch_devices()
        .await
        .context("failed to fetch devices")?;
    info!("fetched {} devices", devices.len());

    let credentials = ServiceCredentials::load(&args.credentials_file)
        .context("failed to load service credentials")?;
    let client = connect(&credentials)
        .await
        .context("failed to connect to database")?;
    let store = RoomConditionStore::new(&client, &credentials.database, &args.collection);

    let measured_at = DateTime::now();
    let conditions: Vec<RoomCondition> = devices
        .iter()
        .map(|device| RoomCondition::new(device, measured_at))
        .collect();

    let stored = store_room_conditions(&store, &conditions)
        .await
        .context("failed to store room conditions")?;
    info!("stored {} room conditions", stored);

    Ok(())
}
