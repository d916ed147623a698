// Copyright (c) 2025 - Cowboy AI, Inc.
//! Building Demo
//!
//! Walks one building through registration, check-ins and check-outs against
//! the in-memory event store, then rebuilds it from the stored history.
//!
//! Run with: cargo run --bin building-demo
//!
//! Environment:
//! - `RUST_LOG` - log filter (default: info)
//! - `BUILDING_MAX_CONFLICT_RETRIES` - retry limit for conflicting appends

use anyhow::{Context, Result};
use chrono::Utc;
use cim_building::{
    aggregate::{CheckUserIntoBuilding, CheckUserOutOfBuilding, RegisterBuildingCommand},
    domain::{BuildingName, Username},
    event_store::{EventStore, InMemoryEventStore},
    service::{BuildingService, EventSourcedBuildingService, ServiceError},
    Building, BuildingServiceConfig,
};
use tracing::{info, warn};
use uuid::Uuid;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = BuildingServiceConfig::from_env().context("Invalid configuration")?;
    info!(max_conflict_retries = config.max_conflict_retries, "configuration loaded");

    let store = InMemoryEventStore::new();
    let service = EventSourcedBuildingService::with_config(store.clone(), config);
    let correlation_id = Uuid::now_v7();

    let building_id = service
        .register_building(RegisterBuildingCommand {
            name: BuildingName::new("Tower A").context("Invalid building name")?,
            timestamp: Utc::now(),
            correlation_id,
        })
        .await?;

    let alice = Username::new("alice").context("Invalid username")?;
    let check_in = || {
        CheckUserIntoBuilding::new(alice.clone(), building_id, Utc::now(), correlation_id)
    };
    let check_out = || {
        CheckUserOutOfBuilding::new(alice.clone(), building_id, Utc::now(), correlation_id)
    };

    service.check_in_user(check_in()).await?;
    report_rejection(service.check_in_user(check_in()).await);
    service.check_out_user(check_out()).await?;
    report_rejection(service.check_out_user(check_out()).await);

    let stored = store
        .read_events(building_id)
        .await
        .context("Failed to read event history")?;
    for event in &stored {
        println!(
            "{}",
            serde_json::to_string(event).context("Failed to serialize event")?
        );
    }

    let building = Building::from_stored_events(&stored)
        .context("Event history is corrupt")?
        .context("Building has no events")?;
    info!(
        %building_id,
        name = %building.name(),
        version = building.version(),
        checked_in = building.checked_in_users().len(),
        "building rebuilt from history"
    );

    Ok(())
}

fn report_rejection<T>(result: Result<T, ServiceError>) {
    match result {
        Ok(_) => warn!("command unexpectedly accepted"),
        Err(ServiceError::Command(err)) => info!(%err, "command rejected"),
        Err(err) => warn!(%err, "command failed"),
    }
}
