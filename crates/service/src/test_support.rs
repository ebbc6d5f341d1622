#![cfg(test)]
use chrono::NaiveDate;
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::domain::{CustomerCreate, ServiceCreate, VehicleCreate};

/// Fresh, migrated in-memory database for one test.
///
/// A single pooled connection keeps every query on the same in-memory
/// database; concurrent transactions queue for it.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opts).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

pub fn customer_input(email: &str) -> CustomerCreate {
    CustomerCreate { name: "Ann Driver".into(), email: email.into(), phone: "+1 555 0100".into() }
}

pub fn vehicle_input(customer_id: Option<i32>) -> VehicleCreate {
    VehicleCreate {
        make: "Kawasaki".into(),
        model: "Ninja 650".into(),
        year: 2021,
        price: 7499.0,
        status: "available".into(),
        customer_id,
    }
}

pub fn service_input(vehicle_id: i32) -> ServiceCreate {
    ServiceCreate {
        vehicle_id,
        description: "Chain and sprocket replacement".into(),
        cost: 180.0,
        date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        status: "pending".into(),
    }
}
