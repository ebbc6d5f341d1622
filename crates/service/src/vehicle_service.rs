use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::{info, instrument};

use models::vehicle;

use crate::domain::{VehicleCreate, VehicleUpdate};
use crate::errors::ServiceError;
use crate::pagination::ListParams;
use crate::{store, validation};

/// Create a vehicle; a non-null `customer_id` must name an existing customer.
#[instrument(skip(db, input), fields(customer_id = ?input.customer_id))]
pub async fn create_vehicle(db: &DatabaseConnection, input: VehicleCreate) -> Result<vehicle::Model, ServiceError> {
    validation::check_fields(&input)?;
    let txn = db.begin().await?;
    if let Some(owner) = input.customer_id {
        validation::ensure_customer_exists(&txn, owner).await?;
    }
    let created = store::vehicle::insert(&txn, &input).await?;
    txn.commit().await?;
    info!(id = created.id, "created vehicle");
    Ok(created)
}

pub async fn list_vehicles(db: &DatabaseConnection, params: ListParams) -> Result<Vec<vehicle::Model>, ServiceError> {
    store::vehicle::list(db, params).await
}

pub async fn get_vehicle(db: &DatabaseConnection, id: i32) -> Result<vehicle::Model, ServiceError> {
    store::vehicle::get(db, id).await
}

/// Partial update. Only a `customer_id` present in `changes` is checked;
/// an explicit `null` unassigns the owner.
#[instrument(skip(db, changes))]
pub async fn update_vehicle(
    db: &DatabaseConnection,
    id: i32,
    changes: VehicleUpdate,
) -> Result<vehicle::Model, ServiceError> {
    validation::check_fields(&changes)?;
    if changes.is_empty() {
        return store::vehicle::get(db, id).await;
    }
    let txn = db.begin().await?;
    let current = store::vehicle::get(&txn, id).await?;
    if let Some(Some(owner)) = changes.customer_id {
        validation::ensure_customer_exists(&txn, owner).await?;
    }
    let updated = store::vehicle::update(&txn, current, &changes).await?;
    txn.commit().await?;
    info!(id, "updated vehicle");
    Ok(updated)
}

/// Delete a vehicle together with its service records.
#[instrument(skip(db))]
pub async fn delete_vehicle(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let txn = db.begin().await?;
    if !store::vehicle::delete(&txn, id).await? {
        return Err(ServiceError::not_found("Vehicle"));
    }
    txn.commit().await?;
    info!(id, "deleted vehicle");
    Ok(())
}
