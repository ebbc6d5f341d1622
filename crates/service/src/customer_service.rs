use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::{info, instrument};

use models::customer;

use crate::domain::{CustomerCreate, CustomerUpdate};
use crate::errors::ServiceError;
use crate::pagination::ListParams;
use crate::{store, validation};

/// Create a customer; the email must not be registered yet.
#[instrument(skip_all)]
pub async fn create_customer(db: &DatabaseConnection, input: CustomerCreate) -> Result<customer::Model, ServiceError> {
    validation::check_fields(&input)?;
    let txn = db.begin().await?;
    validation::ensure_email_available(&txn, &input.email).await?;
    let created = store::customer::insert(&txn, &input).await?;
    txn.commit().await?;
    info!(id = created.id, "created customer");
    Ok(created)
}

pub async fn list_customers(db: &DatabaseConnection, params: ListParams) -> Result<Vec<customer::Model>, ServiceError> {
    store::customer::list(db, params).await
}

pub async fn get_customer(db: &DatabaseConnection, id: i32) -> Result<customer::Model, ServiceError> {
    store::customer::get(db, id).await
}

/// Partial update. Changing the email to one held by another customer is a
/// `Duplicate`; re-submitting the current email is fine.
#[instrument(skip(db, changes))]
pub async fn update_customer(
    db: &DatabaseConnection,
    id: i32,
    changes: CustomerUpdate,
) -> Result<customer::Model, ServiceError> {
    validation::check_fields(&changes)?;
    if changes.is_empty() {
        return store::customer::get(db, id).await;
    }
    let txn = db.begin().await?;
    let current = store::customer::get(&txn, id).await?;
    if let Some(email) = changes.email.as_deref().filter(|e| *e != current.email) {
        validation::ensure_email_available(&txn, email).await?;
    }
    let updated = store::customer::update(&txn, current, &changes).await?;
    txn.commit().await?;
    info!(id, "updated customer");
    Ok(updated)
}

/// Delete a customer together with its vehicles and their service records.
#[instrument(skip(db))]
pub async fn delete_customer(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let txn = db.begin().await?;
    if !store::customer::delete(&txn, id).await? {
        return Err(ServiceError::not_found("Customer"));
    }
    txn.commit().await?;
    info!(id, "deleted customer");
    Ok(())
}
