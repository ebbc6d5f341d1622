//! Operations on service records (maintenance work attached to a vehicle).
use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::{info, instrument};

use models::service_record;

use crate::domain::{ServiceCreate, ServiceUpdate};
use crate::errors::ServiceError;
use crate::pagination::ListParams;
use crate::{store, validation};

#[instrument(skip(db, input), fields(vehicle_id = input.vehicle_id))]
pub async fn create_service(db: &DatabaseConnection, input: ServiceCreate) -> Result<service_record::Model, ServiceError> {
    validation::check_fields(&input)?;
    let txn = db.begin().await?;
    validation::ensure_vehicle_exists(&txn, input.vehicle_id).await?;
    let created = store::service_record::insert(&txn, &input).await?;
    txn.commit().await?;
    info!(id = created.id, "created service record");
    Ok(created)
}

pub async fn list_services(db: &DatabaseConnection, params: ListParams) -> Result<Vec<service_record::Model>, ServiceError> {
    store::service_record::list(db, params).await
}

pub async fn get_service(db: &DatabaseConnection, id: i32) -> Result<service_record::Model, ServiceError> {
    store::service_record::get(db, id).await
}

#[instrument(skip(db, changes))]
pub async fn update_service(
    db: &DatabaseConnection,
    id: i32,
    changes: ServiceUpdate,
) -> Result<service_record::Model, ServiceError> {
    validation::check_fields(&changes)?;
    if changes.is_empty() {
        return store::service_record::get(db, id).await;
    }
    let txn = db.begin().await?;
    let current = store::service_record::get(&txn, id).await?;
    if let Some(vehicle_id) = changes.vehicle_id {
        validation::ensure_vehicle_exists(&txn, vehicle_id).await?;
    }
    let updated = store::service_record::update(&txn, current, &changes).await?;
    txn.commit().await?;
    info!(id, "updated service record");
    Ok(updated)
}

#[instrument(skip(db))]
pub async fn delete_service(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let txn = db.begin().await?;
    if !store::service_record::delete(&txn, id).await? {
        return Err(ServiceError::not_found("Service"));
    }
    txn.commit().await?;
    info!(id, "deleted service record");
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::test_support::{get_db, service_input, vehicle_input};
    use crate::vehicle_service::create_vehicle;

    #[tokio::test]
    async fn unknown_vehicle_is_not_found() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let err = create_service(&db, service_input(77)).await.unwrap_err();
        assert_eq!(err, ServiceError::not_found("Vehicle"));
        assert_eq!(store::service_record::count(&db).await?, 0);
        Ok(())
    }

    #[tokio::test]
    async fn crud_round_trip() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let v = create_vehicle(&db, vehicle_input(None)).await?;
        let s = create_service(&db, service_input(v.id)).await?;
        assert_eq!(s.status, "pending");
        assert_eq!(s.date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(get_service(&db, s.id).await?, s);

        let changes = ServiceUpdate { cost: Some(0.0), status: Some("done".into()), ..Default::default() };
        let updated = update_service(&db, s.id, changes).await?;
        assert_eq!(updated.cost, 0.0);
        assert_eq!(updated.status, "done");
        assert_eq!(updated.description, s.description);

        assert_eq!(list_services(&db, ListParams::default()).await?, vec![updated]);

        delete_service(&db, s.id).await?;
        assert_eq!(get_service(&db, s.id).await.unwrap_err(), ServiceError::not_found("Service"));
        assert_eq!(delete_service(&db, s.id).await.unwrap_err(), ServiceError::not_found("Service"));
        Ok(())
    }

    #[tokio::test]
    async fn moving_to_missing_vehicle_is_rejected() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let v = create_vehicle(&db, vehicle_input(None)).await?;
        let other = create_vehicle(&db, vehicle_input(None)).await?;
        let s = create_service(&db, service_input(v.id)).await?;

        let missing = ServiceUpdate { vehicle_id: Some(5000), ..Default::default() };
        assert_eq!(update_service(&db, s.id, missing).await.unwrap_err(), ServiceError::not_found("Vehicle"));

        let moved = ServiceUpdate { vehicle_id: Some(other.id), ..Default::default() };
        assert_eq!(update_service(&db, s.id, moved).await?.vehicle_id, other.id);
        Ok(())
    }

    #[tokio::test]
    async fn negative_cost_is_rejected() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let v = create_vehicle(&db, vehicle_input(None)).await?;
        let mut input = service_input(v.id);
        input.cost = -5.0;
        assert!(matches!(create_service(&db, input).await, Err(ServiceError::Validation(_))));
        assert_eq!(store::service_record::count(&db).await?, 0);
        Ok(())
    }
}
