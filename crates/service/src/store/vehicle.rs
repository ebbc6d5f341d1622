use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, PaginatorTrait, QueryOrder,
    QuerySelect, Set,
};
use tracing::debug;

use models::vehicle::{self, Entity as Vehicle};

use crate::domain::{VehicleCreate, VehicleUpdate};
use crate::errors::ServiceError;
use crate::pagination::ListParams;

pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<vehicle::Model>, ServiceError> {
    Ok(Vehicle::find_by_id(id).one(db).await?)
}

pub async fn get<C: ConnectionTrait>(db: &C, id: i32) -> Result<vehicle::Model, ServiceError> {
    find(db, id).await?.ok_or_else(|| ServiceError::not_found("Vehicle"))
}

pub async fn list<C: ConnectionTrait>(db: &C, params: ListParams) -> Result<Vec<vehicle::Model>, ServiceError> {
    let rows = Vehicle::find()
        .order_by_asc(vehicle::Column::Id)
        .offset(params.offset())
        .limit(params.row_limit())
        .all(db)
        .await?;
    Ok(rows)
}

pub async fn count<C: ConnectionTrait>(db: &C) -> Result<u64, ServiceError> {
    Ok(Vehicle::find().count(db).await?)
}

pub async fn insert(txn: &DatabaseTransaction, input: &VehicleCreate) -> Result<vehicle::Model, ServiceError> {
    let am = vehicle::ActiveModel {
        make: Set(input.make.clone()),
        model: Set(input.model.clone()),
        year: Set(input.year),
        price: Set(input.price),
        status: Set(input.status.clone()),
        customer_id: Set(input.customer_id),
        ..Default::default()
    };
    Ok(am.insert(txn).await?)
}

pub async fn update(
    txn: &DatabaseTransaction,
    current: vehicle::Model,
    changes: &VehicleUpdate,
) -> Result<vehicle::Model, ServiceError> {
    let mut am: vehicle::ActiveModel = current.clone().into();
    if let Some(make) = &changes.make { am.make = Set(make.clone()); }
    if let Some(model) = &changes.model { am.model = Set(model.clone()); }
    if let Some(year) = changes.year { am.year = Set(year); }
    if let Some(price) = changes.price { am.price = Set(price); }
    if let Some(status) = &changes.status { am.status = Set(status.clone()); }
    if let Some(owner) = changes.customer_id { am.customer_id = Set(owner); }
    if !am.is_changed() {
        return Ok(current);
    }
    Ok(am.update(txn).await?)
}

/// Delete a vehicle and its service records. `false` if the vehicle is absent.
pub async fn delete(txn: &DatabaseTransaction, id: i32) -> Result<bool, ServiceError> {
    if find(txn, id).await?.is_none() {
        return Ok(false);
    }
    let services = super::service_record::delete_for_vehicles(txn, &[id]).await?;
    Vehicle::delete_by_id(id).exec(txn).await?;
    debug!(vehicle_id = id, services, "vehicle subtree deleted");
    Ok(true)
}
