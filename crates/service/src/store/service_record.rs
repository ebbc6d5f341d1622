use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

use models::service_record::{self, Entity as ServiceRecord};

use crate::domain::{ServiceCreate, ServiceUpdate};
use crate::errors::ServiceError;
use crate::pagination::ListParams;

pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<service_record::Model>, ServiceError> {
    Ok(ServiceRecord::find_by_id(id).one(db).await?)
}

pub async fn get<C: ConnectionTrait>(db: &C, id: i32) -> Result<service_record::Model, ServiceError> {
    find(db, id).await?.ok_or_else(|| ServiceError::not_found("Service"))
}

pub async fn list<C: ConnectionTrait>(db: &C, params: ListParams) -> Result<Vec<service_record::Model>, ServiceError> {
    let rows = ServiceRecord::find()
        .order_by_asc(service_record::Column::Id)
        .offset(params.offset())
        .limit(params.row_limit())
        .all(db)
        .await?;
    Ok(rows)
}

pub async fn count<C: ConnectionTrait>(db: &C) -> Result<u64, ServiceError> {
    Ok(ServiceRecord::find().count(db).await?)
}

pub async fn insert(txn: &DatabaseTransaction, input: &ServiceCreate) -> Result<service_record::Model, ServiceError> {
    let am = service_record::ActiveModel {
        vehicle_id: Set(input.vehicle_id),
        description: Set(input.description.clone()),
        cost: Set(input.cost),
        date: Set(input.date),
        status: Set(input.status.clone()),
        ..Default::default()
    };
    Ok(am.insert(txn).await?)
}

pub async fn update(
    txn: &DatabaseTransaction,
    current: service_record::Model,
    changes: &ServiceUpdate,
) -> Result<service_record::Model, ServiceError> {
    let mut am: service_record::ActiveModel = current.clone().into();
    if let Some(vehicle_id) = changes.vehicle_id { am.vehicle_id = Set(vehicle_id); }
    if let Some(description) = &changes.description { am.description = Set(description.clone()); }
    if let Some(cost) = changes.cost { am.cost = Set(cost); }
    if let Some(date) = changes.date { am.date = Set(date); }
    if let Some(status) = &changes.status { am.status = Set(status.clone()); }
    if !am.is_changed() {
        return Ok(current);
    }
    Ok(am.update(txn).await?)
}

pub async fn delete(txn: &DatabaseTransaction, id: i32) -> Result<bool, ServiceError> {
    let res = ServiceRecord::delete_by_id(id).exec(txn).await?;
    Ok(res.rows_affected > 0)
}

/// Remove every service record attached to one of `vehicle_ids`.
pub(crate) async fn delete_for_vehicles(txn: &DatabaseTransaction, vehicle_ids: &[i32]) -> Result<u64, ServiceError> {
    if vehicle_ids.is_empty() {
        return Ok(0);
    }
    let res = ServiceRecord::delete_many()
        .filter(service_record::Column::VehicleId.is_in(vehicle_ids.iter().copied()))
        .exec(txn)
        .await?;
    Ok(res.rows_affected)
}
