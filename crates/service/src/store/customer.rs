use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use tracing::debug;

use models::customer::{self, Entity as Customer};
use models::vehicle;

use crate::domain::{CustomerCreate, CustomerUpdate};
use crate::errors::ServiceError;
use crate::pagination::ListParams;

pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<customer::Model>, ServiceError> {
    Ok(Customer::find_by_id(id).one(db).await?)
}

/// Like [`find`], but a missing row is `NotFound`.
pub async fn get<C: ConnectionTrait>(db: &C, id: i32) -> Result<customer::Model, ServiceError> {
    find(db, id).await?.ok_or_else(|| ServiceError::not_found("Customer"))
}

pub async fn find_by_email<C: ConnectionTrait>(db: &C, email: &str) -> Result<Option<customer::Model>, ServiceError> {
    Ok(Customer::find().filter(customer::Column::Email.eq(email)).one(db).await?)
}

pub async fn list<C: ConnectionTrait>(db: &C, params: ListParams) -> Result<Vec<customer::Model>, ServiceError> {
    let rows = Customer::find()
        .order_by_asc(customer::Column::Id)
        .offset(params.offset())
        .limit(params.row_limit())
        .all(db)
        .await?;
    Ok(rows)
}

pub async fn count<C: ConnectionTrait>(db: &C) -> Result<u64, ServiceError> {
    Ok(Customer::find().count(db).await?)
}

pub async fn insert(txn: &DatabaseTransaction, input: &CustomerCreate) -> Result<customer::Model, ServiceError> {
    let am = customer::ActiveModel {
        name: Set(input.name.clone()),
        email: Set(input.email.clone()),
        phone: Set(input.phone.clone()),
        ..Default::default()
    };
    Ok(am.insert(txn).await?)
}

/// Apply the fields present in `changes` to `current`.
pub async fn update(
    txn: &DatabaseTransaction,
    current: customer::Model,
    changes: &CustomerUpdate,
) -> Result<customer::Model, ServiceError> {
    let mut am: customer::ActiveModel = current.clone().into();
    if let Some(name) = &changes.name { am.name = Set(name.clone()); }
    if let Some(email) = &changes.email { am.email = Set(email.clone()); }
    if let Some(phone) = &changes.phone { am.phone = Set(phone.clone()); }
    if !am.is_changed() {
        return Ok(current);
    }
    Ok(am.update(txn).await?)
}

/// Delete a customer with its vehicles and their service records.
/// Returns `false` when the customer does not exist.
pub async fn delete(txn: &DatabaseTransaction, id: i32) -> Result<bool, ServiceError> {
    if find(txn, id).await?.is_none() {
        return Ok(false);
    }
    let owned: Vec<i32> = vehicle::Entity::find()
        .filter(vehicle::Column::CustomerId.eq(id))
        .all(txn)
        .await?
        .into_iter()
        .map(|v| v.id)
        .collect();
    let services = super::service_record::delete_for_vehicles(txn, &owned).await?;
    let vehicles = vehicle::Entity::delete_many()
        .filter(vehicle::Column::CustomerId.eq(id))
        .exec(txn)
        .await?
        .rows_affected;
    Customer::delete_by_id(id).exec(txn).await?;
    debug!(customer_id = id, vehicles, services, "customer subtree deleted");
    Ok(true)
}
