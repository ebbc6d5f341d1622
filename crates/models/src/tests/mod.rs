//! Storage-layer constraint tests: these hold even when the service layer's
//! pre-checks are bypassed.
use chrono::NaiveDate;
use migration::MigratorTrait;
use sea_orm::{
    ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, EntityTrait, ModelTrait, Set,
};

use crate::{customer, service_record, vehicle};

async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).sqlx_logging(false);
    let db = Database::connect(opts).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

async fn insert_customer(db: &DatabaseConnection, email: &str) -> anyhow::Result<customer::Model> {
    let am = customer::ActiveModel {
        name: Set("Ada".into()),
        email: Set(email.into()),
        phone: Set("555-0100".into()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

async fn insert_vehicle(db: &DatabaseConnection, customer_id: Option<i32>) -> anyhow::Result<vehicle::Model> {
    let am = vehicle::ActiveModel {
        make: Set("Honda".into()),
        model: Set("CB500".into()),
        year: Set(2020),
        price: Set(5999.0),
        status: Set(vehicle::DEFAULT_STATUS.into()),
        customer_id: Set(customer_id),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

#[tokio::test]
async fn ids_are_generated_in_insertion_order() -> anyhow::Result<()> {
    let db = setup_test_db().await?;
    let a = insert_customer(&db, "a@example.com").await?;
    let b = insert_customer(&db, "b@example.com").await?;
    assert!(b.id > a.id);
    Ok(())
}

#[tokio::test]
async fn email_unique_constraint_rejects_duplicate() -> anyhow::Result<()> {
    let db = setup_test_db().await?;
    insert_customer(&db, "dup@example.com").await?;
    let err = insert_customer(&db, "dup@example.com").await.unwrap_err();
    let db_err = err.downcast::<sea_orm::DbErr>()?;
    assert!(matches!(db_err.sql_err(), Some(sea_orm::SqlErr::UniqueConstraintViolation(_))));
    assert_eq!(customer::Entity::find().all(&db).await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn vehicle_fk_rejects_missing_customer() -> anyhow::Result<()> {
    let db = setup_test_db().await?;
    assert!(insert_vehicle(&db, Some(9999)).await.is_err());
    let unowned = insert_vehicle(&db, None).await?;
    assert_eq!(unowned.customer_id, None);
    Ok(())
}

#[tokio::test]
async fn fk_restrict_blocks_implicit_cascade() -> anyhow::Result<()> {
    let db = setup_test_db().await?;
    let c = insert_customer(&db, "owner@example.com").await?;
    let v = insert_vehicle(&db, Some(c.id)).await?;

    assert!(customer::Entity::delete_by_id(c.id).exec(&db).await.is_err());
    assert!(vehicle::Entity::find_by_id(v.id).one(&db).await?.is_some());
    Ok(())
}

#[tokio::test]
async fn relations_resolve_both_ways() -> anyhow::Result<()> {
    let db = setup_test_db().await?;
    let c = insert_customer(&db, "rel@example.com").await?;
    let v = insert_vehicle(&db, Some(c.id)).await?;
    let s = service_record::ActiveModel {
        vehicle_id: Set(v.id),
        description: Set("Oil change".into()),
        cost: Set(49.5),
        date: Set(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()),
        status: Set(service_record::DEFAULT_STATUS.into()),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    let owned = c.find_related(vehicle::Entity).all(&db).await?;
    assert_eq!(owned, vec![v.clone()]);
    let records = v.find_related(service_record::Entity).all(&db).await?;
    assert_eq!(records, vec![s.clone()]);
    let owner = v.find_related(customer::Entity).one(&db).await?;
    assert_eq!(owner.map(|o| o.id), Some(c.id));
    Ok(())
}
