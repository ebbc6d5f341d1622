//! Entity Store: persistence for customers, vehicles and service records.
//!
//! Reads take any [`ConnectionTrait`](sea_orm::ConnectionTrait) so they can
//! run on the pool or inside a transaction. Every write takes a
//! [`DatabaseTransaction`](sea_orm::DatabaseTransaction): the caller begins it,
//! commits it on success, and an early return drops it, which rolls back.
//!
//! Deletes cascade explicitly (customer → vehicles → service records). The
//! schema's foreign keys are RESTRICT, so a dependent this code misses fails
//! the transaction instead of being orphaned.

pub mod customer;
pub mod service_record;
pub mod vehicle;
