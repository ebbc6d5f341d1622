//! Service layer for the shop backend.
//! - `store`: persistence with explicit, transactional cascade deletes.
//! - `validation`: field constraints plus uniqueness/existence checks.
//! - `*_service`: one module per entity orchestrating validation and store
//!   calls inside a scoped transaction.

pub mod errors;
pub mod domain;
pub mod pagination;
pub mod validation;
pub mod store;
pub mod customer_service;
pub mod vehicle_service;
pub mod service_record_service;
#[cfg(test)]
pub mod test_support;
