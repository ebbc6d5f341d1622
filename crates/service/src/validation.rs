//! Validation layer: field constraints first, then cross-entity checks.
//!
//! Field checks never touch storage. Uniqueness and existence checks take the
//! caller's connection so they read through the same transaction as the write
//! that follows them.
use sea_orm::ConnectionTrait;
use tracing::debug;
use validator::{Validate, ValidationErrors};

use crate::errors::ServiceError;
use crate::store;

/// Apply the declared field constraints of a payload.
pub fn check_fields<T: Validate>(payload: &T) -> Result<(), ServiceError> {
    payload.validate().map_err(|e| {
        let msg = describe(&e);
        debug!(%msg, "payload rejected");
        ServiceError::Validation(msg)
    })
}

/// `field: message` pairs, sorted by field for stable output.
fn describe(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let msgs: Vec<String> = errs
                .iter()
                .map(|e| e.message.as_ref().map(|m| m.to_string()).unwrap_or_else(|| e.code.to_string()))
                .collect();
            format!("{}: {}", field, msgs.join(", "))
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

pub async fn ensure_email_available<C: ConnectionTrait>(db: &C, email: &str) -> Result<(), ServiceError> {
    match store::customer::find_by_email(db, email).await? {
        Some(_) => Err(ServiceError::email_taken()),
        None => Ok(()),
    }
}

pub async fn ensure_customer_exists<C: ConnectionTrait>(db: &C, id: i32) -> Result<(), ServiceError> {
    store::customer::get(db, id).await.map(|_| ())
}

pub async fn ensure_vehicle_exists<C: ConnectionTrait>(db: &C, id: i32) -> Result<(), ServiceError> {
    store::vehicle::get(db, id).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::{CustomerCreate, CustomerUpdate, ServiceCreate, VehicleCreate, VehicleUpdate};

    fn vehicle(year: i32, price: f64) -> VehicleCreate {
        VehicleCreate {
            make: "Ducati".into(),
            model: "Monster".into(),
            year,
            price,
            status: "available".into(),
            customer_id: None,
        }
    }

    #[test]
    fn year_bounds_are_inclusive() {
        assert!(check_fields(&vehicle(1900, 1.0)).is_ok());
        assert!(check_fields(&vehicle(2100, 1.0)).is_ok());
        assert!(check_fields(&vehicle(1899, 1.0)).is_err());
        assert!(check_fields(&vehicle(2101, 1.0)).is_err());
    }

    #[test]
    fn zero_price_accepted_negative_rejected() {
        assert!(check_fields(&vehicle(2000, 0.0)).is_ok());
        let err = check_fields(&vehicle(2000, -0.01)).unwrap_err();
        assert_eq!(err.kind(), "validation_error");
        assert!(err.to_string().starts_with("price:"));
    }

    #[test]
    fn customer_fields_are_checked() {
        let ok = CustomerCreate { name: "Ann".into(), email: "ann@example.com".into(), phone: "1".into() };
        assert!(check_fields(&ok).is_ok());

        let bad = CustomerCreate { name: String::new(), email: "not-an-email".into(), phone: "1".repeat(21) };
        let msg = check_fields(&bad).unwrap_err().to_string();
        assert!(msg.contains("email: must be a valid email address"));
        assert!(msg.contains("name:"));
        assert!(msg.contains("phone:"));
        // sorted by field name
        assert!(msg.find("email").unwrap() < msg.find("name").unwrap());
    }

    #[test]
    fn name_length_counts_characters() {
        let c = CustomerCreate { name: "é".repeat(100), email: "a@b.co".into(), phone: "1".into() };
        assert!(check_fields(&c).is_ok());
    }

    #[test]
    fn absent_update_fields_are_not_validated() {
        assert!(check_fields(&CustomerUpdate::default()).is_ok());
        let bad = CustomerUpdate { phone: Some(String::new()), ..Default::default() };
        assert!(check_fields(&bad).is_err());
        let bad_year = VehicleUpdate { year: Some(1899), ..Default::default() };
        assert!(check_fields(&bad_year).is_err());
    }

    #[test]
    fn service_description_and_cost_are_bounded() {
        let mut s = ServiceCreate {
            vehicle_id: 1,
            description: "x".repeat(500),
            cost: 0.0,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            status: "x".repeat(20),
        };
        assert!(check_fields(&s).is_ok());
        s.description = "x".repeat(501);
        assert!(check_fields(&s).is_err());
        s.description = "ok".into();
        s.cost = -1.0;
        assert!(check_fields(&s).is_err());
        s.cost = 1.0;
        s.status = "x".repeat(21);
        assert!(check_fields(&s).is_err());
    }
}
