//! Request payloads and the field constraints they carry.
//!
//! Create payloads require every non-defaulted field. Update payloads are
//! partial: a `None` field is left untouched on the stored entity. An explicit
//! `null` is only accepted for `VehicleUpdate.customer_id`.
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use validator::Validate;

use models::{customer, service_record, vehicle};

pub type CustomerResponse = customer::Model;
pub type VehicleResponse = vehicle::Model;
pub type ServiceResponse = service_record::Model;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CustomerCreate {
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub name: String,
    #[validate(
        email(message = "must be a valid email address"),
        length(max = 100, message = "must be at most 100 characters")
    )]
    pub email: String,
    #[validate(length(min = 1, max = 20, message = "must be between 1 and 20 characters"))]
    pub phone: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CustomerUpdate {
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    #[serde(default, deserialize_with = "present")]
    pub name: Option<String>,
    #[validate(
        email(message = "must be a valid email address"),
        length(max = 100, message = "must be at most 100 characters")
    )]
    #[serde(default, deserialize_with = "present")]
    pub email: Option<String>,
    #[validate(length(min = 1, max = 20, message = "must be between 1 and 20 characters"))]
    #[serde(default, deserialize_with = "present")]
    pub phone: Option<String>,
}

impl CustomerUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none()
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VehicleCreate {
    #[validate(length(min = 1, max = 50, message = "must be between 1 and 50 characters"))]
    pub make: String,
    #[validate(length(min = 1, max = 50, message = "must be between 1 and 50 characters"))]
    pub model: String,
    #[validate(range(min = 1900, max = 2100, message = "must be between 1900 and 2100"))]
    pub year: i32,
    #[validate(range(min = 0.0, message = "must be greater than or equal to 0"))]
    pub price: f64,
    #[serde(default = "default_vehicle_status")]
    #[validate(length(max = 20, message = "must be at most 20 characters"))]
    pub status: String,
    #[serde(default)]
    pub customer_id: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct VehicleUpdate {
    #[validate(length(min = 1, max = 50, message = "must be between 1 and 50 characters"))]
    #[serde(default, deserialize_with = "present")]
    pub make: Option<String>,
    #[validate(length(min = 1, max = 50, message = "must be between 1 and 50 characters"))]
    #[serde(default, deserialize_with = "present")]
    pub model: Option<String>,
    #[validate(range(min = 1900, max = 2100, message = "must be between 1900 and 2100"))]
    #[serde(default, deserialize_with = "present")]
    pub year: Option<i32>,
    #[validate(range(min = 0.0, message = "must be greater than or equal to 0"))]
    #[serde(default, deserialize_with = "present")]
    pub price: Option<f64>,
    #[validate(length(max = 20, message = "must be at most 20 characters"))]
    #[serde(default, deserialize_with = "present")]
    pub status: Option<String>,
    /// Outer `None`: field absent. `Some(None)`: explicit `null`, the owner is cleared.
    #[serde(default, deserialize_with = "nullable")]
    pub customer_id: Option<Option<i32>>,
}

impl VehicleUpdate {
    pub fn is_empty(&self) -> bool {
        self.make.is_none()
            && self.model.is_none()
            && self.year.is_none()
            && self.price.is_none()
            && self.status.is_none()
            && self.customer_id.is_none()
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ServiceCreate {
    pub vehicle_id: i32,
    #[validate(length(min = 1, max = 500, message = "must be between 1 and 500 characters"))]
    pub description: String,
    #[validate(range(min = 0.0, message = "must be greater than or equal to 0"))]
    pub cost: f64,
    pub date: NaiveDate,
    #[serde(default = "default_service_status")]
    #[validate(length(max = 20, message = "must be at most 20 characters"))]
    pub status: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ServiceUpdate {
    #[serde(default, deserialize_with = "present")]
    pub vehicle_id: Option<i32>,
    #[validate(length(min = 1, max = 500, message = "must be between 1 and 500 characters"))]
    #[serde(default, deserialize_with = "present")]
    pub description: Option<String>,
    #[validate(range(min = 0.0, message = "must be greater than or equal to 0"))]
    #[serde(default, deserialize_with = "present")]
    pub cost: Option<f64>,
    #[serde(default, deserialize_with = "present")]
    pub date: Option<NaiveDate>,
    #[validate(length(max = 20, message = "must be at most 20 characters"))]
    #[serde(default, deserialize_with = "present")]
    pub status: Option<String>,
}

impl ServiceUpdate {
    pub fn is_empty(&self) -> bool {
        self.vehicle_id.is_none()
            && self.description.is_none()
            && self.cost.is_none()
            && self.date.is_none()
            && self.status.is_none()
    }
}

fn default_vehicle_status() -> String { vehicle::DEFAULT_STATUS.to_string() }
fn default_service_status() -> String { service_record::DEFAULT_STATUS.to_string() }

/// A field that is present must carry a value: `null` is rejected.
fn present<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(de).map(Some)
}

fn nullable<'de, D, T>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn vehicle_create_applies_defaults() {
        let v: VehicleCreate =
            serde_json::from_value(json!({"make": "Yamaha", "model": "MT-07", "year": 2022, "price": 7000.0}))
                .unwrap();
        assert_eq!(v.status, "available");
        assert_eq!(v.customer_id, None);
    }

    #[test]
    fn service_create_parses_iso_date_and_default_status() {
        let s: ServiceCreate = serde_json::from_value(
            json!({"vehicle_id": 3, "description": "Brake pads", "cost": 120.0, "date": "2024-05-17"}),
        )
        .unwrap();
        assert_eq!(s.date, NaiveDate::from_ymd_opt(2024, 5, 17).unwrap());
        assert_eq!(s.status, "pending");
    }

    #[test]
    fn vehicle_update_distinguishes_absent_from_null() {
        let absent: VehicleUpdate = serde_json::from_value(json!({"status": "sold"})).unwrap();
        assert_eq!(absent.customer_id, None);

        let null: VehicleUpdate = serde_json::from_value(json!({"customer_id": null})).unwrap();
        assert_eq!(null.customer_id, Some(None));
        assert!(!null.is_empty());

        let set: VehicleUpdate = serde_json::from_value(json!({"customer_id": 7})).unwrap();
        assert_eq!(set.customer_id, Some(Some(7)));
    }

    #[test]
    fn explicit_null_is_rejected_for_required_update_fields() {
        for body in [json!({"name": null}), json!({"email": null}), json!({"phone": null})] {
            assert!(serde_json::from_value::<CustomerUpdate>(body).is_err());
        }
        for body in [json!({"make": null}), json!({"year": null}), json!({"price": null}), json!({"status": null})] {
            assert!(serde_json::from_value::<VehicleUpdate>(body).is_err());
        }
        for body in [json!({"vehicle_id": null}), json!({"cost": null}), json!({"date": null})] {
            assert!(serde_json::from_value::<ServiceUpdate>(body).is_err());
        }
        let err = serde_json::from_value::<CustomerUpdate>(json!({"name": null})).unwrap_err();
        assert!(err.to_string().contains("null"), "{err}");
    }

    #[test]
    fn empty_updates_are_detected() {
        let c: CustomerUpdate = serde_json::from_value(json!({})).unwrap();
        assert!(c.is_empty());
        let s: ServiceUpdate = serde_json::from_value(json!({})).unwrap();
        assert!(s.is_empty());
        assert!(VehicleUpdate::default().is_empty());
    }
}
