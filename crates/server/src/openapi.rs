use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorBody {
    pub error: String,
    pub detail: Option<String>,
    pub code: Option<u16>,
}

#[derive(ToSchema)]
pub struct CustomerDoc { pub id: i32, pub name: String, pub email: String, pub phone: String }

#[derive(ToSchema)]
pub struct CustomerCreateDoc { pub name: String, pub email: String, pub phone: String }

#[derive(ToSchema)]
pub struct CustomerUpdateDoc { pub name: Option<String>, pub email: Option<String>, pub phone: Option<String> }

#[derive(ToSchema)]
pub struct VehicleDoc {
    pub id: i32,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub price: f64,
    pub status: String,
    pub customer_id: Option<i32>,
}

#[derive(ToSchema)]
pub struct VehicleCreateDoc {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub price: f64,
    /// Defaults to "available"
    pub status: Option<String>,
    pub customer_id: Option<i32>,
}

#[derive(ToSchema)]
pub struct VehicleUpdateDoc {
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub price: Option<f64>,
    pub status: Option<String>,
    /// `null` clears the owner
    pub customer_id: Option<i32>,
}

#[derive(ToSchema)]
pub struct ServiceDoc {
    pub id: i32,
    pub vehicle_id: i32,
    pub description: String,
    pub cost: f64,
    /// ISO date, `YYYY-MM-DD`
    pub date: String,
    pub status: String,
}

#[derive(ToSchema)]
pub struct ServiceCreateDoc {
    pub vehicle_id: i32,
    pub description: String,
    pub cost: f64,
    pub date: String,
    /// Defaults to "pending"
    pub status: Option<String>,
}

#[derive(ToSchema)]
pub struct ServiceUpdateDoc {
    pub vehicle_id: Option<i32>,
    pub description: Option<String>,
    pub cost: Option<f64>,
    pub date: Option<String>,
    pub status: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::customers::create,
        crate::routes::customers::list,
        crate::routes::customers::get,
        crate::routes::customers::update,
        crate::routes::customers::delete,
        crate::routes::vehicles::create,
        crate::routes::vehicles::list,
        crate::routes::vehicles::get,
        crate::routes::vehicles::update,
        crate::routes::vehicles::delete,
        crate::routes::services::create,
        crate::routes::services::list,
        crate::routes::services::get,
        crate::routes::services::update,
        crate::routes::services::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorBody,
            CustomerDoc,
            CustomerCreateDoc,
            CustomerUpdateDoc,
            VehicleDoc,
            VehicleCreateDoc,
            VehicleUpdateDoc,
            ServiceDoc,
            ServiceCreateDoc,
            ServiceUpdateDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "customers"),
        (name = "vehicles"),
        (name = "services")
    )
)]
pub struct ApiDoc;
