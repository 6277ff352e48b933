use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "employee_id": "EMP-001",
        "full_name": "John Doe",
        "email": "john.doe@company.com",
        "department": "Engineering",
        "created_at": "2024-01-01T09:00:00"
    })
)]
pub struct Employee {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = "EMP-001")]
    pub employee_id: String,

    #[schema(example = "John Doe")]
    pub full_name: String,

    #[schema(example = "john.doe@company.com")]
    pub email: String,

    #[schema(example = "Engineering")]
    pub department: String,

    #[schema(example = "2024-01-01T09:00:00", value_type = String, format = "date-time")]
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateEmployee {
    #[schema(example = "EMP-001")]
    pub employee_id: String,
    #[schema(example = "John Doe")]
    pub full_name: String,
    #[schema(example = "john.doe@company.com", format = "email")]
    pub email: String,
    #[schema(example = "Engineering")]
    pub department: String,
}

/// Partial update payload; omitted fields keep their stored value.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateEmployee {
    #[schema(example = "Jane Doe", nullable = true)]
    pub full_name: Option<String>,
    #[schema(example = "jane.doe@company.com", format = "email", nullable = true)]
    pub email: Option<String>,
    #[schema(example = "Finance", nullable = true)]
    pub department: Option<String>,
}
