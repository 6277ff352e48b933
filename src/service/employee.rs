//! Employee lifecycle: uniqueness of employee_id/email, field normalization,
//! partial updates, and cascade deletion of attendance records.

use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::ServiceError;
use crate::model::employee::{CreateEmployee, Employee, UpdateEmployee};
use crate::store::{self, SqlPatch};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email regex")
});

fn required_trimmed(value: &str, field: &str) -> Result<String, ServiceError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::Validation(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

fn check_email_syntax(email: &str) -> Result<(), ServiceError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(ServiceError::InvalidFormat)
    }
}

pub async fn list(pool: &SqlitePool) -> Result<Vec<Employee>, ServiceError> {
    Ok(store::employee::find_all(pool).await?)
}

pub async fn get(pool: &SqlitePool, employee_id: &str) -> Result<Employee, ServiceError> {
    store::employee::find_one(pool, employee_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Employee not found".into()))
}

pub async fn create(pool: &SqlitePool, input: CreateEmployee) -> Result<Employee, ServiceError> {
    let employee_id = required_trimmed(&input.employee_id, "Employee ID")?;
    let full_name = required_trimmed(&input.full_name, "Full name")?;
    let department = required_trimmed(&input.department, "Department")?;
    let email = input.email.trim().to_string();

    // Two independent existence checks, not atomic with the insert below.
    // The UNIQUE indexes catch a lost race and report the same error.
    if store::employee::find_one(pool, &employee_id).await?.is_some() {
        return Err(ServiceError::DuplicateKey("Employee ID already exists".into()));
    }
    if store::employee::find_one_by_email(pool, &email).await?.is_some() {
        return Err(ServiceError::DuplicateKey("Email already exists".into()));
    }
    check_email_syntax(&email)?;

    let created_at = Utc::now().naive_utc();
    let id = store::employee::insert(pool, &employee_id, &full_name, &email, &department, created_at)
        .await
        .map_err(|e| ServiceError::duplicate_on_unique(e, "Employee ID or email already exists"))?;

    debug!(id, %employee_id, "Employee created");

    Ok(Employee {
        id,
        employee_id,
        full_name,
        email,
        department,
        created_at,
    })
}

pub async fn update(
    pool: &SqlitePool,
    employee_id: &str,
    input: UpdateEmployee,
) -> Result<Employee, ServiceError> {
    let current = store::employee::find_one(pool, employee_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Employee not found".into()))?;

    let mut patch = SqlPatch::new();

    if let Some(full_name) = input.full_name.as_deref() {
        patch.set("full_name", required_trimmed(full_name, "Full name")?);
    }
    if let Some(department) = input.department.as_deref() {
        patch.set("department", required_trimmed(department, "Department")?);
    }
    if let Some(email) = input.email.as_deref() {
        let email = email.trim().to_string();
        if email != current.email {
            if store::employee::find_one_by_email(pool, &email).await?.is_some() {
                return Err(ServiceError::DuplicateKey("Email already exists".into()));
            }
            check_email_syntax(&email)?;
        }
        patch.set("email", email);
    }

    if !patch.is_empty() {
        store::employee::update_one(pool, employee_id, patch)
            .await
            .map_err(|e| ServiceError::duplicate_on_unique(e, "Email already exists"))?;
    }

    get(pool, employee_id).await
}

pub async fn delete(pool: &SqlitePool, employee_id: &str) -> Result<(), ServiceError> {
    if store::employee::find_one(pool, employee_id).await?.is_none() {
        return Err(ServiceError::NotFound("Employee not found".into()));
    }

    // Cascade order: attendance rows before the employee row.
    let removed = crate::service::attendance::delete_by_employee(pool, employee_id).await?;
    store::employee::delete_one(pool, employee_id).await?;

    debug!(employee_id, removed, "Employee deleted");
    Ok(())
}
