use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;

use crate::error::ServiceError;
use crate::model::attendance::{Attendance, MarkAttendance, UpdateAttendance};
use crate::service;

/// List Attendance
#[utoipa::path(
    get,
    path = "/attendance",
    responses(
        (status = 200, description = "All attendance records", body = [Attendance]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn list_attendance(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ServiceError> {
    let records = service::attendance::list(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(records))
}

/// List Attendance by Employee
///
/// Returns an empty list for an employee with no records.
#[utoipa::path(
    get,
    path = "/attendance/{employee_id}",
    params(
        ("employee_id", Path, description = "Externally assigned employee identifier")
    ),
    responses(
        (status = 200, description = "Attendance records for the employee", body = [Attendance]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn list_employee_attendance(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let employee_id = path.into_inner();
    let records = service::attendance::list_by_employee(pool.get_ref(), &employee_id).await?;
    Ok(HttpResponse::Ok().json(records))
}

/// Mark Attendance
#[utoipa::path(
    post,
    path = "/attendance",
    request_body = MarkAttendance,
    responses(
        (status = 201, description = "Attendance marked", body = Attendance),
        (status = 400, description = "Already marked or invalid status", body = Object, example = json!({
            "message": "Attendance already marked for this employee on this date"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn mark_attendance(
    pool: web::Data<SqlitePool>,
    payload: web::Json<MarkAttendance>,
) -> Result<HttpResponse, ServiceError> {
    let record = service::attendance::mark(pool.get_ref(), payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(record))
}

/// Update Attendance
#[utoipa::path(
    put,
    path = "/attendance/{id}",
    params(
        ("id", Path, description = "Attendance record id")
    ),
    request_body = UpdateAttendance,
    responses(
        (status = 200, description = "Attendance updated", body = Attendance),
        (status = 400, description = "Invalid status"),
        (status = 404, description = "Attendance record not found", body = Object, example = json!({
            "message": "Attendance record not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn update_attendance(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    payload: web::Json<UpdateAttendance>,
) -> Result<HttpResponse, ServiceError> {
    let attendance_id = path.into_inner();
    let record =
        service::attendance::update(pool.get_ref(), attendance_id, payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(record))
}

/// Delete Attendance
#[utoipa::path(
    delete,
    path = "/attendance/{id}",
    params(
        ("id", Path, description = "Attendance record id")
    ),
    responses(
        (status = 204, description = "Attendance deleted"),
        (status = 404, description = "Attendance record not found", body = Object, example = json!({
            "message": "Attendance record not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn delete_attendance(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ServiceError> {
    let attendance_id = path.into_inner();
    service::attendance::delete(pool.get_ref(), attendance_id).await?;
    Ok(HttpResponse::NoContent().finish())
}
