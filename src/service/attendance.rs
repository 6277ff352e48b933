//! Attendance lifecycle: one record per (employee_id, date), two-valued
//! status, bulk removal when the owning employee goes away.
//!
//! No referential check ties `employee_id` to an employee row; orphaned
//! attendance is permitted.

use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::debug;

use crate::error::ServiceError;
use crate::model::attendance::{Attendance, AttendanceStatus, MarkAttendance, UpdateAttendance};
use crate::store;

fn parse_status(status: &str) -> Result<AttendanceStatus, ServiceError> {
    AttendanceStatus::from_str(status).map_err(|_| {
        ServiceError::Validation(r#"Status must be either "Present" or "Absent""#.to_string())
    })
}

pub async fn list(pool: &SqlitePool) -> Result<Vec<Attendance>, ServiceError> {
    Ok(store::attendance::find_all(pool).await?)
}

pub async fn list_by_employee(
    pool: &SqlitePool,
    employee_id: &str,
) -> Result<Vec<Attendance>, ServiceError> {
    Ok(store::attendance::find_many_by_employee(pool, employee_id).await?)
}

pub async fn mark(pool: &SqlitePool, input: MarkAttendance) -> Result<Attendance, ServiceError> {
    let status = parse_status(&input.status)?;

    // Check-then-insert; the UNIQUE (employee_id, date) index backstops it.
    if store::attendance::find_one_by_key(pool, &input.employee_id, input.date)
        .await?
        .is_some()
    {
        return Err(ServiceError::DuplicateKey(
            "Attendance already marked for this employee on this date".into(),
        ));
    }

    let id = store::attendance::insert(pool, &input.employee_id, input.date, &status.to_string())
        .await
        .map_err(|e| {
            ServiceError::duplicate_on_unique(
                e,
                "Attendance already marked for this employee on this date",
            )
        })?;

    debug!(id, employee_id = %input.employee_id, date = %input.date, "Attendance marked");

    Ok(Attendance {
        id,
        employee_id: input.employee_id,
        date: input.date,
        status: status.to_string(),
    })
}

pub async fn update(
    pool: &SqlitePool,
    attendance_id: i64,
    input: UpdateAttendance,
) -> Result<Attendance, ServiceError> {
    let current = store::attendance::find_one(pool, attendance_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Attendance record not found".into()))?;

    let Some(status) = input.status.as_deref() else {
        return Ok(current);
    };

    let status = parse_status(status)?;
    store::attendance::update_status(pool, attendance_id, &status.to_string()).await?;

    Ok(Attendance {
        status: status.to_string(),
        ..current
    })
}

pub async fn delete(pool: &SqlitePool, attendance_id: i64) -> Result<(), ServiceError> {
    let removed = store::attendance::delete_one(pool, attendance_id).await?;
    if removed == 0 {
        return Err(ServiceError::NotFound("Attendance record not found".into()));
    }
    Ok(())
}

/// Bulk delete for the cascade path; a zero-match delete is a no-op, not an
/// error.
pub async fn delete_by_employee(
    pool: &SqlitePool,
    employee_id: &str,
) -> Result<u64, ServiceError> {
    Ok(store::attendance::delete_many_by_employee(pool, employee_id).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn mark_input(employee_id: &str, date: NaiveDate, status: &str) -> MarkAttendance {
        MarkAttendance {
            employee_id: employee_id.into(),
            date,
            status: status.into(),
        }
    }

    #[actix_web::test]
    async fn mark_then_list_by_employee() {
        let pool = test_pool().await;

        let marked = mark(&pool, mark_input("E1", day(1), "Present")).await.unwrap();
        assert!(marked.id > 0);
        assert_eq!(marked.status, "Present");

        let records = list_by_employee(&pool, "E1").await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].date, day(1));
    }

    #[actix_web::test]
    async fn double_mark_same_day_is_rejected() {
        let pool = test_pool().await;

        mark(&pool, mark_input("E1", day(1), "Present")).await.unwrap();
        let err = mark(&pool, mark_input("E1", day(1), "Absent")).await.unwrap_err();
        assert!(matches!(err, ServiceError::DuplicateKey(_)));

        // A different day for the same employee is fine.
        mark(&pool, mark_input("E1", day(2), "Absent")).await.unwrap();
    }

    #[actix_web::test]
    async fn invalid_status_is_rejected() {
        let pool = test_pool().await;

        let err = mark(&pool, mark_input("E1", day(1), "Late")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[actix_web::test]
    async fn update_changes_status_only() {
        let pool = test_pool().await;

        let marked = mark(&pool, mark_input("E1", day(1), "Present")).await.unwrap();

        let updated = update(
            &pool,
            marked.id,
            UpdateAttendance {
                status: Some("Absent".into()),
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.id, marked.id);
        assert_eq!(updated.employee_id, "E1");
        assert_eq!(updated.date, day(1));
        assert_eq!(updated.status, "Absent");
    }

    #[actix_web::test]
    async fn update_without_fields_returns_current_record() {
        let pool = test_pool().await;

        let marked = mark(&pool, mark_input("E1", day(1), "Present")).await.unwrap();
        let unchanged = update(&pool, marked.id, UpdateAttendance::default()).await.unwrap();
        assert_eq!(unchanged.status, "Present");
    }

    #[actix_web::test]
    async fn update_rejects_invalid_status() {
        let pool = test_pool().await;

        let marked = mark(&pool, mark_input("E1", day(1), "Present")).await.unwrap();
        let err = update(
            &pool,
            marked.id,
            UpdateAttendance {
                status: Some("Holiday".into()),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[actix_web::test]
    async fn update_unknown_id_is_not_found() {
        let pool = test_pool().await;

        let err = update(&pool, 9999, UpdateAttendance::default()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[actix_web::test]
    async fn delete_removes_record() {
        let pool = test_pool().await;

        let marked = mark(&pool, mark_input("E1", day(1), "Present")).await.unwrap();
        delete(&pool, marked.id).await.unwrap();

        assert!(list(&pool).await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn delete_unknown_id_is_not_found() {
        let pool = test_pool().await;

        let err = delete(&pool, 9999).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[actix_web::test]
    async fn delete_by_employee_counts_and_is_idempotent() {
        let pool = test_pool().await;

        mark(&pool, mark_input("E1", day(1), "Present")).await.unwrap();
        mark(&pool, mark_input("E1", day(2), "Absent")).await.unwrap();
        mark(&pool, mark_input("E2", day(1), "Present")).await.unwrap();

        assert_eq!(delete_by_employee(&pool, "E1").await.unwrap(), 2);
        assert_eq!(delete_by_employee(&pool, "E1").await.unwrap(), 0);

        let remaining = list(&pool).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].employee_id, "E2");
    }

    #[actix_web::test]
    async fn list_by_employee_with_no_rows_is_empty() {
        let pool = test_pool().await;

        let records = list_by_employee(&pool, "nobody").await.unwrap();
        assert!(records.is_empty());
    }
}
