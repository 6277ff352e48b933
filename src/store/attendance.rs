use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::model::attendance::Attendance;

pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Attendance>, sqlx::Error> {
    sqlx::query_as::<_, Attendance>("SELECT * FROM attendance")
        .fetch_all(pool)
        .await
}

pub async fn find_many_by_employee(
    pool: &SqlitePool,
    employee_id: &str,
) -> Result<Vec<Attendance>, sqlx::Error> {
    sqlx::query_as::<_, Attendance>("SELECT * FROM attendance WHERE employee_id = ?")
        .bind(employee_id)
        .fetch_all(pool)
        .await
}

pub async fn find_one(
    pool: &SqlitePool,
    attendance_id: i64,
) -> Result<Option<Attendance>, sqlx::Error> {
    sqlx::query_as::<_, Attendance>("SELECT * FROM attendance WHERE id = ?")
        .bind(attendance_id)
        .fetch_optional(pool)
        .await
}

/// Natural-key lookup; `date` binds as a calendar date so the match is exact.
pub async fn find_one_by_key(
    pool: &SqlitePool,
    employee_id: &str,
    date: NaiveDate,
) -> Result<Option<Attendance>, sqlx::Error> {
    sqlx::query_as::<_, Attendance>("SELECT * FROM attendance WHERE employee_id = ? AND date = ?")
        .bind(employee_id)
        .bind(date)
        .fetch_optional(pool)
        .await
}

pub async fn insert(
    pool: &SqlitePool,
    employee_id: &str,
    date: NaiveDate,
    status: &str,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query("INSERT INTO attendance (employee_id, date, status) VALUES (?, ?, ?)")
        .bind(employee_id)
        .bind(date)
        .bind(status)
        .execute(pool)
        .await?;

    Ok(result.last_insert_rowid())
}

pub async fn update_status(
    pool: &SqlitePool,
    attendance_id: i64,
    status: &str,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE attendance SET status = ? WHERE id = ?")
        .bind(status)
        .bind(attendance_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

pub async fn delete_one(pool: &SqlitePool, attendance_id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM attendance WHERE id = ?")
        .bind(attendance_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

pub async fn delete_many_by_employee(
    pool: &SqlitePool,
    employee_id: &str,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM attendance WHERE employee_id = ?")
        .bind(employee_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
