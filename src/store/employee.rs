use chrono::NaiveDateTime;
use sqlx::SqlitePool;

use super::SqlPatch;
use crate::model::employee::Employee;

pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Employee>, sqlx::Error> {
    sqlx::query_as::<_, Employee>("SELECT * FROM employees")
        .fetch_all(pool)
        .await
}

pub async fn find_one(
    pool: &SqlitePool,
    employee_id: &str,
) -> Result<Option<Employee>, sqlx::Error> {
    sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE employee_id = ?")
        .bind(employee_id)
        .fetch_optional(pool)
        .await
}

pub async fn find_one_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<Employee>, sqlx::Error> {
    sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE email = ?")
        .bind(email)
        .fetch_optional(pool)
        .await
}

pub async fn insert(
    pool: &SqlitePool,
    employee_id: &str,
    full_name: &str,
    email: &str,
    department: &str,
    created_at: NaiveDateTime,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO employees (employee_id, full_name, email, department, created_at)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(employee_id)
    .bind(full_name)
    .bind(email)
    .bind(department)
    .bind(created_at)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

pub async fn update_one(
    pool: &SqlitePool,
    employee_id: &str,
    patch: SqlPatch,
) -> Result<u64, sqlx::Error> {
    let (sql, values) = patch.into_update_sql("employees", "employee_id");

    let mut query = sqlx::query(&sql);
    for value in values {
        query = query.bind(value);
    }

    let result = query.bind(employee_id).execute(pool).await?;
    Ok(result.rows_affected())
}

pub async fn delete_one(pool: &SqlitePool, employee_id: &str) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM employees WHERE employee_id = ?")
        .bind(employee_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
