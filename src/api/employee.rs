use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;

use crate::error::ServiceError;
use crate::model::employee::{CreateEmployee, Employee, UpdateEmployee};
use crate::service;

/// List Employees
#[utoipa::path(
    get,
    path = "/employees",
    responses(
        (status = 200, description = "All employees", body = [Employee]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn list_employees(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ServiceError> {
    let employees = service::employee::list(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(employees))
}

/// Get Employee by ID
#[utoipa::path(
    get,
    path = "/employees/{employee_id}",
    params(
        ("employee_id", Path, description = "Externally assigned employee identifier")
    ),
    responses(
        (status = 200, description = "Employee found", body = Employee),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn get_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let employee_id = path.into_inner();
    let employee = service::employee::get(pool.get_ref(), &employee_id).await?;
    Ok(HttpResponse::Ok().json(employee))
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/employees",
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Duplicate key or invalid field", body = Object, example = json!({
            "message": "Employee ID already exists"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    pool: web::Data<SqlitePool>,
    payload: web::Json<CreateEmployee>,
) -> Result<HttpResponse, ServiceError> {
    let employee = service::employee::create(pool.get_ref(), payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(employee))
}

/// Update Employee
#[utoipa::path(
    put,
    path = "/employees/{employee_id}",
    params(
        ("employee_id", Path, description = "Externally assigned employee identifier")
    ),
    request_body = UpdateEmployee,
    responses(
        (status = 200, description = "Employee updated", body = Employee),
        (status = 400, description = "Duplicate email or invalid field"),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn update_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
    payload: web::Json<UpdateEmployee>,
) -> Result<HttpResponse, ServiceError> {
    let employee_id = path.into_inner();
    let employee =
        service::employee::update(pool.get_ref(), &employee_id, payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(employee))
}

/// Delete Employee
///
/// Also removes every attendance record for this employee.
#[utoipa::path(
    delete,
    path = "/employees/{employee_id}",
    params(
        ("employee_id", Path, description = "Externally assigned employee identifier")
    ),
    responses(
        (status = 204, description = "Employee and attendance deleted"),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let employee_id = path.into_inner();
    service::employee::delete(pool.get_ref(), &employee_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::json;

    macro_rules! test_app {
        ($pool:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($pool.clone()))
                    .service(
                        web::resource("/employees")
                            .route(web::get().to(list_employees))
                            .route(web::post().to(create_employee)),
                    )
                    .service(
                        web::resource("/employees/{employee_id}")
                            .route(web::get().to(get_employee))
                            .route(web::put().to(update_employee))
                            .route(web::delete().to(delete_employee)),
                    ),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn create_returns_201_with_record() {
        let pool = test_pool().await;
        let app = test_app!(pool);

        let req = test::TestRequest::post()
            .uri("/employees")
            .set_json(json!({
                "employee_id": "E1",
                "full_name": "John Doe",
                "email": "john@company.com",
                "department": "Engineering"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["employee_id"], "E1");
        assert!(body["id"].as_i64().unwrap() > 0);
    }

    #[actix_web::test]
    async fn duplicate_create_returns_400() {
        let pool = test_pool().await;
        let app = test_app!(pool);

        let payload = json!({
            "employee_id": "E1",
            "full_name": "John Doe",
            "email": "john@company.com",
            "department": "Engineering"
        });

        let req = test::TestRequest::post()
            .uri("/employees")
            .set_json(&payload)
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

        let req = test::TestRequest::post()
            .uri("/employees")
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Employee ID already exists");
    }

    #[actix_web::test]
    async fn get_unknown_returns_404() {
        let pool = test_pool().await;
        let app = test_app!(pool);

        let req = test::TestRequest::get().uri("/employees/ghost").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn delete_returns_204_with_empty_body() {
        let pool = test_pool().await;
        let app = test_app!(pool);

        let req = test::TestRequest::post()
            .uri("/employees")
            .set_json(json!({
                "employee_id": "E1",
                "full_name": "John Doe",
                "email": "john@company.com",
                "department": "Engineering"
            }))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::delete().uri("/employees/E1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert!(test::read_body(resp).await.is_empty());
    }

    #[actix_web::test]
    async fn update_with_bad_email_returns_400() {
        let pool = test_pool().await;
        let app = test_app!(pool);

        let req = test::TestRequest::post()
            .uri("/employees")
            .set_json(json!({
                "employee_id": "E1",
                "full_name": "John Doe",
                "email": "john@company.com",
                "department": "Engineering"
            }))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::put()
            .uri("/employees/E1")
            .set_json(json!({ "email": "not-an-email" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Invalid email format");
    }
}
