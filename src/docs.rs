use crate::model::attendance::{Attendance, AttendanceStatus, MarkAttendance, UpdateAttendance};
use crate::model::employee::{CreateEmployee, Employee, UpdateEmployee};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRMS Lite API",
        version = "2.0.0",
        description = r#"
## HRMS Lite

Employee Management & Attendance Tracking System.

### Key Features
- **Employee Management**
  - Create, update, list, view, and delete employee records
- **Attendance Management**
  - Daily Present/Absent marking, one record per employee per date
  - Deleting an employee removes its attendance records

### Response Format
- JSON-based RESTful responses
- Errors are returned as `{"message": "..."}`
"#,
    ),
    paths(
        crate::api::employee::list_employees,
        crate::api::employee::get_employee,
        crate::api::employee::create_employee,
        crate::api::employee::update_employee,
        crate::api::employee::delete_employee,

        crate::api::attendance::list_attendance,
        crate::api::attendance::list_employee_attendance,
        crate::api::attendance::mark_attendance,
        crate::api::attendance::update_attendance,
        crate::api::attendance::delete_attendance,
    ),
    components(
        schemas(
            Employee,
            CreateEmployee,
            UpdateEmployee,
            Attendance,
            AttendanceStatus,
            MarkAttendance,
            UpdateAttendance,
        )
    ),
    tags(
        (name = "Employee", description = "Employee management APIs"),
        (name = "Attendance", description = "Attendance management APIs"),
    )
)]
pub struct ApiDoc;
