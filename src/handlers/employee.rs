use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use validator::Validate;
use validator::ValidationErrors;

use crate::models::employee::NewEmployee;
use crate::service::EmployeeService;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NameQuery {
    first_name: String,
    last_name: String,
}

fn map_validation_error(err: ValidationErrors) -> actix_web::Error {
    actix_web::error::ErrorBadRequest(err.to_string())
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/employees")
            .route(web::post().to(create_employee))
            .route(web::get().to(get_employees)),
    )
    .service(
        web::resource("/api/employees/by-name").route(web::get().to(get_employee_by_name)),
    )
    .service(
        web::resource("/api/employees/{id}")
            .route(web::get().to(get_employee_by_id))
            .route(web::put().to(update_employee))
            .route(web::delete().to(delete_employee)),
    );
}

pub async fn create_employee(
    service: web::Data<EmployeeService>,
    new_employee: web::Json<NewEmployee>,
) -> Result<HttpResponse, actix_web::Error> {
    new_employee.validate().map_err(map_validation_error)?;

    let employee = service.create(new_employee.into_inner()).await?;
    Ok(HttpResponse::Created().json(employee))
}

pub async fn get_employees(
    service: web::Data<EmployeeService>,
) -> Result<HttpResponse, actix_web::Error> {
    let employees = service.list_all().await?;
    Ok(HttpResponse::Ok().json(employees))
}

pub async fn get_employee_by_id(
    service: web::Data<EmployeeService>,
    id: web::Path<i64>,
) -> Result<HttpResponse, actix_web::Error> {
    let employee = service.get_by_id(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(employee))
}

pub async fn get_employee_by_name(
    service: web::Data<EmployeeService>,
    query: web::Query<NameQuery>,
) -> Result<HttpResponse, actix_web::Error> {
    let employee = service.get_by_name(&query.first_name, &query.last_name).await?;
    Ok(HttpResponse::Ok().json(employee))
}

pub async fn update_employee(
    service: web::Data<EmployeeService>,
    id: web::Path<i64>,
    updates: web::Json<NewEmployee>,
) -> Result<HttpResponse, actix_web::Error> {
    updates.validate().map_err(map_validation_error)?;

    let employee = service.update(id.into_inner(), updates.into_inner()).await?;
    Ok(HttpResponse::Ok().json(employee))
}

pub async fn delete_employee(
    service: web::Data<EmployeeService>,
    id: web::Path<i64>,
) -> Result<HttpResponse, actix_web::Error> {
    service.delete(id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Employee deleted successfully",
    })))
}
