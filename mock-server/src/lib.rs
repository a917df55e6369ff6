use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub salary: String,
}

#[derive(Deserialize)]
pub struct EmployeePayload {
    pub name: String,
    pub salary: String,
}

/// Records live in a `Vec` so list order is insertion order, like the
/// hosted mock API this server stands in for.
pub type Db = Arc<RwLock<Vec<Employee>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route("/employee", get(list_employees).post(create_employee))
        .route(
            "/employee/{id}",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_employees(State(db): State<Db>) -> Json<Vec<Employee>> {
    Json(db.read().await.clone())
}

async fn create_employee(
    State(db): State<Db>,
    Json(input): Json<EmployeePayload>,
) -> (StatusCode, Json<Employee>) {
    let employee = Employee {
        id: Uuid::new_v4().to_string(),
        name: input.name,
        salary: input.salary,
    };
    db.write().await.push(employee.clone());
    (StatusCode::CREATED, Json(employee))
}

async fn get_employee(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Employee>, StatusCode> {
    let employees = db.read().await;
    employees
        .iter()
        .find(|e| e.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_employee(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<EmployeePayload>,
) -> Result<Json<Employee>, StatusCode> {
    let mut employees = db.write().await;
    let employee = employees
        .iter_mut()
        .find(|e| e.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    employee.name = input.name;
    employee.salary = input.salary;
    Ok(Json(employee.clone()))
}

/// The hosted API echoes the removed record on delete; clients are free to
/// ignore it.
async fn delete_employee(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Employee>, StatusCode> {
    let mut employees = db.write().await;
    let position = employees
        .iter()
        .position(|e| e.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(employees.remove(position)))
}
