use async_trait::async_trait;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::employee::{Employee, NewEmployee};

/// Persistence abstraction over the employees table.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn insert(&self, new: NewEmployee) -> Result<Employee, AppError>;
    async fn find_all(&self) -> Result<Vec<Employee>, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, AppError>;
    async fn find_by_name(&self, first_name: &str, last_name: &str) -> Result<Option<Employee>, AppError>;
    /// Overwrites the row matched by `employee.id`.
    async fn update(&self, employee: &Employee) -> Result<Employee, AppError>;
    /// No-op if the row is already absent; existence is enforced one layer up.
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;
}

pub struct PgEmployeeStore {
    pool: PgPool,
}

impl PgEmployeeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_sqlx_error(err: sqlx::Error) -> AppError {
    match &err {
        // 23505: the UNIQUE constraint on email caught a duplicate that
        // slipped past the service-level check.
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            AppError::AlreadyExists("Employee already exists with this email".to_string())
        }
        _ => {
            log::error!("Database error: {:?}", err);
            AppError::DatabaseError(err.to_string())
        }
    }
}

#[async_trait]
impl EmployeeStore for PgEmployeeStore {
    async fn insert(&self, new: NewEmployee) -> Result<Employee, AppError> {
        sqlx::query_as::<_, Employee>(
            "INSERT INTO employees (first_name, last_name, email) VALUES ($1, $2, $3) \
             RETURNING id, first_name, last_name, email",
        )
        .bind(&new.first_name)
        .bind(&new.last_name)
        .bind(&new.email)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn find_all(&self) -> Result<Vec<Employee>, AppError> {
        sqlx::query_as::<_, Employee>("SELECT id, first_name, last_name, email FROM employees ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, AppError> {
        sqlx::query_as::<_, Employee>("SELECT id, first_name, last_name, email FROM employees WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, AppError> {
        sqlx::query_as::<_, Employee>("SELECT id, first_name, last_name, email FROM employees WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)
    }

    async fn find_by_name(&self, first_name: &str, last_name: &str) -> Result<Option<Employee>, AppError> {
        sqlx::query_as::<_, Employee>(
            "SELECT id, first_name, last_name, email FROM employees WHERE first_name = $1 AND last_name = $2",
        )
        .bind(first_name)
        .bind(last_name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn update(&self, employee: &Employee) -> Result<Employee, AppError> {
        sqlx::query_as::<_, Employee>(
            "UPDATE employees SET first_name = $1, last_name = $2, email = $3 WHERE id = $4 \
             RETURNING id, first_name, last_name, email",
        )
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .bind(employee.id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(())
    }
}
