use std::sync::Arc;

use crate::errors::AppError;
use crate::models::employee::{Employee, NewEmployee};
use crate::store::EmployeeStore;

/// Validation layer over the store: uniqueness-by-email on create,
/// existence-by-id on read, update and delete. Each operation is a single
/// check-then-act sequence; failures surface immediately to the caller.
pub struct EmployeeService {
    store: Arc<dyn EmployeeStore>,
}

impl EmployeeService {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, new: NewEmployee) -> Result<Employee, AppError> {
        if self.store.find_by_email(&new.email).await?.is_some() {
            return Err(AppError::AlreadyExists(format!(
                "Employee already exists with email: {}",
                new.email
            )));
        }
        self.store.insert(new).await
    }

    pub async fn list_all(&self) -> Result<Vec<Employee>, AppError> {
        self.store.find_all().await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Employee, AppError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Employee not found with id: {}", id)))
    }

    pub async fn get_by_name(&self, first_name: &str, last_name: &str) -> Result<Employee, AppError> {
        self.store
            .find_by_name(first_name, last_name)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Employee not found with name: {} {}", first_name, last_name))
            })
    }

    /// Full replacement of all non-id fields.
    pub async fn update(&self, id: i64, changes: NewEmployee) -> Result<Employee, AppError> {
        if self.store.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("Employee not found with id: {}", id)));
        }
        let employee = Employee {
            id,
            first_name: changes.first_name,
            last_name: changes.last_name,
            email: changes.email,
        };
        self.store.update(&employee).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if self.store.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("Employee not found with id: {}", id)));
        }
        self.store.delete_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mock::MockEmployeeStore;

    fn service() -> EmployeeService {
        EmployeeService::new(Arc::new(MockEmployeeStore::default()))
    }

    fn draft(first: &str, last: &str, email: &str) -> NewEmployee {
        NewEmployee {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn create_returns_stored_employee_with_fresh_id() {
        let svc = service();
        let employee = svc.create(draft("Mark", "Selby", "mselby@test.com")).await.unwrap();
        assert!(employee.id > 0);
        assert_eq!(employee.first_name, "Mark");
        assert_eq!(employee.last_name, "Selby");
        assert_eq!(employee.email, "mselby@test.com");
    }

    #[tokio::test]
    async fn create_with_existing_email_fails_and_leaves_store_unchanged() {
        let svc = service();
        svc.create(draft("Mark", "Selby", "mselby@test.com")).await.unwrap();

        let err = svc.create(draft("Other", "Person", "mselby@test.com")).await.unwrap_err();
        assert!(matches!(err, AppError::AlreadyExists(_)));
        assert_eq!(svc.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn list_all_on_empty_store_returns_empty() {
        let svc = service();
        assert!(svc.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_all_returns_every_inserted_record() {
        let svc = service();
        svc.create(draft("Mark", "Selby", "mselby@test.com")).await.unwrap();
        svc.create(draft("Ken", "Doherty", "kdoherty@test.com")).await.unwrap();
        assert_eq!(svc.list_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn get_by_id_returns_record() {
        let svc = service();
        let created = svc.create(draft("Mark", "Selby", "mselby@test.com")).await.unwrap();
        let fetched = svc.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn get_by_id_on_unknown_id_fails_not_found() {
        let svc = service();
        let err = svc.get_by_id(1).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn get_by_name_returns_matching_record() {
        let svc = service();
        let created = svc.create(draft("Mark", "Selby", "mselby@test.com")).await.unwrap();
        let fetched = svc.get_by_name("Mark", "Selby").await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn get_by_name_on_unknown_pair_fails_not_found() {
        let svc = service();
        let err = svc.get_by_name("Ronnie", "O'Sullivan").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_on_unknown_id_fails_not_found() {
        let svc = service();
        let err = svc.update(1, draft("Mark", "Selby", "mselby@test.com")).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_overwrites_fields_and_keeps_id() {
        let svc = service();
        let created = svc.create(draft("Mark", "Selby", "mselby@test.com")).await.unwrap();

        let updated = svc
            .update(created.id, draft("Marcus", "Selby", "marcus.selby@test.com"))
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.first_name, "Marcus");
        assert_eq!(updated.email, "marcus.selby@test.com");

        let fetched = svc.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn delete_on_unknown_id_fails_not_found() {
        let svc = service();
        let err = svc.delete(1).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let svc = service();
        let created = svc.create(draft("Mark", "Selby", "mselby@test.com")).await.unwrap();

        svc.delete(created.id).await.unwrap();

        let err = svc.get_by_id(created.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert!(svc.list_all().await.unwrap().is_empty());
    }
}
