//! Shared fixtures for integration tests.
//!
//! In-memory repositories stand in for the SeaORM stores so the real
//! services and router can be exercised without a database.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use chrono::Utc;
use sea_orm::DbErr;

use storefront_api::api::{create_router, AppState};
use storefront_api::domain::{NewProduct, NewUser, PasswordHasher, Product, User};
use storefront_api::infra::{CreateUserError, ProductRepository, UserRepository};
use storefront_api::services::{Authenticator, ProductManager, TokenIssuer};

pub const TEST_SECRET: &str = "integration-test-secret-at-least-32-chars";
pub const TEST_TTL_SECONDS: i64 = 604800;

// =============================================================================
// In-memory repositories
// =============================================================================

#[derive(Default)]
pub struct InMemoryUsers {
    rows: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DbErr> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|u| u.id == id).cloned())
    }

    async fn create(&self, user: NewUser) -> Result<User, CreateUserError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|u| u.email == user.email) {
            return Err(CreateUserError::DuplicateEmail);
        }
        let created = User {
            id: rows.len() as i64 + 1,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            password_hash: user.password_hash,
            created_at: Utc::now(),
        };
        rows.push(created.clone());
        Ok(created)
    }
}

impl InMemoryUsers {
    pub fn stored(&self, email: &str) -> Option<User> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned()
    }

    pub fn count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

/// Users whose lookup never sees existing rows, as when a concurrent
/// registration commits between the lookup and the insert.
#[derive(Default)]
pub struct StaleLookupUsers {
    pub inner: InMemoryUsers,
}

#[async_trait]
impl UserRepository for StaleLookupUsers {
    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, DbErr> {
        Ok(None)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DbErr> {
        self.inner.find_by_id(id).await
    }

    async fn create(&self, user: NewUser) -> Result<User, CreateUserError> {
        self.inner.create(user).await
    }
}

#[derive(Default)]
pub struct InMemoryProducts {
    rows: Mutex<Vec<Product>>,
}

#[async_trait]
impl ProductRepository for InMemoryProducts {
    async fn list(&self) -> Result<Vec<Product>, DbErr> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, DbErr> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, product: NewProduct) -> Result<Product, DbErr> {
        let mut rows = self.rows.lock().unwrap();
        let created = Product {
            id: rows.len() as i64 + 1,
            name: product.name,
            description: product.description,
            image: product.image,
            price: product.price,
            quantity: product.quantity,
            created_at: Utc::now(),
        };
        rows.push(created.clone());
        Ok(created)
    }
}

impl InMemoryProducts {
    pub fn list_len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

/// Repository whose every call fails like a dropped connection.
pub struct UnavailableUsers;

#[async_trait]
impl UserRepository for UnavailableUsers {
    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, DbErr> {
        Err(DbErr::Custom("connection refused".to_string()))
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<User>, DbErr> {
        Err(DbErr::Custom("connection refused".to_string()))
    }

    async fn create(&self, _user: NewUser) -> Result<User, CreateUserError> {
        Err(CreateUserError::Storage(DbErr::Custom(
            "connection refused".to_string(),
        )))
    }
}

// =============================================================================
// App builders
// =============================================================================

pub struct TestApp {
    pub router: Router,
    pub users: Arc<InMemoryUsers>,
    pub products: Arc<InMemoryProducts>,
}

pub fn test_app() -> TestApp {
    let users = Arc::new(InMemoryUsers::default());
    let products = Arc::new(InMemoryProducts::default());
    let router = router_with(users.clone(), products.clone());

    TestApp {
        router,
        users,
        products,
    }
}

pub fn router_with(
    users: Arc<dyn UserRepository>,
    products: Arc<dyn ProductRepository>,
) -> Router {
    create_router(state_with(users, products))
}

pub fn state_with(
    users: Arc<dyn UserRepository>,
    products: Arc<dyn ProductRepository>,
) -> AppState {
    let auth = Arc::new(Authenticator::new(
        users,
        PasswordHasher::new().unwrap(),
        TokenIssuer::new(TEST_SECRET, TEST_TTL_SECONDS),
    ));
    let catalog = Arc::new(ProductManager::new(products));

    AppState::new(auth, catalog)
}
