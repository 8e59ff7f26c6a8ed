//! Service Container - Centralized service access.
//!
//! Wires repositories, the password hasher and the token issuer into the
//! application services once at startup.

use std::sync::Arc;

use super::{AuthService, Authenticator, ProductManager, ProductService, TokenIssuer};
use crate::config::Config;
use crate::domain::PasswordHasher;
use crate::errors::AppResult;
use crate::infra::{ProductStore, UserStore};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get product service
    fn products(&self) -> Arc<dyn ProductService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    product_service: Arc<dyn ProductService>,
}

impl Services {
    /// Create a new service container from already-built services
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        product_service: Arc<dyn ProductService>,
    ) -> Self {
        Self {
            auth_service,
            product_service,
        }
    }

    /// Create service container from database connection and config
    pub fn from_connection(
        db: Arc<sea_orm::DatabaseConnection>,
        config: &Config,
    ) -> AppResult<Self> {
        let users = Arc::new(UserStore::new(Arc::clone(&db)));
        let products = Arc::new(ProductStore::new(db));

        let auth_service = Arc::new(Authenticator::new(
            users,
            PasswordHasher::new()?,
            TokenIssuer::from_config(config),
        ));
        let product_service = Arc::new(ProductManager::new(products));

        Ok(Self::new(auth_service, product_service))
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn products(&self) -> Arc<dyn ProductService> {
        self.product_service.clone()
    }
}
