//! Product service - Catalog use cases.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

use crate::domain::{validate, CreateProductRequest, NewProduct, Product};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::ProductRepository;

/// Product service trait for dependency injection.
#[async_trait]
pub trait ProductService: Send + Sync {
    /// List every product in the catalog
    async fn list_products(&self) -> AppResult<Vec<Product>>;

    /// Get product by ID
    async fn get_product(&self, id: i64) -> AppResult<Product>;

    /// Validate and store a new product
    async fn create_product(&self, request: CreateProductRequest) -> AppResult<Product>;
}

/// Concrete implementation of ProductService.
pub struct ProductManager {
    products: Arc<dyn ProductRepository>,
}

impl ProductManager {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl ProductService for ProductManager {
    async fn list_products(&self) -> AppResult<Vec<Product>> {
        Ok(self.products.list().await?)
    }

    async fn get_product(&self, id: i64) -> AppResult<Product> {
        self.products.find_by_id(id).await?.ok_or_not_found()
    }

    #[instrument(skip_all, fields(name = %request.name))]
    async fn create_product(&self, request: CreateProductRequest) -> AppResult<Product> {
        let violations = validate(&request);
        if !violations.is_empty() {
            return Err(AppError::Validation(violations));
        }

        let product = self.products.create(NewProduct::from(request)).await?;
        tracing::info!(product_id = product.id, "Product created");
        Ok(product)
    }
}
