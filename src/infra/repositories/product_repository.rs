//! Product repository - catalog persistence.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryOrder, Set,
};

use super::entities::product::{self, ActiveModel, Entity as ProductEntity};
use crate::domain::{NewProduct, Product};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Product repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// List all products, oldest first
    async fn list(&self) -> Result<Vec<Product>, DbErr>;

    /// Find product by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, DbErr>;

    /// Insert a new product and return it with its assigned id
    async fn create(&self, product: NewProduct) -> Result<Product, DbErr>;
}

/// SeaORM implementation of ProductRepository
pub struct ProductStore {
    db: Arc<DatabaseConnection>,
}

impl ProductStore {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for ProductStore {
    async fn list(&self) -> Result<Vec<Product>, DbErr> {
        let models = ProductEntity::find()
            .order_by_asc(product::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, DbErr> {
        let result = ProductEntity::find_by_id(id).one(&*self.db).await?;

        Ok(result.map(Product::from))
    }

    async fn create(&self, product: NewProduct) -> Result<Product, DbErr> {
        let active_model = ActiveModel {
            id: NotSet,
            name: Set(product.name),
            description: Set(product.description),
            image: Set(product.image),
            price: Set(product.price),
            quantity: Set(product.quantity),
            created_at: Set(chrono::Utc::now()),
        };

        let model = active_model.insert(&*self.db).await?;
        Ok(Product::from(model))
    }
}
