//! Product catalog entity and request types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::validation::Payload;

/// Product domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier
    #[schema(example = 1)]
    pub id: i64,
    /// Display name
    #[schema(example = "Espresso beans")]
    pub name: String,
    /// Free-form description
    #[schema(example = "1kg bag, medium roast")]
    pub description: String,
    /// Image URL
    #[schema(example = "https://cdn.example.com/beans.png")]
    pub image: String,
    /// Unit price
    #[schema(example = 24.5)]
    pub price: f64,
    /// Units in stock
    #[schema(example = 40)]
    pub quantity: i32,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Product creation request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    /// Display name
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Espresso beans")]
    pub name: String,
    /// Free-form description
    #[serde(default)]
    #[schema(example = "1kg bag, medium roast")]
    pub description: String,
    /// Image URL (optional)
    #[serde(default)]
    #[validate(url(message = "Image must be a valid URL"))]
    #[schema(example = "https://cdn.example.com/beans.png")]
    pub image: Option<String>,
    /// Unit price
    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    #[schema(example = 24.5)]
    pub price: f64,
    /// Units in stock
    #[validate(range(min = 0, message = "Quantity must not be negative"))]
    #[schema(example = 40)]
    pub quantity: i32,
}

impl Payload for CreateProductRequest {
    const FIELDS: &'static [(&'static str, &'static str)] = &[
        ("name", "name"),
        ("description", "description"),
        ("image", "image"),
        ("price", "price"),
        ("quantity", "quantity"),
    ];
}

/// Data needed to persist a new product
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub image: String,
    pub price: f64,
    pub quantity: i32,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(request: CreateProductRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            image: request.image.unwrap_or_default(),
            price: request.price,
            quantity: request.quantity,
        }
    }
}
