//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{auth_handler, product_handler};
use crate::domain::{
    CreateProductRequest, FieldViolation, LoginRequest, Product, RegisterRequest, UserResponse,
};

/// OpenAPI documentation for the storefront API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Storefront API",
        version = "0.1.0",
        description = "User registration, login and product catalog",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        // Authentication endpoints
        auth_handler::register,
        auth_handler::login,
        // Product endpoints
        product_handler::list_products,
        product_handler::get_product,
        product_handler::create_product,
    ),
    components(
        schemas(
            RegisterRequest,
            LoginRequest,
            UserResponse,
            auth_handler::LoginResponse,
            Product,
            CreateProductRequest,
            FieldViolation,
        )
    ),
    tags(
        (name = "Authentication", description = "User registration and login"),
        (name = "Products", description = "Product catalog")
    )
)]
pub struct ApiDoc;
