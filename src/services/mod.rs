//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

mod auth_service;
pub mod container;
mod product_service;
mod token_issuer;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{AuthService, Authenticator};
pub use product_service::{ProductManager, ProductService};
pub use token_issuer::{Claims, IssuedToken, TokenIssuer};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
