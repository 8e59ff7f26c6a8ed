//! Domain layer - Core business entities and logic
//!
//! Entities, request payloads with their validation rules, and the
//! password hashing value logic. No HTTP or database concerns here.

pub mod password;
pub mod product;
pub mod user;
pub mod validation;

pub use password::PasswordHasher;
pub use product::{CreateProductRequest, NewProduct, Product};
pub use user::{LoginRequest, NewUser, RegisterRequest, User, UserResponse};
pub use validation::{validate, FieldViolation, Payload};
