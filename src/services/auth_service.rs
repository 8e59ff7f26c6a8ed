//! Authentication service - Registration and login flows.
//!
//! Every failure leaves this module as exactly one [`AppError`] kind.
//! Unknown email and wrong password both surface as
//! [`AppError::InvalidCredentials`] so callers cannot probe for accounts.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use std::sync::Arc;
use tracing::instrument;

use super::token_issuer::{IssuedToken, TokenIssuer};
use crate::domain::{
    validate, LoginRequest, NewUser, PasswordHasher, Payload, RegisterRequest, User,
};
use crate::errors::{AppError, AppResult};
use crate::infra::{CreateUserError, UserRepository};

/// Verified in place of a real hash when the email is unknown, so a miss
/// costs the same as a wrong password.
static DUMMY_HASH: Lazy<String> = Lazy::new(|| {
    PasswordHasher::new()
        .and_then(|hasher| hasher.hash("timing-equalization-placeholder"))
        .unwrap_or_else(|e| {
            tracing::warn!("Could not prepare dummy password hash: {}", e);
            String::new()
        })
});

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user
    async fn register(&self, request: RegisterRequest) -> AppResult<User>;

    /// Check credentials and issue a signed token
    async fn login(&self, request: LoginRequest) -> AppResult<IssuedToken>;
}

/// Concrete implementation of AuthService.
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
    hasher: PasswordHasher,
    tokens: TokenIssuer,
}

impl Authenticator {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: PasswordHasher,
        tokens: TokenIssuer,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }

    /// Hash on the blocking pool; Argon2 is deliberately slow.
    async fn hash_password(&self, plain_text: String) -> AppResult<String> {
        let hasher = self.hasher.clone();
        tokio::task::spawn_blocking(move || hasher.hash(&plain_text))
            .await
            .map_err(|e| AppError::internal(format!("Password hashing task failed: {}", e)))?
    }

    async fn verify_password(&self, hash: String, plain_text: String) -> AppResult<bool> {
        let hasher = self.hasher.clone();
        tokio::task::spawn_blocking(move || hasher.verify(&hash, &plain_text))
            .await
            .map_err(|e| AppError::internal(format!("Password verification task failed: {}", e)))
    }
}

fn ensure_valid<P: Payload>(payload: &P) -> AppResult<()> {
    let violations = validate(payload);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(violations))
    }
}

/// A concurrent registration can slip past the lookup; the unique key on
/// `users.email` still rejects it.
fn insert_error(error: CreateUserError) -> AppError {
    match error {
        CreateUserError::DuplicateEmail => AppError::conflict("Email already registered"),
        CreateUserError::Storage(error) => AppError::Storage(error),
    }
}

#[async_trait]
impl AuthService for Authenticator {
    #[instrument(skip_all, fields(email = %request.email))]
    async fn register(&self, request: RegisterRequest) -> AppResult<User> {
        ensure_valid(&request)?;

        if self.users.find_by_email(&request.email).await?.is_some() {
            tracing::debug!("Registration rejected: email already registered");
            return Err(AppError::conflict("Email already registered"));
        }

        let RegisterRequest {
            first_name,
            last_name,
            email,
            password,
        } = request;

        let password_hash = self.hash_password(password).await?;

        let user = self
            .users
            .create(NewUser {
                first_name,
                last_name,
                email,
                password_hash,
            })
            .await
            .map_err(insert_error)?;

        tracing::info!(user_id = user.id, "User registered");
        Ok(user)
    }

    #[instrument(skip_all, fields(email = %request.email))]
    async fn login(&self, request: LoginRequest) -> AppResult<IssuedToken> {
        ensure_valid(&request)?;

        let user = self.users.find_by_email(&request.email).await?;

        let stored_hash = match &user {
            Some(user) => user.password_hash.clone(),
            None => DUMMY_HASH.clone(),
        };
        let password_valid = self.verify_password(stored_hash, request.password).await?;

        let user = match user {
            Some(user) if password_valid => user,
            _ => {
                tracing::debug!("Login rejected");
                return Err(AppError::InvalidCredentials);
            }
        };

        let token = self.tokens.issue(user.id)?;
        tracing::info!(user_id = user.id, "User logged in");
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockUserRepository;
    use chrono::Utc;
    use sea_orm::DbErr;
    use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
    use tokio_test::{assert_err, assert_ok};

    use crate::services::token_issuer::Claims;

    const SECRET: &str = "an-adequately-long-test-secret-0123456789";

    fn hasher() -> PasswordHasher {
        PasswordHasher::new().unwrap()
    }

    fn jane(password: &str) -> User {
        User {
            id: 7,
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@x.com".to_string(),
            password_hash: hasher().hash(password).unwrap(),
            created_at: Utc::now(),
        }
    }

    fn register_request(password: &str) -> RegisterRequest {
        RegisterRequest {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@x.com".to_string(),
            password: password.to_string(),
        }
    }

    fn login_request(password: &str) -> LoginRequest {
        LoginRequest {
            email: "jane@x.com".to_string(),
            password: password.to_string(),
        }
    }

    fn service(repo: MockUserRepository) -> Authenticator {
        Authenticator::new(Arc::new(repo), hasher(), TokenIssuer::new(SECRET, 604800))
    }

    fn subject_of(token: &str) -> String {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims.clear();
        validation.validate_exp = false;
        decode::<Claims>(token, &DecodingKey::from_secret(SECRET.as_bytes()), &validation)
            .unwrap()
            .claims
            .user_id
    }

    #[tokio::test]
    async fn test_register_success_stores_hash() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .withf(|email| email == "jane@x.com")
            .returning(|_| Ok(None));
        repo.expect_create().times(1).returning(|new_user| {
            assert_ne!(new_user.password_hash, "secret1");
            assert!(hasher().verify(&new_user.password_hash, "secret1"));
            Ok(User {
                id: 1,
                first_name: new_user.first_name,
                last_name: new_user.last_name,
                email: new_user.email,
                password_hash: new_user.password_hash,
                created_at: Utc::now(),
            })
        });

        let user = assert_ok!(service(repo).register(register_request("secret1")).await);
        assert_eq!(user.id, 1);
        assert_eq!(user.email, "jane@x.com");
    }

    #[tokio::test]
    async fn test_register_duplicate_email_conflicts() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|_| Ok(Some(jane("other-password"))));
        repo.expect_create().never();

        let err = assert_err!(service(repo).register(register_request("secret1")).await);
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_register_invalid_payload_skips_store() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().never();
        repo.expect_create().never();

        let err = assert_err!(service(repo).register(register_request("no")).await);
        match err {
            AppError::Validation(violations) => {
                assert_eq!(violations.len(), 1);
                assert_eq!(violations[0].field, "password");
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_register_lookup_failure_is_storage_error() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|_| Err(DbErr::Custom("connection reset".into())));
        repo.expect_create().never();

        let err = assert_err!(service(repo).register(register_request("secret1")).await);
        assert!(matches!(err, AppError::Storage(_)));
    }

    #[tokio::test]
    async fn test_register_insert_failure_is_storage_error() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));
        repo.expect_create().returning(|_| {
            Err(CreateUserError::Storage(DbErr::Custom("disk full".into())))
        });

        let err = assert_err!(service(repo).register(register_request("secret1")).await);
        assert!(matches!(err, AppError::Storage(_)));
    }

    #[tokio::test]
    async fn test_register_losing_insert_race_conflicts() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));
        repo.expect_create()
            .times(1)
            .returning(|_| Err(CreateUserError::DuplicateEmail));

        let err = assert_err!(service(repo).register(register_request("secret1")).await);
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(err.status(), axum::http::StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "CONFLICT");
    }

    #[tokio::test]
    async fn test_login_success_issues_token_for_user() {
        let user = jane("secret1");
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .withf(|email| email == "jane@x.com")
            .returning(move |_| Ok(Some(user.clone())));

        let token = assert_ok!(service(repo).login(login_request("secret1")).await);
        assert_eq!(token.subject, 7);
        assert_eq!(subject_of(&token.token), "7");
    }

    #[tokio::test]
    async fn test_unknown_email_and_wrong_password_are_indistinguishable() {
        let user = jane("secret1");
        let mut known = MockUserRepository::new();
        known
            .expect_find_by_email()
            .returning(move |_| Ok(Some(user.clone())));
        let mut unknown = MockUserRepository::new();
        unknown.expect_find_by_email().returning(|_| Ok(None));

        let wrong_password = assert_err!(service(known).login(login_request("wrong")).await);
        let no_such_user = assert_err!(service(unknown).login(login_request("secret1")).await);

        assert!(matches!(wrong_password, AppError::InvalidCredentials));
        assert!(matches!(no_such_user, AppError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), no_such_user.to_string());
    }

    #[tokio::test]
    async fn test_login_lookup_failure_is_storage_error() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|_| Err(DbErr::Custom("timeout".into())));

        let err = assert_err!(service(repo).login(login_request("secret1")).await);
        assert!(matches!(err, AppError::Storage(_)));
    }

    #[tokio::test]
    async fn test_login_invalid_payload() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().never();

        let err = assert_err!(service(repo).login(login_request("")).await);
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_login_with_unusable_signing_config() {
        let user = jane("secret1");
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(move |_| Ok(Some(user.clone())));
        let service = Authenticator::new(Arc::new(repo), hasher(), TokenIssuer::new("", 604800));

        let err = assert_err!(service.login(login_request("secret1")).await);
        assert!(matches!(err, AppError::Configuration(_)));
    }
}
