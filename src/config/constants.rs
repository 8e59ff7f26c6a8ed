//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Authentication & Security
// =============================================================================

/// Default token lifetime in seconds (7 days)
pub const DEFAULT_JWT_EXPIRATION_SECONDS: i64 = 3600 * 24 * 7;

/// Longest accepted token lifetime in seconds (365 days)
pub const MAX_JWT_EXPIRATION_SECONDS: i64 = 3600 * 24 * 365;

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Secret used when JWT_SECRET is unset in debug builds
pub const DEV_JWT_SECRET: &str = "dev-secret-key-minimum-32-chars!!";

/// Argon2 memory cost in KiB
pub const ARGON2_MEMORY_KIB: u32 = 19 * 1024;

/// Argon2 iteration count
pub const ARGON2_ITERATIONS: u32 = 2;

/// Argon2 degree of parallelism
pub const ARGON2_PARALLELISM: u32 = 1;

/// Salt length in bytes for password hashes
pub const PASSWORD_SALT_LENGTH: usize = 16;

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Version prefix for every API route
pub const API_PREFIX: &str = "/api/v1";

// =============================================================================
// Database
// =============================================================================

pub const DEFAULT_DB_USER: &str = "root";
pub const DEFAULT_DB_PASSWORD: &str = "root";
pub const DEFAULT_DB_HOST: &str = "127.0.0.1";
pub const DEFAULT_DB_PORT: u16 = 3306;
pub const DEFAULT_DB_NAME: &str = "storefront";

/// Default connection pool size
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length on registration
pub const MIN_PASSWORD_LENGTH: u64 = 3;

/// Maximum password length on registration
pub const MAX_PASSWORD_LENGTH: u64 = 130;
