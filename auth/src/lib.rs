//! Authentication primitives library
//!
//! The two building blocks a service-side authentication flow needs:
//! - Password hashing (Argon2id, per-call random salt)
//! - Bearer token issuance and verification (HS256 JWT)
//!
//! Services compose these behind their own domain traits; this crate carries
//! no storage or transport concerns and holds no mutable state beyond the
//! signing secret captured at construction.
//!
//! # Examples
//!
//! ## Password hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let digest = hasher.hash("hunter2").unwrap();
//! assert!(hasher.verify("hunter2", &digest).unwrap());
//! assert!(!hasher.verify("wrong", &digest).unwrap());
//! ```
//!
//! ## Tokens
//! ```
//! use auth::TokenCodec;
//! use chrono::Duration;
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!").unwrap();
//! let token = codec.issue("user123", Duration::hours(1)).unwrap();
//! let claims = codec.verify(&token).unwrap();
//! assert_eq!(claims.sub, "user123");
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenCodec;
pub use token::TokenError;
