//! Validation of OpenID Connect ID tokens from a Keycloak-style identity provider.
//!
//! [`IdTokenValidator`] checks the signature and a fixed set of claims (`iat`, `exp`, `sub`,
//! `iss`, `aud`, `azp`, `email`, `preferred_username`, `name`) and hands back a
//! [`ValidatedIdentity`]. The `axum-extract` feature adds an extractor reading the token from a
//! bearer `Authorization` header.

mod error;
#[cfg(feature = "axum-extract")]
pub mod extract;
pub mod internal;
#[cfg(test)]
mod test_support;
mod types;
mod validator;

pub use error::{ConfigError, TokenValidationError, ValidationErrorKind};
pub use internal::unixtime::{Seconds, UnixTimestamp, DEFAULT_CLOCK_SKEW_ALLOWANCE};
pub use types::ValidatedIdentity;
pub use validator::{IdTokenValidator, ValidatorConfig};

//--------------------------------------------------------------------------------------------------
