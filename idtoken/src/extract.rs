use crate::error::ValidationErrorKind;
use crate::types::ValidatedIdentity;
use crate::validator::IdTokenValidator;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{async_trait, Json};
use serde::Serialize;
use std::ops::Deref;
use std::sync::Arc;
use tracing::{debug, warn};

//--------------------------------------------------------------------------------------------------
// Trait for Axum states to comply with to provide the ID token validator
//--------------------------------------------------------------------------------------------------

pub trait ValidatorProvider {
    fn id_token_validator(&self) -> &IdTokenValidator;
}

impl<T: ValidatorProvider> ValidatorProvider for Arc<T> {
    fn id_token_validator(&self) -> &IdTokenValidator {
        self.deref().id_token_validator()
    }
}

//--------------------------------------------------------------------------------------------------
// Extract Error
//--------------------------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq)]
pub enum ExtractError {
    NoAuthorizationHeader,
    InvalidAuthorizationHeader,
    BadToken,
    TokenWithSuspiciousTimes,
}

impl From<ValidationErrorKind> for ExtractError {
    fn from(kind: ValidationErrorKind) -> Self {
        match kind {
            ValidationErrorKind::MalformedToken => ExtractError::InvalidAuthorizationHeader,
            ValidationErrorKind::IssuedInFuture | ValidationErrorKind::Expired => {
                ExtractError::TokenWithSuspiciousTimes
            }
            _ => ExtractError::BadToken,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorResponse {
    code: &'static str,
    message: String,
}

fn error_response_unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponse {
            code: "unauthorized",
            message: "Unauthorized".to_string(),
        }),
    )
        .into_response()
}

// Callers are never told which check failed, that only goes to the logs
impl IntoResponse for ExtractError {
    fn into_response(self) -> Response {
        match self {
            ExtractError::NoAuthorizationHeader => error_response_unauthorized(),
            ExtractError::InvalidAuthorizationHeader => error_response_unauthorized(),
            ExtractError::BadToken => error_response_unauthorized(),
            ExtractError::TokenWithSuspiciousTimes => error_response_unauthorized(),
        }
    }
}

//--------------------------------------------------------------------------------------------------
// Reading and validating the bearer token
//--------------------------------------------------------------------------------------------------

const AUTHORIZATION_HEADER: &str = "Authorization";
const AUTHORIZATION_BEARER_PREFIX: &str = "Bearer ";

fn validate_request<S>(parts: &mut Parts, state: &S) -> Result<ValidatedIdentity, ExtractError>
where
    S: ValidatorProvider + Send + Sync,
{
    // Check to see if we already validated and extracted the token
    if let Some(identity) = parts.extensions.get::<ValidatedIdentity>() {
        debug!("ID token already validated for {}", identity.subject());
        return Ok(identity.clone());
    }

    let Some(auth_header) = parts.headers.get(AUTHORIZATION_HEADER) else {
        warn!("Request made with no Authorization header");
        return Err(ExtractError::NoAuthorizationHeader);
    };

    let Ok(auth_header_str) = auth_header.to_str() else {
        warn!("Request made with Authorization header with more than visible ASCII characters");
        return Err(ExtractError::InvalidAuthorizationHeader);
    };

    let Some(id_token) = auth_header_str.strip_prefix(AUTHORIZATION_BEARER_PREFIX) else {
        warn!("Request made with Authorization header without Bearer prefix");
        return Err(ExtractError::InvalidAuthorizationHeader);
    };

    let identity = match state.id_token_validator().validate(id_token) {
        Ok(identity) => identity,
        Err(err) => {
            warn!(
                kind = %err.kind(),
                "Request made with ID token that failed validation: {}",
                err
            );
            return Err(err.kind().into());
        }
    };

    // Save the identity for any later extractors on the same request
    parts.extensions.insert(identity.clone());

    debug!("ID token validated for {}", identity.subject());

    Ok(identity)
}

//--------------------------------------------------------------------------------------------------
// Axum extractor to get the caller's identity
//--------------------------------------------------------------------------------------------------

pub struct Identity(pub ValidatedIdentity);

#[async_trait]
impl<S> FromRequestParts<S> for Identity
where
    S: ValidatorProvider + Send + Sync,
{
    type Rejection = ExtractError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let identity = validate_request(parts, state)?;

        Ok(Identity(identity))
    }
}

//--------------------------------------------------------------------------------------------------
