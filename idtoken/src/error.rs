use std::fmt::Display;

//--------------------------------------------------------------------------------------------------
// Reasons an ID token can be rejected
//--------------------------------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// Not a well formed JWS, claims that don't decode, or an unexpected algorithm
    MalformedToken,
    InvalidSignature,
    IssuedInFuture,
    Expired,
    MissingSubject,
    IssuerMismatch,
    AudienceMismatch,
    AuthorizedPartyMismatch,
    /// One of `email`, `preferred_username` or `name` is absent
    MissingProfileClaims,
}

impl ValidationErrorKind {
    /// Stable code, suitable for metrics labels or API responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationErrorKind::MalformedToken => "malformed_token",
            ValidationErrorKind::InvalidSignature => "invalid_signature",
            ValidationErrorKind::IssuedInFuture => "issued_in_future",
            ValidationErrorKind::Expired => "expired",
            ValidationErrorKind::MissingSubject => "missing_subject",
            ValidationErrorKind::IssuerMismatch => "issuer_mismatch",
            ValidationErrorKind::AudienceMismatch => "audience_mismatch",
            ValidationErrorKind::AuthorizedPartyMismatch => "authorized_party_mismatch",
            ValidationErrorKind::MissingProfileClaims => "missing_profile_claims",
        }
    }
}

impl Display for ValidationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

//--------------------------------------------------------------------------------------------------
// Validation error
//--------------------------------------------------------------------------------------------------

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct TokenValidationError {
    kind: ValidationErrorKind,
    message: String,
}

impl TokenValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        TokenValidationError {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ValidationErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<jsonwebtoken::errors::Error> for TokenValidationError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        let kind = match err.kind() {
            ErrorKind::InvalidSignature => ValidationErrorKind::InvalidSignature,
            _ => ValidationErrorKind::MalformedToken,
        };
        TokenValidationError::new(kind, format!("id token could not be verified: {}", err))
    }
}

//--------------------------------------------------------------------------------------------------
// Errors building a validator
//--------------------------------------------------------------------------------------------------

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("unknown or unsupported signature algorithm {0:?}")]
    UnknownAlgorithm(String),
    #[error("public key is not valid for {algorithm}: {source}")]
    InvalidKey {
        algorithm: String,
        #[source]
        source: jsonwebtoken::errors::Error,
    },
}

//--------------------------------------------------------------------------------------------------
