use crate::error::{ConfigError, TokenValidationError, ValidationErrorKind};
use crate::internal::claims::RawClaims;
use crate::internal::unixtime::{Seconds, UnixTimestamp, DEFAULT_CLOCK_SKEW_ALLOWANCE};
use crate::types::ValidatedIdentity;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use std::collections::HashSet;
use std::str::FromStr;

//--------------------------------------------------------------------------------------------------
// Validator configuration
//--------------------------------------------------------------------------------------------------

pub struct ValidatorConfig {
    /// Expected `iss`, compared byte for byte
    pub issuer: String,
    /// Expected `aud` and `azp`
    pub client_id: String,
    /// JOSE algorithm name, eg `RS256`
    pub algorithm: String,
    /// PEM for asymmetric algorithms, the shared secret for HMAC ones
    pub public_key: Vec<u8>,
    pub clock_skew_allowance: Seconds,
}

impl ValidatorConfig {
    pub fn new(
        issuer: impl Into<String>,
        client_id: impl Into<String>,
        algorithm: impl Into<String>,
        public_key: impl Into<Vec<u8>>,
    ) -> Self {
        ValidatorConfig {
            issuer: issuer.into(),
            client_id: client_id.into(),
            algorithm: algorithm.into(),
            public_key: public_key.into(),
            clock_skew_allowance: DEFAULT_CLOCK_SKEW_ALLOWANCE,
        }
    }

    pub fn with_clock_skew_allowance(mut self, clock_skew_allowance: Seconds) -> Self {
        self.clock_skew_allowance = clock_skew_allowance;
        self
    }
}

//--------------------------------------------------------------------------------------------------
// Validator
//--------------------------------------------------------------------------------------------------

#[derive(Clone)]
pub struct IdTokenValidator {
    issuer: String,
    client_id: String,
    algorithm: Algorithm,
    decoding_key: DecodingKey,
    decoding_options: Validation,
    clock_skew_allowance: Seconds,
}

fn decoding_key_for(
    algorithm: Algorithm,
    key: &[u8],
) -> Result<DecodingKey, jsonwebtoken::errors::Error> {
    match algorithm {
        Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => Ok(DecodingKey::from_secret(key)),
        Algorithm::RS256
        | Algorithm::RS384
        | Algorithm::RS512
        | Algorithm::PS256
        | Algorithm::PS384
        | Algorithm::PS512 => DecodingKey::from_rsa_pem(key),
        Algorithm::ES256 | Algorithm::ES384 => DecodingKey::from_ec_pem(key),
        Algorithm::EdDSA => DecodingKey::from_ed_pem(key),
    }
}

fn shown(value: Option<&str>) -> &str {
    value.unwrap_or("<missing>")
}

impl IdTokenValidator {
    pub fn new(config: ValidatorConfig) -> Result<Self, ConfigError> {
        let algorithm = Algorithm::from_str(&config.algorithm)
            .map_err(|_| ConfigError::UnknownAlgorithm(config.algorithm.clone()))?;

        let decoding_key =
            decoding_key_for(algorithm, &config.public_key).map_err(|source| {
                ConfigError::InvalidKey {
                    algorithm: config.algorithm.clone(),
                    source,
                }
            })?;

        // The library only checks the signature and the header algorithm; every claim is checked
        // by hand below so that missing claims fail the way we want them to
        let mut decoding_options = Validation::new(algorithm);
        decoding_options.validate_exp = false;
        decoding_options.validate_nbf = false;
        decoding_options.validate_aud = false;
        decoding_options.required_spec_claims = HashSet::new();

        Ok(IdTokenValidator {
            issuer: config.issuer,
            client_id: config.client_id,
            algorithm,
            decoding_key,
            decoding_options,
            clock_skew_allowance: config.clock_skew_allowance,
        })
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn clock_skew_allowance(&self) -> Seconds {
        self.clock_skew_allowance
    }

    /// Validates `token` against the current wall-clock time.
    pub fn validate(&self, token: &str) -> Result<ValidatedIdentity, TokenValidationError> {
        self.validate_at(token, UnixTimestamp::now())
    }

    /// Validates `token` as if the current time were `now`.
    ///
    /// Checks run in a fixed order and the first failure is returned.
    pub fn validate_at(
        &self,
        token: &str,
        now: UnixTimestamp,
    ) -> Result<ValidatedIdentity, TokenValidationError> {
        let claims = decode::<RawClaims>(token, &self.decoding_key, &self.decoding_options)?.claims;

        let iat = claims.issued_at();
        if iat > now.saturating_add(self.clock_skew_allowance) {
            return Err(TokenValidationError::new(
                ValidationErrorKind::IssuedInFuture,
                format!(
                    "id token iat ({}) must not be after current time ({}) with {} seconds allowance",
                    iat, now, self.clock_skew_allowance
                ),
            ));
        }

        let exp = claims.expires_at();
        if exp < now {
            return Err(TokenValidationError::new(
                ValidationErrorKind::Expired,
                format!(
                    "id token exp ({}) must not be before current time ({})",
                    exp, now
                ),
            ));
        }

        if claims.sub.as_deref().map_or(true, str::is_empty) {
            return Err(TokenValidationError::new(
                ValidationErrorKind::MissingSubject,
                format!(
                    "id token sub ({}) must not be empty",
                    shown(claims.sub.as_deref())
                ),
            ));
        }

        if claims.iss.as_deref() != Some(self.issuer.as_str()) {
            return Err(TokenValidationError::new(
                ValidationErrorKind::IssuerMismatch,
                format!(
                    "id token iss ({}) must be the same as {}",
                    shown(claims.iss.as_deref()),
                    self.issuer
                ),
            ));
        }

        if !claims
            .aud
            .as_ref()
            .is_some_and(|aud| aud.is_exactly(&self.client_id))
        {
            let aud = claims.aud.as_ref().map(|aud| aud.to_string());
            return Err(TokenValidationError::new(
                ValidationErrorKind::AudienceMismatch,
                format!(
                    "id token aud ({}) must be the same as {}",
                    shown(aud.as_deref()),
                    self.client_id
                ),
            ));
        }

        if claims.azp.as_deref() != Some(self.client_id.as_str()) {
            return Err(TokenValidationError::new(
                ValidationErrorKind::AuthorizedPartyMismatch,
                format!(
                    "id token azp ({}) must be the same as {}",
                    shown(claims.azp.as_deref()),
                    self.client_id
                ),
            ));
        }

        match claims {
            RawClaims {
                sub: Some(sub),
                email: Some(email),
                preferred_username: Some(preferred_username),
                name: Some(name),
                roles,
                ..
            } => Ok(ValidatedIdentity::new(
                exp,
                sub,
                email,
                preferred_username,
                name,
                roles.unwrap_or_default(),
            )),
            claims => Err(TokenValidationError::new(
                ValidationErrorKind::MissingProfileClaims,
                format!(
                    "id token email, preferred_username or name is missing; content: {}",
                    claims.to_json()
                ),
            )),
        }
    }
}

//--------------------------------------------------------------------------------------------------
