//! Keys and token minting shared by the unit tests

use crate::validator::{IdTokenValidator, ValidatorConfig};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::{json, Value};

pub(crate) const ISSUER: &str = "https://sso.example.com/realms/acme";
pub(crate) const CLIENT_ID: &str = "web-portal";
pub(crate) const NOW: i64 = 1_700_000_000;

pub(crate) const EC_PRIVATE_KEY: &[u8] = include_bytes!("../testdata/es256_private.pem");
pub(crate) const EC_PUBLIC_KEY: &[u8] = include_bytes!("../testdata/es256_public.pem");
pub(crate) const OTHER_EC_PRIVATE_KEY: &[u8] =
    include_bytes!("../testdata/es256_other_private.pem");
pub(crate) const RSA_PRIVATE_KEY: &[u8] = include_bytes!("../testdata/rs256_private.pem");
pub(crate) const RSA_PUBLIC_KEY: &[u8] = include_bytes!("../testdata/rs256_public.pem");

pub(crate) fn config() -> ValidatorConfig {
    ValidatorConfig::new(ISSUER, CLIENT_ID, "ES256", EC_PUBLIC_KEY)
}

pub(crate) fn validator() -> IdTokenValidator {
    IdTokenValidator::new(config()).unwrap()
}

/// Claims that pass every check at `NOW`
pub(crate) fn claims() -> Value {
    json!({
        "iat": NOW,
        "exp": NOW + 3600,
        "sub": "u1",
        "iss": ISSUER,
        "aud": CLIENT_ID,
        "azp": CLIENT_ID,
        "typ": "ID",
        "email": "a@b.com",
        "preferred_username": "alice",
        "name": "Alice A",
        "roles": ["admin"],
    })
}

pub(crate) fn sign(claims: &Value) -> String {
    sign_with(Algorithm::ES256, EC_PRIVATE_KEY, claims)
}

pub(crate) fn sign_with(algorithm: Algorithm, private_key: &[u8], claims: &Value) -> String {
    let key = match algorithm {
        Algorithm::ES256 | Algorithm::ES384 => EncodingKey::from_ec_pem(private_key),
        _ => EncodingKey::from_rsa_pem(private_key),
    }
    .unwrap();
    encode(&Header::new(algorithm), claims, &key).unwrap()
}
