use idtoken::{IdTokenValidator, UnixTimestamp, ValidatorConfig};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::{json, Value};

pub const ISSUER: &str = "https://sso.example.com/realms/acme";
pub const CLIENT_ID: &str = "web-portal";

const EC_PRIVATE_KEY: &[u8] = include_bytes!("../../testdata/es256_private.pem");
const EC_PUBLIC_KEY: &[u8] = include_bytes!("../../testdata/es256_public.pem");

pub fn validator() -> IdTokenValidator {
    IdTokenValidator::new(ValidatorConfig::new(ISSUER, CLIENT_ID, "ES256", EC_PUBLIC_KEY)).unwrap()
}

pub fn claims_issued_now() -> Value {
    let now = UnixTimestamp::now().as_secs();
    json!({
        "iat": now,
        "exp": now + 3600,
        "sub": "u1",
        "iss": ISSUER,
        "aud": CLIENT_ID,
        "azp": CLIENT_ID,
        "email": "a@b.com",
        "preferred_username": "alice",
        "name": "Alice A",
        "roles": ["admin"],
    })
}

pub fn sign(claims: &Value) -> String {
    let key = EncodingKey::from_ec_pem(EC_PRIVATE_KEY).unwrap();
    encode(&Header::new(Algorithm::ES256), claims, &key).unwrap()
}
