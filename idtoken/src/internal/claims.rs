use crate::internal::unixtime::UnixTimestamp;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

//--------------------------------------------------------------------------------------------------
// Audience claim, which OIDC allows to be a string or a list of strings
//--------------------------------------------------------------------------------------------------

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub(crate) enum Audience {
    Single(String),
    Multiple(Vec<String>),
}

impl Audience {
    // Only a single audience equal to the client ID counts, a list never does
    pub(crate) fn is_exactly(&self, client_id: &str) -> bool {
        matches!(self, Audience::Single(aud) if aud == client_id)
    }
}

impl Display for Audience {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Audience::Single(aud) => write!(f, "{}", aud),
            Audience::Multiple(auds) => write!(f, "[{}]", auds.join(", ")),
        }
    }
}

//--------------------------------------------------------------------------------------------------
// Claims as decoded from the ID token, before any of them are checked
//--------------------------------------------------------------------------------------------------

#[derive(Deserialize, Serialize, Debug)]
pub(crate) struct RawClaims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) iat: Option<UnixTimestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) exp: Option<UnixTimestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) sub: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) iss: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) aud: Option<Audience>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) azp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) preferred_username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) roles: Option<Vec<String>>,

    // Everything else the provider put in the token, only used when describing a failure
    #[serde(flatten)]
    pub(crate) other: serde_json::Map<String, serde_json::Value>,
}

impl RawClaims {
    pub(crate) fn issued_at(&self) -> UnixTimestamp {
        self.iat.unwrap_or(UnixTimestamp::FAR_FUTURE)
    }

    pub(crate) fn expires_at(&self) -> UnixTimestamp {
        self.exp.unwrap_or(UnixTimestamp::EPOCH)
    }

    pub(crate) fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "<unserializable>".to_string())
    }
}

//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_times_fall_back_to_failing_sentinels() {
        let claims: RawClaims = serde_json::from_value(json!({ "sub": "u1" })).unwrap();
        assert_eq!(claims.issued_at(), UnixTimestamp::FAR_FUTURE);
        assert_eq!(claims.expires_at(), UnixTimestamp::EPOCH);
    }

    #[test]
    fn null_claims_decode_as_missing() {
        let claims: RawClaims =
            serde_json::from_value(json!({ "email": null, "roles": null })).unwrap();
        assert!(claims.email.is_none());
        assert!(claims.roles.is_none());
    }

    #[test]
    fn audience_accepts_string_or_list() {
        let single: Audience = serde_json::from_value(json!("web")).unwrap();
        assert!(single.is_exactly("web"));
        assert!(!single.is_exactly("Web"));

        let multiple: Audience = serde_json::from_value(json!(["web", "api"])).unwrap();
        assert!(!multiple.is_exactly("web"));
        assert_eq!(multiple.to_string(), "[web, api]");
    }

    #[test]
    fn json_includes_unknown_claims() {
        let claims: RawClaims =
            serde_json::from_value(json!({ "sub": "u1", "typ": "ID" })).unwrap();
        let rendered = claims.to_json();
        assert!(rendered.contains("\"sub\":\"u1\""));
        assert!(rendered.contains("\"typ\":\"ID\""));
        assert!(!rendered.contains("email"));
    }
}
