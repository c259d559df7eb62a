use crate::internal::unixtime::UnixTimestamp;
use serde::Serialize;

//--------------------------------------------------------------------------------------------------
// Identity extracted from an ID token that passed every check
//--------------------------------------------------------------------------------------------------

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedIdentity {
    expires_at: UnixTimestamp,
    subject: String,
    email: String,
    preferred_username: String,
    name: String,
    roles: Vec<String>,
}

// Only the validator assembles this, so holding one means the token was valid
impl ValidatedIdentity {
    pub(crate) fn new(
        expires_at: UnixTimestamp,
        subject: String,
        email: String,
        preferred_username: String,
        name: String,
        roles: Vec<String>,
    ) -> Self {
        ValidatedIdentity {
            expires_at,
            subject,
            email,
            preferred_username,
            name,
            roles,
        }
    }

    pub fn expires_at(&self) -> UnixTimestamp {
        self.expires_at
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn preferred_username(&self) -> &str {
        &self.preferred_username
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    pub fn into_roles(self) -> Vec<String> {
        self.roles
    }
}

//--------------------------------------------------------------------------------------------------
