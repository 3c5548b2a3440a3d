use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Credentials: body of `POST auth/login`
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.is_empty()
    }
}

// ---------------------------------------------------------------------------
// LoginResponse
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access: String,
    pub refresh: String,
    #[serde(alias = "user_role", default)]
    pub role: String,
}

impl LoginResponse {
    pub fn is_owner(&self) -> bool {
        self.role == crate::config::OWNER_ROLE
    }
}

// ---------------------------------------------------------------------------
// TokenPair: what gets persisted after a successful owner sign-in
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

impl From<LoginResponse> for TokenPair {
    fn from(resp: LoginResponse) -> Self {
        Self {
            access: resp.access,
            refresh: resp.refresh,
        }
    }
}
