//! Login payloads and roles

use crate::utils::logging::Sanitization;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of the logged-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Inputter,
    Authoriser,
    Admin,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Inputter => "INPUTTER",
            Self::Authoriser => "AUTHORISER",
            Self::Admin => "ADMIN",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        match s.trim().to_ascii_uppercase().as_str() {
            "INPUTTER" => Self::Inputter,
            "AUTHORISER" => Self::Authoriser,
            "ADMIN" => Self::Admin,
            _ => Self::Other(s),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `POST /api/login` body
#[derive(Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &Sanitization::mask_value(&self.password))
            .finish()
    }
}

/// `POST /api/login` success body
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub username: String,
    pub role: Role,
    #[serde(default)]
    pub message: Option<String>,
}
