//! Reference data managed from the settings page

use super::null_as_default;
use crate::utils::error::{ConsoleError, Result};
use crate::utils::logging::Sanitization;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Country the bank operates in, bound to a T24 company
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub company_id: String,
}

impl Country {
    /// Normalized creation payload: code trimmed and upper-cased
    pub fn new(code: &str, company_id: &str) -> Self {
        Self {
            code: code.trim().to_uppercase(),
            company_id: company_id.trim().to_string(),
        }
    }
}

/// Department users and batches belong to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub code: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

/// Console user as listed by `/api/users/list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(default)]
    pub department: Option<String>,
}

/// Roles accepted by the user creation form
pub const USER_ROLES: [&str; 3] = ["INPUTTER", "AUTHORISER", "ADMIN"];

/// User creation form, sent form-encoded
#[derive(Clone, Serialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub role: String,
    pub country: String,
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("password", &Sanitization::mask_value(&self.password))
            .field("role", &self.role)
            .field("country", &self.country)
            .finish()
    }
}

impl NewUser {
    /// Build the form; every field is required, the username is trimmed
    pub fn new(username: &str, password: &str, role: &str, country: &str) -> Result<Self> {
        let user = Self {
            username: username.trim().to_string(),
            password: password.to_string(),
            role: role.trim().to_uppercase(),
            country: country.trim().to_uppercase(),
        };
        if user.username.is_empty()
            || user.password.is_empty()
            || user.role.is_empty()
            || user.country.is_empty()
        {
            return Err(ConsoleError::invalid_input("Tous les champs sont requis"));
        }
        Ok(user)
    }
}

impl Department {
    /// Parse the numeric code typed in the settings form
    pub fn new(code: &str, description: &str) -> Result<Self> {
        let code = code
            .trim()
            .parse()
            .map_err(|_| ConsoleError::invalid_input(format!("Code département invalide: {}", code)))?;
        let description = description.trim().to_string();
        if description.is_empty() {
            return Err(ConsoleError::invalid_input("La description est requise"));
        }
        Ok(Self { code, description })
    }
}
