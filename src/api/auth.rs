//! Login and logout
//!
//! Both bypass the session guard: a 401 from `/api/login` is a wrong
//! password, not an expired session.

use super::ConsoleApi;
use crate::client::{Route, Session};
use crate::core::models::{LoginRequest, LoginResponse};
use crate::utils::error::{ConsoleError, Result};
use reqwest::Response;
use reqwest::header::{ACCEPT, CONTENT_TYPE, SET_COOKIE};
use serde::Deserialize;
use tracing::{debug, info, warn};

#[derive(Debug, Deserialize)]
struct LoginFailure {
    #[serde(default)]
    message: Option<String>,
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("application/json"))
}

/// Value of the `name` cookie among the `Set-Cookie` headers
fn find_cookie(response: &Response, name: &str) -> Option<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value.trim().to_string())
}

async fn login_error(response: Response) -> ConsoleError {
    let json = is_json(&response);
    let body = response.text().await.unwrap_or_default();
    if !json {
        debug!("Non-JSON login failure: {}", body);
        return ConsoleError::auth("Identifiants incorrects.");
    }
    match serde_json::from_str::<LoginFailure>(&body) {
        Ok(failure) => ConsoleError::auth(
            failure
                .message
                .unwrap_or_else(|| "Erreur d’authentification.".to_string()),
        ),
        Err(_) => ConsoleError::auth("Erreur serveur."),
    }
}

impl ConsoleApi {
    /// Log in and persist the session; returns the user's role and name
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        let credentials = LoginRequest {
            username: username.trim().to_string(),
            password: password.trim().to_string(),
        };
        if credentials.username.is_empty() || credentials.password.is_empty() {
            return Err(ConsoleError::invalid_input("Remplissez tous les champs."));
        }
        debug!("Logging in with {:?}", credentials);

        let request = self
            .client()
            .post("/api/login")?
            .header(ACCEPT, "application/json")
            .json(&credentials);
        let response = self.client().send_unguarded(request).await?;

        if !response.status().is_success() {
            return Err(login_error(response).await);
        }
        if !is_json(&response) {
            return Err(ConsoleError::auth("Réponse serveur invalide."));
        }

        let token = find_cookie(&response, self.client().auth_cookie());
        if token.is_none() {
            warn!("Login succeeded without a session cookie");
        }
        let bytes = response.bytes().await?;
        let login: LoginResponse = serde_json::from_slice(&bytes)?;

        self.session()
            .save(Session {
                username: Some(login.username.clone()),
                role: Some(login.role.clone()),
                auth_token: token,
            })
            .await?;
        self.client().reset();
        info!("Logged in as {} ({})", login.username, login.role);
        Ok(login)
    }

    /// Clear the session, tell the backend, go back to login
    ///
    /// The backend call is best effort.
    pub async fn logout(&self) -> Result<()> {
        let request = self.client().post("/api/logout");
        self.session().clear().await?;
        match request {
            Ok(request) => {
                if let Err(e) = self.client().send_unguarded(request).await {
                    warn!("Logout request failed: {}", e);
                }
            }
            Err(e) => warn!("Logout request failed: {}", e),
        }
        self.client().navigator().navigate(Route::Login {
            session_expired: false,
        });
        info!("Logged out");
        Ok(())
    }
}
