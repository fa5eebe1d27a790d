//! Countries, departments and users

use super::ConsoleApi;
use super::response::{ensure_success, read_json, read_text};
use crate::core::models::{Country, Department, NewUser, User};
use crate::utils::error::{ConsoleError, Result};
use tracing::{debug, info};

impl ConsoleApi {
    pub async fn list_countries(&self) -> Result<Vec<Country>> {
        let request = self.client().get("/api/country/list")?;
        let response = self.client().send(request).await?;
        read_json(response).await
    }

    /// Create a country; a conflict comes back with the backend's text
    pub async fn create_country(&self, country: &Country) -> Result<()> {
        let request = self.client().post("/api/country")?.json(country);
        let response = self.client().send(request).await?;
        ensure_success(response).await?;
        info!("Country {} created", country.code);
        Ok(())
    }

    pub async fn delete_country(&self, code: &str) -> Result<()> {
        let request = self.client().delete(&format!("/api/country/{}", code))?;
        let response = self.client().send(request).await?;
        ensure_success(response).await?;
        info!("Country {} deleted", code);
        Ok(())
    }

    pub async fn list_departments(&self) -> Result<Vec<Department>> {
        let request = self.client().get("/api/departments/list")?;
        let response = self.client().send(request).await?;
        read_json(response).await
    }

    pub async fn create_department(&self, department: &Department) -> Result<()> {
        let request = self.client().post("/api/departments")?.json(department);
        let response = self.client().send(request).await?;
        ensure_success(response).await?;
        info!("Department {} created", department.code);
        Ok(())
    }

    pub async fn delete_department(&self, code: i64) -> Result<()> {
        let request = self
            .client()
            .delete(&format!("/api/departments/{}", code))?;
        let response = self.client().send(request).await?;
        ensure_success(response).await?;
        info!("Department {} deleted", code);
        Ok(())
    }

    pub async fn list_users(&self) -> Result<Vec<User>> {
        let request = self.client().get("/api/users/list")?;
        let response = self.client().send(request).await?;
        read_json(response).await
    }

    /// Form-encoded user creation; returns the backend's confirmation text
    pub async fn create_user(&self, user: &NewUser) -> Result<String> {
        debug!("Creating user {:?}", user);
        let request = self.client().post("/api/users")?.form(user);
        let response = self.client().send(request).await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = if text.trim().is_empty() {
                "Erreur lors de la création".to_string()
            } else {
                text.trim().to_string()
            };
            return Err(ConsoleError::api(status.as_u16(), message));
        }
        let text = read_text(response).await?;
        info!("User {} created", user.username);
        Ok(if text.trim().is_empty() {
            "Utilisateur créé !".to_string()
        } else {
            text.trim().to_string()
        })
    }
}
