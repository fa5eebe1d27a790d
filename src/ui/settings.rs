//! Settings page: countries, departments and users

use super::components::{Table, View};
use super::confirm::Confirm;
use super::context::Console;
use crate::core::filters::{country_flag, country_name};
use crate::core::models::{Country, Department, NewUser, User};
use crate::utils::error::{ConsoleError, Result};
use tracing::warn;

/// Reference data shown on the settings page
#[derive(Debug, Clone, Default)]
pub struct SettingsPage {
    countries: Vec<Country>,
    departments: Vec<Department>,
    users: Vec<User>,
}

impl SettingsPage {
    pub async fn load(ctx: &Console) -> Result<Self> {
        let mut page = Self::default();
        page.reload(ctx).await?;
        Ok(page)
    }

    /// Refetch the three lists; failures leave the previous content in place
    pub async fn reload(&mut self, ctx: &Console) -> Result<()> {
        let (countries, departments, users) = tokio::join!(
            ctx.api.list_countries(),
            ctx.api.list_departments(),
            ctx.api.list_users(),
        );

        match countries {
            Ok(c) => self.countries = c,
            Err(ConsoleError::SessionExpired) => return Err(ConsoleError::SessionExpired),
            Err(e) => warn!("Load failed: {}", e),
        }
        match departments {
            Ok(d) => self.departments = d,
            Err(ConsoleError::SessionExpired) => return Err(ConsoleError::SessionExpired),
            Err(e) => warn!("Load failed: {}", e),
        }
        match users {
            Ok(u) => self.users = u,
            Err(ConsoleError::SessionExpired) => return Err(ConsoleError::SessionExpired),
            Err(e) => {
                warn!("GET Users Failed: {}", e);
                ctx.notifier
                    .error("Erreur lors de la récupération des utilisateurs");
            }
        }
        Ok(())
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub async fn create_country(&mut self, ctx: &Console, code: &str, company_id: &str) -> Result<()> {
        let country = Country::new(code, company_id);
        if country.code.is_empty() || country.company_id.is_empty() {
            return ctx.report(Err(ConsoleError::invalid_input("Tous les champs sont requis")));
        }
        ctx.report(ctx.api.create_country(&country).await)?;
        ctx.notifier.success("Pays créé avec succès !");
        self.reload(ctx).await
    }

    pub async fn delete_country(&mut self, ctx: &Console, code: &str, confirm: &dyn Confirm) -> Result<bool> {
        let code = code.trim().to_uppercase();
        let question = format!("Supprimer le pays {} ?", code);
        if !ctx.report(confirm.confirm(&question))? {
            return Ok(false);
        }
        ctx.report(ctx.api.delete_country(&code).await)?;
        ctx.notifier.success("Pays supprimé avec succès");
        self.reload(ctx).await?;
        Ok(true)
    }

    pub async fn create_department(&mut self, ctx: &Console, code: &str, description: &str) -> Result<()> {
        let department = ctx.report(Department::new(code, description))?;
        ctx.report(ctx.api.create_department(&department).await)?;
        ctx.notifier.success("Département créé avec succès !");
        self.reload(ctx).await
    }

    pub async fn delete_department(&mut self, ctx: &Console, code: i64, confirm: &dyn Confirm) -> Result<bool> {
        let question = format!("Supprimer le département {} ?", code);
        if !ctx.report(confirm.confirm(&question))? {
            return Ok(false);
        }
        ctx.report(ctx.api.delete_department(code).await)?;
        ctx.notifier.success("Département supprimé avec succès");
        self.reload(ctx).await?;
        Ok(true)
    }

    /// Create a user; the form is checked before anything is sent
    pub async fn create_user(
        &mut self,
        ctx: &Console,
        username: &str,
        password: &str,
        role: &str,
        country: &str,
    ) -> Result<()> {
        let user = ctx.report(NewUser::new(username, password, role, country))?;
        let message = ctx.report(ctx.api.create_user(&user).await)?;
        ctx.notifier.success(&message);
        self.reload(ctx).await
    }
}

impl View for SettingsPage {
    fn render(&self) -> String {
        let countries = Table::new(&["", "Pays", "ISO", "Company"])
            .with_empty_message("Aucun pays")
            .with_rows(self.countries.iter().map(|c| {
                vec![
                    country_flag(&c.code),
                    country_name(&c.code),
                    c.code.clone(),
                    c.company_id.clone(),
                ]
            }));
        let departments = Table::new(&["Code", "Description"])
            .with_empty_message("Aucun département")
            .with_rows(
                self.departments
                    .iter()
                    .map(|d| vec![d.code.to_string(), d.description.clone()]),
            );
        let users = Table::new(&["", "Utilisateur", "Pays", "Rôle"])
            .with_empty_message("Aucun utilisateur")
            .with_rows(self.users.iter().map(|u| {
                let code = u.country_code.clone().unwrap_or_default();
                vec![country_flag(&code), u.username.clone(), code, u.role.clone()]
            }));

        format!(
            "Pays\n{}\n\nDépartements\n{}\n\nUtilisateurs\n{}",
            countries.render(),
            departments.render(),
            users.render()
        )
    }
}
