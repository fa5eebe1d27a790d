//! Subcommand dispatch

use super::{AdminAction, Cli, Command, ListKind, ReportFormat, SettingsAction};
use crate::api::ConsoleApi;
use crate::client::{SessionStore, TerminalNavigator};
use crate::config::Config;
use crate::core::filters::ReportFilters;
use crate::ui::{
    BatchListPage, BatchListRole, Confirm, Console, DashboardPage, FixedAnswer, LoginPage,
    ReportsPage, SettingsPage, SummaryPage, TerminalConfirm, UploadPage, View, download_batch,
    report_window, view_batch_details,
};
use crate::utils::error::{ConsoleError, Result};
use crate::utils::notify::TerminalNotifier;
use chrono::Local;
use console::Term;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Console wired to the terminal and the configured session file
pub async fn build_console(config: Config) -> Result<Console> {
    let session = Arc::new(SessionStore::load(config.session.file.clone()).await?);
    let api = ConsoleApi::new(&config.api, session, Arc::new(TerminalNavigator))?;
    Ok(Console::new(api, Arc::new(TerminalNotifier), Arc::new(config)))
}

fn require_session(ctx: &Console) -> Result<()> {
    if ctx.api.session().current().is_authenticated() {
        Ok(())
    } else {
        Err(ConsoleError::auth(
            "Vous n'êtes pas connecté. Lancez `batch-console login`.",
        ))
    }
}

fn confirmer(yes: bool) -> Box<dyn Confirm> {
    if yes {
        Box::new(FixedAnswer(true))
    } else {
        Box::new(TerminalConfirm)
    }
}

async fn write_output(output: Option<PathBuf>, default_name: &str, content: &[u8]) -> Result<PathBuf> {
    let path = output.unwrap_or_else(|| PathBuf::from(default_name));
    tokio::fs::write(&path, content).await?;
    info!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(path)
}

fn optional(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Run one subcommand
pub async fn run(cli: Cli, ctx: &Console) -> Result<()> {
    debug!("Running {:?}", cli.command);
    match cli.command {
        Command::Login { username, password } => {
            let route = LoginPage::default()
                .submit(ctx, &username, &password)
                .await?;
            ctx.notifier
                .success(&format!("Connecté. Page d'accueil : {}", route));
        }
        Command::Logout => ctx.api.logout().await?,
        Command::Whoami => {
            let session = ctx.api.session().current();
            match (session.username, session.role) {
                (Some(user), Some(role)) => println!("{} ({})", user, role),
                _ => println!("Non connecté"),
            }
        }
        Command::Apps => {
            require_session(ctx)?;
            let apps = UploadPage::new().load_applications(ctx).await?;
            for app in apps {
                println!("{}  {}", app.code, app.label);
            }
        }
        Command::Fields { application, order } => {
            require_session(ctx)?;
            let mut page = UploadPage::new();
            page.select_application(ctx, &application).await?;
            if !order.is_empty() {
                ctx.report(page.set_field_order(&order))?;
            }
            println!("{}", page.render_fields());
        }
        Command::Upload {
            application,
            file,
            full,
            dry_run,
        } => {
            require_session(ctx)?;
            let mut page = UploadPage::new();
            page.select_application(ctx, &application).await?;

            let bytes = tokio::fs::read(&file).await?;
            let name = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            page.select_file(ctx, &name, bytes)?;
            println!("{}", page.render_preview(full));

            if !dry_run {
                let result = page.submit(ctx).await;
                if !page.validation_errors().is_empty() {
                    println!("{}", page.render_validation_errors());
                }
                let batch_id = result?;
                println!("Batch {}", batch_id);
            }
        }
        Command::Batches { list } => {
            require_session(ctx)?;
            let role = match list {
                ListKind::Mine => BatchListRole::Inputter,
                ListKind::Pending => BatchListRole::Validator,
                ListKind::Validated => BatchListRole::Validated,
            };
            let mut page = BatchListPage::new(role);
            page.load(ctx).await?;
            println!("{}", page.render());
        }
        Command::Show { batch_id } => {
            require_session(ctx)?;
            println!("{}", view_batch_details(ctx, &batch_id).await?.render());
        }
        Command::Download { batch_id, output } => {
            require_session(ctx)?;
            let (name, csv) = download_batch(ctx, &batch_id).await?;
            let path = write_output(output, &name, csv.as_bytes()).await?;
            println!("{}", path.display());
        }
        Command::Summary {
            batch_id,
            export,
            output,
        } => {
            require_session(ctx)?;
            let page = SummaryPage::load(ctx, &batch_id).await?;
            println!("{}", page.render());
            if export {
                let (name, csv) = page.export(ctx)?;
                let path = write_output(output, &name, csv.as_bytes()).await?;
                println!("{}", path.display());
            }
        }
        Command::Delete { batch_id, yes } => {
            require_session(ctx)?;
            let role = BatchListRole::for_deletion(ctx.api.session().role().as_ref());
            let mut page = BatchListPage::new(role);
            page.load(ctx).await?;
            if page.delete(ctx, confirmer(yes).as_ref(), &batch_id).await? {
                println!("{}", page.render());
            }
        }
        Command::Validate { batch_id, yes } => {
            require_session(ctx)?;
            let mut page = BatchListPage::new(BatchListRole::Validator);
            page.load(ctx).await?;
            if page.validate(ctx, confirmer(yes).as_ref(), &batch_id).await? {
                println!("{}", page.render());
            }
        }
        Command::Reports {
            from,
            to,
            country,
            department,
            status,
            inputter,
            validator,
            search,
            page,
            export,
            output,
        } => {
            require_session(ctx)?;
            let now = Local::now().naive_local();
            let (start, end) = ctx.report(report_window(
                from,
                to,
                now.date(),
                ctx.config.reports.default_window_days,
            ))?;
            let mut reports = ReportsPage::load(ctx, start, end).await?;
            reports.apply_filters(ReportFilters {
                country: optional(country).map(|c| c.to_uppercase()),
                department: optional(department),
                status: optional(status).map(|s| s.to_uppercase()),
                inputter: optional(inputter),
                validator: optional(validator),
            });
            reports.go_to(page);
            if let Some(term) = search {
                reports.set_search(&term);
            }
            println!("{}", reports.render());

            match export {
                Some(ReportFormat::Csv) => {
                    let (name, csv) = reports.export_csv(ctx, now.date())?;
                    let path = write_output(output, &name, csv.as_bytes()).await?;
                    println!("{}", path.display());
                }
                Some(ReportFormat::Pdf) => {
                    let (name, pdf) = reports.export_pdf(ctx, now);
                    let path = write_output(output, &name, &pdf).await?;
                    println!("{}", path.display());
                }
                None => {}
            }
        }
        Command::Settings { action } => {
            require_session(ctx)?;
            let mut page = SettingsPage::load(ctx).await?;
            match action {
                None => {}
                Some(SettingsAction::AddCountry { code, company_id }) => {
                    page.create_country(ctx, &code, &company_id).await?
                }
                Some(SettingsAction::DeleteCountry { code, yes }) => {
                    page.delete_country(ctx, &code, confirmer(yes).as_ref())
                        .await?;
                }
                Some(SettingsAction::AddDepartment { code, description }) => {
                    page.create_department(ctx, &code, &description).await?
                }
                Some(SettingsAction::DeleteDepartment { code, yes }) => {
                    page.delete_department(ctx, code, confirmer(yes).as_ref())
                        .await?;
                }
                Some(SettingsAction::AddUser {
                    username,
                    password,
                    role,
                    country,
                }) => {
                    page.create_user(ctx, &username, &password, &role, &country)
                        .await?
                }
            }
            println!("{}", page.render());
        }
        Command::Admin {
            action,
            batch,
            level,
        } => {
            require_session(ctx)?;
            let mut page = DashboardPage::load(ctx, batch, level).await?;
            match action {
                None => println!("{}", page.render()),
                Some(AdminAction::Toggle { key }) => {
                    let enabled = page.toggle_feature(ctx, &key).await?;
                    ctx.notifier.success(&format!(
                        "{} : {}",
                        key,
                        if enabled { "Actif" } else { "Inactif" }
                    ));
                }
                Some(AdminAction::ExportLogs { output }) => {
                    let today = Local::now().date_naive();
                    let (name, csv) = page.export_logs(ctx, today)?;
                    let path = write_output(output, &name, csv.as_bytes()).await?;
                    println!("{}", path.display());
                }
                Some(AdminAction::Watch { interval }) => {
                    let every = interval
                        .map(Duration::from_secs)
                        .unwrap_or_else(|| ctx.config.dashboard.refresh_duration());
                    let stop = async {
                        let _ = tokio::signal::ctrl_c().await;
                    };
                    let term = Term::stdout();
                    page.watch(ctx, every, stop, |p| {
                        if let Err(e) = term.clear_screen() {
                            debug!("Could not clear the screen: {}", e);
                        }
                        println!("{}", p.render());
                    })
                    .await?;
                }
            }
        }
    }
    Ok(())
}
