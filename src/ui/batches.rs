//! Batch list pages of the inputter, the validator and the validated history

use super::components::{Table, View};
use super::confirm::Confirm;
use super::context::Console;
use crate::api::BatchQuery;
use crate::core::badge::StatusBadge;
use crate::core::detail::{DetailPreview, batch_csv, batch_csv_file_name};
use crate::core::models::{BatchStatus, BatchView, Role};
use crate::core::models::time::format_datetime;
use crate::core::stats::StatsMapping;
use crate::utils::error::{ConsoleError, Result};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Which list a page shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchListRole {
    /// The inputter's own uploads
    Inputter,
    /// Batches waiting for validation
    Validator,
    /// Validated batches and their execution
    Validated,
}

static INPUTTER_STATUSES: [BatchStatus; 6] = [
    BatchStatus::Uploaded,
    BatchStatus::Validated,
    BatchStatus::Processing,
    BatchStatus::Processed,
    BatchStatus::ProcessedWithError,
    BatchStatus::ProcessedFailed,
];
static VALIDATOR_STATUSES: [BatchStatus; 1] = [BatchStatus::Uploaded];
static VALIDATED_STATUSES: [BatchStatus; 5] = [
    BatchStatus::Validated,
    BatchStatus::Processing,
    BatchStatus::Processed,
    BatchStatus::ProcessedWithError,
    BatchStatus::ProcessedFailed,
];

/// Action offered on a list row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    ViewDetails,
    ViewSummary,
    Delete,
    Validate,
}

impl BatchListRole {
    /// Statuses requested from the backend and kept client-side
    pub fn statuses(&self) -> &'static [BatchStatus] {
        match self {
            Self::Inputter => &INPUTTER_STATUSES,
            Self::Validator => &VALIDATOR_STATUSES,
            Self::Validated => &VALIDATED_STATUSES,
        }
    }

    pub fn stats_mapping(&self) -> StatsMapping {
        match self {
            Self::Inputter => StatsMapping::inputter(),
            Self::Validator => StatsMapping::validator(),
            Self::Validated => StatsMapping::validated(),
        }
    }

    /// List a user deletes from: authorisers work on the validation queue,
    /// everyone else on their own uploads
    pub fn for_deletion(role: Option<&Role>) -> Self {
        match role {
            Some(Role::Authoriser) => Self::Validator,
            _ => Self::Inputter,
        }
    }

    /// Listing query; only the inputter list is scoped to its user
    pub fn query(&self, username: Option<String>) -> BatchQuery {
        let query = BatchQuery::with_statuses(self.statuses());
        match self {
            Self::Inputter => query.uploaded_by(username),
            _ => query,
        }
    }

    pub fn empty_message(&self) -> &'static str {
        match self {
            Self::Inputter => "Aucun batch trouvé pour le moment.",
            Self::Validator => "Aucun batch en attente de validation.",
            Self::Validated => "Aucun batch validé pour le moment.",
        }
    }

    /// Actions available on a row in `status`
    pub fn row_actions(&self, status: &BatchStatus) -> Vec<RowAction> {
        let mut actions = vec![RowAction::ViewDetails];
        if matches!(self, Self::Inputter | Self::Validated) && *status != BatchStatus::Uploaded {
            actions.push(RowAction::ViewSummary);
        }
        if matches!(self, Self::Inputter | Self::Validator) && status.is_deletable() {
            actions.push(RowAction::Delete);
        }
        if *self == Self::Validator && *status == BatchStatus::Uploaded {
            actions.push(RowAction::Validate);
        }
        actions
    }
}

/// One batch list with its counter cards
#[derive(Debug, Clone)]
pub struct BatchListPage {
    role: BatchListRole,
    batches: Vec<BatchView>,
    counters: BTreeMap<&'static str, u64>,
}

impl BatchListPage {
    pub fn new(role: BatchListRole) -> Self {
        Self {
            role,
            batches: Vec::new(),
            counters: BTreeMap::new(),
        }
    }

    pub fn role(&self) -> BatchListRole {
        self.role
    }

    pub fn batches(&self) -> &[BatchView] {
        &self.batches
    }

    pub fn counters(&self) -> &BTreeMap<&'static str, u64> {
        &self.counters
    }

    /// Fetch the list and the counters together
    ///
    /// A failed counter fetch only logs, as the list is still usable.
    pub async fn load(&mut self, ctx: &Console) -> Result<()> {
        let query = self.role.query(ctx.api.session().username());
        let (listing, counts) =
            tokio::join!(ctx.api.list_batches(&query), ctx.api.status_counts());

        let allowed = self.role.statuses();
        self.batches = ctx
            .report(listing)?
            .into_rows()
            .into_iter()
            .filter(|b| allowed.contains(&b.status))
            .collect();

        match counts {
            Ok(counts) => self.counters = self.role.stats_mapping().aggregate(&counts),
            Err(ConsoleError::SessionExpired) => return Err(ConsoleError::SessionExpired),
            Err(e) => warn!("Stats Error: {}", e),
        }
        debug!("{:?} list loaded: {} batch(es)", self.role, self.batches.len());
        Ok(())
    }

    fn find(&self, batch_id: &str) -> Result<&BatchView> {
        self.batches
            .iter()
            .find(|b| b.batch_id == batch_id)
            .ok_or_else(|| ConsoleError::invalid_input(format!("Batch introuvable: {}", batch_id)))
    }

    fn ensure_action(&self, batch_id: &str, action: RowAction) -> Result<()> {
        let batch = self.find(batch_id)?;
        if self.role.row_actions(&batch.status).contains(&action) {
            Ok(())
        } else {
            Err(ConsoleError::invalid_input(format!(
                "Action impossible sur un batch {}",
                batch.status
            )))
        }
    }

    /// Delete after confirmation; `Ok(false)` when the operator declines
    pub async fn delete(&mut self, ctx: &Console, confirm: &dyn Confirm, batch_id: &str) -> Result<bool> {
        ctx.report(self.ensure_action(batch_id, RowAction::Delete))?;
        let question = format!("Supprimer définitivement le batch {} ?", batch_id);
        if !ctx.report(confirm.confirm(&question))? {
            return Ok(false);
        }
        ctx.report(ctx.api.delete_batch(batch_id).await)?;
        ctx.notifier.success("Batch supprimé avec succès");
        self.load(ctx).await?;
        Ok(true)
    }

    /// Validate after confirmation; `Ok(false)` when the operator declines
    pub async fn validate(&mut self, ctx: &Console, confirm: &dyn Confirm, batch_id: &str) -> Result<bool> {
        ctx.report(self.ensure_action(batch_id, RowAction::Validate))?;
        let question = format!("Valider le batch {} et l'envoyer en traitement ?", batch_id);
        if !ctx.report(confirm.confirm(&question))? {
            return Ok(false);
        }
        ctx.report(ctx.api.validate_batch(batch_id).await)?;
        ctx.notifier.success("Batch validé et envoyé pour traitement !");
        self.load(ctx).await?;
        Ok(true)
    }

    pub fn render_counters(&self) -> String {
        self.role
            .stats_mapping()
            .counters()
            .into_iter()
            .map(|name| format!("{}: {}", name, self.counters.get(name).copied().unwrap_or(0)))
            .collect::<Vec<_>>()
            .join("  |  ")
    }
}

impl View for BatchListPage {
    fn render(&self) -> String {
        let table = Table::new(&["ID Batch", "Application", "Fichier", "Date Import", "Statut", "Actions"])
            .with_empty_message(self.role.empty_message())
            .with_rows(self.batches.iter().map(|b| {
                let actions: Vec<&str> = self
                    .role
                    .row_actions(&b.status)
                    .iter()
                    .map(|a| match a {
                        RowAction::ViewDetails => "détails",
                        RowAction::ViewSummary => "résumé",
                        RowAction::Delete => "supprimer",
                        RowAction::Validate => "valider",
                    })
                    .collect();
                vec![
                    b.batch_id.clone(),
                    if b.application.is_empty() { "N/A".to_string() } else { b.application.clone() },
                    b.original_filename.clone().unwrap_or_else(|| "Nom inconnu".to_string()),
                    format_datetime(b.uploaded_at.as_ref()),
                    StatusBadge::for_status(b.status.as_str()).colored(),
                    actions.join(", "),
                ]
            }));
        format!("{}\n\n{}", self.render_counters(), table.render())
    }
}

/// Detail viewer of any batch
pub async fn view_batch_details(ctx: &Console, batch_id: &str) -> Result<DetailPreview> {
    let detail = ctx.report(ctx.api.batch_detail(batch_id).await)?;
    Ok(DetailPreview::from_detail(&detail))
}

impl View for DetailPreview {
    fn render(&self) -> String {
        let header = format!(
            "ID : {}\nTotal : {} enregistrements",
            self.batch_id, self.total_records
        );
        if self.is_empty() {
            return format!("{}\n\nAucune donnée.", header);
        }
        let table = Table::new(&self.columns).with_rows(self.rows.iter().cloned());
        format!("{}\n\nAperçu des données\n{}", header, table.render())
    }
}

/// Full CSV of a batch as `(file name, content)`
pub async fn download_batch(ctx: &Console, batch_id: &str) -> Result<(String, String)> {
    let detail = ctx.report(ctx.api.batch_detail(batch_id).await)?;
    let csv = ctx.report(batch_csv(&detail))?;
    ctx.notifier.success("Téléchargement lancé !");
    Ok((batch_csv_file_name(batch_id), csv))
}
