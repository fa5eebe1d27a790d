//! Admin dashboard: stats, feature flags, recent batches and processing logs

use super::components::{Fields, Table, View};
use super::context::Console;
use crate::core::badge::StatusBadge;
use crate::core::logs::{filter_logs, log_line, logs_csv, logs_csv_file_name};
use crate::core::models::time::format_datetime;
use crate::core::models::{FeatureConfig, ProcessingLogEntry, RecentBatch};
use crate::core::stats::DashboardStats;
use crate::utils::error::{ConsoleError, Result};
use chrono::NaiveDate;
use std::future::Future;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

/// Dashboard state; each section keeps its last good content
#[derive(Debug, Clone, Default)]
pub struct DashboardPage {
    stats: Option<DashboardStats>,
    features: Vec<FeatureConfig>,
    features_failed: bool,
    recent: Vec<RecentBatch>,
    logs: Vec<ProcessingLogEntry>,
    logs_failed: bool,
    batch_id: Option<String>,
    level: Option<String>,
}

fn keep_or_warn<T>(section: &str, result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(ConsoleError::SessionExpired) => Err(ConsoleError::SessionExpired),
        Err(e) => {
            warn!("Erreur {}: {}", section, e);
            Ok(None)
        }
    }
}

impl DashboardPage {
    /// Logs are scoped to `batch_id` when given and filtered by `level`
    pub fn new(batch_id: Option<String>, level: Option<String>) -> Self {
        Self {
            batch_id: batch_id.filter(|b| !b.trim().is_empty()),
            level,
            ..Self::default()
        }
    }

    pub async fn load(ctx: &Console, batch_id: Option<String>, level: Option<String>) -> Result<Self> {
        let mut page = Self::new(batch_id, level);
        page.refresh(ctx).await?;
        Ok(page)
    }

    /// Fetch every section concurrently
    pub async fn refresh(&mut self, ctx: &Console) -> Result<()> {
        let (counts, features, recent, logs) = tokio::join!(
            ctx.api.status_counts(),
            ctx.api.list_features(),
            ctx.api.recent_batches(),
            ctx.api.processing_logs(self.batch_id.as_deref()),
        );

        if let Some(counts) = keep_or_warn("chargement stats", counts)? {
            self.stats = Some(DashboardStats::from_counts(&counts));
        }
        match keep_or_warn("features", features)? {
            Some(f) => {
                self.features = f;
                self.features_failed = false;
            }
            None => self.features_failed = true,
        }
        if let Some(r) = keep_or_warn("chargement batches pour selector", recent)? {
            self.recent = r;
        }
        match keep_or_warn("processing logs", logs)? {
            Some(l) => {
                self.logs = l;
                self.logs_failed = false;
            }
            None => self.logs_failed = true,
        }
        debug!(
            "Dashboard refreshed: {} features, {} recent batches, {} logs",
            self.features.len(),
            self.recent.len(),
            self.logs.len()
        );
        Ok(())
    }

    pub fn stats(&self) -> Option<&DashboardStats> {
        self.stats.as_ref()
    }

    pub fn features(&self) -> &[FeatureConfig] {
        &self.features
    }

    pub fn recent_batches(&self) -> &[RecentBatch] {
        &self.recent
    }

    pub fn set_level(&mut self, level: Option<String>) {
        self.level = level;
    }

    /// Logs after the level filter
    pub fn visible_logs(&self) -> Vec<&ProcessingLogEntry> {
        filter_logs(&self.logs, self.level.as_deref())
    }

    /// Flip a feature flag; the local state follows only on success
    pub async fn toggle_feature(&mut self, ctx: &Console, key: &str) -> Result<bool> {
        let feature = self
            .features
            .iter_mut()
            .find(|f| f.config_key == key)
            .ok_or_else(|| ConsoleError::invalid_input(format!("Fonctionnalité inconnue: {}", key)))?;
        let enabled = !feature.is_enabled;

        match ctx.api.toggle_feature(key, enabled).await {
            Ok(()) => {
                feature.is_enabled = enabled;
                info!("Feature {} is now {}", key, if enabled { "on" } else { "off" });
                Ok(enabled)
            }
            Err(ConsoleError::SessionExpired) => Err(ConsoleError::SessionExpired),
            Err(e) => {
                warn!("Feature toggle failed: {}", e);
                ctx.notifier
                    .error("Échec de la mise à jour de la fonctionnalité");
                Err(e)
            }
        }
    }

    /// CSV of the displayed logs as `(file name, content)`
    pub fn export_logs(&self, ctx: &Console, today: NaiveDate) -> Result<(String, String)> {
        match logs_csv(&self.visible_logs()) {
            Ok(csv) => Ok((logs_csv_file_name(today), csv)),
            Err(ConsoleError::EmptyData(message)) => {
                ctx.notifier.info(&message);
                Err(ConsoleError::EmptyData(message))
            }
            Err(e) => ctx.report(Err(e)),
        }
    }

    /// Refresh every `interval` until `stop` resolves
    ///
    /// Ticks that fall due while a refresh is still running are skipped.
    pub async fn watch<S, F>(&mut self, ctx: &Console, interval: Duration, stop: S, mut on_refresh: F) -> Result<()>
    where
        S: Future,
        F: FnMut(&Self),
    {
        let mut ticker = tokio::time::interval(interval.max(Duration::from_millis(1)));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        tokio::pin!(stop);

        loop {
            tokio::select! {
                _ = &mut stop => {
                    info!("Dashboard watch stopped");
                    return Ok(());
                }
                _ = ticker.tick() => {
                    self.refresh(ctx).await?;
                    on_refresh(self);
                }
            }
        }
    }
}

impl View for DashboardPage {
    fn render(&self) -> String {
        let mut out = String::new();

        match &self.stats {
            Some(s) => {
                let mut fields = Fields::new()
                    .field("Total", s.total)
                    .field("En attente", s.pending)
                    .field("Traités", s.processed)
                    .field("Erreurs", s.errors);
                for (status, count) in &s.details {
                    fields = fields.field(status.as_str(), count);
                }
                out.push_str(&fields.render());
            }
            None => out.push_str("Statistiques indisponibles"),
        }

        out.push_str("\n\nFonctionnalités\n");
        if self.features_failed {
            out.push_str("Erreur lors du chargement des fonctionnalités");
        } else if self.features.is_empty() {
            out.push_str("Aucune fonctionnalité configurée.");
        } else {
            let table = Table::new(&["Clé", "État", "Description", "Mis à jour"]).with_rows(
                self.features.iter().map(|f| {
                    vec![
                        f.config_key.clone(),
                        if f.is_enabled { "Actif" } else { "Inactif" }.to_string(),
                        f.description
                            .clone()
                            .unwrap_or_else(|| "Pas de description".to_string()),
                        format_datetime(f.last_updated.as_ref()),
                    ]
                }),
            );
            out.push_str(&table.render());
        }

        out.push_str("\n\nBatches récents\n");
        let recent = Table::new(&["Batch", "Fichier", "Statut", "Date"])
            .with_empty_message("Aucun batch récent")
            .with_rows(self.recent.iter().map(|b| {
                vec![
                    format!("#{}", b.id),
                    b.filename.clone().unwrap_or_else(|| "Inconnu".to_string()),
                    StatusBadge::for_status(b.status.as_str()).colored(),
                    format_datetime(b.uploaded_at.as_ref()),
                ]
            }));
        out.push_str(&recent.render());

        out.push_str("\n\nLogs de traitement\n");
        if self.logs_failed {
            out.push_str("Erreur lors du chargement des logs");
        } else {
            let logs = self.visible_logs();
            if logs.is_empty() {
                out.push_str("Aucun log");
            } else {
                let lines: Vec<String> = logs.into_iter().map(log_line).collect();
                out.push_str(&lines.join("\n"));
            }
        }
        out
    }
}
