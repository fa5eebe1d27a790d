//! Execution summary of one batch and its report export

use super::components::View;
use super::context::Console;
use crate::core::models::BatchDetail;
use crate::core::summary::{ExecutionSummary, execution_report_csv, execution_report_file_name};
use crate::utils::error::{ConsoleError, Result};

/// Summary modal content plus the detail it was computed from
#[derive(Debug, Clone)]
pub struct SummaryPage {
    detail: BatchDetail,
    summary: ExecutionSummary,
}

impl SummaryPage {
    pub async fn load(ctx: &Console, batch_id: &str) -> Result<Self> {
        let detail = ctx.report(ctx.api.batch_detail(batch_id).await)?;
        let summary = ExecutionSummary::from_detail(&detail);
        Ok(Self { detail, summary })
    }

    pub fn summary(&self) -> &ExecutionSummary {
        &self.summary
    }

    /// Execution report as `(file name, content)`
    pub fn export(&self, ctx: &Console) -> Result<(String, String)> {
        if self.detail.details.is_empty() {
            ctx.notifier.info("Aucune donnée disponible pour l'export.");
            return Err(ConsoleError::empty_data("Aucune donnée disponible pour l'export."));
        }
        let csv = ctx.report(execution_report_csv(&self.detail))?;
        ctx.notifier.success("Rapport CSV généré avec succès");
        Ok((execution_report_file_name(&self.detail), csv))
    }
}

impl View for SummaryPage {
    fn render(&self) -> String {
        self.summary.render()
    }
}
