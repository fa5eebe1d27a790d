//! Upload page: application choice, CSV preview and submission

use super::components::{Table, View};
use super::context::Console;
use crate::core::csv::CsvPreview;
use crate::core::models::{Application, ApplicationFields};
use crate::core::summary::{DATA_CAPTURE, DataCaptureSummary};
use crate::core::upload::{FieldLayout, SelectedFile, UploadState};
use crate::utils::error::{ConsoleError, Result, RowValidationError};
use tracing::{debug, info, warn};

/// State of the upload page
#[derive(Debug, Clone, Default)]
pub struct UploadPage {
    state: UploadState,
    application: Option<String>,
    fields: Option<ApplicationFields>,
    layout: FieldLayout,
    file: Option<SelectedFile>,
    summary: Option<DataCaptureSummary>,
    validation_errors: Vec<RowValidationError>,
}

impl UploadPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    pub fn application(&self) -> Option<&str> {
        self.application.as_deref()
    }

    pub fn layout(&self) -> &FieldLayout {
        &self.layout
    }

    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn summary(&self) -> Option<&DataCaptureSummary> {
        self.summary.as_ref()
    }

    pub fn validation_errors(&self) -> &[RowValidationError] {
        &self.validation_errors
    }

    pub async fn load_applications(&self, ctx: &Console) -> Result<Vec<Application>> {
        ctx.report(ctx.api.list_applications().await)
    }

    /// Choose the target application and load its fields
    ///
    /// Any previously selected file is dropped.
    pub async fn select_application(&mut self, ctx: &Console, code: &str) -> Result<()> {
        let fields = ctx.report(ctx.api.application_fields(code).await)?;
        self.layout = FieldLayout::from_fields(&fields);
        self.fields = Some(fields);
        self.application = Some(code.to_string());
        self.clear_file();
        debug!("Application {} selected", code);
        Ok(())
    }

    /// Reorder the header fields
    pub fn set_field_order<S: AsRef<str>>(&mut self, order: &[S]) -> Result<()> {
        self.layout.set_order(order)
    }

    /// Header the operator must copy into the CSV
    pub fn header_line(&self) -> String {
        self.layout.header_line()
    }

    fn clear_file(&mut self) {
        self.file = None;
        self.summary = None;
        self.validation_errors.clear();
        self.state = UploadState::Idle;
    }

    /// Parse a picked file; a non-CSV or empty file resets the page
    pub fn select_file(&mut self, ctx: &Console, name: &str, bytes: Vec<u8>) -> Result<()> {
        self.clear_file();
        let file = match SelectedFile::from_bytes(name, bytes) {
            Ok(file) => file,
            Err(e) => {
                ctx.notifier.error(&e.to_string());
                return Err(e);
            }
        };

        if self.application.as_deref() == Some(DATA_CAPTURE) {
            self.summary = Some(DataCaptureSummary::compute(&file.parsed));
        }
        info!(
            "{} selected: {} data row(s)",
            file.name,
            file.parsed.rows.len()
        );
        self.file = Some(file);
        self.state = UploadState::FileSelected;
        Ok(())
    }

    /// Duplicate check, then multipart upload; returns the new batch id
    pub async fn submit(&mut self, ctx: &Console) -> Result<String> {
        if !self.state.can_submit() {
            return Err(ConsoleError::invalid_input("Aucun fichier sélectionné."));
        }
        let (Some(application), Some(file)) = (self.application.clone(), self.file.clone()) else {
            return Err(ConsoleError::invalid_input(
                "Sélectionnez une application et un fichier.",
            ));
        };
        self.validation_errors.clear();

        self.state = UploadState::DuplicateCheck;
        match ctx.api.check_filename(&application, &file.name).await {
            Ok(true) => {
                let message = format!(
                    "Le fichier \"{}\" a déjà été soumis. Veuillez utiliser un nom différent ou vérifier l'état du traitement actuel.",
                    file.name
                );
                ctx.notifier.error(&message);
                self.state = UploadState::Failed { message };
                return Err(ConsoleError::duplicate_file(&file.name));
            }
            Ok(false) => {}
            Err(ConsoleError::SessionExpired) => return Err(ConsoleError::SessionExpired),
            Err(e) => warn!("Pre-check failed, proceeding to upload attempt anyway: {}", e),
        }

        self.state = UploadState::Submitting;
        match ctx
            .api
            .upload_batch(&application, &file.name, file.bytes.clone())
            .await
        {
            Ok(receipt) => {
                ctx.notifier.success("Upload réussi !");
                self.state = UploadState::Success {
                    batch_id: receipt.batch_id.clone(),
                };
                Ok(receipt.batch_id)
            }
            Err(ConsoleError::Validation(rows)) => {
                for row in &rows {
                    ctx.notifier.error(&row.message);
                }
                self.state = UploadState::Failed {
                    message: format!("{} erreur(s) de validation", rows.len()),
                };
                self.validation_errors = rows.clone();
                Err(ConsoleError::Validation(rows))
            }
            Err(e) => {
                self.state = UploadState::Failed {
                    message: e.to_string(),
                };
                ctx.report(Err(e))
            }
        }
    }

    /// Preview table of the selected file
    pub fn render_preview(&self, full: bool) -> String {
        let Some(file) = &self.file else {
            return "Aucun fichier sélectionné.".to_string();
        };
        let preview: CsvPreview<'_> = if full {
            file.parsed.full_preview()
        } else {
            file.parsed.inline_preview()
        };
        let table = Table::new(&file.parsed.header).with_rows(preview.rows.iter().cloned());
        let mut out = format!(
            "{}\n{} ligne(s) au total",
            table.render(),
            preview.total
        );
        if preview.truncated || (!full && file.parsed.has_more_than_inline()) {
            out.push_str(&format!(", {} affichée(s)", preview.rows.len()));
        }
        if let Some(summary) = &self.summary {
            out.push_str("\n\n");
            out.push_str(&summary.render());
        }
        out
    }

    /// Fields of the chosen application and the header to use
    pub fn render_fields(&self) -> String {
        let Some(fields) = &self.fields else {
            return "Aucune application sélectionnée.".to_string();
        };
        let mut table = Table::new(&["Champ", "Type", "Obligatoire"]);
        for (info, mandatory) in fields
            .mandatory
            .iter()
            .map(|f| (f, true))
            .chain(fields.optional.iter().map(|f| (f, false)))
        {
            table.push_row(vec![
                info.field_name.clone(),
                info.data_type.clone(),
                if mandatory { "oui" } else { "non" }.to_string(),
            ]);
        }
        format!("{}\n\nEn-tête CSV :\n{}", table.render(), self.header_line())
    }

    /// The validation-error modal
    pub fn render_validation_errors(&self) -> String {
        render_validation_errors(&self.validation_errors)
    }
}

/// Line / field / message table of a rejected upload
pub fn render_validation_errors(rows: &[RowValidationError]) -> String {
    Table::new(&["Ligne", "Champ", "Message"])
        .with_empty_message("Aucune erreur de validation.")
        .with_rows(rows.iter().map(|r| {
            vec![
                r.line.map(|l| l.to_string()).unwrap_or_else(|| "-".to_string()),
                r.field.clone().unwrap_or_else(|| "-".to_string()),
                r.message.clone(),
            ]
        }))
        .render()
}
