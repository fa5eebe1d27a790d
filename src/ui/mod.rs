//! Console pages
//!
//! Each page owns its state, talks to the backend through [`Console`] and
//! renders itself as text through [`View`].

mod batches;
mod components;
mod confirm;
mod context;
mod dashboard;
mod login;
mod reports;
mod settings;
mod summary;
mod upload;

pub use batches::{BatchListPage, BatchListRole, RowAction, download_batch, view_batch_details};
pub use components::{Fields, Table, View, visible_width};
pub use confirm::{Confirm, FixedAnswer, TerminalConfirm};
pub use context::Console;
pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use reports::{ReportsPage, report_window};
pub use settings::SettingsPage;
pub use summary::SummaryPage;
pub use upload::{UploadPage, render_validation_errors};

#[cfg(test)]
pub use confirm::MockConfirm;
