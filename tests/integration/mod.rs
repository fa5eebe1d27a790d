//! Integration tests for batch-console
//!
//! Each test drives one page against a wiremock backend and checks the
//! requests sent, the page state and the notifications shown.

pub mod batch_list_tests;
pub mod config_tests;
pub mod dashboard_tests;
pub mod login_tests;
pub mod reports_tests;
pub mod session_expiry_tests;
pub mod settings_tests;
pub mod upload_flow_tests;
