//! Domain logic of the console
//!
//! Everything here is pure: no HTTP and no terminal I/O. The `api` and `ui`
//! layers feed backend data through these types.

pub mod badge;
pub mod csv;
pub mod detail;
pub mod filters;
pub mod logs;
pub mod models;
pub mod number;
pub mod pagination;
pub mod report;
pub mod stats;
pub mod summary;
pub mod upload;
