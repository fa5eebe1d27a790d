//! Typed data model of the batch backend
//!
//! Every response the console consumes is deserialized into one of these
//! types at the API boundary.

pub mod admin;
pub mod auth;
pub mod batch;
pub mod reference;
pub mod schema;
pub mod status;
pub mod time;
pub mod upload;

pub use admin::*;
pub use auth::*;
pub use batch::*;
pub use reference::*;
pub use schema::*;
pub use status::*;
pub use upload::*;

use serde::{Deserialize, Deserializer};

/// Treat an explicit JSON `null` like a missing field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
