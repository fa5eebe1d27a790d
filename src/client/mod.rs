//! Session-aware access to the batch backend

mod navigation;
mod secure;
mod session;


#[cfg(test)]
pub use navigation::MockNavigator;
pub use navigation::{
    Navigator, RecordingNavigator, Route, SESSION_EXPIRED_NOTICE, TerminalNavigator,
};
pub use secure::SecureClient;
pub use session::{Session, SessionStore};
