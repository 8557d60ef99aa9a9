//! Presentation collaborators driven by the login and directory flows.
//!
//! Rendering, navigation, and toasts belong to whatever front end hosts the
//! domain. These ports only describe what the flows need from it.

use crate::domain::{Notice, SessionToken};

/// Surfaces transient messages to the user.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    /// Show `notice` to the user.
    fn notify(&self, notice: &Notice);
}

/// Moves the user between screens.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    /// Switch to the directory view for an authenticated session.
    fn open_directory(&self, session: &SessionToken);
}
