//! User-visible notices raised by the login and directory flows.

use std::fmt;

use super::LoginValidationError;
use super::ports::RemoteServiceError;

/// Transient message surfaced to the user through a
/// [`Notifier`](super::ports::Notifier).
///
/// Messages distinguish rejected credentials from connectivity problems, and
/// directory load failures never hide the records that were already fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Login succeeded; the session is ready.
    LoginSucceeded,
    /// The login form was incomplete and nothing was sent.
    InvalidCredentials(LoginValidationError),
    /// The service did not accept the credentials.
    CredentialsRejected,
    /// The login request never reached the service.
    LoginConnectionFailed {
        /// Transport-level cause.
        cause: String,
    },
    /// The service refused a directory page.
    DirectoryRejected,
    /// A directory page request never reached the service.
    DirectoryConnectionFailed {
        /// Transport-level cause.
        cause: String,
    },
}

impl Notice {
    /// Map a login failure to its notice.
    pub fn for_login_failure(error: &RemoteServiceError) -> Self {
        match error {
            RemoteServiceError::RemoteRejected { .. } => Self::CredentialsRejected,
            RemoteServiceError::ConnectionFailed { message } => Self::LoginConnectionFailed {
                cause: message.clone(),
            },
        }
    }

    /// Map a directory page failure to its notice.
    pub fn for_directory_failure(error: &RemoteServiceError) -> Self {
        match error {
            RemoteServiceError::RemoteRejected { .. } => Self::DirectoryRejected,
            RemoteServiceError::ConnectionFailed { message } => Self::DirectoryConnectionFailed {
                cause: message.clone(),
            },
        }
    }

    /// Return whether the notice reports a problem.
    pub fn is_error(&self) -> bool {
        !matches!(self, Self::LoginSucceeded)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoginSucceeded => write!(f, "Successful login"),
            Self::InvalidCredentials(reason) => write!(f, "Check your details: {reason}"),
            Self::CredentialsRejected => write!(f, "User not found"),
            Self::LoginConnectionFailed { cause } => {
                write!(f, "Connection error {cause}. Try again")
            }
            Self::DirectoryRejected => write!(f, "Error while loading users"),
            Self::DirectoryConnectionFailed { cause } => write!(f, "Connection error: {cause}"),
        }
    }
}
