//! Failure taxonomy shared by every call to the remote people service.

use super::define_port_error;

define_port_error! {
    /// Errors surfaced by the remote people service adapters.
    ///
    /// Only two outcomes are distinguished: the server answered with a
    /// non-success status, or no usable answer arrived at all.
    pub enum RemoteServiceError {
        /// The server answered with a non-success HTTP status.
        RemoteRejected { status: u16, message: String } =>
            "remote service rejected the request with status {status}: {message}",
        /// The request never produced a usable response (DNS, TLS, timeout,
        /// connectivity, or an unreadable body).
        ConnectionFailed { message: String } =>
            "connection to remote service failed: {message}",
    }
}

impl RemoteServiceError {
    /// HTTP status carried by a rejection, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RemoteRejected { status, .. } => Some(*status),
            Self::ConnectionFailed { .. } => None,
        }
    }

    /// Underlying cause description, without the category prefix.
    pub fn cause(&self) -> &str {
        match self {
            Self::RemoteRejected { message, .. } | Self::ConnectionFailed { message } => {
                message.as_str()
            }
        }
    }
}
