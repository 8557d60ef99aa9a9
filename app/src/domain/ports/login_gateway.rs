//! Driven port for exchanging credentials for a session token.

use async_trait::async_trait;

use super::RemoteServiceError;
use crate::domain::{LoginCredentials, SessionToken};

/// Port for the remote login endpoint.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginGateway: Send + Sync {
    /// Submit credentials and return the issued session token.
    async fn login(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<SessionToken, RemoteServiceError>;
}

/// In-memory gateway accepting one fixed account.
///
/// Mirrors the public demo service: `eve.holt@reqres.in` with any password is
/// accepted; every other email is rejected with status 400.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureLoginGateway;

/// Email accepted by [`FixtureLoginGateway`].
pub const FIXTURE_LOGIN_EMAIL: &str = "eve.holt@reqres.in";
/// Token issued by [`FixtureLoginGateway`].
pub const FIXTURE_SESSION_TOKEN: &str = "QpwL5tke4Pnpja7X4";

#[async_trait]
impl LoginGateway for FixtureLoginGateway {
    async fn login(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<SessionToken, RemoteServiceError> {
        if credentials.email() == FIXTURE_LOGIN_EMAIL {
            Ok(SessionToken::new(FIXTURE_SESSION_TOKEN))
        } else {
            Err(RemoteServiceError::remote_rejected(400_u16, "user not found"))
        }
    }
}
