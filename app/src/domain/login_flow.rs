//! Login use-case: validate, authenticate, then hand over to the directory.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::domain::ports::{LoginGateway, Navigator, Notifier, RemoteServiceError};
use crate::domain::{LoginCredentials, LoginValidationError, Notice, SessionToken};

/// Reasons a login attempt did not produce a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginFlowError {
    /// The form was incomplete; no request was sent.
    #[error("invalid credentials: {0}")]
    Invalid(#[from] LoginValidationError),
    /// The remote service rejected the request or could not be reached.
    #[error(transparent)]
    Remote(#[from] RemoteServiceError),
}

/// Drives one login attempt against the remote service.
///
/// On success the user is notified and navigated to the directory view. On
/// failure the notice distinguishes rejected credentials from connectivity
/// problems. The token is returned to the caller and never stored here.
pub struct LoginFlow {
    gateway: Arc<dyn LoginGateway>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl LoginFlow {
    /// Wire the flow to its collaborators.
    pub fn new(
        gateway: Arc<dyn LoginGateway>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            gateway,
            notifier,
            navigator,
        }
    }

    /// Validate the form inputs and attempt a login.
    pub async fn submit(
        &self,
        email: &str,
        password: &str,
    ) -> Result<SessionToken, LoginFlowError> {
        let credentials = match LoginCredentials::try_from_parts(email, password) {
            Ok(credentials) => credentials,
            Err(reason) => {
                self.notifier.notify(&Notice::InvalidCredentials(reason.clone()));
                return Err(reason.into());
            }
        };
        self.login(&credentials).await
    }

    /// Attempt a login with already validated credentials.
    pub async fn login(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<SessionToken, LoginFlowError> {
        match self.gateway.login(credentials).await {
            Ok(token) => {
                info!(email = credentials.email(), "login succeeded");
                self.notifier.notify(&Notice::LoginSucceeded);
                self.navigator.open_directory(&token);
                Ok(token)
            }
            Err(error) => {
                warn!(
                    email = credentials.email(),
                    kind = error.kind(),
                    error = %error,
                    "login failed"
                );
                self.notifier.notify(&Notice::for_login_failure(&error));
                Err(error.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit coverage for login flow notifications and navigation.
    use super::*;
    use crate::domain::ports::{MockLoginGateway, MockNavigator, MockNotifier};
    use mockall::predicate::eq;
    use rstest::rstest;

    fn flow(
        gateway: MockLoginGateway,
        notifier: MockNotifier,
        navigator: MockNavigator,
    ) -> LoginFlow {
        LoginFlow::new(Arc::new(gateway), Arc::new(notifier), Arc::new(navigator))
    }

    #[tokio::test]
    async fn success_notifies_then_opens_directory() {
        let mut gateway = MockLoginGateway::new();
        gateway
            .expect_login()
            .times(1)
            .return_once(|_| Ok(SessionToken::new("token-1")));
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .with(eq(Notice::LoginSucceeded))
            .times(1)
            .return_const(());
        let mut navigator = MockNavigator::new();
        navigator
            .expect_open_directory()
            .withf(|token| token.expose() == "token-1")
            .times(1)
            .return_const(());

        let token = flow(gateway, notifier, navigator)
            .submit("eve.holt@reqres.in", "cityslicka")
            .await
            .expect("login should succeed");
        assert_eq!(token.expose(), "token-1");
    }

    #[rstest]
    #[case(
        RemoteServiceError::remote_rejected(400_u16, "user not found"),
        Notice::CredentialsRejected
    )]
    #[case(
        RemoteServiceError::connection_failed("dns error"),
        Notice::LoginConnectionFailed { cause: "dns error".to_owned() }
    )]
    #[tokio::test]
    async fn failures_notify_and_stay_on_login(
        #[case] remote: RemoteServiceError,
        #[case] expected_notice: Notice,
    ) {
        let returned = remote.clone();
        let mut gateway = MockLoginGateway::new();
        gateway
            .expect_login()
            .times(1)
            .return_once(move |_| Err(returned));
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .with(eq(expected_notice))
            .times(1)
            .return_const(());
        let mut navigator = MockNavigator::new();
        navigator.expect_open_directory().times(0);

        let error = flow(gateway, notifier, navigator)
            .submit("peter@klaven", "secret")
            .await
            .expect_err("login should fail");
        assert_eq!(error, LoginFlowError::Remote(remote));
    }

    #[tokio::test]
    async fn blank_password_is_rejected_without_a_request() {
        let mut gateway = MockLoginGateway::new();
        gateway.expect_login().times(0);
        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .with(eq(Notice::InvalidCredentials(
                LoginValidationError::EmptyPassword,
            )))
            .times(1)
            .return_const(());
        let mut navigator = MockNavigator::new();
        navigator.expect_open_directory().times(0);

        let error = flow(gateway, notifier, navigator)
            .submit("eve.holt@reqres.in", "")
            .await
            .expect_err("blank password must fail");
        assert_eq!(
            error,
            LoginFlowError::Invalid(LoginValidationError::EmptyPassword)
        );
    }
}
