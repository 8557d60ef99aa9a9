//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`DirectoryClient`, `LoginGateway`) describe the remote people
//! service; presentation ports (`Notifier`, `Navigator`) describe the front end.
//! Adapters map their failures into [`RemoteServiceError`] instead of returning
//! transport errors.

mod macros;
pub(crate) use macros::define_port_error;

mod directory_client;
mod login_gateway;
mod presentation;
mod remote_service_error;

#[cfg(test)]
pub use directory_client::MockDirectoryClient;
pub use directory_client::{DirectoryClient, FixtureDirectoryClient};
#[cfg(test)]
pub use login_gateway::MockLoginGateway;
pub use login_gateway::{
    FIXTURE_LOGIN_EMAIL, FIXTURE_SESSION_TOKEN, FixtureLoginGateway, LoginGateway,
};
#[cfg(test)]
pub use presentation::{MockNavigator, MockNotifier};
pub use presentation::{Navigator, Notifier};
pub use remote_service_error::RemoteServiceError;
