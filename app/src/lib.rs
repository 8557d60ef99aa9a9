//! People directory client library.
//!
//! The crate is split along hexagonal lines:
//! - [`domain`] owns credentials, user records, search, the login flow, and the
//!   paginated directory aggregator, talking to the outside world only through
//!   [`domain::ports`].
//! - [`outbound`] holds the reqwest adapter for the remote REST service.
//! - [`inbound`] holds the headless presentation adapter used by the binary.
//! - [`config`] loads runtime settings through OrthoConfig.

pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;
