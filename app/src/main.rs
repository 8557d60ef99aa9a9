//! Headless entry-point: log in, load the whole directory, print matching users.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::io::{self, Write};
use std::sync::Arc;

use mypeople::config::ClientSettings;
use mypeople::domain::{DirectoryAggregator, LoginFlow, UserList};
use mypeople::inbound::console::{ConsoleNavigator, ConsoleNotifier, render_users};
use mypeople::outbound::reqres::ReqresHttpClient;
use ortho_config::OrthoConfig;
use tokio::runtime::Builder;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    runtime.block_on(async_main())
}

async fn async_main() -> io::Result<()> {
    let settings = ClientSettings::load_from_iter(std::env::args_os())
        .map_err(|error| io::Error::other(format!("load settings: {error}")))?;
    let base_url = settings.base_url().map_err(io::Error::other)?;
    let (email, password) = settings.login_form().map_err(io::Error::other)?;

    let client = Arc::new(
        ReqresHttpClient::with_identity(base_url, settings.identity())
            .map_err(io::Error::other)?,
    );
    let notifier = Arc::new(ConsoleNotifier::new(io::stderr()));
    let navigator = Arc::new(ConsoleNavigator::default());

    let login = LoginFlow::new(client.clone(), notifier.clone(), navigator.clone());
    login
        .submit(email, password)
        .await
        .map_err(|error| io::Error::other(format!("login failed: {error}")))?;
    if !navigator.directory_opened() {
        return Ok(());
    }

    let mut users = UserList::new(DirectoryAggregator::new(client), notifier);
    let summary = users.load().await;
    info!(
        records = summary.records,
        pages = summary.pages_fetched,
        complete = summary.failure.is_none(),
        "directory loaded"
    );

    let mut out = io::stdout().lock();
    render_users(&mut out, users.visible(settings.search()))?;
    out.flush()
}
