//! Reqwest-backed adapter for the people service.
//!
//! This adapter owns transport details only: URL construction, request
//! serialisation, HTTP error mapping, and JSON decoding into domain records.
//! It never retries and keeps reqwest's default timeout.

use async_trait::async_trait;
use pagination::{Page, PageNumber};
use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue, InvalidHeaderValue};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;
use url::Url;

use super::dto::{LoginRequestDto, LoginResponseDto, UserDto};
use crate::domain::ports::{DirectoryClient, LoginGateway, RemoteServiceError};
use crate::domain::{LoginCredentials, SessionToken, UserRecord};

/// Public base address of the people service.
pub const DEFAULT_BASE_URL: &str = "https://reqres.in/api/";
/// User-agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("mypeople/", env!("CARGO_PKG_VERSION"));
const API_KEY_HEADER: &str = "x-api-key";
const LOGIN_PATH: &str = "login";
const USERS_PATH: &str = "users";

/// Errors raised while constructing [`ReqresHttpClient`].
#[derive(Debug, Error)]
pub enum ReqresClientError {
    /// The base URL cannot have paths joined onto it.
    #[error("base url {url} cannot be used as a base: {message}")]
    InvalidBaseUrl {
        /// Offending base URL.
        url: String,
        /// Why it was rejected.
        message: String,
    },
    /// The configured API key is not a valid header value.
    #[error("api key is not a valid header value: {0}")]
    InvalidApiKey(#[from] InvalidHeaderValue),
    /// The reqwest client could not be built.
    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Outbound identity sent with every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReqresHttpIdentity {
    /// HTTP user-agent.
    pub user_agent: String,
    /// Optional value for the `x-api-key` header.
    pub api_key: Option<String>,
}

impl Default for ReqresHttpIdentity {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            api_key: None,
        }
    }
}

/// People service adapter implementing both the login and directory ports.
///
/// Construct one per application and share it behind `Arc`; it is the only
/// HTTP client the domain sees.
#[derive(Debug, Clone)]
pub struct ReqresHttpClient {
    client: Client,
    login_url: Url,
    users_url: Url,
}

impl ReqresHttpClient {
    /// Build an adapter for `base_url` with the default identity.
    ///
    /// # Errors
    ///
    /// Returns an error when the base URL is unusable or the reqwest client
    /// cannot be constructed.
    pub fn new(base_url: Url) -> Result<Self, ReqresClientError> {
        Self::with_identity(base_url, ReqresHttpIdentity::default())
    }

    /// Build an adapter with an explicit outbound identity.
    ///
    /// A missing trailing slash on `base_url` is added so `login` and `users`
    /// resolve beneath it rather than replacing its last segment.
    ///
    /// # Errors
    ///
    /// Returns an error when the base URL is unusable, the API key is not a
    /// valid header value, or the reqwest client cannot be constructed.
    pub fn with_identity(
        base_url: Url,
        identity: ReqresHttpIdentity,
    ) -> Result<Self, ReqresClientError> {
        let base_url = normalise_base_url(base_url)?;
        let login_url = join(&base_url, LOGIN_PATH)?;
        let users_url = join(&base_url, USERS_PATH)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(api_key) = identity.api_key.as_deref() {
            let mut value = HeaderValue::from_str(api_key)?;
            value.set_sensitive(true);
            headers.insert(HeaderName::from_static(API_KEY_HEADER), value);
        }

        let client = Client::builder()
            .user_agent(identity.user_agent)
            .default_headers(headers)
            .build()?;
        Ok(Self {
            client,
            login_url,
            users_url,
        })
    }

    fn users_page_url(&self, page: PageNumber) -> Url {
        let mut url = self.users_url.clone();
        page.apply_to(&mut url);
        url
    }
}

#[async_trait]
impl DirectoryClient for ReqresHttpClient {
    async fn fetch_page(&self, page: PageNumber) -> Result<Page<UserRecord>, RemoteServiceError> {
        let url = self.users_page_url(page);
        debug!(%url, page = page.get(), "requesting directory page");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_transport_error)?;
        let envelope: Page<UserDto> = decode_success(response, "directory page").await?;
        Ok(envelope.map(UserDto::into_domain))
    }
}

#[async_trait]
impl LoginGateway for ReqresHttpClient {
    async fn login(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<SessionToken, RemoteServiceError> {
        debug!(url = %self.login_url, "submitting login");
        let response = self
            .client
            .post(self.login_url.clone())
            .json(&LoginRequestDto {
                email: credentials.email(),
                password: credentials.password(),
            })
            .send()
            .await
            .map_err(map_transport_error)?;
        let decoded: LoginResponseDto = decode_success(response, "login").await?;
        decoded
            .into_token()
            .map(SessionToken::new)
            .map_err(|message| RemoteServiceError::connection_failed(message))
    }
}

async fn decode_success<T: DeserializeOwned>(
    response: Response,
    what: &str,
) -> Result<T, RemoteServiceError> {
    let status = response.status();
    if !status.is_success() {
        // An unreadable error body still carries the status.
        let body = response.bytes().await.unwrap_or_default();
        return Err(map_status_error(status, body.as_ref()));
    }
    let body = response.bytes().await.map_err(map_transport_error)?;
    decode_body(body.as_ref(), what)
}

fn decode_body<T: DeserializeOwned>(body: &[u8], what: &str) -> Result<T, RemoteServiceError> {
    serde_json::from_slice(body).map_err(|error| {
        RemoteServiceError::connection_failed(format!("invalid {what} payload: {error}"))
    })
}

fn normalise_base_url(mut base_url: Url) -> Result<Url, ReqresClientError> {
    if base_url.cannot_be_a_base() {
        return Err(ReqresClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            message: "url has no hierarchical path".to_owned(),
        });
    }
    if !base_url.path().ends_with('/') {
        let path = format!("{}/", base_url.path());
        base_url.set_path(&path);
    }
    base_url.set_query(None);
    base_url.set_fragment(None);
    Ok(base_url)
}

fn join(base_url: &Url, path: &str) -> Result<Url, ReqresClientError> {
    base_url
        .join(path)
        .map_err(|error| ReqresClientError::InvalidBaseUrl {
            url: base_url.to_string(),
            message: error.to_string(),
        })
}

fn map_transport_error(error: reqwest::Error) -> RemoteServiceError {
    RemoteServiceError::connection_failed(error.to_string())
}

fn map_status_error(status: StatusCode, body: &[u8]) -> RemoteServiceError {
    RemoteServiceError::remote_rejected(status.as_u16(), body_preview(body))
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
