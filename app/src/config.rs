//! Client configuration loaded via OrthoConfig.
//!
//! Values layer defaults, an optional config file, `MYPEOPLE_*` environment
//! variables, and command-line flags, in increasing precedence.

use std::fmt;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

use crate::outbound::reqres::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT, ReqresHttpIdentity};

/// Errors raised while interpreting loaded settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// `base_url` is not an absolute URL.
    #[error("invalid base url {value:?}: {message}")]
    InvalidBaseUrl {
        /// Configured value.
        value: String,
        /// Parser message.
        message: String,
    },
    /// A required value for the headless run is absent.
    #[error("missing required setting {name}")]
    Missing {
        /// Environment variable that supplies the setting.
        name: &'static str,
    },
}

/// Runtime settings for the people directory client.
#[derive(Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "MYPEOPLE")]
pub struct ClientSettings {
    /// Base address of the people service.
    #[ortho_config(default = String::from(DEFAULT_BASE_URL))]
    pub base_url: String,
    /// Optional `x-api-key` header value.
    pub api_key: Option<String>,
    /// HTTP user-agent sent with every request.
    #[ortho_config(default = String::from(DEFAULT_USER_AGENT))]
    pub user_agent: String,
    /// Login email for the headless run.
    pub email: Option<String>,
    /// Login password for the headless run.
    pub password: Option<String>,
    /// Search query applied to the loaded directory.
    pub search: Option<String>,
}

impl ClientSettings {
    /// Parse the configured base URL.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidBaseUrl`] when the value does not parse
    /// as an absolute URL.
    pub fn base_url(&self) -> Result<Url, SettingsError> {
        Url::parse(&self.base_url).map_err(|error| SettingsError::InvalidBaseUrl {
            value: self.base_url.clone(),
            message: error.to_string(),
        })
    }

    /// Outbound identity derived from the settings.
    pub fn identity(&self) -> ReqresHttpIdentity {
        ReqresHttpIdentity {
            user_agent: self.user_agent.clone(),
            api_key: self.api_key.clone().filter(|key| !key.trim().is_empty()),
        }
    }

    /// Login email and password for the headless run.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Missing`] naming the first absent value.
    pub fn login_form(&self) -> Result<(&str, &str), SettingsError> {
        let email = self.email.as_deref().ok_or(SettingsError::Missing {
            name: "MYPEOPLE_EMAIL",
        })?;
        let password = self.password.as_deref().ok_or(SettingsError::Missing {
            name: "MYPEOPLE_PASSWORD",
        })?;
        Ok((email, password))
    }

    /// Search query, empty when unset.
    pub fn search(&self) -> &str {
        self.search.as_deref().unwrap_or_default()
    }
}

impl fmt::Debug for ClientSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |value: &Option<String>| value.as_ref().map(|_| "<redacted>");
        f.debug_struct("ClientSettings")
            .field("base_url", &self.base_url)
            .field("api_key", &redact(&self.api_key))
            .field("user_agent", &self.user_agent)
            .field("email", &self.email)
            .field("password", &redact(&self.password))
            .field("search", &self.search)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for client configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const ALL_VARS: [&str; 6] = [
        "MYPEOPLE_BASE_URL",
        "MYPEOPLE_API_KEY",
        "MYPEOPLE_USER_AGENT",
        "MYPEOPLE_EMAIL",
        "MYPEOPLE_PASSWORD",
        "MYPEOPLE_SEARCH",
    ];

    fn load_from_empty_args() -> ClientSettings {
        ClientSettings::load_from_iter([OsString::from("mypeople")]).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(ALL_VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(
            settings.base_url().expect("default url parses").as_str(),
            DEFAULT_BASE_URL
        );
        assert_eq!(settings.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(settings.identity(), ReqresHttpIdentity::default());
        assert_eq!(settings.search(), "");
        assert_eq!(
            settings.login_form(),
            Err(SettingsError::Missing {
                name: "MYPEOPLE_EMAIL"
            })
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("MYPEOPLE_BASE_URL", Some("http://127.0.0.1:9000/api".to_owned())),
            ("MYPEOPLE_API_KEY", Some("reqres-free-v1".to_owned())),
            ("MYPEOPLE_USER_AGENT", Some("people-test/1".to_owned())),
            ("MYPEOPLE_EMAIL", Some("eve.holt@reqres.in".to_owned())),
            ("MYPEOPLE_PASSWORD", Some("cityslicka".to_owned())),
            ("MYPEOPLE_SEARCH", Some("weaver".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.base_url().expect("override parses").as_str(),
            "http://127.0.0.1:9000/api"
        );
        let identity = settings.identity();
        assert_eq!(identity.user_agent, "people-test/1");
        assert_eq!(identity.api_key.as_deref(), Some("reqres-free-v1"));
        assert_eq!(
            settings.login_form(),
            Ok(("eve.holt@reqres.in", "cityslicka"))
        );
        assert_eq!(settings.search(), "weaver");
        let rendered = format!("{settings:?}");
        assert!(!rendered.contains("cityslicka"));
        assert!(!rendered.contains("reqres-free-v1"));
    }

    #[rstest]
    fn relative_base_url_is_rejected() {
        let _guard = lock_env([("MYPEOPLE_BASE_URL", Some("api/".to_owned()))]);

        let settings = load_from_empty_args();
        assert!(matches!(
            settings.base_url(),
            Err(SettingsError::InvalidBaseUrl { .. })
        ));
    }
}
