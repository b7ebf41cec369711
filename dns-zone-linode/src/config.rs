//! Linode client configuration.

use std::env;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ZoneError};

/// Environment variable holding the personal access token.
pub const ENV_API_TOKEN: &str = "LINODE_DNS_PAT";
/// Environment variable overriding the API host or URL.
pub const ENV_API_URL: &str = "LINODE_API_URL";
/// Environment variable overriding the API version.
pub const ENV_API_VERSION: &str = "LINODE_API_VERSION";

pub const DEFAULT_API_URL: &str = "https://api.linode.com";
pub const DEFAULT_API_VERSION: &str = "v4";

/// Credentials and endpoint for the Linode API.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinodeConfig {
    /// Linode Personal Access Token, see <https://cloud.linode.com/profile/tokens>.
    pub api_token: String,
    /// API host (`"api.linode.com"`) or full base URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    /// API version path segment (`"v4"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
}

impl LinodeConfig {
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            ..Self::default()
        }
    }

    /// Reads `LINODE_DNS_PAT`, `LINODE_API_URL` and `LINODE_API_VERSION`.
    pub fn from_env() -> Result<Self> {
        let lookup = |key: &str| env::var(key).ok().filter(|v| !v.is_empty());
        Self::from_lookup(lookup)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_token = lookup(ENV_API_TOKEN).ok_or_else(|| ZoneError::Config {
            detail: format!("{ENV_API_TOKEN} is not set"),
        })?;
        Ok(Self {
            api_token,
            api_url: lookup(ENV_API_URL),
            api_version: lookup(ENV_API_VERSION),
        })
    }

    /// Base URL including the version segment, e.g. `https://api.linode.com/v4`.
    pub fn base_url(&self) -> String {
        let host = self
            .api_url
            .as_deref()
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/');
        let version = self
            .api_version
            .as_deref()
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_VERSION)
            .trim_matches('/');

        if host.contains("://") {
            format!("{host}/{version}")
        } else {
            format!("https://{host}/{version}")
        }
    }
}

impl fmt::Debug for LinodeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinodeConfig")
            .field("api_token", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("api_version", &self.api_version)
            .finish()
    }
}
