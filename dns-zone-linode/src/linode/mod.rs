//! Linode DNS

pub(crate) mod types;

#[cfg(feature = "linode")]
mod client;
#[cfg(feature = "linode")]
mod error;
#[cfg(feature = "linode")]
mod http;

#[cfg(feature = "linode")]
use reqwest::Client;

#[cfg(feature = "linode")]
use crate::config::LinodeConfig;
#[cfg(feature = "linode")]
use crate::error::{Result, ZoneError};
#[cfg(feature = "linode")]
use crate::http_client::create_http_client;

/// Linode 列表接口单页最大条目数
#[cfg(feature = "linode")]
pub(crate) const MAX_PAGE_SIZE: u32 = 500;

/// Linode v4 REST client implementing [`RecordApi`](crate::RecordApi).
#[cfg(feature = "linode")]
pub struct LinodeClient {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) api_token: String,
}

#[cfg(feature = "linode")]
impl LinodeClient {
    pub fn new(config: LinodeConfig) -> Result<Self> {
        if config.api_token.is_empty() {
            return Err(ZoneError::Config {
                detail: "api_token is empty".to_string(),
            });
        }
        Ok(Self {
            client: create_http_client()?,
            base_url: config.base_url(),
            api_token: config.api_token,
        })
    }
}
