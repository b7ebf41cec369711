//! Linode HTTP 请求方法

use reqwest::RequestBuilder;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http_client::HttpUtils;

use super::LinodeClient;
use super::error::api_error;

impl LinodeClient {
    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.bearer_auth(&self.api_token)
    }

    async fn send(
        &self,
        builder: RequestBuilder,
        operation: &str,
        method: &str,
        url: &str,
    ) -> Result<String> {
        let (status, body) =
            HttpUtils::execute_request(self.authorized(builder), operation, method, url).await?;
        if (200..300).contains(&status) {
            Ok(body)
        } else {
            Err(api_error(operation, status, &body))
        }
    }

    /// 执行 GET 请求，可选附带 `X-Filter` 头
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        filter: Option<&serde_json::Value>,
        operation: &str,
    ) -> Result<T> {
        let url = format!("{}{path}", self.base_url);
        let mut builder = self.client.get(&url);
        if let Some(filter) = filter {
            builder = builder.header("X-Filter", filter.to_string());
        }
        let body = self.send(builder, operation, "GET", &url).await?;
        HttpUtils::parse_json(&body)
    }

    /// 执行 POST 请求
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
        operation: &str,
    ) -> Result<T> {
        let url = format!("{}{path}", self.base_url);
        if log::log_enabled!(log::Level::Debug) {
            let body_json = serde_json::to_string(body)
                .unwrap_or_else(|_| "<unserializable request body>".to_string());
            log::debug!("Request Body: {body_json}");
        }
        let builder = self.client.post(&url).json(body);
        let text = self.send(builder, operation, "POST", &url).await?;
        HttpUtils::parse_json(&text)
    }

    /// 执行 DELETE 请求
    pub(crate) async fn delete(&self, path: &str, operation: &str) -> Result<()> {
        let url = format!("{}{path}", self.base_url);
        let builder = self.client.delete(&url);
        self.send(builder, operation, "DELETE", &url).await?;
        Ok(())
    }
}
