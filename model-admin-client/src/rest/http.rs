//! REST 后端 HTTP 请求方法

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::{ClientError, Result};
use crate::http_client::HttpUtils;
use crate::types::Payload;

use super::{BACKEND_NAME, RestBackend};

impl RestBackend {
    /// 构建请求（附带认证头）
    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let builder = self.client.request(method, url);
        match &self.api_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// 执行请求并返回成功响应的正文
    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<&Payload>,
        resource: &str,
    ) -> Result<String> {
        let mut builder = self.request(method.clone(), url);
        if let Some(payload) = body {
            let json = serde_json::to_vec(payload).map_err(|e| ClientError::Serialization {
                detail: e.to_string(),
            })?;
            builder = builder
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(json);
        }

        let (status, text) =
            HttpUtils::execute_request(builder, BACKEND_NAME, method.as_str(), url).await?;

        if let Err(e) = HttpUtils::check_status(status, &text, resource) {
            if e.is_expected() {
                log::warn!("[{BACKEND_NAME}] {method} {url} failed: {e}");
            } else {
                log::error!("[{BACKEND_NAME}] {method} {url} failed: {e}");
            }
            return Err(e);
        }

        Ok(text)
    }

    /// 执行 GET 请求
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: &str, resource: &str) -> Result<T> {
        let text = self.send(Method::GET, url, None, resource).await?;
        HttpUtils::parse_json(&text, BACKEND_NAME)
    }

    /// 执行带 JSON 正文的请求（POST / PATCH）
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        payload: &Payload,
        resource: &str,
    ) -> Result<T> {
        let text = self.send(method, url, Some(payload), resource).await?;
        HttpUtils::parse_json(&text, BACKEND_NAME)
    }

    /// 执行 DELETE 请求（忽略响应正文）
    pub(crate) async fn delete(&self, url: &str, resource: &str) -> Result<()> {
        self.send(Method::DELETE, url, None, resource).await?;
        Ok(())
    }
}
