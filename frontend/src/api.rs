//! 浏览器端的 HTTP 传输
//!
//! 基于 `gloo-net` 的 `fetch` 实现核心库的 `HttpClient`。

use gloo_net::http::{Request, RequestBuilder};
use lostlinked::error::{ClientError, ClientResult};
use lostlinked::request::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use lostlinked::{ApiClient, ClientConfig};

/// 浏览器 `fetch`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FetchClient;

/// 页面使用的 API 客户端类型
pub type Api = ApiClient<FetchClient>;

pub fn api_client(config: &ClientConfig, token: Option<String>) -> Api {
    ApiClient::from_config(FetchClient, config).with_token(token)
}

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchClient {
    async fn send(&self, req: HttpRequest) -> ClientResult<HttpResponse> {
        let mut builder: RequestBuilder = match req.method {
            HttpMethod::Get => Request::get(&req.url),
            HttpMethod::Post => Request::post(&req.url),
            HttpMethod::Delete => Request::delete(&req.url),
        };
        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }

        let request = match req.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ClientError::Network(e.to_string()))?;

        let res = request
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = res.status();
        // 错误响应的响应体可能不可读，此时按空处理
        let body = res.text().await.unwrap_or_default();
        Ok(HttpResponse { status, body })
    }
}
