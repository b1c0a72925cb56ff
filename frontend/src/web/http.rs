//! HTTP 请求封装模块
//!
//! 使用 `web_sys::fetch` 实现核心库的 `HttpClient`，替代 `gloo-net`。

use prompt_array::request::{HttpClient, HttpRequest, HttpResponse, TransportError};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

fn js_error(context: &str, err: JsValue) -> TransportError {
    TransportError(format!("{}: {:?}", context, err))
}

/// 基于 fetch 的 HTTP 客户端
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchClient;

impl FetchClient {
    fn build_request(req: &HttpRequest) -> Result<Request, TransportError> {
        let headers = Headers::new().map_err(|e| js_error("failed to create Headers", e))?;
        for (key, value) in &req.headers {
            headers
                .set(key, value)
                .map_err(|e| js_error("failed to set header", e))?;
        }

        let opts = RequestInit::new();
        opts.set_method(req.method.as_str());
        opts.set_headers(&headers.into());
        if let Some(body) = &req.body {
            opts.set_body(&JsValue::from_str(body));
        }

        Request::new_with_str_and_init(&req.url, &opts)
            .map_err(|e| js_error("failed to build request", e))
    }

    async fn read_text(response: &Response) -> Result<String, TransportError> {
        let promise = response
            .text()
            .map_err(|e| js_error("failed to read body", e))?;
        let text = JsFuture::from(promise)
            .await
            .map_err(|e| js_error("failed to read body", e))?;
        Ok(text.as_string().unwrap_or_default())
    }
}

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        let request = Self::build_request(&req)?;

        let window =
            web_sys::window().ok_or_else(|| TransportError("window is unavailable".to_string()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| js_error("network error", e))?;
        let response: Response = resp_value
            .dyn_into()
            .map_err(|e| js_error("unexpected fetch result", e))?;

        Ok(HttpResponse {
            status: response.status(),
            body: Self::read_text(&response).await?,
        })
    }
}
