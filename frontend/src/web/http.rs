//! HTTP 请求封装模块
//!
//! 使用 `web_sys::fetch` 提供简洁的 GET 客户端，支持缓存策略与中止信号。

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortSignal, DomException, Request, RequestCache, RequestInit, Response};

/// HTTP 错误类型
#[derive(Debug)]
pub enum HttpError {
    /// 请求构建失败
    RequestBuildFailed(String),
    /// 网络请求失败
    NetworkError(String),
    /// 请求被 AbortController 中止
    Aborted,
    /// 响应解析失败
    ResponseParseFailed(String),
}

impl core::fmt::Display for HttpError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            HttpError::RequestBuildFailed(msg) => write!(f, "request could not be built: {}", msg),
            HttpError::NetworkError(msg) => write!(f, "{}", msg),
            HttpError::Aborted => write!(f, "request aborted"),
            HttpError::ResponseParseFailed(msg) => write!(f, "response could not be read: {}", msg),
        }
    }
}

/// 把 fetch 的拒绝值区分为“被中止”与“网络错误”
fn classify_rejection(err: JsValue) -> HttpError {
    match err.dyn_ref::<DomException>() {
        Some(ex) if ex.name() == "AbortError" => HttpError::Aborted,
        Some(ex) => HttpError::NetworkError(ex.message()),
        None => HttpError::NetworkError(
            err.dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
                .unwrap_or_else(|| format!("{:?}", err)),
        ),
    }
}

/// HTTP 响应封装
pub struct HttpResponse {
    inner: Response,
}

impl HttpResponse {
    /// 获取 HTTP 状态码
    pub fn status(&self) -> u16 {
        self.inner.status()
    }

    /// 检查响应是否成功 (2xx)
    pub fn ok(&self) -> bool {
        self.inner.ok()
    }

    /// 获取响应体文本
    pub async fn text(self) -> Result<String, HttpError> {
        let promise = self
            .inner
            .text()
            .map_err(|e| HttpError::ResponseParseFailed(format!("{:?}", e)))?;

        let text = JsFuture::from(promise).await.map_err(classify_rejection)?;

        text.as_string()
            .ok_or_else(|| HttpError::ResponseParseFailed("body is not a string".to_string()))
    }
}

/// GET 请求构建器
pub struct HttpRequestBuilder {
    url: String,
    cache: Option<RequestCache>,
    signal: Option<AbortSignal>,
}

impl HttpRequestBuilder {
    fn new(url: String) -> Self {
        Self {
            url,
            cache: None,
            signal: None,
        }
    }

    /// 设置缓存策略
    pub fn cache(mut self, cache: RequestCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// 绑定中止信号
    pub fn abort_signal(mut self, signal: AbortSignal) -> Self {
        self.signal = Some(signal);
        self
    }

    /// 发送请求
    pub async fn send(self) -> Result<HttpResponse, HttpError> {
        let opts = RequestInit::new();
        opts.set_method("GET");
        if let Some(cache) = self.cache {
            opts.set_cache(cache);
        }
        if let Some(signal) = &self.signal {
            opts.set_signal(Some(signal));
        }

        let request = Request::new_with_str_and_init(&self.url, &opts)
            .map_err(|e| HttpError::RequestBuildFailed(format!("{:?}", e)))?;

        let window = web_sys::window()
            .ok_or_else(|| HttpError::NetworkError("window is not available".to_string()))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(classify_rejection)?;

        let response: Response = resp_value.dyn_into().map_err(|e| {
            HttpError::ResponseParseFailed(format!("not a Response: {:?}", e))
        })?;

        Ok(HttpResponse { inner: response })
    }
}

/// 轻量级 HTTP 客户端
pub struct HttpClient;

impl HttpClient {
    /// 创建 GET 请求
    pub fn get(url: &str) -> HttpRequestBuilder {
        HttpRequestBuilder::new(url.to_string())
    }
}
