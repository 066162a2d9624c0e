//! 影音清单请求
//!
//! 带防缓存参数与 `no-store` 策略获取清单，并以 `AbortController`
//! 实现超时与页面卸载时的取消。

use std::cell::Cell;
use std::rc::Rc;

use sitekit_shared::manifest::{cache_busted_url, parse_manifest};
use sitekit_shared::{ManifestError, MediaItem, SiteConfig, Timestamp};
use web_sys::{AbortController, RequestCache};

use crate::web::{HttpClient, HttpError, Timeout};

/// 一次清单请求
///
/// 克隆得到的句柄共享同一个 `AbortController`，可在任意位置取消。
#[derive(Clone)]
pub struct ManifestRequest {
    controller: AbortController,
    url: String,
    timeout_ms: u32,
}

impl ManifestRequest {
    /// 以当前时间生成防缓存地址
    pub fn new(config: &SiteConfig) -> Result<Self, ManifestError> {
        let controller = AbortController::new()
            .map_err(|e| ManifestError::Network(format!("AbortController unavailable: {:?}", e)))?;
        let stamp = Timestamp::from_js_millis(js_sys::Date::now());

        Ok(Self {
            controller,
            url: cache_busted_url(&config.manifest_request_path(), stamp),
            timeout_ms: config.fetch_timeout_ms,
        })
    }

    /// 取消请求；已完成的请求不受影响
    pub fn abort(&self) {
        self.controller.abort();
    }

    /// 发送请求并解析清单
    pub async fn send(&self) -> Result<Vec<MediaItem>, ManifestError> {
        let timed_out = Rc::new(Cell::new(false));
        // 持有到函数返回；drop 时清除尚未触发的定时器
        let _timeout = Timeout::new(self.timeout_ms, {
            let controller = self.controller.clone();
            let timed_out = timed_out.clone();
            move || {
                timed_out.set(true);
                controller.abort();
            }
        });

        let to_manifest_error = |err: HttpError| match err {
            HttpError::Aborted if timed_out.get() => ManifestError::Timeout(self.timeout_ms),
            HttpError::Aborted => ManifestError::Aborted,
            other => ManifestError::Network(other.to_string()),
        };

        let response = HttpClient::get(&self.url)
            .cache(RequestCache::NoStore)
            .abort_signal(self.controller.signal())
            .send()
            .await
            .map_err(to_manifest_error)?;

        if !response.ok() {
            return Err(ManifestError::Status(response.status()));
        }

        let body = response.text().await.map_err(to_manifest_error)?;
        parse_manifest(&body)
    }
}
