//! 影音清单模块
//!
//! 清单是一个 JSON 数组，每项描述一个影音条目。
//! 加载阶段只校验“是数组”，条目的媒体类型留到渲染时才判定，
//! 这样单个未知类型只影响它自己的播放，不影响整份清单。

use crate::Timestamp;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;

// =========================================================
// 数据模型
// =========================================================

/// 影音条目
///
/// 字段按原样宽松读取：非字符串的标量转为文本，`null` 与其它类型视为缺失。
/// 条目本身的问题只在渲染它时才暴露。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MediaItem {
    #[serde(default, deserialize_with = "lenient_title")]
    pub title: Option<String>,
    /// 原始类型字符串：`youtube` | `mp4` | `audio`
    #[serde(rename = "type", default, deserialize_with = "lenient_text")]
    pub kind: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub url: String,
}

/// 字符串、数字、布尔值转为文本，其余（`null`、数组、对象）为 `None`
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn lenient_title<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?))
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

impl MediaItem {
    pub fn new(title: &str, kind: &str, url: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            kind: kind.to_string(),
            url: url.to_string(),
        }
    }

    /// 标题，缺失时为空串
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// 下拉选项的显示文本，标题为空时生成 `Media Item {n}`
    pub fn option_label(&self, index: usize) -> String {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => format!("Media Item {}", index + 1),
        }
    }
}

// =========================================================
// 错误类型
// =========================================================

/// 清单加载错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestError {
    /// 请求未能发出或连接失败
    Network(String),
    /// 非 2xx 响应
    Status(u16),
    /// 超时后被中止
    Timeout(u32),
    /// 页面卸载时被中止
    Aborted,
    /// 响应体不是合法 JSON
    Json(String),
    /// JSON 合法但不是数组
    Format,
}

impl fmt::Display for ManifestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestError::Network(msg) => write!(f, "Network error: {}", msg),
            ManifestError::Status(code) => write!(f, "HTTP error: {}", code),
            ManifestError::Timeout(ms) => write!(f, "Request timed out after {} ms", ms),
            ManifestError::Aborted => write!(f, "Request was cancelled"),
            ManifestError::Json(msg) => write!(f, "Invalid JSON: {}", msg),
            ManifestError::Format => {
                write!(f, "Manifest format error: expected a JSON array")
            }
        }
    }
}

impl std::error::Error for ManifestError {}

impl ManifestError {
    /// 请求是否因页面卸载而被主动取消（不是故障）
    pub fn is_cancellation(&self) -> bool {
        matches!(self, ManifestError::Aborted)
    }
}

// =========================================================
// 解析与请求地址
// =========================================================

/// 解析清单文本
///
/// 顶层必须是数组（否则 `Format`）。非对象的条目按空条目保留，
/// 使下拉选项的位置与清单一一对应。
pub fn parse_manifest(text: &str) -> Result<Vec<MediaItem>, ManifestError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| ManifestError::Json(e.to_string()))?;
    let Value::Array(entries) = value else {
        return Err(ManifestError::Format);
    };
    Ok(entries
        .into_iter()
        .map(|entry| match entry {
            Value::Object(_) => serde_json::from_value(entry).unwrap_or_default(),
            _ => MediaItem::default(),
        })
        .collect())
}

/// 在清单路径上附加防缓存参数 `t`
pub fn cache_busted_url(path: &str, stamp: Timestamp) -> String {
    let sep = if path.contains('?') { '&' } else { '?' };
    format!("{}{}t={}", path, sep, stamp)
}

/// 加载失败时写入错误区域的多行诊断
pub fn failure_diagnostic(err: &ManifestError, manifest_path: &str, file_name: &str) -> String {
    format!(
        "❌ Unable to load the media list\n\
         \n\
         Error: {err}\n\
         \n\
         Please check:\n\
         1) The page is served over HTTP (do not open it via file://)\n\
         2) The manifest path and file name are correct ({manifest_path})\n\
         3) {file_name} is a valid JSON array\n\
         4) The browser cache is cleared (Ctrl/Cmd+Shift+R)"
    )
}

#[cfg(test)]
mod tests;
