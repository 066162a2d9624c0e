//! 时间戳类型
//!
//! 清单请求的防缓存参数使用毫秒时间戳。取值由调用方提供
//! （浏览器端来自 `Date.now()`），本模块不访问任何时钟。

use std::fmt;

/// 毫秒时间戳
///
/// 内部存储为 `i64`，表示自 Unix 纪元以来的毫秒数
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Timestamp(i64);

impl Timestamp {
    /// 创建新的时间戳
    #[inline]
    pub const fn new(ms: i64) -> Self {
        Self(ms)
    }

    /// 从 JS 的浮点毫秒值构造（`Date.now()` 返回 f64）
    #[inline]
    pub fn from_js_millis(ms: f64) -> Self {
        Self(ms as i64)
    }

    /// 获取毫秒值
    #[inline]
    pub const fn as_millis(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
