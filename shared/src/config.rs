//! 站点配置
//!
//! 集中管理清单路径、请求超时、文章键集合等可调参数，
//! 页面组件通过 Context 获取同一份配置。

/// 默认影音清单路径（相对于页面）
pub const DEFAULT_MANIFEST_PATH: &str = "data/videos.json";
/// 清单请求超时（毫秒）
pub const DEFAULT_FETCH_TIMEOUT_MS: u32 = 10_000;
/// 统计页预置的文章键
pub const DEFAULT_ARTICLE_KEYS: [&str; 3] = ["v1a_home", "about_me", "comments"];
/// 搜索页“最近关键字”显示条数
pub const DEFAULT_RECENT_LIMIT: usize = 10;

/// 站点配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub manifest_path: String,
    pub fetch_timeout_ms: u32,
    pub article_keys: Vec<String>,
    pub recent_limit: usize,
    /// 站点部署的路径前缀，例如 `/my-site`；根部署时为空
    pub base_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            manifest_path: DEFAULT_MANIFEST_PATH.to_string(),
            fetch_timeout_ms: DEFAULT_FETCH_TIMEOUT_MS,
            article_keys: DEFAULT_ARTICLE_KEYS.iter().map(|k| k.to_string()).collect(),
            recent_limit: DEFAULT_RECENT_LIMIT,
            base_path: String::new(),
        }
    }
}

impl SiteConfig {
    /// 设置部署前缀，去掉结尾的 `/`
    pub fn with_base_path(mut self, base: &str) -> Self {
        self.base_path = base.trim_end_matches('/').to_string();
        self
    }

    /// 清单的站点根路径
    ///
    /// 请求地址不随当前页面路径变化：`/videos/` 与 `/videos.html`
    /// 请求的是同一个文件。
    pub fn manifest_request_path(&self) -> String {
        format!(
            "{}/{}",
            self.base_path,
            self.manifest_path.trim_start_matches('/')
        )
    }

    /// 清单文件名（用于诊断信息）
    pub fn manifest_file_name(&self) -> &str {
        self.manifest_path
            .rsplit('/')
            .next()
            .unwrap_or(&self.manifest_path)
    }
}
