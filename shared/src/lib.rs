//! sitekit 共享领域层
//!
//! 纯逻辑，不依赖 `web_sys`，可在原生目标上直接测试：
//! - `manifest` / `media` / `player`: 影音清单解析与播放器渲染
//! - `metrics` / `comments` / `search`: 基于键值存储的示范功能
//! - `storage`: 键值存储抽象与 JSON 读写
//! - `config`: 站点配置

pub mod comments;
pub mod config;
pub mod date;
pub mod escape;
pub mod manifest;
pub mod media;
pub mod metrics;
pub mod player;
pub mod search;
pub mod storage;

pub use comments::{Comment, CommentBoard};
pub use config::SiteConfig;
pub use date::Timestamp;
pub use manifest::{ManifestError, MediaItem};
pub use media::{MediaKind, RenderError};
pub use metrics::{MetricsStore, StatsSnapshot};
pub use player::{LoadView, MediaPlayer, PlayerView, SelectOption};
pub use search::SearchLog;
pub use storage::{KeyValueStore, StorageError};

// =========================================================
// 持久化键 (Storage Keys)
// =========================================================

pub const KEY_TOTAL_VISITS: &str = "totalVisits";
pub const KEY_ARTICLE_VIEWS: &str = "articleViews";
pub const KEY_LIKES: &str = "likes";
pub const KEY_COMMENTS: &str = "comments";
pub const KEY_SEARCH_KEYWORDS: &str = "searchKeywords";
