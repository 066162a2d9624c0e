//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 每个页面显式声明它启用的功能，路径按表精确匹配，
//! 不做子串判断（`/my-comments-archive.html` 不会启用留言板）。

use std::fmt::Display;

/// 页面可启用的功能
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    /// 影音播放器
    Media,
    /// 本地统计
    Stats,
    /// 留言板
    Comments,
    /// 搜索关键字记录
    Search,
}

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 首页 (默认路由)
    #[default]
    Home,
    Videos,
    Stats,
    Comments,
    Search,
    /// 页面未找到
    NotFound,
}

/// 路由表：路径 -> 路由
const ROUTE_TABLE: &[(&str, AppRoute)] = &[
    ("/", AppRoute::Home),
    ("/index.html", AppRoute::Home),
    ("/videos.html", AppRoute::Videos),
    ("/videos", AppRoute::Videos),
    ("/stats.html", AppRoute::Stats),
    ("/stats", AppRoute::Stats),
    ("/comments.html", AppRoute::Comments),
    ("/comments", AppRoute::Comments),
    ("/search.html", AppRoute::Search),
    ("/search", AppRoute::Search),
];

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    ///
    /// `base` 为站点部署前缀（可为空），解析前会先去掉。
    pub fn from_path(path: &str, base: &str) -> Self {
        let path = path.strip_prefix(base).unwrap_or(path);
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        ROUTE_TABLE
            .iter()
            .find(|(candidate, _)| *candidate == path)
            .map(|(_, route)| route.clone())
            .unwrap_or(Self::NotFound)
    }

    /// 计算一次 URL 变化后的新路由
    ///
    /// 与当前路由相同时返回 `None`：同一页面内的 History 变化
    /// （如 `#anchor`）不应重建页面。
    pub fn transition(current: &AppRoute, path: &str, base: &str) -> Option<Self> {
        let target = Self::from_path(path, base);
        (target != *current).then_some(target)
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Videos => "/videos.html",
            Self::Stats => "/stats.html",
            Self::Comments => "/comments.html",
            Self::Search => "/search.html",
            Self::NotFound => "/404",
        }
    }

    /// 该页面启用的功能
    pub fn features(&self) -> &'static [Feature] {
        match self {
            Self::Videos => &[Feature::Media],
            Self::Stats => &[Feature::Stats],
            Self::Comments => &[Feature::Comments],
            Self::Search => &[Feature::Search],
            Self::Home | Self::NotFound => &[],
        }
    }

    /// 导航栏标题
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Videos => "Media",
            Self::Stats => "Stats",
            Self::Comments => "Comments",
            Self::Search => "Search",
            Self::NotFound => "Not found",
        }
    }

    /// 导航栏中显示的路由
    pub fn navigable() -> [AppRoute; 5] {
        [
            Self::Home,
            Self::Videos,
            Self::Stats,
            Self::Comments,
            Self::Search,
        ]
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitekit_shared::SiteConfig;

    #[test]
    fn pages_resolve_with_and_without_extension() {
        assert_eq!(AppRoute::from_path("/stats.html", ""), AppRoute::Stats);
        assert_eq!(AppRoute::from_path("/stats", ""), AppRoute::Stats);
        assert_eq!(AppRoute::from_path("/search/", ""), AppRoute::Search);
        assert_eq!(AppRoute::from_path("/", ""), AppRoute::Home);
        assert_eq!(AppRoute::from_path("", ""), AppRoute::Home);
    }

    #[test]
    fn substring_matches_do_not_activate_features() {
        let route = AppRoute::from_path("/my-comments-archive.html", "");
        assert_eq!(route, AppRoute::NotFound);
        assert!(route.features().is_empty());
        assert_eq!(AppRoute::from_path("/blog/stats.html", ""), AppRoute::NotFound);
    }

    #[test]
    fn base_path_is_stripped() {
        assert_eq!(AppRoute::from_path("/site/comments.html", "/site"), AppRoute::Comments);
        assert_eq!(AppRoute::from_path("/site/", "/site"), AppRoute::Home);
    }

    #[test]
    fn each_feature_page_enables_exactly_its_feature() {
        assert_eq!(AppRoute::Videos.features(), &[Feature::Media]);
        assert_eq!(AppRoute::Stats.features(), &[Feature::Stats]);
        assert_eq!(AppRoute::Comments.features(), &[Feature::Comments]);
        assert_eq!(AppRoute::Search.features(), &[Feature::Search]);
        assert!(AppRoute::Home.features().is_empty());
    }

    #[test]
    fn media_page_fetches_the_same_manifest_from_any_url_form() {
        let root = SiteConfig::default();
        assert_eq!(AppRoute::from_path("/videos/", &root.base_path), AppRoute::Videos);
        assert_eq!(root.manifest_request_path(), "/data/videos.json");

        let nested = SiteConfig::default().with_base_path("/site");
        assert_eq!(
            AppRoute::from_path("/site/videos.html", &nested.base_path),
            AppRoute::Videos
        );
        assert_eq!(nested.manifest_request_path(), "/site/data/videos.json");
    }

    #[test]
    fn same_route_history_change_is_not_a_transition() {
        assert_eq!(AppRoute::transition(&AppRoute::Stats, "/stats.html", ""), None);
        assert_eq!(AppRoute::transition(&AppRoute::Stats, "/stats/", ""), None);
        assert_eq!(
            AppRoute::transition(&AppRoute::Stats, "/search.html", ""),
            Some(AppRoute::Search)
        );
    }

    #[test]
    fn every_page_has_a_static_entry_file() {
        let trunk_config = include_str!("../../Trunk.toml");
        let pages = trunk_config
            .split("for page in ")
            .nth(1)
            .and_then(|rest| rest.split(';').next())
            .unwrap_or_default();

        for route in AppRoute::navigable() {
            let Some(file) = route.to_path().strip_prefix('/').and_then(|p| p.strip_suffix(".html"))
            else {
                continue;
            };
            assert!(
                pages.split_whitespace().any(|page| page == file),
                "{} has no entry file in Trunk.toml",
                route
            );
        }
    }

    #[test]
    fn canonical_paths_round_trip() {
        for route in AppRoute::navigable() {
            assert_eq!(AppRoute::from_path(route.to_path(), ""), route);
        }
    }
}
