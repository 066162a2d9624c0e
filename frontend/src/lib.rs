//! sitekit 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由表与页面功能集（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `manifest`: 影音清单请求
//! - `components`: 各功能页面组件

// =========================================================
// 跨平台日志宏
// =========================================================

#[cfg(target_arch = "wasm32")]
macro_rules! log_info {
    ($($t:tt)*) => (web_sys::console::log_1(&format!($($t)*).into()))
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! log_info {
    ($($t:tt)*) => (println!($($t)*))
}

#[cfg(target_arch = "wasm32")]
macro_rules! log_warn {
    ($($t:tt)*) => (web_sys::console::warn_1(&format!($($t)*).into()))
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! log_warn {
    ($($t:tt)*) => (eprintln!($($t)*))
}

#[cfg(target_arch = "wasm32")]
macro_rules! log_error {
    ($($t:tt)*) => (web_sys::console::error_1(&format!($($t)*).into()))
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! log_error {
    ($($t:tt)*) => (eprintln!($($t)*))
}

mod components {
    pub mod comment_board;
    pub mod home;
    pub mod media_player;
    pub mod search_panel;
    pub mod stats_panel;
}
mod manifest;

use crate::components::comment_board::CommentBoardPanel;
use crate::components::home::{HomePage, NotFoundPage};
use crate::components::media_player::MediaPlayerPanel;
use crate::components::search_panel::SearchPanel;
use crate::components::stats_panel::StatsPanel;

use leptos::prelude::*;
use sitekit_shared::SiteConfig;

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装。
pub(crate) mod web {
    mod http;
    pub mod route;
    pub mod router;
    mod storage;
    mod timer;

    pub use http::{HttpClient, HttpError};
    pub use storage::LocalStorage;
    pub use timer::Timeout;
}

use web::route::{AppRoute, Feature};
use web::router::{Link, Router, RouterOutlet};

/// 从 Context 获取站点配置
pub(crate) fn use_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}

/// 渲染单个功能
fn feature_view(feature: Feature) -> AnyView {
    match feature {
        Feature::Media => view! { <MediaPlayerPanel /> }.into_any(),
        Feature::Stats => view! { <StatsPanel /> }.into_any(),
        Feature::Comments => view! { <CommentBoardPanel /> }.into_any(),
        Feature::Search => view! { <SearchPanel /> }.into_any(),
    }
}

/// 路由匹配函数
///
/// 根据路由表声明的功能集组装页面。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::NotFound => view! { <NotFoundPage /> }.into_any(),
        route => {
            let features = route.features();
            view! {
                <main class="page">
                    <h1>{route.title()}</h1>
                    {features.iter().copied().map(feature_view).collect_view()}
                </main>
            }
            .into_any()
        }
    }
}

/// 站点导航栏
#[component]
fn NavBar() -> impl IntoView {
    view! {
        <nav class="site-nav">
            {AppRoute::navigable()
                .into_iter()
                .map(|route| {
                    let title = route.title();
                    view! { <Link to=route>{title}</Link> }
                })
                .collect_view()}
        </nav>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 提供站点配置
    let config = SiteConfig::default();
    let base_path = config.base_path.clone();
    provide_context(config);

    view! {
        // 2. 路由器组件：解析当前路径并监听前进/后退
        <Router base_path=base_path>
            <NavBar />
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
