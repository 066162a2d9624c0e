//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，所有对 window.history 的操作都集中在此模块。
//! 页面切换即“页面加载”：出口组件整体重建，功能组件重新初始化。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::AppRoute;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态（内部工具函数）
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 当前路由（只读信号）
    current_route: ReadSignal<AppRoute>,
    /// 设置当前路由（写入信号）
    set_route: WriteSignal<AppRoute>,
    /// 部署前缀
    base_path: StoredValue<String>,
}

impl RouterService {
    /// 创建新的路由服务，初始路由从当前 URL 解析
    fn new(base_path: String) -> Self {
        let initial_route = AppRoute::from_path(&current_path(), &base_path);
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            base_path: StoredValue::new(base_path),
        }
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// 路由对应的完整 href（含部署前缀）
    pub fn href(&self, route: &AppRoute) -> String {
        self.base_path
            .with_value(|base| format!("{}{}", base, route.to_path()))
    }

    /// 导航到指定路由
    ///
    /// 目标与当前路由相同时不做任何事，避免重复计入页面加载。
    pub fn navigate_to_route(&self, target_route: AppRoute) {
        if target_route == self.current_route.get_untracked() {
            return;
        }
        log_info!("[Router] Navigating to {}", target_route);
        push_history_state(&self.href(&target_route));
        self.set_route.set(target_route);
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let base_path = self.base_path;

        let closure = Closure::<dyn Fn()>::new(move || {
            let path = current_path();
            let transition = base_path.with_value(|base| {
                AppRoute::transition(&current_route.get_untracked(), &path, base)
            });
            if let Some(target_route) = transition {
                set_route.set(target_route);
            }
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(base_path: String) -> RouterService {
    let router = RouterService::new(base_path);
    router.init_popstate_listener();
    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 站点部署前缀
    #[prop(into)]
    base_path: String,
    /// 子组件
    children: Children,
) -> impl IntoView {
    provide_router(base_path);

    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

/// 站内链接：拦截点击，改用 History 导航
#[component]
pub fn Link(
    /// 目标路由
    to: AppRoute,
    /// 子内容
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let href = router.href(&to);
    let is_active = {
        let to = to.clone();
        move || router.current_route().get() == to
    };

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        router.navigate_to_route(to.clone());
    };

    view! {
        <a href=href class:active=is_active on:click=on_click>
            {children()}
        </a>
    }
}
