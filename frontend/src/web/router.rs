//! 路由服务模块 - 核心引擎
//!
//! 封装 History API，所有对 window.history 的操作集中在此模块。
//! 导航流程：请求 -> 守卫 -> 写入 History -> 更新路由信号。

use campaign_console::RouteGuard;
use campaign_console_shared::route::AppRoute;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn write_history(path: &str, use_push: bool) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let result = if use_push {
        history.push_state_with_url(&JsValue::NULL, "", Some(path))
    } else {
        history.replace_state_with_url(&JsValue::NULL, "", Some(path))
    };
    if result.is_err() {
        log::warn!("[Router] failed to update history for {}", path);
    }
}

/// 路由器服务
///
/// 每次导航都咨询 [`RouteGuard`]（读取持久化的 Token）。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    guard: StoredValue<RouteGuard, LocalStorage>,
    is_authenticated: Signal<bool>,
}

impl RouterService {
    fn new(guard: RouteGuard, is_authenticated: Signal<bool>) -> Self {
        let path = current_path();
        let requested = AppRoute::from_path(&path);
        let initial = guard.check(requested).resolve(requested);
        if initial != requested {
            write_history(initial.to_path(), false);
        }
        let (current_route, set_route) = signal(initial);

        Self {
            current_route,
            set_route,
            guard: StoredValue::new_local(guard),
            is_authenticated,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    pub fn navigate(&self, path: &str) {
        self.navigate_to_route(AppRoute::from_path(path), true);
    }

    /// `use_push` 为 false 时使用 replaceState
    fn navigate_to_route(&self, target: AppRoute, use_push: bool) {
        let route = self.guard.with_value(|g| g.check(target)).resolve(target);
        write_history(route.to_path(), use_push);
        self.set_route.set(route);
    }

    /// 浏览器后退/前进时同样执行守卫
    fn init_popstate_listener(&self) {
        let router = *self;
        let closure = Closure::<dyn Fn()>::new(move || {
            let target = AppRoute::from_path(&current_path());
            router.navigate_to_route(target, false);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 认证状态变化时重新检查当前路由
    fn setup_auth_redirect(&self) {
        let router = *self;
        Effect::new(move |_| {
            let _ = router.is_authenticated.get();
            let route = router.current_route.get_untracked();
            let resolved = router.guard.with_value(|g| g.check(route)).resolve(route);
            if resolved != route {
                write_history(resolved.to_path(), true);
                router.set_route.set(resolved);
            }
        });
    }
}

fn provide_router(guard: RouteGuard, is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new(guard, is_authenticated);
    router.init_popstate_listener();
    router.setup_auth_redirect();
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
#[component]
pub fn Router(
    guard: RouteGuard,
    /// 认证状态信号
    is_authenticated: Signal<bool>,
    children: Children,
) -> impl IntoView {
    provide_router(guard, is_authenticated);
    children()
}

/// 路由出口组件
#[component]
pub fn RouterOutlet(matcher: fn(AppRoute) -> AnyView) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}
