//! Campaign Console 前端应用
//!
//! - `web`: 浏览器平台适配（fetch、LocalStorage、History 路由、任务调度）
//! - `auth`: 应用上下文与状态信号
//! - `components`: 页面组件

mod auth;
mod components {
    pub mod campaigns;
    pub mod login;
}

pub(crate) mod web {
    mod http;
    pub mod router;
    mod spawn;
    mod storage;

    pub use http::FetchHttpClient;
    pub use spawn::LeptosSpawner;
    pub use storage::BrowserTokenStore;
}

use crate::auth::AppStore;
use crate::components::campaigns::CampaignsPage;
use crate::components::login::LoginPage;

use campaign_console_shared::route::AppRoute;
use leptos::prelude::*;
use web::router::{Router, RouterOutlet};

/// 根据 AppRoute 返回对应的视图组件
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Campaigns => view! { <CampaignsPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="not-found">
                <h1>"404"</h1>
                <p>"Page not found"</p>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建应用上下文
    let store = AppStore::new();
    provide_context(store);

    // 2. 从 LocalStorage 恢复会话
    let app = store.context();
    app.initialize();

    view! {
        <Router guard=app.guard.clone() is_authenticated=store.is_authenticated_signal()>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
