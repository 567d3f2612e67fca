//! 应用上下文模块
//!
//! 持有核心库的 [`AppContext`]，并把存储层的状态变化同步到 Leptos 信号，
//! 组件只读取信号、通过上下文调用动作。

use std::rc::Rc;

use campaign_console::{AppContext, AuthState, CampaignsState, ClientConfig, SessionContext};
use leptos::prelude::*;

use crate::web::{BrowserTokenStore, FetchHttpClient, LeptosSpawner};

pub type ConsoleContext = AppContext<FetchHttpClient>;

#[derive(Clone, Copy)]
pub struct AppStore {
    app: StoredValue<ConsoleContext, LocalStorage>,
    /// 认证状态快照（只读使用）
    pub auth: RwSignal<AuthState>,
    /// 活动状态快照（只读使用）
    pub campaigns: RwSignal<CampaignsState>,
}

impl AppStore {
    pub fn new() -> Self {
        let session = SessionContext::new(Rc::new(BrowserTokenStore));
        let app = AppContext::new(
            FetchHttpClient,
            ClientConfig::from_env(),
            session,
            Rc::new(LeptosSpawner),
        );

        let auth = RwSignal::new(app.auth.snapshot());
        let campaigns = RwSignal::new(app.campaigns.snapshot());
        app.auth.subscribe(move |state| auth.set(state.clone()));
        app.campaigns.subscribe(move |state| campaigns.set(state.clone()));

        Self {
            app: StoredValue::new_local(app),
            auth,
            campaigns,
        }
    }

    pub fn context(&self) -> ConsoleContext {
        self.app.get_value()
    }

    /// 认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let auth = self.auth;
        Signal::derive(move || auth.get().is_authenticated())
    }
}

/// 从 Context 获取应用状态
pub fn use_app() -> AppStore {
    use_context::<AppStore>().expect("AppStore should be provided")
}
