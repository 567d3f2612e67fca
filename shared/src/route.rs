//! 路由定义模块 - 领域模型
//!
//! 纯业务逻辑层，不依赖 DOM。定义应用的所有路由及其属性。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 活动列表 (需要认证)
    #[default]
    Campaigns,
    /// 登录页面
    Login,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" => Self::Campaigns,
            "/login" => Self::Login,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Campaigns => "/",
            Self::Login => "/login",
            Self::NotFound => "/404",
        }
    }

    /// 该路由是否需要认证
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Campaigns)
    }

    /// 未认证访问受保护路由时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 已认证访问登录页时的重定向目标
    pub fn auth_success_redirect() -> Self {
        Self::Campaigns
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

    #[test]
    fn paths_round_trip_for_known_routes() {
        for route in [AppRoute::Campaigns, AppRoute::Login] {
            assert_eq!(AppRoute::from_path(route.to_path()), route);
        }
    }

    #[test]
    fn unknown_path_is_not_found_and_public() {
        let route = AppRoute::from_path("/settings");
        assert_eq!(route, AppRoute::NotFound);
        assert!(!route.requires_auth());
    }

    #[test]
    fn only_campaigns_requires_auth() {
        assert!(AppRoute::Campaigns.requires_auth());
        assert!(!AppRoute::Login.requires_auth());
    }
}
