use serde::{Deserialize, Serialize};

pub mod protocol;
pub mod route;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 持久化 Bearer Token 使用的固定存储键
pub const TOKEN_STORAGE_KEY: &str = "access_token";
pub const AUTH_LOGIN_PATH: &str = "/auth/login";
pub const AUTH_ME_PATH: &str = "/auth/me";
pub const CAMPAIGNS_PATH: &str = "/campaigns/";

// =========================================================
// 认证模型 (Auth Models)
// =========================================================

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

impl LoginCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// 密码不进入日志
impl std::fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

fn default_token_type() -> String {
    "bearer".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

/// 后端返回的用户快照，获取时整体替换
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
}

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 创建活动时提交的数据（id 由后端分配）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignDraft {
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub budget: f64,
    pub status: bool,
}

impl CampaignDraft {
    pub fn into_campaign(self, id: i64) -> Campaign {
        Campaign {
            id,
            name: self.name,
            description: self.description,
            start_date: self.start_date,
            end_date: self.end_date,
            budget: self.budget,
            status: self.status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub budget: f64,
    /// true = 进行中, false = 已停用
    pub status: bool,
}

impl Campaign {
    pub fn is_active(&self) -> bool {
        self.status
    }
}

// =========================================================
// 传输辅助类型 (Wire Helpers)
// =========================================================

/// 后端错误体 `{ "detail": "..." }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

/// 删除接口返回的确认信息
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteConfirmation {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_type_defaults_to_bearer() {
        let token: AuthToken = serde_json::from_str(r#"{"access_token":"abc"}"#).unwrap();
        assert_eq!(token.token_type, "bearer");
    }

    #[test]
    fn delete_confirmation_accepts_empty_object() {
        let confirmation: DeleteConfirmation = serde_json::from_str("{}").unwrap();
        assert!(confirmation.message.is_empty());
    }

    #[test]
    fn draft_keeps_fields_when_promoted() {
        let draft = CampaignDraft {
            name: "Spring".to_string(),
            description: "Launch".to_string(),
            start_date: "2024-03-01".to_string(),
            end_date: "2024-05-31".to_string(),
            budget: 1200.5,
            status: true,
        };
        let campaign = draft.clone().into_campaign(7);
        assert_eq!(campaign.id, 7);
        assert_eq!(campaign.name, draft.name);
        assert_eq!(campaign.budget, draft.budget);
        assert!(campaign.is_active());
    }

    #[test]
    fn credentials_debug_hides_password() {
        let creds = LoginCredentials::new("alice", "hunter2");
        let text = format!("{:?}", creds);
        assert!(text.contains("alice"));
        assert!(!text.contains("hunter2"));
    }
}
