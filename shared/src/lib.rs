use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

pub mod protocol;

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const HEADER_API_KEY: &str = "apikey";
pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const DEFAULT_SESSION_STORAGE_KEY: &str = "prompt-array-auth-token";

/// 会话到期前的提前刷新窗口（秒）
pub const EXPIRY_MARGIN_SECS: i64 = 10;

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 身份服务返回的用户
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    /// 注册时提交的资料 (如 full_name)
    #[serde(default)]
    pub user_metadata: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_confirmed_at: Option<String>,
}

impl User {
    pub fn full_name(&self) -> Option<&str> {
        self.user_metadata.get("full_name")?.as_str()
    }

    /// 侧边栏等处显示的名称：优先 full_name，其次 email
    pub fn display_name(&self) -> &str {
        self.full_name()
            .filter(|name| !name.trim().is_empty())
            .or(self.email.as_deref())
            .unwrap_or(&self.id)
    }
}

/// 登录后的会话
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: i64,
    /// Unix 秒
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: User,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

impl Session {
    pub fn expires_at_utc(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.expires_at?, 0).single()
    }

    /// 没有到期时间的会话视为未过期
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(at) => now.timestamp() + EXPIRY_MARGIN_SECS >= at,
            None => false,
        }
    }

    /// 服务端只返回 expires_in 时，补齐绝对到期时间
    pub fn with_expiry_from(mut self, now: DateTime<Utc>) -> Self {
        if self.expires_at.is_none() && self.expires_in > 0 {
            self.expires_at = Some(now.timestamp() + self.expires_in);
        }
        self
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

/// 邮箱 + 密码凭据
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into().trim().to_string(),
            password: password.into(),
        }
    }
}

// 不在日志中泄露密码
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// 注册时附带的用户资料
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignUpProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

/// 注册接口的两种成功返回：
/// 开启自动确认时直接返回会话，否则只返回待确认的用户
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SignUpResponse {
    Session(Session),
    ConfirmationPending(User),
}

/// 身份服务的错误响应体
///
/// 新旧两代接口字段不同，全部设为可选
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(default)]
    pub error_code: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// 可读的错误描述
    pub fn describe(&self) -> Option<&str> {
        self.msg
            .as_deref()
            .or(self.error_description.as_deref())
            .or(self.message.as_deref())
            .or(self.error.as_deref())
    }

    /// 机器可读的错误码
    pub fn code(&self) -> Option<&str> {
        self.error_code.as_deref().or(self.error.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user() -> User {
        User {
            id: "u-1".to_string(),
            email: Some("ada@example.com".to_string()),
            user_metadata: json!({ "full_name": "Ada Lovelace" }),
            email_confirmed_at: None,
        }
    }

    #[test]
    fn test_display_name_prefers_full_name() {
        assert_eq!(user().display_name(), "Ada Lovelace");

        let mut anonymous = user();
        anonymous.user_metadata = json!({});
        assert_eq!(anonymous.display_name(), "ada@example.com");
    }

    #[test]
    fn test_session_expiry() {
        let now = Utc.timestamp_opt(1_000, 0).single().unwrap();
        let session = Session {
            access_token: "a".to_string(),
            refresh_token: "r".to_string(),
            token_type: "bearer".to_string(),
            expires_in: 3600,
            expires_at: None,
            user: user(),
        }
        .with_expiry_from(now);

        assert_eq!(session.expires_at, Some(4_600));
        assert!(!session.is_expired(now));
        assert!(session.is_expired(Utc.timestamp_opt(4_595, 0).single().unwrap()));
    }

    #[test]
    fn test_sign_up_response_variants() {
        let pending: SignUpResponse = serde_json::from_value(json!({
            "id": "u-2",
            "email": "new@example.com",
            "confirmation_sent_at": "2024-01-01T00:00:00Z"
        }))
        .unwrap();
        assert!(matches!(pending, SignUpResponse::ConfirmationPending(ref u) if u.id == "u-2"));

        let active: SignUpResponse = serde_json::from_value(json!({
            "access_token": "a",
            "refresh_token": "r",
            "expires_in": 3600,
            "user": { "id": "u-3" }
        }))
        .unwrap();
        assert!(matches!(active, SignUpResponse::Session(_)));
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let creds = Credentials::new(" ada@example.com ", "hunter2");
        assert_eq!(creds.email, "ada@example.com");
        assert!(!format!("{:?}", creds).contains("hunter2"));
    }
}
