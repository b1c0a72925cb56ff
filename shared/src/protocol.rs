use crate::{Credentials, Session, SignUpProfile, SignUpResponse, User};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A trait that defines the request-response relationship and metadata for an
/// identity endpoint.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The URL path (relative to the identity base URL, query included).
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// Whether the request carries the user's bearer token.
    const AUTHENTICATED: bool = false;
}

/// 空响应体 (`{}` 或 204)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Empty {}

// =========================================================
// Request Definitions
// =========================================================

/// 密码登录
#[derive(Debug, Serialize)]
pub struct PasswordGrantRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

impl<'a> From<&'a Credentials> for PasswordGrantRequest<'a> {
    fn from(c: &'a Credentials) -> Self {
        Self {
            email: &c.email,
            password: &c.password,
        }
    }
}

impl ApiRequest for PasswordGrantRequest<'_> {
    type Response = Session;
    const PATH: &'static str = "/auth/v1/token?grant_type=password";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// 用 refresh token 换取新会话
#[derive(Debug, Serialize)]
pub struct RefreshGrantRequest<'a> {
    pub refresh_token: &'a str,
}

impl ApiRequest for RefreshGrantRequest<'_> {
    type Response = Session;
    const PATH: &'static str = "/auth/v1/token?grant_type=refresh_token";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// 注册新账户
#[derive(Debug, Serialize)]
pub struct SignUpRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub data: &'a SignUpProfile,
}

impl<'a> SignUpRequest<'a> {
    pub fn new(credentials: &'a Credentials, profile: &'a SignUpProfile) -> Self {
        Self {
            email: &credentials.email,
            password: &credentials.password,
            data: profile,
        }
    }
}

impl ApiRequest for SignUpRequest<'_> {
    type Response = SignUpResponse;
    const PATH: &'static str = "/auth/v1/signup";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// 吊销当前会话
#[derive(Debug, Serialize)]
pub struct LogoutRequest;

impl ApiRequest for LogoutRequest {
    type Response = Empty;
    const PATH: &'static str = "/auth/v1/logout";
    const METHOD: HttpMethod = HttpMethod::Post;
    const AUTHENTICATED: bool = true;
}

/// 重新发送注册确认邮件
#[derive(Debug, Serialize)]
pub struct ResendRequest<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub email: &'a str,
}

impl<'a> ResendRequest<'a> {
    pub fn signup(email: &'a str) -> Self {
        Self {
            kind: "signup",
            email,
        }
    }
}

impl ApiRequest for ResendRequest<'_> {
    type Response = Empty;
    const PATH: &'static str = "/auth/v1/resend";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// 发送重置密码邮件
#[derive(Debug, Serialize)]
pub struct RecoverRequest<'a> {
    pub email: &'a str,
}

impl ApiRequest for RecoverRequest<'_> {
    type Response = Empty;
    const PATH: &'static str = "/auth/v1/recover";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// 用当前 access token 获取用户
#[derive(Debug, Serialize)]
pub struct GetUserRequest;

impl ApiRequest for GetUserRequest {
    type Response = User;
    const PATH: &'static str = "/auth/v1/user";
    const METHOD: HttpMethod = HttpMethod::Get;
    const AUTHENTICATED: bool = true;
}
