//! 认证上下文
//!
//! 持有核心库的 `AuthStore`，并把它的状态转换同步到一个信号上。
//! 路由服务只读取这个信号，与认证系统解耦。

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use prompt_array::{AppConfig, AuthResult, AuthSnapshot, AuthStore, GoTrueBackend, SignUpOutcome};
use prompt_array_shared::{Credentials, SignUpProfile, User};

use crate::web::{FetchClient, WebStorage};

pub type Backend = GoTrueBackend<FetchClient, WebStorage>;

/// 认证上下文
///
/// store 只存在于 UI 线程，用 local 存储；快照信号供组件订阅。
#[derive(Clone, Copy)]
pub struct AuthContext {
    store: StoredValue<Rc<AuthStore<Backend>>, LocalStorage>,
    snapshot: RwSignal<AuthSnapshot>,
}

impl AuthContext {
    pub fn new(config: &AppConfig) -> Self {
        let store = Rc::new(AuthStore::new(GoTrueBackend::new(
            config,
            FetchClient,
            WebStorage,
        )));
        let snapshot = RwSignal::new(store.snapshot());

        // 订阅与 store 同生命周期
        store
            .subscribe(move |next: &AuthSnapshot| snapshot.set(next.clone()))
            .detach();

        Self {
            store: StoredValue::new_local(store),
            snapshot,
        }
    }

    fn store(&self) -> Rc<AuthStore<Backend>> {
        self.store.get_value()
    }

    /// 认证状态信号（用于路由服务注入）
    pub fn snapshot(&self) -> Signal<AuthSnapshot> {
        self.snapshot.into()
    }

    pub fn user(&self) -> Signal<Option<User>> {
        let snapshot = self.snapshot;
        Signal::derive(move || snapshot.with(|s| s.user().cloned()))
    }

    /// 启动初始会话探测，不等待结果
    pub fn initialize(&self) {
        let store = self.store();
        spawn_local(async move {
            store.initialize().await;
        });
    }

    pub async fn sign_in(&self, credentials: Credentials) -> AuthResult<User> {
        self.store().sign_in(&credentials).await
    }

    pub async fn sign_up(
        &self,
        credentials: Credentials,
        profile: SignUpProfile,
    ) -> AuthResult<SignUpOutcome> {
        self.store().sign_up(&credentials, &profile).await
    }

    pub async fn sign_out(&self) -> AuthResult<()> {
        self.store().sign_out().await
    }

    pub async fn resend_verification(&self, email: String) -> AuthResult<()> {
        self.store().resend_verification(&email).await
    }

    pub async fn request_password_reset(&self, email: String) -> AuthResult<()> {
        self.store().request_password_reset(&email).await
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}
