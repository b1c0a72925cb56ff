//! 通知上下文
//!
//! 包装核心库的 `Notices` 队列，由 `Toasts` 组件渲染。

use leptos::prelude::*;
use prompt_array::AuthError;
use prompt_array::fault::Fault;
use prompt_array::notice::{Notice, NoticeLevel, Notices};

use crate::web::now_ms;

#[derive(Clone, Copy)]
pub struct NoticeContext {
    notices: RwSignal<Notices>,
}

impl NoticeContext {
    pub fn new() -> Self {
        Self {
            notices: RwSignal::new(Notices::default()),
        }
    }

    pub fn push(&self, level: NoticeLevel, message: impl Into<String>) {
        let message = message.into();
        self.notices.update(|n| {
            n.push(level, message, now_ms());
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(NoticeLevel::Success, message);
    }

    pub fn auth_error(&self, err: &AuthError) {
        self.notices.update(|n| {
            n.push_auth_error(err, now_ms());
        });
    }

    pub fn fault(&self, fault: &Fault) {
        self.notices.update(|n| {
            fault.notify(n, now_ms());
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.notices.update(|n| {
            n.dismiss(id);
        });
    }

    /// 只有确实移除了通知时才触发更新
    pub fn drain_expired(&self) {
        let now = now_ms();
        let has_expired = self
            .notices
            .with_untracked(|n| n.items().any(|item| item.expires_at_ms <= now));
        if has_expired {
            self.notices.update(|n| {
                n.drain_expired(now);
            });
        }
    }

    pub fn items(&self) -> Vec<Notice> {
        self.notices.with(|n| n.items().cloned().collect())
    }
}

/// 从 Context 获取通知上下文
pub fn use_notices() -> NoticeContext {
    use_context::<NoticeContext>().expect("NoticeContext should be provided")
}
