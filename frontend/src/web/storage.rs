//! LocalStorage 封装模块
//!
//! 使用 `web_sys::Storage` 替代 `gloo-storage`，同时作为会话的持久化后端。

use prompt_array::identity::SessionStorage;

/// 浏览器 LocalStorage
#[derive(Debug, Clone, Copy, Default)]
pub struct WebStorage;

impl WebStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    /// 键不存在或存储不可用时返回 `None`
    pub fn get(key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    /// 写入成功返回 `true`（隐私模式下可能失败）
    pub fn set(key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    pub fn delete(key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }
}

impl SessionStorage for WebStorage {
    fn get(&self, key: &str) -> Option<String> {
        WebStorage::get(key)
    }

    fn set(&self, key: &str, value: &str) -> bool {
        WebStorage::set(key, value)
    }

    fn delete(&self, key: &str) -> bool {
        WebStorage::delete(key)
    }
}
