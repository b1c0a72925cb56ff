//! 构建期配置
//!
//! 通过 `option_env!` 在编译时读取，未设置的变量使用核心库的默认值。

use log::error;
use prompt_array::AppConfig;

fn build_env(name: &str) -> Option<String> {
    let value = match name {
        "IDENTITY_URL" => option_env!("IDENTITY_URL"),
        "IDENTITY_ANON_KEY" => option_env!("IDENTITY_ANON_KEY"),
        "SIGN_IN_PATH" => option_env!("SIGN_IN_PATH"),
        "APP_ROOT_PATH" => option_env!("APP_ROOT_PATH"),
        "SESSION_STORAGE_KEY" => option_env!("SESSION_STORAGE_KEY"),
        // 开发构建默认展示错误详情
        "SHOW_FAULT_DETAIL" => {
            option_env!("SHOW_FAULT_DETAIL").or(cfg!(debug_assertions).then_some("true"))
        }
        _ => None,
    };
    value.map(str::to_string)
}

/// 配置无效时记录错误并回退到默认值
pub fn load() -> AppConfig {
    AppConfig::from_env(&build_env).unwrap_or_else(|e| {
        error!("[Config] {}. Falling back to defaults.", e);
        AppConfig::default()
    })
}
