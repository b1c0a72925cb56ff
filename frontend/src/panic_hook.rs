//! Panic 兜底
//!
//! panic 后 WASM 实例不再可用，响应式的错误边界也无法再渲染，
//! 因此直接改写 DOM，给出通用错误页和返回首页的链接。

use std::panic;
use std::sync::OnceLock;

use prompt_array::AppConfig;
use prompt_array::fault::Fault;

static FALLBACK: OnceLock<(String, bool)> = OnceLock::new();

/// 与 `console_error_panic_hook` 相同地把 panic 打印到 console，然后渲染静态错误页
fn hook(info: &panic::PanicHookInfo) {
    console_error_panic_hook::hook(info);

    let (app_root, show_detail) = FALLBACK
        .get()
        .cloned()
        .unwrap_or_else(|| ("/app".to_string(), false));
    let fault = Fault::new(info.to_string(), show_detail, &app_root);
    render_static(&fault);
}

fn render_static(fault: &Fault) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };

    let detail = fault
        .detail()
        .map(|d| format!("<pre class=\"text-xs text-left overflow-auto\">{}</pre>", escape(d)))
        .unwrap_or_default();
    body.set_inner_html(&format!(
        "<div class=\"hero min-h-screen bg-base-200\"><div class=\"hero-content text-center\">\
         <div class=\"max-w-md space-y-4\"><h1 class=\"text-3xl font-bold\">{}</h1><p>{}</p>{}\
         <a class=\"btn btn-primary\" href=\"{}\">{}</a></div></div></div>",
        fault.headline(),
        fault.summary(),
        detail,
        escape(&fault.recovery().target),
        fault.recovery().label,
    ));
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// 安装 panic hook；恢复链接指向配置的受保护根路由
pub fn install(config: &AppConfig) {
    let _ = FALLBACK.set((config.app_root.clone(), config.show_fault_detail));
    panic::set_hook(Box::new(hook));
}
