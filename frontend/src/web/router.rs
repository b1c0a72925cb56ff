//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，实现高内聚：
//! 所有对 window.history 的操作都集中在此模块。
//! 路由匹配与守卫决策来自核心库的 `Navigation`，这里只负责执行。

use leptos::prelude::*;
use log::info;
use prompt_array::nav::pages;
use prompt_array::{AuthSnapshot, GuardDecision, Navigation, RouteMatch};
use wasm_bindgen::prelude::*;

/// 获取当前浏览器路径（含查询串）
fn current_location() -> String {
    let Some(location) = web_sys::window().map(|w| w.location()) else {
        return "/".to_string();
    };
    let path = location.pathname().unwrap_or_else(|_| "/".to_string());
    let search = location.search().unwrap_or_default();
    format!("{}{}", path, search)
}

/// 推送 History 状态（内部工具函数）
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（内部工具函数，用于重定向）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

fn query_of(location: &str) -> &str {
    location.split_once('?').map(|(_, q)| q).unwrap_or_default()
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
/// 通过注入认证快照信号实现与认证系统的解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 当前位置（路径 + 查询串）
    location: RwSignal<String>,
    navigation: StoredValue<Navigation>,
    /// 认证状态（注入的信号，实现解耦）
    auth: Signal<AuthSnapshot>,
    /// 当前路由与守卫决策，只在结果变化时通知
    visit: Memo<Option<(RouteMatch, GuardDecision)>>,
}

impl RouterService {
    fn new(navigation: Navigation, auth: Signal<AuthSnapshot>) -> Self {
        let location = RwSignal::new(current_location());
        let navigation = StoredValue::new(navigation);
        let visit = Memo::new(move |_| {
            let snapshot = auth.get();
            let location = location.get();
            navigation.with_value(|n| n.visit(&snapshot, &location))
        });

        Self {
            location,
            navigation,
            auth,
            visit,
        }
    }

    /// 当前位置信号（路径 + 查询串）
    pub fn location(&self) -> Signal<String> {
        self.location.into()
    }

    /// 当前路径（不含查询串）
    pub fn path(&self) -> Signal<String> {
        let location = self.location;
        Signal::derive(move || {
            location.with(|l| l.split(['?', '#']).next().unwrap_or("/").to_string())
        })
    }

    pub fn query(&self) -> Signal<String> {
        let location = self.location;
        Signal::derive(move || location.with(|l| query_of(l).to_string()))
    }

    pub fn current(&self) -> Memo<Option<(RouteMatch, GuardDecision)>> {
        self.visit
    }

    pub fn navigation(&self) -> StoredValue<Navigation> {
        self.navigation
    }

    /// 导航到站内路径（pushState）
    pub fn navigate(&self, path: &str) {
        push_history_state(path);
        self.location.set(path.to_string());
    }

    /// 替换当前位置（replaceState，用于重定向）
    pub fn replace(&self, path: &str) {
        replace_history_state(path);
        self.location.set(path.to_string());
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let location = self.location;

        let closure = Closure::<dyn Fn()>::new(move || {
            // 守卫由 `setup_guard_redirect` 统一执行
            location.set(current_location());
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// **核心方法：守卫重定向**
    ///
    /// 位置或认证状态变化时重新决策：
    /// - 未登录访问受保护路由：替换为带回跳参数的登录地址
    /// - 已登录停留在登录页：回到回跳目标或受保护根路由
    fn setup_guard_redirect(&self) {
        let router = *self;

        Effect::new(move |_| {
            let snapshot = router.auth.get();
            let Some((route, decision)) = router.visit.get() else {
                return;
            };

            match decision {
                GuardDecision::Redirect { to, from } => {
                    info!("[Router] Access denied to {}. Redirecting to sign in.", from);
                    router.replace(&to);
                }
                GuardDecision::Render if route.page == pages::SIGN_IN => {
                    if !(snapshot.is_ready() && snapshot.is_authenticated()) {
                        return;
                    }
                    let location = router.location.get_untracked();
                    let target = router
                        .navigation
                        .with_value(|n| n.guard.post_sign_in_target(query_of(&location)));
                    info!("[Router] Already signed in. Redirecting to {}.", target);
                    router.replace(&target);
                }
                _ => {}
            }
        });
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(navigation: Navigation, auth: Signal<AuthSnapshot>) -> RouterService {
    let router = RouterService::new(navigation, auth);

    router.init_popstate_listener();
    router.setup_guard_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    navigation: Navigation,
    /// 认证状态信号
    auth: Signal<AuthSnapshot>,
    children: Children,
) -> impl IntoView {
    provide_router(navigation, auth);

    children()
}

/// 路由出口组件
///
/// 守卫允许时渲染匹配的页面；会话探测中或即将重定向时显示加载占位。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(RouteMatch) -> AnyView,
    /// 没有匹配路由时的视图
    not_found: fn() -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || match router.current().get() {
        Some((route, GuardDecision::Render)) => matcher(route),
        Some(_) => view! {
            <div class="flex items-center justify-center min-h-screen">
                <span class="loading loading-spinner loading-lg text-primary"></span>
            </div>
        }
        .into_any(),
        None => not_found(),
    }
}

/// 站内链接：拦截点击，改走路由服务
#[component]
pub fn Link(
    /// 目标路径
    #[prop(into)]
    to: String,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let target = to.clone();
    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        router.navigate(&target);
    };

    view! {
        <a href=to class=class on:click=on_click>
            {children()}
        </a>
    }
}
