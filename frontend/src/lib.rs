//! Prompt Array 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - 核心库 `prompt_array`: 导航模型、路由组装、守卫决策、会话状态
//! - `web::router`: 路由服务（执行守卫决策）
//! - `auth` / `notice`: 认证与通知上下文
//! - `components`: UI 组件层

mod auth;
mod components {
    pub mod fault;
    pub mod form;
    pub mod icons;
    pub mod pages;
    pub mod register;
    pub mod reset_password;
    pub mod shell;
    pub mod sign_in;
    pub mod toasts;
}
pub mod config;
mod notice;
pub mod panic_hook;

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，替代 gloo-* 系列 crate，
// 以减小 WASM 二进制体积。
pub(crate) mod web;

pub use web::logger;

use crate::auth::AuthContext;
use crate::components::fault::{FaultScreen, NotFoundPage};
use crate::components::pages::{AccountPage, FeaturePage, HomePage};
use crate::components::register::{RegisterPage, RegisterSuccessPage};
use crate::components::reset_password::ResetPasswordPage;
use crate::components::shell::AppShell;
use crate::components::sign_in::SignInPage;
use crate::components::toasts::Toasts;
use crate::notice::NoticeContext;

use leptos::prelude::*;
use log::error;
use prompt_array::fault::Fault;
use prompt_array::nav::{PageRef, pages};
use prompt_array::{AppConfig, Navigation, RouteMatch};

use web::router::{Router, RouterOutlet};

type PageView = fn(RouteMatch) -> AnyView;

fn feature(title: &'static str, description: &'static str, route: RouteMatch) -> AnyView {
    view! { <FeaturePage title=title description=description route=route /> }.into_any()
}

/// 页面键到视图的映射
const PAGE_VIEWS: &[(PageRef, PageView)] = &[
    (pages::HOME, |_| view! { <HomePage /> }.into_any()),
    (pages::SIGN_IN, |_| view! { <SignInPage /> }.into_any()),
    (pages::SIGN_UP, |_| view! { <RegisterPage /> }.into_any()),
    (pages::RESET_PASSWORD, |_| view! { <ResetPasswordPage /> }.into_any()),
    (pages::REGISTER_SUCCESS, |_| view! { <RegisterSuccessPage /> }.into_any()),
    (pages::PRICING, |r| feature("Pricing", "Prompt Array is free to use.", r)),
    (pages::PAYMENT_SUCCESS, |r| feature("Payment Successful", "Thank you for your support!", r)),
    (pages::WHY_FREE, |r| feature("Why Free?", "Why Prompt Array costs nothing.", r)),
    (pages::DASHBOARD, |r| feature("Dashboard", "Your recent prompts and activity.", r)),
    (pages::ACCOUNT, |_| view! { <AccountPage /> }.into_any()),
    (pages::LIBRARY, |r| feature("Library", "All of your saved prompts.", r)),
    (pages::PROMPT_DETAIL, |r| feature("Prompt", "Prompt details.", r)),
    (pages::GROUPS, |r| feature("Groups", "Collaborate on prompts with your groups.", r)),
    (pages::GROUP_DETAIL, |r| feature("Group", "Group details.", r)),
    (pages::CHAINS, |r| feature("Chains", "Multi-step prompt chains.", r)),
    (pages::CREATE_CHAIN, |r| feature("Create Chain", "Build a new prompt chain.", r)),
    (pages::VIEW_CHAIN, |r| feature("Chain", "Chain details.", r)),
    (pages::EDIT_CHAIN, |r| feature("Edit Chain", "Edit an existing chain.", r)),
    (pages::COMMUNITY, |r| feature("Community", "Prompts shared by the community.", r)),
    (pages::FAVORITES, |r| feature("Favourites", "Prompts you have starred.", r)),
    (pages::TEMPLATES, |r| feature("Templates", "Reusable prompt templates.", r)),
    (pages::TECHNIQUES, |r| feature("Techniques", "Prompt engineering techniques.", r)),
];

/// 路由匹配函数
///
/// 根据页面键返回对应的视图组件；受保护页面套上侧边栏布局。
fn route_matcher(route: RouteMatch) -> AnyView {
    let protected = route.protected;
    let Some((_, render)) = PAGE_VIEWS.iter().find(|(page, _)| *page == route.page) else {
        error!("[App] No view registered for page `{}`", route.page.key());
        return not_found();
    };
    let page = render(route);

    if protected {
        view! { <AppShell>{page}</AppShell> }.into_any()
    } else {
        page
    }
}

fn not_found() -> AnyView {
    view! { <NotFoundPage /> }.into_any()
}

#[component]
pub fn App() -> impl IntoView {
    let config = config::load();

    match Navigation::bootstrap(&config) {
        Ok(navigation) => view! { <Shell config=config navigation=navigation /> }.into_any(),
        Err(e) => {
            error!("[App] Invalid navigation configuration: {}", e);
            view! {
                <div class="flex items-center justify-center min-h-screen">
                    <p class="text-error">"The application is misconfigured."</p>
                </div>
            }
            .into_any()
        }
    }
}

#[component]
fn Shell(config: AppConfig, navigation: Navigation) -> impl IntoView {
    // 1. 创建认证与通知上下文
    let auth_ctx = AuthContext::new(&config);
    provide_context(auth_ctx);
    provide_context(NoticeContext::new());

    // 2. 在第一次守卫决策之前启动会话探测
    auth_ctx.initialize();

    let show_detail = config.show_fault_detail;
    let app_root = config.app_root.clone();

    view! {
        // 3. 路由器组件：注入认证快照实现守卫
        <Router navigation=navigation auth=auth_ctx.snapshot()>
            <ErrorBoundary fallback=move |errors| {
                let detail = errors
                    .get()
                    .into_iter()
                    .map(|(_, e)| e.to_string())
                    .collect::<Vec<_>>()
                    .join("\n");
                view! { <FaultScreen fault=Fault::new(detail, show_detail, &app_root) /> }
            }>
                <RouterOutlet matcher=route_matcher not_found=not_found />
            </ErrorBoundary>
            <Toasts />
        </Router>
    }
}
