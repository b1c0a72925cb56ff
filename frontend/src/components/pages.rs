//! 各功能页面
//!
//! 业务页面的内容不在导航外壳的范围内，这里只提供入口视图。

use crate::auth::use_auth;
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use prompt_array::RouteMatch;

/// 公开首页
#[component]
pub fn HomePage() -> impl IntoView {
    let router = use_router();
    let tutorials = router.navigation().with_value(|n| n.model.external_links());

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content text-center">
                <div class="max-w-xl space-y-6">
                    <h1 class="text-5xl font-bold">"Prompt Array"</h1>
                    <p class="text-base-content/70">
                        "Organize, share and chain your AI prompts in one place."
                    </p>
                    <div class="flex justify-center gap-2">
                        <Link to="/signup" class="btn btn-primary">"Get Started"</Link>
                        <Link to="/signin" class="btn btn-outline">"Sign In"</Link>
                    </div>
                    <div class="flex justify-center gap-4 text-sm">
                        <Link to="/pricing" class="link">"Pricing"</Link>
                        <Link to="/why-free" class="link">"Why Free?"</Link>
                        {tutorials
                            .into_iter()
                            .map(|item| view! {
                                <a href=item.href.clone() target="_blank" rel="noopener noreferrer" class="link">
                                    {item.label().to_string()}
                                </a>
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}

/// 通用的页面框架：标题 + 说明 + 路由参数
#[component]
pub fn FeaturePage(
    title: &'static str,
    description: &'static str,
    route: RouteMatch,
) -> impl IntoView {
    let params: Vec<(String, String)> = route.params.into_iter().collect();

    view! {
        <section class="space-y-4">
            <h1 class="text-2xl font-bold">{title}</h1>
            <p class="text-base-content/70">{description}</p>
            {(!params.is_empty()).then(|| view! {
                <div class="flex gap-2">
                    {params
                        .into_iter()
                        .map(|(k, v)| view! { <span class="badge badge-outline">{k} ": " {v}</span> })
                        .collect_view()}
                </div>
            })}
        </section>
    }
}

/// 账户页：展示当前用户
#[component]
pub fn AccountPage() -> impl IntoView {
    let user = use_auth().user();

    view! {
        <section class="space-y-4">
            <h1 class="text-2xl font-bold">"Account"</h1>
            {move || user.get().map(|u| view! {
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <p><span class="font-semibold">"Name: "</span>{u.display_name().to_string()}</p>
                        <p><span class="font-semibold">"Email: "</span>{u.email.clone().unwrap_or_default()}</p>
                    </div>
                </div>
            })}
        </section>
    }
}
