use crate::auth::use_auth;
use crate::components::icons::NavIcon;
use crate::notice::use_notices;
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use leptos::task::spawn_local;
use prompt_array::nav::MenuItem;

/// 受保护区域的布局：侧边栏 + 内容区
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    view! {
        <div class="drawer lg:drawer-open min-h-screen bg-base-200">
            <input id="app-drawer" type="checkbox" class="drawer-toggle" />
            <div class="drawer-content flex flex-col">
                <div class="navbar bg-base-100 lg:hidden">
                    <label for="app-drawer" class="btn btn-ghost">"☰"</label>
                    <span class="text-lg font-bold">"Prompt Array"</span>
                </div>
                <main class="p-4 md:p-8">{children()}</main>
            </div>
            <div class="drawer-side">
                <label for="app-drawer" class="drawer-overlay"></label>
                <Sidebar />
            </div>
        </div>
    }
}

fn menu_link(item: MenuItem) -> impl IntoView {
    let class = if item.active {
        "flex items-center gap-3 active"
    } else {
        "flex items-center gap-3"
    };
    let icon = item.entry.icon_ref().map(|i| i.name().to_string());
    let badge = item.entry.badge_text().map(str::to_string);
    let label = item.label().to_string();

    view! {
        <li>
            <Link to=item.href class=class>
                {icon.map(|name| view! { <NavIcon name=name class="h-4 w-4" /> })}
                <span class="flex-1">{label}</span>
                {badge.map(|b| view! { <span class="badge badge-sm badge-primary">{b}</span> })}
            </Link>
        </li>
    }
}

/// 外部链接：新窗口打开，不经过路由
fn external_link(item: MenuItem) -> impl IntoView {
    let icon = item.entry.icon_ref().map(|i| i.name().to_string());
    let label = item.label().to_string();

    view! {
        <li>
            <a href=item.href target="_blank" rel="noopener noreferrer" class="flex items-center gap-3">
                {icon.map(|name| view! { <NavIcon name=name class="h-4 w-4" /> })}
                <span class="flex-1">{label}</span>
            </a>
        </li>
    }
}

#[component]
fn Sidebar() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let notices = use_notices();
    let navigation = router.navigation();
    let path = router.path();
    let user = auth.user();
    let external = navigation.with_value(|n| n.model.external_links());

    let menu = move || {
        let current = path.get();
        navigation.with_value(|n| {
            let root = n.routes.protected_root().map(|r| r.path.clone()).unwrap_or_default();
            n.model.menu_items(&root, &current)
        })
    };

    // 先离开受保护区域再登出
    let on_sign_out = move |_| {
        router.navigate("/");
        spawn_local(async move {
            if let Err(e) = auth.sign_out().await {
                notices.auth_error(&e);
            }
        });
    };

    view! {
        <aside class="w-64 min-h-full bg-base-100 flex flex-col">
            <div class="p-4 text-xl font-bold">"Prompt Array"</div>
            <ul class="menu flex-1">
                {move || menu().into_iter().map(menu_link).collect_view()}
            </ul>
            <ul class="menu border-t border-base-300">
                {external.into_iter().map(external_link).collect_view()}
            </ul>
            <div class="p-4 border-t border-base-300 flex items-center gap-2">
                <NavIcon name="user" class="h-5 w-5" />
                <span class="flex-1 truncate text-sm">
                    {move || user.get().map(|u| u.display_name().to_string()).unwrap_or_default()}
                </span>
                <button class="btn btn-ghost btn-sm" title="Sign out" on:click=on_sign_out>
                    <NavIcon name="log-out" class="h-4 w-4" />
                </button>
            </div>
        </aside>
    }
}
