//! 认证相关页面共用的表单外壳

use leptos::prelude::*;
use prompt_array::liveness::Liveness;

/// 居中的卡片布局
#[component]
pub fn AuthCard(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">{title}</h1>
                    <p class="text-base-content/70">{subtitle}</p>
                </div>
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">{children()}</div>
            </div>
        </div>
    }
}

#[component]
pub fn ErrorAlert(message: ReadSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div role="alert" class="alert alert-error text-sm py-2">
                <span>{move || message.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}

#[component]
pub fn SubmitButton(
    busy: ReadSignal<bool>,
    label: &'static str,
    busy_label: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-control mt-6">
            <button class="btn btn-primary" disabled=move || busy.get()>
                {move || if busy.get() {
                    view! { <span class="loading loading-spinner"></span> {busy_label} }.into_any()
                } else {
                    label.into_any()
                }}
            </button>
        </div>
    }
}

/// 组件级存活标记：组件卸载时令牌全部失效，异步结果不再写回
pub fn use_liveness() -> Liveness {
    let liveness = Liveness::new();
    on_cleanup({
        let liveness = liveness.clone();
        move || liveness.invalidate()
    });
    liveness
}
