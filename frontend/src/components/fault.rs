use crate::notice::use_notices;
use crate::web::router::use_router;
use leptos::prelude::*;
use prompt_array::fault::Fault;

/// 错误边界的兜底页面
#[component]
pub fn FaultScreen(fault: Fault) -> impl IntoView {
    let router = use_router();
    let notices = use_notices();

    // 每次进入错误页弹出一次通知
    let notice_fault = fault.clone();
    Effect::new(move |_| notices.fault(&notice_fault));

    let target = fault.recovery().target.clone();
    let on_recover = move |_| router.navigate(&target);

    view! {
        <div class="hero min-h-[60vh]">
            <div class="hero-content text-center">
                <div class="max-w-md space-y-4">
                    <h1 class="text-3xl font-bold">{fault.headline()}</h1>
                    <p class="text-base-content/70">{fault.summary()}</p>
                    {fault.detail().map(|d| view! {
                        <pre class="text-xs text-left bg-base-300 p-3 rounded overflow-auto">{d.to_string()}</pre>
                    })}
                    <button class="btn btn-primary" on:click=on_recover>
                        {fault.recovery().label}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-error">"404"</h1>
                <p class="text-xl mt-4">"Page not found"</p>
                <a class="btn btn-link mt-4" href="/">"Back to home"</a>
            </div>
        </div>
    }
}
