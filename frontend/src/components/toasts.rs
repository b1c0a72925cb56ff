use crate::notice::use_notices;
use crate::web::Interval;
use leptos::prelude::*;

/// 通知的过期检查间隔
const DRAIN_INTERVAL_MS: u32 = 500;

#[component]
pub fn Toasts() -> impl IntoView {
    let notices = use_notices();

    // 定时器随组件销毁
    let interval = Interval::new(DRAIN_INTERVAL_MS, move || notices.drain_expired());
    let _interval = StoredValue::new_local(interval);

    view! {
        <div class="toast toast-top toast-end z-50">
            <For each=move || notices.items() key=|n| n.id let:notice>
                <div class=format!("alert {} shadow-lg", notice.level.css_class())>
                    <span>{notice.message.clone()}</span>
                    <button class="btn btn-ghost btn-xs" on:click=move |_| notices.dismiss(notice.id)>
                        "✕"
                    </button>
                </div>
            </For>
        </div>
    }
}
