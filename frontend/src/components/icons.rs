//! 线条图标（lucide 风格）
//!
//! 导航入口只保存图标名，这里把名字映射为 SVG 路径。

use leptos::prelude::*;

fn icon_paths(name: &str) -> &'static [&'static str] {
    match name {
        "home" => &["M3 10.5 12 3l9 7.5", "M5 9.5V21h14V9.5", "M9 21v-6h6v6"],
        "book-open" => &[
            "M2 4h7a3 3 0 0 1 3 3v14a2 2 0 0 0-2-2H2z",
            "M22 4h-7a3 3 0 0 0-3 3v14a2 2 0 0 1 2-2h8z",
        ],
        "users" => &[
            "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
            "M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z",
            "M22 21v-2a4 4 0 0 0-3-3.87",
            "M16 3.13a4 4 0 0 1 0 7.75",
        ],
        "git-branch" => &[
            "M6 3v12",
            "M18 9a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
            "M6 21a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
            "M18 9a9 9 0 0 1-9 9",
        ],
        "globe" => &[
            "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z",
            "M2 12h20",
            "M12 2a15 15 0 0 1 0 20 15 15 0 0 1 0-20z",
        ],
        "star" => &["m12 2 3.1 6.3 6.9 1-5 4.9 1.2 6.8-6.2-3.2-6.2 3.2L7 14.2 2 9.3l6.9-1z"],
        "layout-template" => &["M3 3h18v7H3z", "M3 14h9v7H3z", "M16 14h5v7h-5z"],
        "wand" => &["M15 4V2", "M15 16v-2", "M8 9h2", "M20 9h2", "m3 21 9-9"],
        "video" => &["m22 8-6 4 6 4V8z", "M2 6h14v12H2z"],
        "log-out" => &["M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4", "m16 17 5-5-5-5", "M21 12H9"],
        "user" => &[
            "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2",
            "M12 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z",
        ],
        // help-circle 及未知名字
        _ => &[
            "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z",
            "M9.1 9a3 3 0 0 1 5.8 1c0 2-3 3-3 3",
            "M12 17h.01",
        ],
    }
}

#[component]
pub fn NavIcon(
    #[prop(into)] name: String,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let paths = icon_paths(&name);
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
        >
            {paths.iter().map(|d| view! { <path d=*d></path> }).collect_view()}
        </svg>
    }
}
