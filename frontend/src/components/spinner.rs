use leptos::prelude::*;

/// 加载中的占位
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh]">
            <span class="loading loading-spinner loading-lg text-primary"></span>
            <p class="mt-4 text-base-content/70 font-medium">"Loading..."</p>
        </div>
    }
}
