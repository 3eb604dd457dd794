use crate::auth::{logout, use_auth};
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use lostlinked::AppRoute;
use lostlinked_shared::ItemKind;

/// 顶部导航栏
#[component]
pub fn Header() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let on_logout = move |_| {
        logout(&auth);
        router.navigate(AppRoute::Home.to_path());
    };

    let nav_class = "btn btn-ghost btn-sm text-primary-content";

    view! {
        <header class="navbar bg-primary text-primary-content shadow-lg px-4">
            <div class="flex-1">
                <Link to=AppRoute::Home.to_path() class="btn btn-ghost text-2xl font-bold tracking-tight">
                    "LostLinked"
                </Link>
            </div>
            <nav class="flex-none gap-2">
                <Link to=AppRoute::Home.to_path() class=nav_class>"Home"</Link>
                <Link to=AppRoute::Report(ItemKind::Lost).to_path() class=nav_class>"Report Lost"</Link>
                <Link to=AppRoute::Report(ItemKind::Found).to_path() class=nav_class>"Report Found"</Link>
                <Show
                    when=move || auth.is_authenticated()
                    fallback=move || view! {
                        <Link to=AppRoute::Login.to_path() class="btn btn-success btn-sm">"Admin Login"</Link>
                    }
                >
                    <Link to=AppRoute::Admin.to_path() class=nav_class>"Admin"</Link>
                    <button on:click=on_logout class="btn btn-error btn-sm">
                        "Logout (" {move || auth.username().unwrap_or_default()} ")"
                    </button>
                </Show>
            </nav>
        </header>
    }
}
