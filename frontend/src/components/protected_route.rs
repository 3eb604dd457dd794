use crate::auth::use_auth;
use crate::components::spinner::Spinner;
use crate::web::router::use_router;
use leptos::prelude::*;
use lostlinked::GateDecision;
use lostlinked::route::guard;

/// 受保护页面的守卫
///
/// 认证状态加载中显示占位，未登录则替换为登录页，已登录才渲染子组件。
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let decision = Memo::new(move |_| auth.state.with(guard));

    Effect::new(move |_| {
        if let GateDecision::Redirect(target) = decision.get() {
            router.redirect(target);
        }
    });

    move || match decision.get() {
        GateDecision::Pending => view! { <Spinner /> }.into_any(),
        GateDecision::Redirect(_) => ().into_any(),
        GateDecision::Render => children().into_any(),
    }
}
