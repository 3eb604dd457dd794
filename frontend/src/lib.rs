//! LostLinked 前端应用
//!
//! 采用 Context-Driven 的架构：
//! - `lostlinked`（核心库）: 路由定义、认证状态机、列表与表单逻辑
//! - `web::router`: 路由服务（History API）
//! - `auth`: 把认证状态放进信号并通过 Context 提供
//! - `components`: UI 组件层

mod api;
mod auth;
mod components {
    pub mod header;
    pub mod home;
    mod icons;
    pub mod item_card;
    pub mod login;
    pub mod protected_route;
    pub mod report_form;
    pub mod spinner;
    pub mod toast;
}
pub(crate) mod web;

use crate::auth::{AuthContext, init_auth};
use crate::components::header::Header;
use crate::components::home::HomePage;
use crate::components::login::LoginPage;
use crate::components::protected_route::ProtectedRoute;
use crate::components::report_form::ReportFormPage;
use crate::components::toast::{ToastOutlet, provide_toaster};
use crate::web::router::{Link, Router, RouterOutlet};

use leptos::prelude::*;
use lostlinked::{AppRoute, ClientConfig};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Report(kind) => view! { <ReportFormPage kind=kind /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Admin => view! {
            <ProtectedRoute>
                <HomePage admin=true />
            </ProtectedRoute>
        }
        .into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-[60vh]">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                    <Link to=AppRoute::Home.to_path() class="btn btn-primary mt-6">"Back to Home"</Link>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建认证上下文
    let auth_ctx = AuthContext::new(ClientConfig::from_build_env());
    provide_context(auth_ctx);

    // 2. 从 LocalStorage 恢复会话
    init_auth(&auth_ctx);

    provide_toaster();

    view! {
        // 3. 路由器组件：注入认证信号实现守卫
        <Router auth=auth_ctx.state_signal()>
            <div class="min-h-screen bg-base-200 font-sans">
                <Header />
                <RouterOutlet matcher=route_matcher />
                <ToastOutlet />
            </div>
        </Router>
    }
}

/// 安装控制台日志器，调试构建输出 debug 级别
pub fn init_logging() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // 只会在重复初始化时失败
    let _ = console_log::init_with_level(level);
}
