//! 认证模块
//!
//! 会话状态本身（`lostlinked::AuthState`）是一个显式的值，
//! 这里只负责把它放进信号并通过 Context 提供给组件。
//! 路由服务通过注入的认证信号来检查认证状态。

use crate::api::{Api, api_client};
use crate::web::LocalStorage;
use leptos::prelude::*;
use lostlinked::auth::authenticate;
use lostlinked::{AuthState, ClientConfig, ClientResult};
use lostlinked_shared::{Credentials, User};

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 认证状态（只读）
    pub state: ReadSignal<AuthState>,
    /// 设置认证状态（写入）
    pub set_state: WriteSignal<AuthState>,
    config: StoredValue<ClientConfig>,
}

impl AuthContext {
    pub fn new(config: ClientConfig) -> Self {
        let (state, set_state) = signal(AuthState::default());
        Self {
            state,
            set_state,
            config: StoredValue::new(config),
        }
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn state_signal(&self) -> Signal<AuthState> {
        let state = self.state;
        Signal::derive(move || state.get())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(AuthState::is_authenticated)
    }

    pub fn username(&self) -> Option<String> {
        self.state.with(|s| s.user().map(|u| u.username.clone()))
    }

    fn store(&self) -> LocalStorage {
        LocalStorage::new(self.config.with_value(|c| c.token_storage_key.clone()))
    }

    /// 附带当前会话 token 的 API 客户端
    pub fn api(&self) -> Api {
        let token = self.state.with_untracked(|s| s.token().map(str::to_string));
        self.config.with_value(|config| api_client(config, token))
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 初始化认证状态
///
/// 从 LocalStorage 读取 token；无法解析的 token 会被清除。
pub fn init_auth(ctx: &AuthContext) {
    let restored = AuthState::restore(&ctx.store());
    ctx.set_state.set(restored);
}

/// 登录并保存 token
///
/// 失败时状态保持未登录，错误返回给调用方显示。
pub async fn login(ctx: &AuthContext, credentials: Credentials) -> ClientResult<User> {
    let response = authenticate(&ctx.api(), &credentials).await?;

    let mut state = ctx.state.get_untracked();
    let user = state.sign_in(&ctx.store(), response)?;
    ctx.set_state.set(state);
    Ok(user)
}

/// 注销并清除 token
///
/// 受保护页面的跳转由路由服务的认证状态监听自动处理。
pub fn logout(ctx: &AuthContext) {
    let store = ctx.store();
    ctx.set_state.update(|state| state.sign_out(&store));
}
