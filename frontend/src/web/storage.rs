//! LocalStorage 封装模块
//!
//! 直接使用 `web_sys::Storage`，会话 token 保存在配置指定的键下。

use lostlinked::TokenStore;

/// 保存会话 token 的本地存储
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalStorage {
    key: String,
}

impl LocalStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// 获取 LocalStorage 实例（隐私模式下可能不可用）
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl TokenStore for LocalStorage {
    fn load(&self) -> Option<String> {
        Self::storage()?.get_item(&self.key).ok()?
    }

    /// # 返回
    /// - `true` 如果操作成功
    /// - `false` 如果存储不可用或写入失败
    fn save(&self, token: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(&self.key, token).ok())
            .is_some()
    }

    fn clear(&self) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(&self.key).ok())
            .is_some()
    }
}
