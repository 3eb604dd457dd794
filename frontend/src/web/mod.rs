//! 原生 Web API 封装模块
//!
//! History 与 LocalStorage 的轻量级封装。

pub mod router;
mod storage;

pub use storage::LocalStorage;
