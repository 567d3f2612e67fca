//! LocalStorage 封装模块
//!
//! 使用 `web_sys::Storage` 实现核心库的 [`TokenStore`]。
//! 存储不可用（隐私模式等）时读取返回 `None`，写入只记录日志。

use campaign_console::TokenStore;

pub struct BrowserTokenStore;

impl BrowserTokenStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl TokenStore for BrowserTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        let stored = Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some();
        if !stored {
            log::warn!("LocalStorage unavailable, token for {} not persisted", key);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
