//! Browser `localStorage` token persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session token is the only state the client persists. These helpers keep
//! the hydrate-only web-sys glue in one place; on the server every read comes
//! back empty and writes are dropped.

use leads::TokenStore;

/// `localStorage` key holding the session token.
pub const TOKEN_KEY: &str = "token";

/// Token store backed by `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokens;

impl TokenStore for BrowserTokens {
    fn token(&self) -> Option<String> {
        load_item(TOKEN_KEY)
    }

    fn store(&mut self, token: &str) {
        save_item(TOKEN_KEY, token);
    }

    fn clear(&mut self) {
        remove_item(TOKEN_KEY);
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn load_item(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

fn save_item(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

fn remove_item(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}
