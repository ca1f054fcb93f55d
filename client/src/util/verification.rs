//! Bridge between the human-verification widget and the contact form.
//!
//! The widget is configured through `data-callback` attributes naming global
//! functions. We register those functions on `window` once per page load; they
//! forward to whichever handler the mounted landing page installed last.

#[cfg(test)]
#[path = "verification_test.rs"]
mod verification_test;

use std::cell::{Cell, RefCell};

/// Global function the widget calls with a fresh token.
pub const ON_VERIFIED: &str = "leadsOnVerified";
/// Global function the widget calls when its token expires.
pub const ON_EXPIRED: &str = "leadsOnVerificationExpired";
/// Global object exposed by the widget script.
pub const WIDGET_GLOBAL: &str = "hcaptcha";

type TokenHandler = Box<dyn Fn(Option<String>)>;

thread_local! {
    static HANDLER: RefCell<Option<TokenHandler>> = const { RefCell::new(None) };
    static GLOBALS_INSTALLED: Cell<bool> = const { Cell::new(false) };
}

/// Make `on_token` the current handler. Returns `true` only the first time,
/// when the window globals still have to be registered.
fn set_handler(on_token: impl Fn(Option<String>) + 'static) -> bool {
    HANDLER.with(|slot| *slot.borrow_mut() = Some(Box::new(on_token)));
    !GLOBALS_INSTALLED.with(|installed| installed.replace(true))
}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn dispatch(token: Option<String>) {
    HANDLER.with(|slot| {
        if let Some(handler) = slot.borrow().as_ref() {
            handler(token);
        }
    });
}

/// Route widget callbacks to `on_token`: `Some(token)` when the user passes the
/// check, `None` when the token expires. Replaces any earlier handler.
pub fn install_callbacks(on_token: impl Fn(Option<String>) + 'static) {
    if !set_handler(on_token) {
        return;
    }
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(window) = web_sys::window() else {
            return;
        };

        let on_verified = Closure::<dyn Fn(String)>::new(|token: String| dispatch(Some(token)));
        let on_expired = Closure::<dyn Fn()>::new(|| dispatch(None));

        let _ = js_sys::Reflect::set(&window, &ON_VERIFIED.into(), on_verified.as_ref().unchecked_ref());
        let _ = js_sys::Reflect::set(&window, &ON_EXPIRED.into(), on_expired.as_ref().unchecked_ref());

        // Registered once and kept for the page's lifetime.
        on_verified.forget();
        on_expired.forget();
    }
}

/// Drop the current handler, e.g. when the landing page unmounts.
pub fn clear_callbacks() {
    HANDLER.with(|slot| slot.borrow_mut().take());
}

/// Ask the widget for a fresh challenge. Its tokens are single use, so this
/// follows every send. No-op when the widget script is not loaded.
pub fn reset_widget() {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(widget) = js_sys::Reflect::get(&window, &WIDGET_GLOBAL.into()) else {
            return;
        };
        if widget.is_undefined() || widget.is_null() {
            return;
        }
        let Ok(reset) = js_sys::Reflect::get(&widget, &"reset".into()) else {
            return;
        };
        if let Ok(reset) = reset.dyn_into::<js_sys::Function>() {
            if let Err(err) = reset.call0(&widget) {
                log::warn!("verification widget reset failed: {err:?}");
            }
        }
    }
}
