//! In-memory access token storage. Reloading the page drops the token; the
//! refresh cookie restores it through `/refresh`.

use std::cell::RefCell;

thread_local! {
    static ACCESS_TOKEN: RefCell<Option<String>> = const { RefCell::new(None) };
}

pub fn set(token: String) {
    ACCESS_TOKEN.with(|slot| *slot.borrow_mut() = Some(token));
}

pub fn clear() {
    ACCESS_TOKEN.with(|slot| slot.borrow_mut().take());
}

/// `Authorization` header for the held token, if any.
pub fn auth_headers() -> Vec<(String, String)> {
    ACCESS_TOKEN.with(|slot| {
        slot.borrow()
            .as_ref()
            .map(|token| vec![("Authorization".to_string(), format!("Bearer {token}"))])
            .unwrap_or_default()
    })
}
