#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn token_key_matches_storage_contract() {
    assert_eq!(TOKEN_KEY, "token");
}

#[test]
fn browser_store_is_empty_outside_browser() {
    assert_eq!(BrowserTokenStore.token(), None);
}

#[test]
fn browser_store_write_is_noop_outside_browser() {
    BrowserTokenStore.set_token("abc");
    assert_eq!(BrowserTokenStore.token(), None);
}
