pub mod api;
pub mod common;
#[cfg(feature = "csr")]
pub mod frontend;
pub mod models;
pub mod services;
pub mod views;

/// WASM entry point of the admin back office.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn start_admin() {
    frontend::start_admin();
}

/// WASM entry point of the affiliate site.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn start_affiliate() {
    frontend::start_affiliate();
}
