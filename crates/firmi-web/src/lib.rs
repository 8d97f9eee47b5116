//! Firmi Web Frontend
//!
//! Leptos-based WASM frontend: the marketing home page, the chat page and
//! the form widgets they share.

mod api;
mod app;
mod components;
mod pages;
mod sections;

pub use app::App;
pub use components::{Calendar, DateTimePicker};

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
