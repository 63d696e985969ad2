#[cfg(target_arch = "wasm32")]
mod app;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code, unused_imports))]
#[path = "lib/mod.rs"]
mod app_lib;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod features;
#[cfg(target_arch = "wasm32")]
mod routes;

#[cfg(target_arch = "wasm32")]
use crate::app::App;
#[cfg(target_arch = "wasm32")]
use leptos::prelude::mount_to_body;
#[cfg(target_arch = "wasm32")]
pub fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    let _ = console_log::init_with_level(level);
    tracing::info!(commit = app_lib::build_info::git_commit_hash(), "shipdesk starting");

    mount_to_body(App);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
