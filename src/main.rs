mod analysis;
mod api;
mod app;
mod browser;
mod components;
mod config;
mod error;
mod pages;
mod preferences;
mod presenter;
mod report;
mod theme;
mod upload;
mod workflow;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&format!("Logger already set: {}", e).into());
    }

    leptos::mount::mount_to_body(App);
}
