//! Colorful Todo Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod edit;
mod models;
mod session;
mod shortcuts;
mod state;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
