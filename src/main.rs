//! Guestbook Frontend Entry Point

mod actions;
mod app;
mod commands;
mod components;
mod config;
mod context;
mod dialog;
mod error;
mod models;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
    mount_to_body(App);
}
