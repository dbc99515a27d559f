//! Case Forecast Dashboard - Yew WASM Frontend
//!
//! This crate provides the web UI shell: routing between the dashboard and
//! prediction views, and a navbar that compacts while the page scrolls down.

mod app;
mod components;
mod hooks;
mod pages;
mod scroll;

pub use app::{App, Route};
pub use hooks::use_scroll_shrink;
pub use scroll::WindowScrollSource;

use wasm_bindgen::prelude::*;

#[cfg(not(debug_assertions))]
const LOG_LEVEL: log::Level = log::Level::Info;
#[cfg(debug_assertions)]
const LOG_LEVEL: log::Level = log::Level::Trace;

/// Element id the application mounts into.
const MOUNT_ID: &str = "app";

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    wasm_logger::init(wasm_logger::Config::new(LOG_LEVEL));

    match mount_point() {
        Some(root) => yew::Renderer::<App>::with_root(root).render(),
        None => {
            log::warn!("#{MOUNT_ID} not found, mounting on <body>");
            yew::Renderer::<App>::new().render()
        }
    };
}

fn mount_point() -> Option<web_sys::Element> {
    web_sys::window()?.document()?.get_element_by_id(MOUNT_ID)
}
