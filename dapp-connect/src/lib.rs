//! Polkadot Wallet Connect Helper
//!
//! Connects the Ava dapp to an injected Polkadot extension, stores the chosen
//! account address in the app context and sends the user to the home route.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod flow;
pub mod pages;
pub mod presentation;
pub mod services;
pub mod state;
pub mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    log::info!("Ava connect helper starting...");

    hide_loading_screen();

    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the static loading element shipped in index.html
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("No document, cannot hide loading screen");
        return;
    };

    match document.get_element_by_id("leptos-loading") {
        Some(element) => {
            if let Err(e) = element.set_attribute("style", "display: none !important;") {
                log::warn!("Failed to hide loading screen: {:?}", e);
            }
        }
        None => log::debug!("Loading element not found"),
    }
}
