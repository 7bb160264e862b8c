//! Home Page - show the connected account

use leptos::prelude::*;
use leptos_router::components::A;
use shared::utils::abbreviate_address;

use crate::config::CONNECT_ROUTE;
use crate::state::app::use_app_context;

#[component]
pub fn HomePage() -> impl IntoView {
    let app_ctx = use_app_context();

    view! {
        <div class="app-container" style="display: flex; justify-content: center; align-items: center; min-height: calc(100vh - 60px);">
            <div class="card" style="width: 100%; max-width: 500px;">
                <h1 class="card-title" style="text-align: center;">"Ava"</h1>

                {move || match app_ctx.wallet_address() {
                    Some(address) => view! {
                        <div>
                            <p style="color: var(--text-secondary);">"Wallet Address"</p>
                            <p style="font-family: monospace; word-break: break-all;" title=address.clone()>
                                {abbreviate_address(&address)}
                            </p>
                            <button class="btn" on:click=move |_| app_ctx.clear_wallet_address()>
                                "Disconnect"
                            </button>
                        </div>
                    }.into_any(),
                    None => view! {
                        <div>
                            <p style="text-align: center; color: var(--text-secondary);">
                                "No wallet connected"
                            </p>
                            <A href=CONNECT_ROUTE>
                                <span class="btn" style="display: block; text-align: center;">"Connect Wallet"</span>
                            </A>
                        </div>
                    }.into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="card" style="max-width: 500px; text-align: center; margin: 48px auto;">
            <h1 style="margin-bottom: 16px;">"404 - Page Not Found"</h1>
            <A href="/">
                <span class="btn">"Go to Home"</span>
            </A>
        </div>
    }
}
