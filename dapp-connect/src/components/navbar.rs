//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;
use shared::utils::abbreviate_address;

use crate::config::{CONNECT_ROUTE, HOME_ROUTE};
use crate::state::app::use_app_context;

#[component]
pub fn Navbar() -> impl IntoView {
    let app_ctx = use_app_context();

    view! {
        <nav>
            <div style="max-width: 1200px; margin: 0 auto; padding: 0 24px; display: flex; justify-content: space-between; align-items: center;">
                <A href=HOME_ROUTE attr:class="nav-link-clean">
                    <span class="nav-title">"Ava"</span>
                </A>
                {move || match app_ctx.wallet_address() {
                    Some(address) => view! {
                        <span class="nav-address">{abbreviate_address(&address)}</span>
                    }.into_any(),
                    None => view! {
                        <A href=CONNECT_ROUTE attr:class="nav-link-clean">"Connect"</A>
                    }.into_any(),
                }}
            </div>
        </nav>
    }
}
