//! Alert banner fed by the app context

use leptos::prelude::*;

use crate::state::app::use_app_context;

#[component]
pub fn AlertBanner() -> impl IntoView {
    let app_ctx = use_app_context();

    move || {
        app_ctx.alert.get().map(|alert| {
            view! {
                <div class=format!("alert {}", alert.status.css_class())>
                    <p>{alert.message}</p>
                    <button class="alert-close" on:click=move |_| app_ctx.dismiss_alert()>"×"</button>
                </div>
            }
        })
    }
}
