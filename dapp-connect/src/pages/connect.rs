//! Connect Page - authorize the dapp with an injected Polkadot extension

use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::config::ConnectConfig;
use crate::flow::{ConnectHooks, Connector};
use crate::presentation::ConnectView;
use crate::services::extension::PolkadotJsBridge;
use crate::state::app::use_app_context;
use crate::state::connection::ConnectionState;

type PageConnector = Connector<PolkadotJsBridge, RwSignal<ConnectionState>>;

#[component]
pub fn ConnectPage() -> impl IntoView {
    let app_ctx = use_app_context();
    let navigate = use_navigate();

    // Fresh per mount, dropped with the page
    let state = RwSignal::new(ConnectionState::default());

    let hooks = ConnectHooks::new(
        move |address| app_ctx.set_wallet_address(address),
        move |route| navigate(route, Default::default()),
    )
    .with_alerts(move |alert| app_ctx.show_alert(alert));

    let bridge = PolkadotJsBridge::new();
    let extension_detected = bridge.is_available();

    let connector: Rc<PageConnector> = Rc::new(Connector::new(
        bridge,
        state,
        hooks,
        ConnectConfig::from_query(),
    ));
    let connector = StoredValue::new_local(connector);

    let on_connect = move |_| {
        let connector = connector.get_value();
        leptos::task::spawn_local(async move {
            connector.activate().await;
        });
    };

    view! {
        <div class="content-wrapper">
            <div class="container">
                <div class="card">
                    {move || match ConnectView::from_state(&state.get()) {
                        ConnectView::Error(message) => view! {
                            <div class="error">
                                <p style="text-align: center;">{message}</p>
                            </div>
                        }.into_any(),
                        ConnectView::Greeting { address, abbreviated } => view! {
                            <ConnectHeading/>
                            <div class="success">
                                <p style="text-align: center; font-weight: bold;" title=address>
                                    "Hello, " {abbreviated}
                                </p>
                            </div>
                        }.into_any(),
                        ConnectView::Button { label, disabled } => view! {
                            <ConnectHeading/>
                            <div>
                                <p class="subtitle">
                                    {if extension_detected {
                                        "Authorize this dapp in your Polkadot extension"
                                    } else {
                                        "No Polkadot extension detected on this page"
                                    }}
                                </p>
                                <button
                                    class="wallet-button"
                                    disabled=disabled
                                    on:click=on_connect
                                >
                                    {label}
                                </button>
                            </div>
                        }.into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ConnectHeading() -> impl IntoView {
    view! {
        <h1 style="color: #ffffff; font-size: 32px; margin-bottom: 12px; font-weight: 700;">
            "Connect Wallet"
        </h1>
    }
}
