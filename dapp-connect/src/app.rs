//! Ava connect helper - Leptos frontend

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::{AlertBanner, Navbar};
use crate::pages::{ConnectPage, HomePage, NotFound};
use crate::state::app::provide_app_context;

#[component]
pub fn App() -> impl IntoView {
    provide_app_context();

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <AlertBanner/>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/connect") view=ConnectPage/>
                </Routes>
            </div>
        </Router>
    }
}
