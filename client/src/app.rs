//! Root application component and context wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provides the session and UI-chrome contexts once, then renders the navbar
//! above the routed page.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use pyqhub::session::SessionStore;

use crate::components::navbar::Navbar;
use crate::pages::home::HomePage;
use crate::state::session::SessionContext;
use crate::state::ui::UiState;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(SessionContext::new(SessionStore::new()));
    provide_context(RwSignal::new(UiState::default()));

    view! {
        <Title text="PYQ Hub" />
        <Router>
            <Navbar />
            <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}
