//! Landing page: hero plus the login modal when requested from the navbar.

use leptos::prelude::*;
use pyqhub::session::SessionUser;

use crate::components::hero::Hero;
use crate::components::login_modal::LoginModal;
use crate::state::session::SessionContext;
use crate::state::ui::UiState;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_close = Callback::new(move |()| ui.update(UiState::close_login));
    // The controller already wrote the store; pick up the new session.
    let on_login = Callback::new(move |_: SessionUser| {
        session.refresh();
        ui.update(UiState::close_login);
    });

    view! {
        <main class="home-page">
            <Hero />
            <Show when=move || ui.with(|u| u.login_open)>
                <LoginModal on_close=on_close on_login=on_login />
            </Show>
        </main>
    }
}
