//! Top navigation bar: brand, page links, and the session-aware user area.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `SessionContext` for the logged-in projection and drives
//! `NavMenuState` through `UiState`. Every session change is forwarded to the
//! menu state; logging out also collapses every menu.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use pyqhub::menu::NavEvent;

use crate::state::session::SessionContext;
use crate::state::ui::UiState;

/// Links shown in both the desktop pill and the mobile drawer.
pub const NAV_LINKS: [(&str, &str); 2] = [("Home", "/"), ("Exam Vault", "/exam-vault")];
pub const SIGNUP_HREF: &str = "/signup";

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let ui = expect_context::<RwSignal<UiState>>();

    Effect::new(move |_| {
        let logged_in = session.is_logged_in();
        ui.update(|u| u.nav(NavEvent::SessionChanged { logged_in }));
    });

    let navigated = move || ui.update(|u| u.nav(NavEvent::NavigationCompleted));
    let on_login_click = move |_| ui.update(UiState::open_login);
    let on_logout = move |_| {
        session.logout();
        ui.update(|u| u.nav(NavEvent::LogoutCompleted));
    };

    let logged_in = move || session.is_logged_in();
    let user_name = move || session.navbar_view().user_name;
    let user_initials = move || session.navbar_view().user_initials;
    let user_menu_open = move || ui.with(|u| u.menu.user_menu_open);
    let mobile_open = move || ui.with(|u| u.menu.mobile_nav_open);

    let links = move || {
        NAV_LINKS
            .iter()
            .map(|&(label, href)| {
                view! {
                    <a class="navbar__link" href=href on:click=move |_| navigated()>
                        {label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/" aria-label="Go to Home" on:click=move |_| navigated()>
                <span class="navbar__brand-accent">"PYQ"</span>
                <span>"Hub"</span>
            </a>

            <div class="navbar__pill">
                {links}
                <button class="navbar__link" type="button" on:click=move |_| navigated()>
                    "Feedback"
                </button>
                <Show
                    when=logged_in
                    fallback=move || {
                        view! {
                            <button class="navbar__login" type="button" on:click=on_login_click>
                                "Log In"
                            </button>
                        }
                    }
                >
                    <div class="navbar__user">
                        <button
                            class="navbar__initials"
                            type="button"
                            title=user_name
                            aria-label="User menu"
                            on:click=move |_| ui.update(|u| u.nav(NavEvent::UserMenuToggled))
                        >
                            {user_initials}
                        </button>
                        <Show when=user_menu_open>
                            <div class="navbar__dropdown">
                                <div class="navbar__dropdown-name">{user_name}</div>
                                <button class="navbar__logout" type="button" on:click=on_logout>
                                    "Logout"
                                </button>
                            </div>
                        </Show>
                    </div>
                </Show>
            </div>

            <a class="navbar__signup" href=SIGNUP_HREF on:click=move |_| navigated()>
                "New User ?"
            </a>

            <button
                class="navbar__burger"
                type="button"
                aria-label="Toggle navigation"
                aria-expanded=move || mobile_open().to_string()
                on:click=move |_| ui.update(|u| u.nav(NavEvent::MobileNavToggled))
            >
                {move || burger_glyph(mobile_open())}
            </button>

            <Show when=mobile_open>
                <div class="navbar__drawer">
                    {links}
                    <Show
                        when=logged_in
                        fallback=move || {
                            view! {
                                <button class="navbar__login" type="button" on:click=on_login_click>
                                    "Log In"
                                </button>
                            }
                        }
                    >
                        <div class="navbar__drawer-user">
                            <div class="navbar__dropdown-name">{user_name}</div>
                            <button class="navbar__logout" type="button" on:click=on_logout>
                                "Logout"
                            </button>
                        </div>
                    </Show>
                </div>
            </Show>
        </nav>
    }
}

fn burger_glyph(open: bool) -> &'static str {
    if open { "✕" } else { "☰" }
}
