//! Local UI chrome state (login modal, navbar menus).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the session model so the
//! navbar and modal can evolve independently of auth data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use pyqhub::menu::{NavEvent, NavMenuState};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub login_open: bool,
    pub menu: NavMenuState,
}

impl UiState {
    /// Open the login modal from the navbar; any open menu closes.
    pub fn open_login(&mut self) {
        self.login_open = true;
        self.menu = self.menu.apply(NavEvent::NavigationCompleted);
    }

    pub fn close_login(&mut self) {
        self.login_open = false;
    }

    pub fn nav(&mut self, event: NavEvent) {
        self.menu = self.menu.apply(event);
    }
}
