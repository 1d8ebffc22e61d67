//! Reactive view of the browser session.
//!
//! SYSTEM CONTEXT
//! ==============
//! `pyqhub::session::SessionStore` stays the source of truth; the signal here
//! mirrors it so navbar rendering re-runs on login and logout. The auth form
//! writes the store through its controller, then calls [`SessionContext::refresh`].

use leptos::prelude::*;
use pyqhub::session::{NavbarView, SessionStore, SessionUser};

#[derive(Clone, Copy)]
pub struct SessionContext {
    store: StoredValue<SessionStore>,
    user: RwSignal<Option<SessionUser>>,
}

impl SessionContext {
    pub fn new(store: SessionStore) -> Self {
        let user = RwSignal::new(store.current());
        Self { store: StoredValue::new(store), user }
    }

    /// Handle sharing the same session as this context.
    pub fn store(&self) -> SessionStore {
        self.store.get_value()
    }

    pub fn logout(&self) {
        self.store.with_value(SessionStore::logout);
        self.refresh();
    }

    /// Tracked read of the current navbar projection.
    pub fn navbar_view(&self) -> NavbarView {
        self.user.with(|user| NavbarView::from_session(user.as_ref()))
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.with(Option::is_some)
    }

    /// Re-read the store into the signal.
    pub fn refresh(&self) {
        let current = self.store.with_value(SessionStore::current);
        self.user.set(current);
    }
}
