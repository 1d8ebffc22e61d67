use std::sync::{Arc, Mutex};

use pyqhub::auth::AuthMode;
use pyqhub::session::SessionStore;

use super::*;

fn controller(store: SessionStore) -> ModalController {
    AuthFormController::new(FetchAccountService::new("http://localhost:5000/api"), store)
}

fn jane() -> SessionUser {
    SessionUser::new("1", "Jane Doe", "a@gmail.com")
}

/// Mounted-modal controller with a sign-in request in flight.
fn submitting_signal(store: SessionStore) -> RwSignal<ModalController> {
    let ctl = RwSignal::new(controller(store));
    ctl.update(|c| {
        c.update_field(Field::Email, "a@gmail.com");
        c.update_field(Field::Password, "secret");
    });
    assert!(matches!(ctl.try_update(ModalController::begin_submit), Some(Ok(_))));
    ctl
}

fn recording_callback() -> (Callback<SessionUser>, Arc<Mutex<Vec<SessionUser>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let callback = Callback::new(move |user: SessionUser| sink.lock().unwrap().push(user));
    (callback, seen)
}

// =============================================================
// Presenters
// =============================================================

#[test]
fn field_labels_match_form_copy() {
    assert_eq!(field_label(Field::FullName), "Full Name");
    assert_eq!(field_label(Field::Email), "Email Address");
    assert_eq!(field_label(Field::ConfirmPassword), "Confirm Password");
}

#[test]
fn input_type_reveals_only_password_fields() {
    assert_eq!(input_type(Field::Email, true), "email");
    assert_eq!(input_type(Field::FullName, true), "text");
    assert_eq!(input_type(Field::Password, false), "password");
    assert_eq!(input_type(Field::Password, true), "text");
    assert_eq!(input_type(Field::ConfirmPassword, false), "password");
}

#[test]
fn reveal_toggle_exists_for_password_fields_only() {
    assert!(has_reveal_toggle(Field::Password));
    assert!(has_reveal_toggle(Field::ConfirmPassword));
    assert!(!has_reveal_toggle(Field::FullName));
    assert!(!has_reveal_toggle(Field::Email));
}

#[test]
fn toggle_reveal_flips_matching_flag() {
    let mut ctl = controller(SessionStore::new());
    toggle_reveal(&mut ctl, Field::ConfirmPassword);
    assert!(is_revealed(ctl.state(), Field::ConfirmPassword));
    assert!(!is_revealed(ctl.state(), Field::Password));

    toggle_reveal(&mut ctl, Field::Password);
    toggle_reveal(&mut ctl, Field::Email);
    assert!(is_revealed(ctl.state(), Field::Password));
    assert!(!is_revealed(ctl.state(), Field::Email));
}

#[test]
fn visible_fields_follow_mode() {
    assert_eq!(visible_fields(AuthMode::SignIn).collect::<Vec<_>>(), vec![Field::Email, Field::Password]);
    assert_eq!(visible_fields(AuthMode::SignUp).count(), 4);
}

#[test]
fn label_and_input_classes_reflect_state() {
    assert!(label_class(true).ends_with("--float"));
    assert_eq!(label_class(false), "auth-field__label");
    assert!(input_class(true).ends_with("--error"));
    assert_eq!(input_class(false), "auth-field__input");
}

#[test]
fn submit_text_swaps_while_busy() {
    assert_eq!(submit_text("Sign In", false), "Sign In");
    assert_eq!(submit_text("Sign In", true), "Please wait…");
}

#[test]
fn validation_notices_stay_inline() {
    assert!(!notice_is_banner(&Notification::new(NotificationKind::Validation, "Password is required")));
    assert!(notice_is_banner(&Notification::new(NotificationKind::Rejection, "Invalid credentials")));
    assert!(notice_is_banner(&Notification::new(NotificationKind::Fault, "Error: offline")));
}

#[test]
fn notice_class_per_kind() {
    assert_eq!(notice_class(NotificationKind::Fault), "auth-notice auth-notice--fault");
    assert_eq!(notice_class(NotificationKind::Rejection), "auth-notice auth-notice--rejection");
}

// =============================================================
// Settlement delivery
// =============================================================

#[test]
fn finish_submit_starts_session_and_reports_login_once() {
    let owner = Owner::new();
    owner.with(|| {
        let store = SessionStore::new();
        let ctl = submitting_signal(store.clone());
        let (on_login, seen) = recording_callback();

        let outcome = finish_submit(ctl, Settlement::Authenticated(jane()), on_login);

        assert_eq!(outcome, Some(SubmitOutcome::Authenticated(jane())));
        assert_eq!(store.current(), Some(jane()));
        assert_eq!(seen.lock().unwrap().as_slice(), &[jane()]);
    });
}

#[test]
fn closed_modal_drops_late_settlement() {
    let owner = Owner::new();
    owner.with(|| {
        let store = SessionStore::new();
        let ctl = submitting_signal(store.clone());
        let (on_login, seen) = recording_callback();

        ctl.dispose();
        let outcome = finish_submit(ctl, Settlement::Authenticated(jane()), on_login);

        assert_eq!(outcome, None);
        assert!(!store.is_logged_in());
        assert!(seen.lock().unwrap().is_empty());
    });
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_submit_settles_as_fault() {
    let owner = Owner::new();
    owner.with(|| {
        let ctl = submitting_signal(SessionStore::new());
        let (on_login, seen) = recording_callback();
        let settlement = pyqhub::auth::controller::settle(AuthMode::SignIn, crate::net::api::unavailable());

        let outcome = finish_submit(ctl, settlement, on_login);

        assert!(matches!(outcome, Some(SubmitOutcome::Faulted(_))));
        assert!(!ctl.with_untracked(|c| c.state().is_submitting()));
        assert_eq!(
            ctl.with_untracked(|c| c.state().notification.as_ref().map(|n| n.kind)),
            Some(NotificationKind::Fault)
        );
        assert!(seen.lock().unwrap().is_empty());
    });
}
