//! Sign-in / sign-up modal driven by the `pyqhub` auth controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! The modal owns one `AuthFormController` in a signal. DOM events call its
//! operations; submission is split around the service call so the signal is
//! never borrowed across an await. The controller starts the session itself.
//!
//! DESIGN
//! ======
//! Closing the modal disposes the controller. A request still in flight then
//! settles into nothing: no session, no `on_login`.
//!
//! Rendering decisions (input type, label class, notice styling) are plain
//! functions so they can be tested without a DOM.

#[cfg(test)]
#[path = "login_modal_test.rs"]
mod login_modal_test;

use leptos::prelude::*;
use pyqhub::account::AccountService;
use pyqhub::auth::{AuthFormController, Field, FormState, Notification, NotificationKind, Settlement, SubmitOutcome};
use pyqhub::session::SessionUser;

use crate::net::api::FetchAccountService;
use crate::state::session::SessionContext;

type ModalController = AuthFormController<FetchAccountService>;

/// Modal dialog hosting the auth form.
#[component]
pub fn LoginModal(on_close: Callback<()>, on_login: Callback<SessionUser>) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let ctl = RwSignal::new(AuthFormController::new(FetchAccountService::default(), session.store()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(Ok(request)) = ctl.try_update(ModalController::begin_submit) else {
            return;
        };
        let Some(service) = ctl.try_with_untracked(|c| c.service().clone()) else {
            return;
        };

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let settlement = pyqhub::auth::controller::perform(&service, &request).await;
            log::debug!("{:?} request settled: {}", request.mode(), settlement_label(&settlement));
            if finish_submit(ctl, settlement, on_login).is_none() {
                log::debug!("auth modal closed before the request settled; result dropped");
            }
        });

        #[cfg(not(feature = "csr"))]
        {
            let _ = service;
            let settlement = pyqhub::auth::controller::settle(request.mode(), crate::net::api::unavailable());
            let _ = finish_submit(ctl, settlement, on_login);
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    let mode = Memo::new(move |_| ctl.with(|c| c.state().mode));
    let busy = Memo::new(move |_| ctl.with(|c| c.state().is_submitting()));
    let notice = move || ctl.with(|c| c.state().notification.clone()).filter(notice_is_banner);

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(()) on:keydown=on_keydown>
            <div class="dialog dialog--auth" on:click=move |ev| ev.stop_propagation() tabindex="0">
                <div class="dialog__header">
                    <h2>{move || mode.get().title()}</h2>
                    <button class="dialog__close" type="button" title="Close" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </div>

                {move || {
                    notice()
                        .map(|n| {
                            view! {
                                <div class=notice_class(n.kind) role="alert">
                                    <span>{n.message}</span>
                                    <button
                                        class="auth-notice__dismiss"
                                        type="button"
                                        on:click=move |_| ctl.update(ModalController::dismiss_notification)
                                    >
                                        "Dismiss"
                                    </button>
                                </div>
                            }
                        })
                }}

                <form class="auth-form" on:submit=on_submit novalidate=true>
                    {move || {
                        visible_fields(mode.get())
                            .map(|field| view! { <AuthField ctl=ctl field=field /> })
                            .collect_view()
                    }}
                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || submit_text(mode.get().submit_label(), busy.get())}
                    </button>
                </form>

                <div class="auth-switch">
                    <p>{move || mode.get().switch_prompt()}</p>
                    <button
                        class="auth-switch__link"
                        type="button"
                        disabled=move || busy.get()
                        on:click=move |_| ctl.update(ModalController::toggle_mode)
                    >
                        {move || mode.get().switch_label()}
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Apply a settlement to a still-mounted modal and report a fresh session.
///
/// Returns `None` when the modal was closed first.
fn finish_submit(
    ctl: RwSignal<ModalController>,
    settlement: Settlement,
    on_login: Callback<SessionUser>,
) -> Option<SubmitOutcome> {
    let outcome = ctl.try_update(|c| c.complete(settlement))?;
    if let SubmitOutcome::Authenticated(user) = &outcome {
        on_login.run(user.clone());
    }
    Some(outcome)
}

/// One floating-label input with its inline error.
#[component]
fn AuthField(ctl: RwSignal<ModalController>, field: Field) -> impl IntoView {
    let value = move || ctl.with(|c| c.state().values.get(field).to_owned());
    let error = move || ctl.with(|c| c.state().errors.message(field));
    let revealed = move || ctl.with(|c| is_revealed(c.state(), field));
    let field_class = move || input_class(ctl.with(|c| c.state().errors.contains(field)));
    let floating_class = move || label_class(ctl.with(|c| c.state().label_floats(field)));

    let toggle = has_reveal_toggle(field).then(|| {
        view! {
            <button
                class="auth-field__reveal"
                type="button"
                on:click=move |_| ctl.update(|c| toggle_reveal(c, field))
            >
                {move || reveal_text(revealed())}
            </button>
        }
    });

    view! {
        <div class="auth-field">
            <input
                id=field.name()
                name=field.name()
                class=field_class
                type=move || input_type(field, revealed())
                placeholder=" "
                prop:value=value
                on:input=move |ev| ctl.update(|c| c.update_field(field, event_target_value(&ev)))
                on:focus=move |_| ctl.update(|c| c.focus(field))
                on:blur=move |_| ctl.update(ModalController::blur)
            />
            <label class=floating_class for=field.name()>{field_label(field)}</label>
            {toggle}
            {move || error().map(|message| view! { <p class="auth-field__error">{message}</p> })}
        </div>
    }
}

// =============================================================================
// PRESENTERS
// =============================================================================

fn field_label(field: Field) -> &'static str {
    match field {
        Field::FullName => "Full Name",
        Field::Email => "Email Address",
        Field::Password => "Password",
        Field::ConfirmPassword => "Confirm Password",
    }
}

fn is_revealed(state: &FormState, field: Field) -> bool {
    match field {
        Field::Password => state.ui.show_password,
        Field::ConfirmPassword => state.ui.show_confirm_password,
        Field::FullName | Field::Email => false,
    }
}

fn input_type(field: Field, revealed: bool) -> &'static str {
    match field {
        Field::FullName => "text",
        Field::Email => "email",
        Field::Password | Field::ConfirmPassword if revealed => "text",
        Field::Password | Field::ConfirmPassword => "password",
    }
}

fn visible_fields(mode: pyqhub::auth::AuthMode) -> impl Iterator<Item = Field> {
    Field::ALL.into_iter().filter(move |f| f.applies_to(mode))
}

fn has_reveal_toggle(field: Field) -> bool {
    matches!(field, Field::Password | Field::ConfirmPassword)
}

fn toggle_reveal<S: AccountService>(ctl: &mut AuthFormController<S>, field: Field) {
    match field {
        Field::Password => ctl.toggle_show_password(),
        Field::ConfirmPassword => ctl.toggle_show_confirm_password(),
        Field::FullName | Field::Email => {}
    }
}

fn reveal_text(revealed: bool) -> &'static str {
    if revealed { "Hide" } else { "Show" }
}

fn input_class(has_error: bool) -> &'static str {
    if has_error { "auth-field__input auth-field__input--error" } else { "auth-field__input" }
}

fn label_class(floats: bool) -> &'static str {
    if floats { "auth-field__label auth-field__label--float" } else { "auth-field__label" }
}

fn submit_text(label: &'static str, busy: bool) -> &'static str {
    if busy { "Please wait…" } else { label }
}

#[cfg(feature = "csr")]
fn settlement_label(settlement: &Settlement) -> &'static str {
    match settlement {
        Settlement::Authenticated(_) => "authenticated",
        Settlement::Rejected(_) => "rejected",
        Settlement::Faulted(_) => "faulted",
    }
}

/// Validation problems already show inline; only service outcomes get a banner.
fn notice_is_banner(notification: &Notification) -> bool {
    notification.kind != NotificationKind::Validation
}

fn notice_class(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Validation => "auth-notice auth-notice--validation",
        NotificationKind::Rejection => "auth-notice auth-notice--rejection",
        NotificationKind::Fault => "auth-notice auth-notice--fault",
    }
}
