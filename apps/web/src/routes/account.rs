//! First step: username, email and password with confirmation. Required-field
//! errors appear on "Next"; a password mismatch shows as soon as both
//! password fields hold something.

use crate::{
    components::{Button, TextField, WizardShell},
    features::wizard::state::use_wizard,
};
use formwizard::wizard::{
    AccountField, AccountStep, Draft, DraftField, RecordingNavigator, Route,
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::hooks::use_navigate;

#[component]
pub fn AccountPage() -> impl IntoView {
    let wizard = use_wizard();
    let navigate = use_navigate();
    let step = RwSignal::new_local(AccountStep::mount(wizard.store()));
    let (show_password, set_show_password) = signal(false);
    let (show_confirm, set_show_confirm) = signal(false);

    let value = move |field: AccountField| {
        Signal::derive(move || step.with(|step| step.draft().value(field).to_string()))
    };
    let error = move |field: AccountField| {
        Signal::derive(move || step.with(|step| step.errors().get(field.name())))
    };
    let edit = move |field: AccountField| {
        Callback::new(move |input: String| {
            let mut failure = None;
            step.update(|step| {
                step.set_field(field, &input);
                failure = step.take_persist_error();
            });
            wizard.report_unsaved(failure);
        })
    };
    let password_type = |shown: ReadSignal<bool>| {
        Signal::derive(move || if shown.get() { "text" } else { "password" })
    };

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        let mut recorded = RecordingNavigator::new();
        step.update(|step| {
            step.next(&mut recorded);
        });
        wizard.follow(recorded, &navigate);
    };

    view! {
        <WizardShell route=Route::Account>
            <form
                class="rounded-2xl border border-slate-200 bg-white p-6 shadow-sm sm:p-8 space-y-4"
                on:submit=on_submit
                novalidate
            >
                <h1 class="text-2xl font-semibold text-slate-900">{Route::Account.title()}</h1>
                <TextField
                    id="username"
                    label=AccountField::Username.label()
                    autocomplete="username"
                    value=value(AccountField::Username)
                    error=error(AccountField::Username)
                    on_input=edit(AccountField::Username)
                />
                <TextField
                    id="email"
                    label=AccountField::Email.label()
                    input_type="email"
                    autocomplete="email"
                    inputmode="email"
                    value=value(AccountField::Email)
                    error=error(AccountField::Email)
                    on_input=edit(AccountField::Email)
                />
                <TextField
                    id="password"
                    label=AccountField::Password.label()
                    input_type=password_type(show_password)
                    autocomplete="new-password"
                    value=value(AccountField::Password)
                    error=error(AccountField::Password)
                    on_input=edit(AccountField::Password)
                >
                    <RevealToggle shown=show_password toggle=set_show_password />
                </TextField>
                <TextField
                    id="confirmPassword"
                    label=AccountField::ConfirmPassword.label()
                    input_type=password_type(show_confirm)
                    autocomplete="new-password"
                    value=value(AccountField::ConfirmPassword)
                    error=error(AccountField::ConfirmPassword)
                    on_input=edit(AccountField::ConfirmPassword)
                >
                    <RevealToggle shown=show_confirm toggle=set_show_confirm />
                </TextField>
                <div class="flex justify-end">
                    <Button button_type="submit">"Next"</Button>
                </div>
            </form>
        </WizardShell>
    }
}

/// Show/hide switch placed inside a password input.
#[component]
fn RevealToggle(shown: ReadSignal<bool>, toggle: WriteSignal<bool>) -> impl IntoView {
    view! {
        <button
            type="button"
            class="absolute inset-y-0 right-0 px-3 text-xs font-medium text-slate-500 hover:text-slate-900"
            aria-pressed=move || shown.get().to_string()
            on:click=move |_| toggle.update(|shown| *shown = !*shown)
        >
            {move || if shown.get() { "Hide" } else { "Show" }}
        </button>
    }
}
