//! Second step: personal details. Email, phone and zip code are checked while
//! typing; phone and zip keep digits only.

use crate::{
    components::{Button, ButtonVariant, SelectField, TextField, WizardShell},
    features::wizard::state::use_wizard,
    routes::choices,
};
use formwizard::wizard::{
    Draft, DraftField, PersonalField, PersonalStep, RecordingNavigator, Route, options,
};
use leptos::{
    ev::{MouseEvent, SubmitEvent},
    prelude::*,
};
use leptos_router::hooks::use_navigate;

#[component]
pub fn PersonalPage() -> impl IntoView {
    let wizard = use_wizard();
    let navigate = use_navigate();
    let step = RwSignal::new_local(PersonalStep::mount(wizard.store()));

    let value = move |field: PersonalField| {
        Signal::derive(move || step.with(|step| step.draft().value(field).to_string()))
    };
    let error = move |field: PersonalField| {
        Signal::derive(move || step.with(|step| step.errors().get(field.name())))
    };
    let edit = move |field: PersonalField| {
        Callback::new(move |input: String| {
            let mut failure = None;
            step.update(|step| {
                step.set_field(field, &input);
                failure = step.take_persist_error();
            });
            wizard.report_unsaved(failure);
        })
    };

    let navigate_back = navigate.clone();
    let on_previous = move |_: MouseEvent| {
        let mut recorded = RecordingNavigator::new();
        step.with(|step| step.previous(&mut recorded));
        wizard.follow(recorded, &navigate_back);
    };
    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        let mut recorded = RecordingNavigator::new();
        step.update(|step| {
            step.next(&mut recorded);
        });
        wizard.follow(recorded, &navigate);
    };

    let select = move |field: PersonalField, values: Vec<String>| {
        view! {
            <SelectField
                id=field.name()
                label=field.label()
                options=values
                value=value(field)
                error=error(field)
                on_change=edit(field)
            />
        }
    };

    view! {
        <WizardShell route=Route::Personal>
            <form
                class="rounded-2xl border border-slate-200 bg-white p-6 shadow-sm sm:p-8 space-y-4"
                on:submit=on_submit
                novalidate
            >
                <h1 class="text-2xl font-semibold text-slate-900">{Route::Personal.title()}</h1>
                <div class="grid gap-4 sm:grid-cols-2">
                    {select(PersonalField::Salutation, choices(&options::SALUTATIONS))}
                    {select(PersonalField::Gender, choices(&options::GENDERS))}
                    <TextField
                        id="firstName"
                        label=PersonalField::FirstName.label()
                        autocomplete="given-name"
                        value=value(PersonalField::FirstName)
                        error=error(PersonalField::FirstName)
                        on_input=edit(PersonalField::FirstName)
                    />
                    <TextField
                        id="lastName"
                        label=PersonalField::LastName.label()
                        autocomplete="family-name"
                        value=value(PersonalField::LastName)
                        error=error(PersonalField::LastName)
                        on_input=edit(PersonalField::LastName)
                    />
                    <TextField
                        id="email"
                        label=PersonalField::Email.label()
                        input_type="email"
                        autocomplete="email"
                        inputmode="email"
                        value=value(PersonalField::Email)
                        error=error(PersonalField::Email)
                        on_input=edit(PersonalField::Email)
                    />
                    <TextField
                        id="phone"
                        label=PersonalField::Phone.label()
                        input_type="tel"
                        autocomplete="tel"
                        inputmode="numeric"
                        value=value(PersonalField::Phone)
                        error=error(PersonalField::Phone)
                        on_input=edit(PersonalField::Phone)
                    />
                    <TextField
                        id="homeAddress"
                        label=PersonalField::HomeAddress.label()
                        autocomplete="street-address"
                        value=value(PersonalField::HomeAddress)
                        error=error(PersonalField::HomeAddress)
                        on_input=edit(PersonalField::HomeAddress)
                    />
                    <TextField
                        id="zipCode"
                        label=PersonalField::ZipCode.label()
                        autocomplete="postal-code"
                        inputmode="numeric"
                        value=value(PersonalField::ZipCode)
                        error=error(PersonalField::ZipCode)
                        on_input=edit(PersonalField::ZipCode)
                    />
                    {select(PersonalField::State, choices(&options::STATES))}
                    {select(PersonalField::Country, choices(&options::COUNTRIES))}
                </div>
                <div class="flex justify-between gap-4">
                    <Button variant=ButtonVariant::Secondary on:click=on_previous>
                        "Previous"
                    </Button>
                    <Button button_type="submit">"Next"</Button>
                </div>
            </form>
        </WizardShell>
    }
}
