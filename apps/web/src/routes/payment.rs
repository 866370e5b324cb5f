//! Third step: card details. Card number and CVC keep digits only and are
//! cut to 16 and 3 characters before they are stored.

use crate::{
    components::{Button, ButtonVariant, SelectField, TextField, WizardShell},
    features::wizard::state::use_wizard,
    routes::choices,
};
use formwizard::wizard::{
    Draft, DraftField, PaymentField, PaymentStep, RecordingNavigator, Route, options,
};
use leptos::{
    ev::{MouseEvent, SubmitEvent},
    prelude::*,
};
use leptos_router::hooks::use_navigate;

fn current_year() -> i32 {
    i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or(i32::MAX)
}

#[component]
pub fn PaymentPage() -> impl IntoView {
    let wizard = use_wizard();
    let navigate = use_navigate();
    let step = RwSignal::new_local(PaymentStep::mount(wizard.store()));

    let value = move |field: PaymentField| {
        Signal::derive(move || step.with(|step| step.draft().value(field).to_string()))
    };
    let error = move |field: PaymentField| {
        Signal::derive(move || step.with(|step| step.errors().get(field.name())))
    };
    let edit = move |field: PaymentField| {
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

    let select = move |field: PaymentField, values: Vec<String>| {
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
        <WizardShell route=Route::Payment>
            <form
                class="rounded-2xl border border-slate-200 bg-white p-6 shadow-sm sm:p-8 space-y-4"
                on:submit=on_submit
                novalidate
            >
                <h1 class="text-2xl font-semibold text-slate-900">{Route::Payment.title()}</h1>
                <div class="grid gap-4 sm:grid-cols-2">
                    {select(PaymentField::CardType, choices(&options::CARD_TYPES))}
                    <TextField
                        id="cardHolder"
                        label=PaymentField::CardHolder.label()
                        autocomplete="cc-name"
                        value=value(PaymentField::CardHolder)
                        error=error(PaymentField::CardHolder)
                        on_input=edit(PaymentField::CardHolder)
                    />
                    <TextField
                        id="cardNumber"
                        label=PaymentField::CardNumber.label()
                        autocomplete="cc-number"
                        inputmode="numeric"
                        value=value(PaymentField::CardNumber)
                        error=error(PaymentField::CardNumber)
                        on_input=edit(PaymentField::CardNumber)
                    />
                    <TextField
                        id="cvc"
                        label=PaymentField::Cvc.label()
                        input_type="password"
                        autocomplete="cc-csc"
                        inputmode="numeric"
                        value=value(PaymentField::Cvc)
                        error=error(PaymentField::Cvc)
                        on_input=edit(PaymentField::Cvc)
                    />
                    {select(PaymentField::ExpiryMonth, options::expiry_months())}
                    {select(PaymentField::ExpiryYear, options::expiry_years(current_year()))}
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
