//! Read-only review of the merged drafts with "Previous" and "Submit". With no
//! data anywhere the page shows "No Data Found" and redirects to the first
//! step.

use crate::{
    components::{Alert, AlertKind, Button, ButtonVariant, Spinner, WizardShell},
    features::wizard::state::use_wizard,
};
use formwizard::wizard::{
    AcknowledgeSubmitter, ConfirmationState, ConfirmationView, RecordingNavigator, Route,
};
use leptos::{ev::MouseEvent, prelude::*};
use leptos_router::hooks::use_navigate;

#[component]
pub fn ConfirmationPage() -> impl IntoView {
    let wizard = use_wizard();
    let navigate = use_navigate();
    let view_state = RwSignal::new(ConfirmationView::new());
    let (outcome, set_outcome) = signal::<Option<Result<String, String>>>(None);

    let store = wizard.store();
    let mut entered = RecordingNavigator::new();
    let transient = wizard.claim_transient(Route::Confirmation);
    view_state.update(|view| {
        view.enter(&store, transient, &mut entered);
    });

    // Route from an effect so the redirect happens after the first render.
    let navigate_on_enter = navigate.clone();
    let mut pending = Some(entered);
    Effect::new(move |_| {
        if let Some(recorded) = pending.take() {
            wizard.follow(recorded, &navigate_on_enter);
        }
    });

    let navigate_back = navigate.clone();
    let on_previous = move |_: MouseEvent| {
        let mut recorded = RecordingNavigator::new();
        view_state.with(|view| view.previous(&mut recorded));
        wizard.follow(recorded, &navigate_back);
    };
    let on_go_home = move |_: MouseEvent| {
        let mut recorded = RecordingNavigator::new();
        view_state.with(|view| view.go_home(&mut recorded));
        wizard.follow(recorded, &navigate);
    };
    let on_submit = move |_: MouseEvent| {
        let result = view_state.with(|view| view.submit(&AcknowledgeSubmitter));
        set_outcome.set(Some(
            result
                .map(|ack| ack.message)
                .map_err(|err| err.to_string()),
        ));
    };

    view! {
        <WizardShell route=Route::Confirmation>
            <div class="rounded-2xl border border-slate-200 bg-white p-6 shadow-sm sm:p-8 space-y-6">
                <h1 class="text-2xl font-semibold text-slate-900">{Route::Confirmation.title()}</h1>
                {move || {
                    let on_previous = on_previous.clone();
                    let on_go_home = on_go_home.clone();
                    match view_state.with(|view| view.state().clone()) {
                    ConfirmationState::Loading => view! { <Spinner label="Gathering your details" /> }.into_any(),
                    ConfirmationState::NoData => view! {
                        <div class="space-y-4 text-center">
                            <p class="text-slate-500">"No Data Found"</p>
                            <Button on:click=on_go_home>"Go Home"</Button>
                        </div>
                    }
                    .into_any(),
                    ConfirmationState::Loaded(_) => view! {
                        <dl class="divide-y divide-slate-100">
                            {view_state
                                .with(ConfirmationView::summary)
                                .unwrap_or_default()
                                .into_iter()
                                .map(|row| view! {
                                    <div class="grid grid-cols-3 gap-4 py-2 text-sm">
                                        <dt class="font-medium text-slate-500">{row.label}</dt>
                                        <dd class="col-span-2 text-slate-900">{row.value}</dd>
                                    </div>
                                })
                                .collect_view()}
                        </dl>
                        <div class="flex justify-between gap-4">
                            <Button variant=ButtonVariant::Secondary on:click=on_previous>
                                "Previous"
                            </Button>
                            <Button on:click=on_submit>"Submit"</Button>
                        </div>
                    }
                    .into_any(),
                    }
                }}
                {move || {
                    outcome
                        .get()
                        .map(|outcome| match outcome {
                            Ok(message) => view! { <Alert kind=AlertKind::Success message=message /> },
                            Err(message) => view! { <Alert kind=AlertKind::Error message=message /> },
                        })
                }}
            </div>
        </WizardShell>
    }
}
