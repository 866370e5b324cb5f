//! Page frame for every wizard route: header, progress stepper, any storage or
//! config problem, and the build footer.

use crate::app_lib::build_info;
use crate::components::{Alert, AlertKind, Stepper};
use crate::features::wizard::state::use_wizard;
use formwizard::wizard::Route;
use leptos::prelude::*;

/// Wraps a step page in the shared frame. `route` drives the stepper.
#[component]
pub fn WizardShell(#[prop(optional)] route: Option<Route>, children: Children) -> impl IntoView {
    let wizard = use_wizard();
    let problem = wizard.problem;

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-b border-slate-200 bg-white">
                <div class="max-w-3xl mx-auto p-4 flex items-center justify-between">
                    <span class="font-semibold text-slate-900">"Registration"</span>
                    {route.map(|route| view! {
                        <span class="text-xs text-slate-400">{format!("{}%", route.progress())}</span>
                    })}
                </div>
            </header>
            <main class="flex-1">
                <div class="max-w-3xl mx-auto p-4 mt-6 space-y-6">
                    {route.map(|route| view! { <Stepper current=route /> })}
                    {move || {
                        problem
                            .get()
                            .map(|err| {
                                view! {
                                    <Alert
                                        kind=AlertKind::Error
                                        message=err.to_string()
                                        on_dismiss=Callback::new(move |()| problem.set(None))
                                    />
                                }
                            })
                    }}
                    {children()}
                </div>
            </main>
            <footer class="py-4 text-center text-[11px] text-slate-400">
                {format!("build {}", build_info::short_commit_hash())}
            </footer>
        </div>
    }
}
