//! Progress bar and step captions for the wizard header.

use formwizard::wizard::Route;
use leptos::prelude::*;

#[component]
pub fn Stepper(current: Route) -> impl IntoView {
    let width = format!("width: {}%", current.progress());
    view! {
        <div class="space-y-3">
            <div class="h-2 w-full rounded-full bg-slate-200">
                <div class="h-2 rounded-full bg-blue-600 transition-all" style=width></div>
            </div>
            <ol class="grid grid-cols-4 gap-2 text-[11px] font-semibold uppercase tracking-wide">
                {Route::ALL
                    .into_iter()
                    .map(|route| {
                        let class = if route == current {
                            "text-blue-700"
                        } else if route.progress() < current.progress() {
                            "text-slate-500"
                        } else {
                            "text-slate-300"
                        };
                        view! { <li class=class>{route.title()}</li> }
                    })
                    .collect_view()}
            </ol>
        </div>
    }
}
