//! Labelled form controls with an inline error line. Values flow in through a
//! signal and edits flow out through a callback, so the step controller stays
//! the single owner of the draft.

use leptos::prelude::*;

const LABEL: &str = "block mb-2 text-sm font-medium text-slate-700";
const INPUT: &str = "w-full rounded-xl border border-slate-200 bg-slate-50 px-3 py-2.5 text-sm text-slate-900 focus:border-slate-400 focus:ring-2 focus:ring-slate-200";
const ERROR: &str = "mt-1 text-xs text-red-600";

#[component]
fn FieldError(error: Signal<Option<&'static str>>) -> impl IntoView {
    move || error.get().map(|message| view! { <p class=ERROR>{message}</p> })
}

/// Text-like input. `input_type` may change at runtime (password reveal).
#[component]
pub fn TextField(
    id: &'static str,
    label: &'static str,
    #[prop(optional, into, default = Signal::from("text"))] input_type: Signal<&'static str>,
    #[prop(optional)] autocomplete: &'static str,
    #[prop(optional)] inputmode: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] error: Signal<Option<&'static str>>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div>
            <label class=LABEL for=id>{label}</label>
            <div class="relative">
                <input
                    id=id
                    name=id
                    type=move || input_type.get()
                    class=INPUT
                    autocomplete=autocomplete
                    inputmode=inputmode
                    prop:value=move || value.get()
                    on:input=move |event| on_input.run(event_target_value(&event))
                />
                {children.map(|children| children())}
            </div>
            <FieldError error=error />
        </div>
    }
}

/// Drop-down with an empty "Select ..." entry first.
#[component]
pub fn SelectField(
    id: &'static str,
    label: &'static str,
    #[prop(into)] options: Vec<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] error: Signal<Option<&'static str>>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    let placeholder = format!("Select {label}");
    view! {
        <div>
            <label class=LABEL for=id>{label}</label>
            <select
                id=id
                name=id
                class=INPUT
                on:change=move |event| on_change.run(event_target_value(&event))
            >
                <option value="">{placeholder}</option>
                {options
                    .into_iter()
                    .map(|option| {
                        let selected = {
                            let option = option.clone();
                            move || value.get() == option
                        };
                        view! {
                            <option value=option.clone() selected=selected>
                                {option.clone()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <FieldError error=error />
        </div>
    }
}
