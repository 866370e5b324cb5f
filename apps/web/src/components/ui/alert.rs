//! Banners for what happened to the form: a submission acknowledgment, or a
//! storage, config or submit problem. Messages come from wizard errors and
//! never carry field values.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Success,
}

impl AlertKind {
    fn heading(self) -> &'static str {
        match self {
            Self::Error => "Something went wrong",
            Self::Success => "All set",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Error => "border-rose-300 bg-rose-50 text-rose-800",
            Self::Success => "border-teal-300 bg-teal-50 text-teal-800",
        }
    }

    /// Errors interrupt screen readers; acknowledgments wait their turn.
    fn role(self) -> &'static str {
        match self {
            Self::Error => "alert",
            Self::Success => "status",
        }
    }
}

/// Headed banner; shows a close button when `on_dismiss` is given.
#[component]
pub fn Alert(
    kind: AlertKind,
    message: String,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div
            class=format!("flex items-start gap-3 rounded-xl border-l-4 px-4 py-3 text-sm {}", kind.classes())
            role=kind.role()
        >
            <div class="flex-1">
                <p class="font-semibold">{kind.heading()}</p>
                <p>{message}</p>
            </div>
            {on_dismiss.map(|on_dismiss| view! {
                <button
                    type="button"
                    class="text-xs font-medium underline opacity-70 hover:opacity-100"
                    on:click=move |_| on_dismiss.run(())
                >
                    "Dismiss"
                </button>
            })}
        </div>
    }
}
