use leptos::prelude::*;

/// Ring in the stepper's blue with a caption, e.g. while the confirmation
/// page gathers the drafts.
#[component]
pub fn Spinner(#[prop(optional)] label: Option<&'static str>) -> impl IntoView {
    let label = label.unwrap_or("Loading");

    view! {
        <div class="flex items-center gap-3 text-sm text-slate-500" role="status" aria-live="polite">
            <span class="h-5 w-5 animate-spin rounded-full border-2 border-blue-100 border-t-blue-600"></span>
            <span>{label}</span>
        </div>
    }
}
