mod account;
mod confirmation;
mod not_found;
mod payment;
mod personal;

pub(crate) use account::AccountPage;
pub(crate) use confirmation::ConfirmationPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use payment::PaymentPage;
pub(crate) use personal::PersonalPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

/// Owned copies of a fixed option list, for select inputs.
pub(crate) fn choices(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

// Paths mirror `formwizard::wizard::Route::path`; `path!` needs literals.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=AccountPage />
            <Route path=path!("/personlinfo") view=PersonalPage />
            <Route path=path!("/cardinfo") view=PaymentPage />
            <Route path=path!("/viewpage") view=ConfirmationPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
