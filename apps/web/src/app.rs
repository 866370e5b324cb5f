use crate::features::wizard::state::WizardProvider;
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <WizardProvider>
            <Router>
                <AppRoutes />
            </Router>
        </WizardProvider>
    }
}
