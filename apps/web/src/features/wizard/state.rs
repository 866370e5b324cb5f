//! Wizard context shared through Leptos: the loaded config, the transient
//! record in flight between routes, and any storage or config problem to show.

use crate::app_lib::{
    AppError,
    config::WizardConfig,
    storage::{WebStorage, WizardStore},
};
use crate::features::wizard::navigator;
use formwizard::wizard::{
    Handoff, MergedRecord, PrefixedStore, RecordingNavigator, Route, StoreError,
};
use leptos::prelude::*;
use leptos_router::NavigateOptions;

#[derive(Clone, Copy)]
pub struct WizardContext {
    config: StoredValue<WizardConfig>,
    pub handoff: RwSignal<Handoff>,
    pub problem: RwSignal<Option<AppError>>,
}

impl WizardContext {
    fn new(config: Result<WizardConfig, AppError>) -> Self {
        let (config, problem) = match config {
            Ok(config) => (config, None),
            Err(err) => (WizardConfig::default(), Some(err)),
        };
        Self {
            config: StoredValue::new(config),
            handoff: RwSignal::new(Handoff::default()),
            problem: RwSignal::new(problem),
        }
    }

    /// Opens the configured storage area. A missing area is reported once
    /// through `problem` and replaced by a detached store.
    pub fn store(&self) -> WizardStore {
        let config = self.config.get_value();
        let storage = WebStorage::open(config.storage).unwrap_or_else(|err| {
            if self.problem.get_untracked().is_none() {
                self.problem.set(Some(err));
            }
            WebStorage::detached()
        });
        PrefixedStore::new(config.key_prefix, storage)
    }

    /// Hands `route` the record addressed to it, if any. Whatever was pending
    /// is gone afterwards.
    pub fn claim_transient(&self, route: Route) -> Option<MergedRecord> {
        let mut claimed = None;
        self.handoff
            .update_untracked(|handoff| claimed = handoff.claim(route));
        claimed
    }

    /// Shows a draft that could not be saved. The edit itself stays on the
    /// page.
    pub fn report_unsaved(&self, failure: Option<StoreError>) {
        if let Some(err) = failure {
            self.problem
                .set(Some(AppError::Storage(format!("draft not saved: {err}"))));
        }
    }

    pub fn follow<F>(&self, recorded: RecordingNavigator, navigate: &F)
    where
        F: Fn(&str, NavigateOptions),
    {
        navigator::follow(recorded, navigate, self.handoff);
    }
}

/// Provides the wizard context for every route.
#[component]
pub fn WizardProvider(children: Children) -> impl IntoView {
    provide_context(WizardContext::new(WizardConfig::load()));

    view! { {children()} }
}

/// Returns the current wizard context or a fresh default one.
pub fn use_wizard() -> WizardContext {
    use_context::<WizardContext>()
        .unwrap_or_else(|| WizardContext::new(Ok(WizardConfig::default())))
}
