//! Bridges the wizard's [`Navigator`] to the Leptos router. Transient state is
//! posted to the wizard context's [`Handoff`], addressed to the target route,
//! before the router is asked to move.

use formwizard::wizard::{Handoff, MergedRecord, Navigator, RecordingNavigator, Route};
use leptos::prelude::*;
use leptos_router::NavigateOptions;

pub struct RouterNavigator<'a, F> {
    navigate: &'a F,
    handoff: RwSignal<Handoff>,
}

impl<'a, F> RouterNavigator<'a, F>
where
    F: Fn(&str, NavigateOptions),
{
    pub fn new(navigate: &'a F, handoff: RwSignal<Handoff>) -> Self {
        Self { navigate, handoff }
    }
}

impl<F> Navigator for RouterNavigator<'_, F>
where
    F: Fn(&str, NavigateOptions),
{
    fn go_to(&mut self, route: Route, transient: Option<MergedRecord>) {
        self.handoff
            .update_untracked(|handoff| handoff.post(route, transient));
        (self.navigate)(route.path(), NavigateOptions::default());
    }
}

/// Routes whatever a controller asked for while it was borrowed inside a
/// signal update.
pub fn follow<F>(recorded: RecordingNavigator, navigate: &F, handoff: RwSignal<Handoff>)
where
    F: Fn(&str, NavigateOptions),
{
    recorded.replay(&mut RouterNavigator::new(navigate, handoff));
}
