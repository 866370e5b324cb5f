//! Routes of the wizard and the navigation seam the controllers call into.

use crate::wizard::record::MergedRecord;
use std::fmt;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Account,
    Personal,
    Payment,
    Confirmation,
}

impl Route {
    pub const ALL: [Self; 4] = [
        Self::Account,
        Self::Personal,
        Self::Payment,
        Self::Confirmation,
    ];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Account => "/",
            Self::Personal => "/personlinfo",
            Self::Payment => "/cardinfo",
            Self::Confirmation => "/viewpage",
        }
    }

    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }

    #[must_use]
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Account => Some(Self::Personal),
            Self::Personal => Some(Self::Payment),
            Self::Payment => Some(Self::Confirmation),
            Self::Confirmation => None,
        }
    }

    #[must_use]
    pub fn previous(self) -> Option<Self> {
        match self {
            Self::Account => None,
            Self::Personal => Some(Self::Account),
            Self::Payment => Some(Self::Personal),
            Self::Confirmation => Some(Self::Payment),
        }
    }

    /// Stepper caption.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Account => "Account Information",
            Self::Personal => "Personal Information",
            Self::Payment => "Payment Information",
            Self::Confirmation => "Confirm Your Details",
        }
    }

    /// Progress bar fill, in percent.
    #[must_use]
    pub fn progress(self) -> u8 {
        match self {
            Self::Account => 25,
            Self::Personal => 50,
            Self::Payment => 75,
            Self::Confirmation => 100,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Route change request with optional in-memory state for the target view.
pub trait Navigator {
    fn go_to(&mut self, route: Route, transient: Option<MergedRecord>);
}

impl<N: Navigator + ?Sized> Navigator for &mut N {
    fn go_to(&mut self, route: Route, transient: Option<MergedRecord>) {
        (**self).go_to(route, transient);
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigation {
    pub route: Route,
    pub transient: Option<MergedRecord>,
}

/// Keeps every navigation in order instead of routing anywhere.
#[derive(Clone, Debug, Default)]
pub struct RecordingNavigator {
    history: Vec<Navigation>,
}

impl RecordingNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn history(&self) -> &[Navigation] {
        &self.history
    }

    #[must_use]
    pub fn last(&self) -> Option<&Navigation> {
        self.history.last()
    }

    /// Transient state of the most recent navigation, handed over to the
    /// next view.
    pub fn take_transient(&mut self) -> Option<MergedRecord> {
        self.history.last_mut().and_then(|nav| nav.transient.take())
    }

    /// Re-issues every recorded navigation, in order, on `navigator`. Lets a
    /// UI run a controller against a recorder and route only afterwards.
    pub fn replay<N: Navigator + ?Sized>(self, navigator: &mut N) {
        for Navigation { route, transient } in self.history {
            navigator.go_to(route, transient);
        }
    }
}

impl Navigator for RecordingNavigator {
    fn go_to(&mut self, route: Route, transient: Option<MergedRecord>) {
        debug!(%route, transient = transient.is_some(), "navigate");
        self.history.push(Navigation { route, transient });
    }
}

/// Transient state in flight between two views, addressed to the route it was
/// sent with. Only that route can claim it, so a record handed to one step is
/// never picked up by a view reached later through browser history.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Handoff {
    pending: Option<Navigation>,
}

impl Handoff {
    /// Replaces whatever was pending.
    pub fn post(&mut self, route: Route, transient: Option<MergedRecord>) {
        self.pending = Some(Navigation { route, transient });
    }

    /// Takes the pending state if it was addressed to `route`. The slot is
    /// emptied either way.
    pub fn claim(&mut self, route: Route) -> Option<MergedRecord> {
        match self.pending.take()? {
            Navigation {
                route: addressed,
                transient,
            } if addressed == route => transient,
            Navigation {
                route: addressed, ..
            } => {
                debug!(%addressed, claimed_by = %route, "dropping stale transient state");
                None
            }
        }
    }
}

impl Navigator for Handoff {
    fn go_to(&mut self, route: Route, transient: Option<MergedRecord>) {
        self.post(route, transient);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_form_a_linear_chain() {
        assert_eq!(Route::Account.next(), Some(Route::Personal));
        assert_eq!(Route::Payment.next(), Some(Route::Confirmation));
        assert_eq!(Route::Confirmation.next(), None);
        assert_eq!(Route::Account.previous(), None);
        assert_eq!(Route::Confirmation.previous(), Some(Route::Payment));
    }

    #[test]
    fn paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/personalinfo"), None);
        assert_eq!(Route::Personal.to_string(), "/personlinfo");
    }

    #[test]
    fn progress_increases_along_the_chain() {
        let progress: Vec<u8> = Route::ALL.into_iter().map(Route::progress).collect();
        assert_eq!(progress, vec![25, 50, 75, 100]);
    }

    #[test]
    fn recording_navigator_keeps_history() {
        let mut navigator = RecordingNavigator::new();
        navigator.go_to(Route::Personal, None);
        navigator.go_to(Route::Confirmation, Some(MergedRecord::new()));

        assert_eq!(navigator.history().len(), 2);
        assert_eq!(navigator.last().map(|nav| nav.route), Some(Route::Confirmation));
        assert_eq!(navigator.take_transient(), Some(MergedRecord::new()));
        assert_eq!(navigator.take_transient(), None);
    }

    #[test]
    fn handoff_is_claimed_by_its_addressee() {
        let mut handoff = Handoff::default();
        let record = MergedRecord::from(crate::wizard::storage::Record::from([(
            "cardType".to_string(),
            "Visa".to_string(),
        )]));
        handoff.post(Route::Payment, Some(record.clone()));

        assert_eq!(handoff.claim(Route::Payment), Some(record));
        assert_eq!(handoff.claim(Route::Payment), None);
    }

    #[test]
    fn handoff_for_another_route_is_dropped() {
        let mut handoff = Handoff::default();
        handoff.post(Route::Personal, Some(MergedRecord::new()));

        assert_eq!(handoff.claim(Route::Confirmation), None);
        assert_eq!(handoff, Handoff::default());
    }

    #[test]
    fn replay_reissues_navigations_in_order() {
        let mut recorded = RecordingNavigator::new();
        recorded.go_to(Route::Payment, None);
        recorded.go_to(Route::Account, None);

        let mut target = RecordingNavigator::new();
        recorded.replay(&mut target);

        let routes: Vec<Route> = target.history().iter().map(|nav| nav.route).collect();
        assert_eq!(routes, vec![Route::Payment, Route::Account]);
    }
}
