//! Per-user dashboard session: the reactive binding between filter inputs
//! and chart outputs.
//!
//! A session owns two named input slots (`site`, `payload_range`) and two
//! named output slots (`pie`, `scatter`). An explicit dependency table lists
//! which inputs each output reads; any input change synchronously recomputes
//! exactly the dependent outputs. Recomputation is infallible and has no
//! suspension points, so the `Recomputing` state never outlives the setter
//! that entered it.
//!
//! Sessions are single-threaded. Several sessions may share one read-only
//! [`RecordStore`]; each keeps its own isolated input state.

use crate::api::types::ChartDescriptor;
use crate::core::domain::{PayloadRange, SiteSelection};
use crate::services::{payload_scatter, success_pie};
use crate::store::RecordStore;

/// Named inputs a dashboard output can depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSlot {
    Site,
    PayloadRange,
}

/// Named dashboard outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputSlot {
    Pie,
    Scatter,
}

impl OutputSlot {
    /// Dependency table: the pie reads only the site selection, the scatter
    /// reads both inputs.
    pub fn depends_on(self, input: InputSlot) -> bool {
        match self {
            OutputSlot::Pie => input == InputSlot::Site,
            OutputSlot::Scatter => true,
        }
    }
}

/// Controller state: `Recomputing` only while derivations run inside a
/// setter, `Idle` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Recomputing,
}

/// One user's dashboard state over a shared Record Store.
#[derive(Debug)]
pub struct DashboardSession<'a> {
    store: &'a RecordStore,
    site: SiteSelection,
    payload_range: PayloadRange,
    state: SessionState,
    pie: ChartDescriptor,
    scatter: ChartDescriptor,
}

impl<'a> DashboardSession<'a> {
    /// Start a session with the default inputs: all sites selected and the
    /// payload range spanning the bounds observed at load time. Both outputs
    /// are computed immediately, so the session holds a valid descriptor
    /// pair before any user interaction.
    pub fn new(store: &'a RecordStore) -> Self {
        let (min_payload, max_payload) = store.payload_bounds();
        let site = SiteSelection::All;
        let payload_range = PayloadRange::new(min_payload, max_payload);
        let pie = success_pie(store.records(), &site);
        let scatter = payload_scatter(store.records(), &site, &payload_range);

        Self {
            store,
            site,
            payload_range,
            state: SessionState::Idle,
            pie,
            scatter,
        }
    }

    /// Change the site selection, recomputing every output that reads it.
    pub fn set_site(&mut self, selection: SiteSelection) {
        self.site = selection;
        self.recompute(InputSlot::Site);
    }

    /// Change the payload range, recomputing every output that reads it.
    pub fn set_payload_range(&mut self, range: PayloadRange) {
        self.payload_range = range;
        self.recompute(InputSlot::PayloadRange);
    }

    fn recompute(&mut self, changed: InputSlot) {
        self.state = SessionState::Recomputing;

        if OutputSlot::Pie.depends_on(changed) {
            self.pie = success_pie(self.store.records(), &self.site);
        }
        if OutputSlot::Scatter.depends_on(changed) {
            self.scatter =
                payload_scatter(self.store.records(), &self.site, &self.payload_range);
        }

        log::debug!(
            "Recomputed outputs for {:?} change (site={}, range=[{}, {}])",
            changed,
            self.site,
            self.payload_range.low,
            self.payload_range.high
        );
        self.state = SessionState::Idle;
    }

    pub fn site(&self) -> &SiteSelection {
        &self.site
    }

    pub fn payload_range(&self) -> PayloadRange {
        self.payload_range
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Current success pie descriptor.
    pub fn pie(&self) -> &ChartDescriptor {
        &self.pie
    }

    /// Current payload scatter descriptor.
    pub fn scatter(&self) -> &ChartDescriptor {
        &self.scatter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{ChartData, ChartKind};
    use crate::core::domain::LaunchRecord;

    fn record(site: &str, payload: f64, class: u8) -> LaunchRecord {
        LaunchRecord {
            launch_site: site.to_string(),
            payload_mass_kg: payload,
            booster_version_category: "v1.0".to_string(),
            outcome_class: class,
        }
    }

    fn sample_store() -> RecordStore {
        RecordStore::new(vec![
            record("KSC LC-39A", 5000.0, 1),
            record("KSC LC-39A", 3000.0, 0),
            record("CCAFS", 2000.0, 1),
        ])
        .unwrap()
    }

    #[test]
    fn test_initial_state_has_valid_outputs() {
        let store = sample_store();
        let session = DashboardSession::new(&store);

        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.site(), &SiteSelection::All);
        assert_eq!(session.payload_range(), PayloadRange::new(2000.0, 5000.0));
        assert_eq!(session.pie().kind, ChartKind::Pie);
        assert_eq!(session.scatter().kind, ChartKind::Scatter);
        assert_eq!(session.scatter().data.len(), 3);
    }

    #[test]
    fn test_site_change_recomputes_both_outputs() {
        let store = sample_store();
        let mut session = DashboardSession::new(&store);
        session.set_site(SiteSelection::from_value("KSC LC-39A"));

        assert_eq!(
            session.pie().title,
            "Total Launches for site KSC LC-39A (1=Success, 0=Failure)"
        );
        assert_eq!(
            session.scatter().title,
            "Correlation Between Payload and Success for KSC LC-39A"
        );
        assert_eq!(session.scatter().data.len(), 2);
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn test_range_change_leaves_pie_untouched() {
        let store = sample_store();
        let mut session = DashboardSession::new(&store);
        let pie_before = session.pie().clone();

        session.set_payload_range(PayloadRange::new(4000.0, 6000.0));

        assert_eq!(session.pie(), &pie_before);
        match &session.scatter().data {
            ChartData::Scatter(points) => {
                assert_eq!(points.len(), 1);
                assert_eq!(points[0].payload_mass_kg, 5000.0);
            }
            other => panic!("expected scatter data, got {:?}", other),
        }
    }

    #[test]
    fn test_recompute_with_unchanged_inputs_is_idempotent() {
        let store = sample_store();
        let mut session = DashboardSession::new(&store);
        session.set_site(SiteSelection::from_value("CCAFS"));

        let pie_before = session.pie().clone();
        let scatter_before = session.scatter().clone();

        session.set_site(SiteSelection::from_value("CCAFS"));

        assert_eq!(session.pie(), &pie_before);
        assert_eq!(session.scatter(), &scatter_before);
    }

    #[test]
    fn test_unknown_site_renders_empty_charts() {
        let store = sample_store();
        let mut session = DashboardSession::new(&store);
        session.set_site(SiteSelection::from_value("Boca Chica"));

        assert!(session.pie().data.is_empty());
        assert!(session.scatter().data.is_empty());
    }

    #[test]
    fn test_sessions_are_isolated_over_a_shared_store() {
        let store = sample_store();
        let mut first = DashboardSession::new(&store);
        let second = DashboardSession::new(&store);

        first.set_site(SiteSelection::from_value("CCAFS"));

        assert_eq!(second.site(), &SiteSelection::All);
        assert_eq!(second.scatter().data.len(), 3);
        assert_eq!(first.scatter().data.len(), 1);
    }

    #[test]
    fn test_dependency_table() {
        assert!(OutputSlot::Pie.depends_on(InputSlot::Site));
        assert!(!OutputSlot::Pie.depends_on(InputSlot::PayloadRange));
        assert!(OutputSlot::Scatter.depends_on(InputSlot::Site));
        assert!(OutputSlot::Scatter.depends_on(InputSlot::PayloadRange));
    }
}
