//! Page controller: owns one page's filters and fetched data.
//!
//! The refresh contract is explicit rather than effect-driven:
//!
//! 1. The host asks [`Controller::needs_refresh`] after every filter change and
//!    on first display.
//! 2. [`Controller::begin_refresh`] validates the filters, records the query,
//!    issues a sequence number and hands back a [`PendingRequest`].
//! 3. Whatever performs the GET reports back through [`Controller::complete`].
//!    Completions for anything but the latest sequence number are dropped.
//!
//! Data is replaced wholesale on success and left untouched on failure.

use crate::error::FetchError;
use crate::pages::Page;
use crate::query::QueryParams;
use crate::status::{FetchStatus, RequestSequence};
use log::{info, warn};
use std::rc::Rc;

/// A GET request the host should perform on behalf of a controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub seq: u64,
    pub path: &'static str,
    pub query: QueryParams,
}

/// What [`Controller::complete`] did with a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// New data is now current.
    Applied,
    /// The request failed; the error is recorded and data kept.
    Failed,
    /// A newer request was issued since; the response was ignored.
    Stale,
}

pub struct Controller<P: Page> {
    filters: P::Filters,
    data: Rc<P::Payload>,
    status: FetchStatus,
    sequence: RequestSequence,
    issued: Option<QueryParams>,
}

impl<P: Page> Default for Controller<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Page> Controller<P> {
    /// Controller with the page's default filters and no data.
    pub fn new() -> Self {
        Self::with_filters(P::Filters::default())
    }

    pub fn with_filters(filters: P::Filters) -> Self {
        Self {
            filters,
            data: Rc::new(P::Payload::default()),
            status: FetchStatus::Idle,
            sequence: RequestSequence::new(),
            issued: None,
        }
    }

    pub fn filters(&self) -> &P::Filters {
        &self.filters
    }

    /// Mutable access for the filter controls. Values are taken as-is;
    /// validation happens when a refresh begins.
    pub fn filters_mut(&mut self) -> &mut P::Filters {
        &mut self.filters
    }

    pub fn set_filters(&mut self, filters: P::Filters) {
        self.filters = filters;
    }

    /// The query the current filters map to.
    pub fn query(&self) -> QueryParams {
        P::derive_query(&self.filters)
    }

    /// True on first display and whenever the derived query differs from the
    /// last one issued.
    pub fn needs_refresh(&self) -> bool {
        self.issued.as_ref() != Some(&self.query())
    }

    /// Start a fetch cycle for the current filters.
    ///
    /// Invalid filters never reach the network: the status becomes an error
    /// and any in-flight request is superseded.
    pub fn begin_refresh(&mut self) -> Result<PendingRequest, FetchError> {
        let query = self.query();
        self.issued = Some(query.clone());
        let seq = self.sequence.issue();

        let errors = P::validate(&self.filters);
        if !errors.is_empty() {
            let err = FetchError::Invalid(errors);
            warn!("[COE] {}: request #{} not sent: {}", P::NAME, seq, err);
            self.status = FetchStatus::Error(err.to_string());
            return Err(err);
        }

        info!(
            "[COE] {}: request #{} {}?{}",
            P::NAME,
            seq,
            P::PATH,
            query.to_query_string()
        );
        self.status = FetchStatus::Loading;
        Ok(PendingRequest {
            seq,
            path: P::PATH,
            query,
        })
    }

    /// Apply the outcome of request `seq`.
    pub fn complete(&mut self, seq: u64, result: Result<P::Payload, FetchError>) -> Completion {
        if !self.sequence.is_latest(seq) {
            info!(
                "[COE] {}: dropping response #{} (latest is #{})",
                P::NAME,
                seq,
                self.sequence.latest()
            );
            return Completion::Stale;
        }

        match result {
            Ok(payload) => {
                info!(
                    "[COE] {}: response #{} applied ({} rows)",
                    P::NAME,
                    seq,
                    P::row_count(&payload)
                );
                self.data = Rc::new(payload);
                self.status = FetchStatus::Ok;
                Completion::Applied
            }
            Err(err) => {
                warn!("[COE] {}: response #{} failed: {}", P::NAME, seq, err);
                self.status = FetchStatus::Error(err.to_string());
                Completion::Failed
            }
        }
    }

    /// Current payload. The `Rc` only changes when a fetch is applied, so it
    /// doubles as the memoization key for derived chart options.
    pub fn data(&self) -> Rc<P::Payload> {
        Rc::clone(&self.data)
    }

    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{VehicleClass, XAxisMode};
    use crate::models::{PremiumPayload, PremiumRow, SeasonalityPayload, SeasonalityRow};
    use crate::pages::{PremiumPage, SeasonalityPage};

    fn premium_rows(labels: &[&str]) -> PremiumPayload {
        PremiumPayload {
            data: labels
                .iter()
                .map(|label| PremiumRow {
                    x_label: label.to_string(),
                    premium: Some(50000.0),
                    moving_avg: None,
                })
                .collect(),
            count: labels.len(),
        }
    }

    #[test]
    fn refresh_needed_on_first_display() {
        let ctrl = Controller::<PremiumPage>::new();
        assert!(ctrl.needs_refresh());
        assert_eq!(ctrl.status(), &FetchStatus::Idle);
        assert!(ctrl.data().data.is_empty());
    }

    #[test]
    fn refresh_needed_again_only_after_filter_change() {
        let mut ctrl = Controller::<PremiumPage>::new();
        let req = ctrl.begin_refresh().unwrap();
        assert!(!ctrl.needs_refresh());
        assert!(ctrl.is_loading());
        assert_eq!(req.path, "/api/premium");
        assert_eq!(req.query.get("window"), Some("6"));

        ctrl.complete(req.seq, Ok(premium_rows(&["2010"])));
        assert!(!ctrl.needs_refresh());

        ctrl.filters_mut().x_axis_mode = XAxisMode::Month;
        assert!(ctrl.needs_refresh());
    }

    #[test]
    fn success_replaces_data_wholesale() {
        let mut ctrl = Controller::<PremiumPage>::new();
        let req = ctrl.begin_refresh().unwrap();
        assert_eq!(
            ctrl.complete(req.seq, Ok(premium_rows(&["2010", "2011"]))),
            Completion::Applied
        );
        assert_eq!(ctrl.status(), &FetchStatus::Ok);

        let req = ctrl.begin_refresh().unwrap();
        ctrl.complete(req.seq, Ok(premium_rows(&["2015"])));
        assert_eq!(ctrl.data().data.len(), 1);
        assert_eq!(ctrl.data().data[0].x_label, "2015");
    }

    #[test]
    fn failure_keeps_previous_data() {
        let mut ctrl = Controller::<PremiumPage>::new();
        let req = ctrl.begin_refresh().unwrap();
        ctrl.complete(req.seq, Ok(premium_rows(&["2010", "2011"])));
        let before = ctrl.data();

        ctrl.filters_mut().window = 3;
        let req = ctrl.begin_refresh().unwrap();
        let outcome = ctrl.complete(
            req.seq,
            Err(FetchError::Transport("connection refused".to_string())),
        );

        assert_eq!(outcome, Completion::Failed);
        assert!(Rc::ptr_eq(&before, &ctrl.data()));
        assert_eq!(
            ctrl.status().error_detail(),
            Some("Request failed: connection refused")
        );
    }

    #[test]
    fn failure_without_prior_data_leaves_page_empty() {
        let mut ctrl = Controller::<PremiumPage>::new();
        let req = ctrl.begin_refresh().unwrap();
        ctrl.complete(req.seq, Err(FetchError::Decode("expected value".to_string())));
        assert!(ctrl.data().data.is_empty());
        assert!(matches!(ctrl.status(), FetchStatus::Error(_)));
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut ctrl = Controller::<SeasonalityPage>::new();
        let first = ctrl.begin_refresh().unwrap();
        ctrl.filters_mut().vehicle_class = VehicleClass::CategoryC;
        let second = ctrl.begin_refresh().unwrap();

        let fresh = SeasonalityPayload {
            data: vec![SeasonalityRow {
                month_name: "January".to_string(),
                quota: Some(900.0),
                premium: Some(80000.0),
            }],
            count: 1,
        };
        assert_eq!(ctrl.complete(second.seq, Ok(fresh.clone())), Completion::Applied);

        // The older request resolves last and must not clobber the fresher data.
        let stale = SeasonalityPayload::default();
        assert_eq!(ctrl.complete(first.seq, Ok(stale)), Completion::Stale);
        assert_eq!(*ctrl.data(), fresh);
        assert_eq!(ctrl.status(), &FetchStatus::Ok);
    }

    #[test]
    fn stale_failure_does_not_flip_status() {
        let mut ctrl = Controller::<SeasonalityPage>::new();
        let first = ctrl.begin_refresh().unwrap();
        let second = ctrl.begin_refresh().unwrap();
        ctrl.complete(second.seq, Ok(SeasonalityPayload::default()));
        ctrl.complete(first.seq, Err(FetchError::Transport("timeout".to_string())));
        assert_eq!(ctrl.status(), &FetchStatus::Ok);
    }

    #[test]
    fn invalid_filters_block_the_request() {
        let mut ctrl = Controller::<PremiumPage>::new();
        ctrl.filters_mut().window = 0;
        let err = ctrl.begin_refresh().unwrap_err();
        assert!(matches!(err, FetchError::Invalid(_)));
        assert!(ctrl.status().error_detail().is_some());
        // The same invalid query is not retried automatically.
        assert!(!ctrl.needs_refresh());
    }

    #[test]
    fn invalid_filters_supersede_in_flight_request() {
        let mut ctrl = Controller::<PremiumPage>::new();
        let req = ctrl.begin_refresh().unwrap();
        ctrl.filters_mut().start_year = 2030;
        assert!(ctrl.begin_refresh().is_err());
        assert_eq!(
            ctrl.complete(req.seq, Ok(premium_rows(&["2010"]))),
            Completion::Stale
        );
        assert!(ctrl.data().data.is_empty());
    }
}
