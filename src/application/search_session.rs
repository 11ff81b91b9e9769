use crate::domain::entities::{RequestBody, SearchFilters};
use crate::domain::errors::SearchError;
use crate::domain::repositories::AnalyticsSink;
use crate::domain::services::{
    ChangeDetector, RankedStatus, SearchMode, build_request_body, check_ranked_time,
};
use chrono::{DateTime, Utc};
use std::sync::Arc;

pub const SEARCH_CALL_CATEGORY: &str = "SearchCall";
pub const GENERIC_SEARCH_ACTION: &str = "GenericSearch";
pub const ADVANCED_SEARCH_ACTION: &str = "AdvancedSearch";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchRequest {
    Initial,
    Filtered(RequestBody),
}

/// A request that has been cleared for dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub sequence: u64,
    pub request: SearchRequest,
}

/// Search trigger state: ranked gate, last dispatched body and the
/// sequence numbers used to drop superseded responses.
pub struct SearchSession {
    analytics: Arc<dyn AnalyticsSink>,
    detector: ChangeDetector,
    ranked: RankedStatus,
    next_sequence: u64,
    last_applied: Option<u64>,
}

impl SearchSession {
    pub fn new(analytics: Arc<dyn AnalyticsSink>, now: DateTime<Utc>) -> Self {
        Self {
            analytics,
            detector: ChangeDetector::new(),
            ranked: check_ranked_time(now),
            next_sequence: 0,
            last_applied: None,
        }
    }

    pub fn ranked_status(&self) -> RankedStatus {
        self.ranked
    }

    fn refresh_ranked_time(&mut self, now: DateTime<Utc>) -> RankedStatus {
        self.ranked = check_ranked_time(now);
        self.ranked
    }

    pub fn reset_previous_body(&mut self) {
        self.detector.reset();
    }

    pub fn latest_sequence(&self) -> Option<u64> {
        self.next_sequence.checked_sub(1)
    }

    pub fn begin_initial_load(&mut self) -> SearchTicket {
        SearchTicket {
            sequence: self.allocate_sequence(),
            request: SearchRequest::Initial,
        }
    }

    /// Runs one search trigger against the current filters.
    ///
    /// Returns `Ok(None)` when the body matches the previously dispatched one;
    /// in that case nothing is tracked and no state changes.
    pub fn trigger(
        &mut self,
        filters: &mut SearchFilters,
        now: DateTime<Utc>,
    ) -> Result<Option<SearchTicket>, SearchError> {
        let ranked = self.refresh_ranked_time(now).active;

        if SearchMode::select(filters, ranked) == SearchMode::Advanced
            && !filters.artist_filter.is_empty()
        {
            filters.restore_artist_limit_defaults();
        }

        let body = build_request_body(filters, ranked)?;

        if self.detector.is_duplicate(&body) {
            tracing::debug!("Search body unchanged since last request, skipping");
            return Ok(None);
        }

        self.track(filters);
        self.detector.record(body.clone());

        let sequence = self.allocate_sequence();
        tracing::info!(sequence, ranked, "Dispatching search request");

        Ok(Some(SearchTicket {
            sequence,
            request: SearchRequest::Filtered(body),
        }))
    }

    /// Whether a response for `sequence` should replace the current results.
    ///
    /// Only the most recently issued request may apply its response, and
    /// each sequence applies at most once.
    pub fn accept(&mut self, sequence: u64) -> bool {
        let is_latest = self.latest_sequence() == Some(sequence);
        let already_applied = self.last_applied.is_some_and(|applied| applied >= sequence);

        if !is_latest || already_applied {
            tracing::warn!(
                sequence,
                latest = ?self.latest_sequence(),
                "Discarding superseded search response"
            );
            return false;
        }

        self.last_applied = Some(sequence);
        true
    }

    /// Forgets the dispatched body once its accepted response has failed,
    /// so the same search can be sent again.
    pub fn fail(&mut self, sequence: u64) {
        if self.last_applied == Some(sequence) {
            tracing::debug!(sequence, "Search failed, allowing the same body again");
            self.detector.reset();
        }
    }

    fn track(&self, filters: &SearchFilters) {
        if filters.uses_main_filter() {
            self.analytics.track_event(
                SEARCH_CALL_CATEGORY,
                GENERIC_SEARCH_ACTION,
                &filters.main_filter,
            );
        } else {
            let label = format!(
                "{}-{}-{}-{}",
                filters.anime_filter,
                filters.song_name_filter,
                filters.artist_filter,
                filters.composer_filter
            );
            self.analytics
                .track_event(SEARCH_CALL_CATEGORY, ADVANCED_SEARCH_ACTION, &label);
        }
    }

    fn allocate_sequence(&mut self) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSink {
        events: Mutex<Vec<(String, String, String)>>,
    }

    impl RecordingSink {
        fn events(&self) -> Vec<(String, String, String)> {
            self.events.lock().unwrap().clone()
        }
    }

    impl AnalyticsSink for RecordingSink {
        fn track_event(&self, category: &str, action: &str, label: &str) {
            self.events.lock().unwrap().push((
                category.to_string(),
                action.to_string(),
                label.to_string(),
            ));
        }
    }

    fn off_peak() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap()
    }

    fn ranked() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 18, 45, 0).unwrap()
    }

    fn session() -> (SearchSession, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::default());
        let session = SearchSession::new(sink.clone(), off_peak());
        (session, sink)
    }

    #[test]
    fn first_trigger_always_dispatches() {
        let (mut session, sink) = session();
        let mut filters = SearchFilters::default();

        let ticket = session.trigger(&mut filters, off_peak()).unwrap().unwrap();

        assert_eq!(ticket.sequence, 0);
        assert!(matches!(ticket.request, SearchRequest::Filtered(ref body) if !body.has_sub_filters()));
        assert_eq!(sink.events().len(), 1);
        assert_eq!(session.latest_sequence(), Some(0));
    }

    #[test]
    fn identical_trigger_is_skipped_without_side_effects() {
        let (mut session, sink) = session();
        let mut filters = SearchFilters::default();
        filters.main_filter = "Totoro".to_string();

        session.trigger(&mut filters, off_peak()).unwrap();
        let repeat = session.trigger(&mut filters, off_peak()).unwrap();

        assert!(repeat.is_none());
        assert_eq!(sink.events().len(), 1);
        assert_eq!(session.latest_sequence(), Some(0));
    }

    #[test]
    fn generic_and_advanced_searches_are_tracked_differently() {
        let (mut session, sink) = session();
        let mut filters = SearchFilters::default();
        filters.main_filter = "Totoro".to_string();
        session.trigger(&mut filters, off_peak()).unwrap();

        filters.main_filter.clear();
        filters.show_advanced_filters = true;
        filters.anime_filter = "Toradora".to_string();
        filters.artist_filter = "Rie Kugimiya".to_string();
        session.trigger(&mut filters, off_peak()).unwrap();

        assert_eq!(
            sink.events(),
            vec![
                (
                    "SearchCall".to_string(),
                    "GenericSearch".to_string(),
                    "Totoro".to_string()
                ),
                (
                    "SearchCall".to_string(),
                    "AdvancedSearch".to_string(),
                    "Toradora--Rie Kugimiya-".to_string()
                ),
            ]
        );
    }

    #[test]
    fn advanced_trigger_writes_back_artist_defaults() {
        let (mut session, _sink) = session();
        let mut filters = SearchFilters::default();
        filters.show_advanced_filters = true;
        filters.artist_filter = "Aimer".to_string();
        filters.minimal_members_filter.clear();

        let ticket = session.trigger(&mut filters, off_peak()).unwrap().unwrap();

        assert_eq!(filters.minimal_members_filter, "0");
        let SearchRequest::Filtered(body) = ticket.request else {
            panic!("expected a filtered request");
        };
        assert_eq!(body.artist_search_filter.unwrap().group_granularity, 0);
    }

    #[test]
    fn ranked_time_is_refreshed_on_every_trigger() {
        let (mut session, _sink) = session();
        assert!(!session.ranked_status().active);

        let mut filters = SearchFilters::default();
        filters.show_advanced_filters = true;
        filters.song_name_filter = "Gurenge".to_string();
        let ticket = session.trigger(&mut filters, ranked()).unwrap().unwrap();

        assert!(session.ranked_status().active);
        assert_eq!(session.ranked_status().minutes_left, 46);
        let SearchRequest::Filtered(body) = ticket.request else {
            panic!("expected a filtered request");
        };
        assert!(body.song_name_search_filter.is_none());
    }

    #[test]
    fn invalid_limits_leave_session_untouched() {
        let (mut session, sink) = session();
        let mut filters = SearchFilters::default();
        filters.main_filter = "Lisa".to_string();
        filters.maximum_randoms_filter = "many".to_string();

        let err = session.trigger(&mut filters, off_peak()).unwrap_err();

        assert!(matches!(err, SearchError::InvalidFilterValue { .. }));
        let any_body = build_request_body(&SearchFilters::default(), false).unwrap();
        assert!(!session.detector.is_duplicate(&any_body));
        assert!(sink.events().is_empty());
        assert_eq!(session.latest_sequence(), None);
    }

    #[test]
    fn only_latest_response_is_applied() {
        let (mut session, _sink) = session();
        let initial = session.begin_initial_load();
        let mut filters = SearchFilters::default();
        filters.main_filter = "Lain".to_string();
        let search = session.trigger(&mut filters, off_peak()).unwrap().unwrap();

        assert_eq!(initial.sequence, 0);
        assert_eq!(search.sequence, 1);
        assert!(!session.accept(initial.sequence));
        assert!(session.accept(search.sequence));
        assert!(!session.accept(search.sequence));
    }

    #[test]
    fn failed_search_can_be_sent_again() {
        let (mut session, sink) = session();
        let mut filters = SearchFilters::default();
        filters.main_filter = "Totoro".to_string();

        let first = session.trigger(&mut filters, off_peak()).unwrap().unwrap();
        assert!(session.accept(first.sequence));
        session.fail(first.sequence);

        let retry = session.trigger(&mut filters, off_peak()).unwrap();
        assert_eq!(retry.map(|ticket| ticket.sequence), Some(1));
        assert_eq!(sink.events().len(), 2);
    }

    #[test]
    fn superseded_failure_keeps_the_latest_body() {
        let (mut session, _sink) = session();
        let mut filters = SearchFilters::default();
        filters.main_filter = "Totoro".to_string();
        let stale = session.trigger(&mut filters, off_peak()).unwrap().unwrap();

        filters.main_filter = "Laputa".to_string();
        let latest = session.trigger(&mut filters, off_peak()).unwrap().unwrap();
        assert!(!session.accept(stale.sequence));
        session.fail(stale.sequence);
        assert!(session.accept(latest.sequence));

        assert!(session.trigger(&mut filters, off_peak()).unwrap().is_none());
    }
}
