pub mod clock;
pub mod error;
pub mod event;
pub mod seed;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::ValidationError;
pub use event::{DATE_FORMAT, DEFAULT_STATUS, Event, EventDraft, EventPatch, TIME_FORMAT};

use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MinistryFilter {
    #[default]
    All,
    Ministry(String),
}

impl MinistryFilter {
    pub fn matches(&self, ministry: &str) -> bool {
        match self {
            MinistryFilter::All => true,
            MinistryFilter::Ministry(name) => name == ministry,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            MinistryFilter::All => "All",
            MinistryFilter::Ministry(name) => name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    pub upcoming_events: usize,
    pub total_attendees: u64,
    pub active_ministries: usize,
    pub tomorrow_events: usize,
}

/// Authoritative in-memory collections of events and ministries, plus the
/// derived views the dashboard renders. All state lives for the session
/// only; a restart resets to the seed data.
pub struct EventStore {
    events: Vec<Event>,
    ministries: Vec<String>,
    clock: Box<dyn Clock>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            events: seed::sample_events(),
            ministries: seed::default_ministries(),
            clock,
        }
    }

    pub fn empty_with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            events: Vec::new(),
            ministries: Vec::new(),
            clock,
        }
    }

    /// Events in insertion order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn ministries(&self) -> &[String] {
        &self.ministries
    }

    pub fn event(&self, id: i64) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn add_event(&mut self, draft: &EventDraft) -> Result<Event, ValidationError> {
        let (date, time) = draft.validate()?;
        let event = Event {
            id: self.next_id(),
            title: draft.title.clone(),
            ministry: draft.ministry.clone(),
            date,
            time,
            venue: draft.venue.clone(),
            description: draft.description.clone(),
            attendees: 0,
            status: DEFAULT_STATUS.to_string(),
        };
        self.events.push(event.clone());
        Ok(event)
    }

    // Ids follow the wall clock in milliseconds, bumped past any id already
    // taken so rapid submissions in the same millisecond stay unique.
    fn next_id(&self) -> i64 {
        let mut candidate = self.clock.now_millis();
        while self.events.iter().any(|e| e.id == candidate) {
            candidate += 1;
        }
        candidate
    }

    /// Merges the supplied fields into the matching event. Unknown ids are
    /// tolerated silently.
    pub fn update_event(&mut self, id: i64, patch: EventPatch) {
        let Some(event) = self.events.iter_mut().find(|e| e.id == id) else {
            return;
        };

        if let Some(title) = patch.title {
            event.title = title;
        }
        if let Some(ministry) = patch.ministry {
            event.ministry = ministry;
        }
        if let Some(date) = patch.date {
            event.date = date;
        }
        if let Some(time) = patch.time {
            event.time = time;
        }
        if let Some(venue) = patch.venue {
            event.venue = venue;
        }
        if let Some(description) = patch.description {
            event.description = description;
        }
        if let Some(attendees) = patch.attendees {
            event.attendees = attendees;
        }
        if let Some(status) = patch.status {
            event.status = status;
        }
    }

    /// Removes the matching event; a second call with the same id is a no-op.
    pub fn delete_event(&mut self, id: i64) {
        self.events.retain(|e| e.id != id);
    }

    pub fn add_ministry(&mut self, name: &str) -> Result<String, ValidationError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyMinistryName);
        }
        if self.ministries.iter().any(|m| m == trimmed) {
            return Err(ValidationError::DuplicateMinistry(trimmed.to_string()));
        }
        self.ministries.push(trimmed.to_string());
        Ok(trimmed.to_string())
    }

    /// All events ascending by date and time; ties keep insertion order.
    pub fn by_schedule(&self) -> Vec<&Event> {
        let mut events: Vec<&Event> = self.events.iter().collect();
        events.sort_by_key(|e| e.starts_at());
        events
    }

    pub fn filtered(&self, search: &str, filter: &MinistryFilter) -> Vec<&Event> {
        let needle = search.to_lowercase();
        self.by_schedule()
            .into_iter()
            .filter(|e| filter.matches(&e.ministry))
            .filter(|e| needle.is_empty() || e.matches_search(&needle))
            .collect()
    }

    /// Events dated exactly one calendar day after the clock's local today.
    pub fn happening_tomorrow(&self) -> Vec<&Event> {
        let Some(tomorrow) = self.clock.today().succ_opt() else {
            return Vec::new();
        };
        self.events.iter().filter(|e| e.date == tomorrow).collect()
    }

    pub fn stats(&self) -> DashboardStats {
        let active: HashSet<&str> = self.events.iter().map(|e| e.ministry.as_str()).collect();
        DashboardStats {
            upcoming_events: self
                .events
                .iter()
                .filter(|e| e.status == DEFAULT_STATUS)
                .count(),
            total_attendees: self.events.iter().map(|e| u64::from(e.attendees)).sum(),
            active_ministries: active.len(),
            tomorrow_events: self.happening_tomorrow().len(),
        }
    }
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    const JULY_MILLIS: i64 = 1_721_000_000_000;

    fn july(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, day).unwrap()
    }

    fn seeded_store(today: NaiveDate) -> EventStore {
        EventStore::with_clock(Box::new(FixedClock::new(today, JULY_MILLIS)))
    }

    fn empty_store(today: NaiveDate) -> EventStore {
        EventStore::empty_with_clock(Box::new(FixedClock::new(today, JULY_MILLIS)))
    }

    fn draft(title: &str, ministry: &str, date: &str, time: &str, venue: &str) -> EventDraft {
        EventDraft {
            title: title.to_string(),
            ministry: ministry.to_string(),
            date: date.to_string(),
            time: time.to_string(),
            venue: venue.to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn add_event_appends_one_record_with_defaults() {
        let mut store = seeded_store(july(1));

        let created = store
            .add_event(&draft("X", "Prayers", "2024-07-16", "09:00", "Hall"))
            .unwrap();

        assert_eq!(store.events().len(), 6);
        assert_eq!(created.attendees, 0);
        assert_eq!(created.status, "upcoming");
        assert_eq!(
            store
                .events()
                .iter()
                .filter(|e| e.id == created.id)
                .count(),
            1
        );
    }

    #[test]
    fn add_event_with_missing_fields_leaves_collection_unchanged() {
        let mut store = seeded_store(july(1));

        let err = store
            .add_event(&draft("", "Prayers", "2024-07-16", "", "Hall"))
            .unwrap_err();

        assert_eq!(err, ValidationError::MissingFields(vec!["title", "time"]));
        assert_eq!(store.events().len(), 5);
    }

    #[test]
    fn add_event_with_bad_date_leaves_collection_unchanged() {
        let mut store = seeded_store(july(1));

        let result = store.add_event(&draft("X", "Prayers", "tomorrow", "09:00", "Hall"));

        assert_eq!(
            result.unwrap_err(),
            ValidationError::InvalidDate("tomorrow".to_string())
        );
        assert_eq!(store.events().len(), 5);
    }

    #[test]
    fn generated_ids_are_unique_within_a_millisecond() {
        let mut store = empty_store(july(1));

        let first = store
            .add_event(&draft("A", "Prayers", "2024-07-16", "09:00", "Hall"))
            .unwrap();
        let second = store
            .add_event(&draft("B", "Prayers", "2024-07-16", "09:00", "Hall"))
            .unwrap();

        assert_eq!(first.id, JULY_MILLIS);
        assert_eq!(second.id, JULY_MILLIS + 1);
    }

    #[test]
    fn update_event_merges_only_supplied_fields() {
        let mut store = seeded_store(july(1));
        let before = store.event(1).unwrap().clone();

        store.update_event(
            1,
            EventPatch {
                title: Some("Renamed".to_string()),
                venue: Some("Chapel".to_string()),
                ..EventPatch::default()
            },
        );

        let after = store.event(1).unwrap();
        assert_eq!(after.title, "Renamed");
        assert_eq!(after.venue, "Chapel");
        assert_eq!(after.id, before.id);
        assert_eq!(after.ministry, before.ministry);
        assert_eq!(after.attendees, before.attendees);
        assert_eq!(after.status, before.status);
    }

    #[test]
    fn update_event_with_unknown_id_is_a_silent_noop() {
        let mut store = seeded_store(july(1));
        let before: Vec<Event> = store.events().to_vec();

        store.update_event(
            9999,
            EventPatch {
                title: Some("Ghost".to_string()),
                ..EventPatch::default()
            },
        );

        assert_eq!(store.events(), before.as_slice());
    }

    #[test]
    fn delete_event_removes_exactly_the_matching_record() {
        let mut store = seeded_store(july(1));

        store.delete_event(3);

        assert_eq!(store.events().len(), 4);
        assert!(store.event(3).is_none());
    }

    #[test]
    fn delete_event_is_idempotent() {
        let mut store = seeded_store(july(1));

        store.delete_event(3);
        store.delete_event(3);

        assert_eq!(store.events().len(), 4);
    }

    #[test]
    fn add_ministry_trims_and_appends() {
        let mut store = seeded_store(july(1));

        let stored = store.add_ministry("  Media Team  ").unwrap();

        assert_eq!(stored, "Media Team");
        assert_eq!(store.ministries().len(), 16);
        assert_eq!(store.ministries().last().unwrap(), "Media Team");
    }

    #[test]
    fn add_ministry_rejects_exact_duplicates() {
        let mut store = seeded_store(july(1));

        let err = store.add_ministry("Prayers").unwrap_err();

        assert_eq!(err, ValidationError::DuplicateMinistry("Prayers".to_string()));
        assert_eq!(store.ministries().len(), 15);
    }

    #[test]
    fn ministry_duplicate_check_is_case_sensitive() {
        let mut store = seeded_store(july(1));

        assert!(store.add_ministry("prayers").is_ok());
        assert_eq!(store.ministries().len(), 16);
    }

    #[test]
    fn add_ministry_rejects_all_whitespace_names() {
        let mut store = seeded_store(july(1));

        let err = store.add_ministry("   ").unwrap_err();

        assert_eq!(err, ValidationError::EmptyMinistryName);
        assert_eq!(store.ministries().len(), 15);
    }

    #[test]
    fn by_schedule_sorts_ascending_by_date_and_time() {
        let store = seeded_store(july(1));

        let ids: Vec<i64> = store.by_schedule().iter().map(|e| e.id).collect();

        assert_eq!(ids, vec![1, 3, 2, 4, 5]);
    }

    #[test]
    fn by_schedule_keeps_insertion_order_for_identical_instants() {
        let mut store = empty_store(july(1));
        store
            .add_event(&draft("First", "Prayers", "2024-07-16", "09:00", "Hall"))
            .unwrap();
        store
            .add_event(&draft("Second", "Daybreak", "2024-07-16", "09:00", "Garden"))
            .unwrap();

        let titles: Vec<&str> = store
            .by_schedule()
            .iter()
            .map(|e| e.title.as_str())
            .collect();

        assert_eq!(titles, vec!["First", "Second"]);
    }

    #[test]
    fn unfiltered_view_equals_sorted_view() {
        let store = seeded_store(july(1));

        assert_eq!(store.filtered("", &MinistryFilter::All), store.by_schedule());
    }

    #[test]
    fn search_matches_title_ministry_and_venue() {
        let store = seeded_store(july(1));

        let by_title = store.filtered("debate", &MinistryFilter::All);
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].id, 2);

        let by_ministry = store.filtered("daybreak", &MinistryFilter::All);
        assert_eq!(by_ministry.len(), 1);
        assert_eq!(by_ministry[0].id, 3);

        let by_venue = store.filtered("KIBERA", &MinistryFilter::All);
        assert_eq!(by_venue.len(), 1);
        assert_eq!(by_venue[0].id, 5);
    }

    #[test]
    fn ministry_filter_composes_with_search() {
        let store = seeded_store(july(1));
        let prayers = MinistryFilter::Ministry("Prayers".to_string());

        assert_eq!(store.filtered("", &prayers).len(), 1);
        assert!(store.filtered("debate", &prayers).is_empty());
    }

    #[test]
    fn tomorrow_returns_events_dated_exactly_one_day_ahead() {
        let store = seeded_store(july(14));

        let tomorrow: Vec<i64> = store.happening_tomorrow().iter().map(|e| e.id).collect();

        assert_eq!(tomorrow, vec![1]);
    }

    #[test]
    fn tomorrow_is_empty_when_no_event_matches() {
        let store = seeded_store(july(1));

        assert!(store.happening_tomorrow().is_empty());
    }

    #[test]
    fn stats_aggregate_the_seeded_collection() {
        let store = seeded_store(july(14));

        let stats = store.stats();

        assert_eq!(
            stats,
            DashboardStats {
                upcoming_events: 5,
                total_attendees: 158,
                active_ministries: 5,
                tomorrow_events: 1,
            }
        );
    }

    #[test]
    fn active_ministries_counts_event_ministries_not_the_roster() {
        let mut store = seeded_store(july(1));
        store.add_ministry("Media Team").unwrap();

        // 16 ministries on the roster, still 5 distinct among events.
        assert_eq!(store.stats().active_ministries, 5);
    }

    #[test]
    fn deleting_a_ministrys_only_event_does_not_touch_the_roster() {
        let mut store = seeded_store(july(1));

        store.delete_event(5);

        assert_eq!(store.ministries().len(), 15);
        assert_eq!(store.stats().active_ministries, 4);
    }

    #[test]
    fn adding_to_the_seeded_collection_grows_it_to_six() {
        let mut store = seeded_store(july(1));

        let created = store
            .add_event(&draft("X", "Prayers", "2024-07-16", "09:00", "Hall"))
            .unwrap();

        assert_eq!(store.events().len(), 6);
        assert_eq!(created.attendees, 0);
    }

    fn arbitrary_draft() -> impl Strategy<Value = EventDraft> {
        let titles = prop::sample::select(vec!["Vigil", "Retreat", "Practice", "Outreach"]);
        let ministries = prop::sample::select(vec!["Prayers", "Daybreak", "Missions"]);
        let venues = prop::sample::select(vec!["Hall", "Garden", "Sanctuary"]);
        (titles, ministries, 1u32..28, 0u32..24, venues).prop_map(
            |(title, ministry, day, hour, venue)| {
                draft(
                    title,
                    ministry,
                    &format!("2024-07-{day:02}"),
                    &format!("{hour:02}:00"),
                    venue,
                )
            },
        )
    }

    proptest! {
        #[test]
        fn filtered_with_no_criteria_is_the_sorted_view(drafts in prop::collection::vec(arbitrary_draft(), 0..12)) {
            let mut store = empty_store(july(1));
            for d in &drafts {
                store.add_event(d).unwrap();
            }

            let sorted: Vec<i64> = store.by_schedule().iter().map(|e| e.id).collect();
            let filtered: Vec<i64> = store.filtered("", &MinistryFilter::All).iter().map(|e| e.id).collect();
            prop_assert_eq!(sorted, filtered);
        }

        #[test]
        fn sorted_view_is_ascending_and_stable(drafts in prop::collection::vec(arbitrary_draft(), 0..12)) {
            let mut store = empty_store(july(1));
            for d in &drafts {
                store.add_event(d).unwrap();
            }

            let sorted = store.by_schedule();
            for pair in sorted.windows(2) {
                prop_assert!(pair[0].starts_at() <= pair[1].starts_at());
                if pair[0].starts_at() == pair[1].starts_at() {
                    // Ids grow with insertion order under the fixed clock.
                    prop_assert!(pair[0].id < pair[1].id);
                }
            }
        }
    }
}
