//! Turns the shared defaults written by the host application into a
//! [`CountdownSnapshot`].
//!
//! Reading never fails. Every field falls back to its default on its own when
//! it is absent or holds something unusable, and a suite that cannot be read
//! at all reads as "no data".

use crate::{
    defaults::{Defaults, SharedDefaults},
    snapshot::CountdownSnapshot,
};
use chrono::{DateTime, FixedOffset, Utc};
use toml::Value;
use tracing::{debug, warn};

/// Field names published by the host application.
pub mod keys {
    pub const HAS_DATA: &str = "has_data";
    pub const CRUISE_NAME: &str = "cruise_name";
    pub const SHIP_NAME: &str = "ship_name";
    pub const DESTINATION: &str = "destination";
    pub const DEPARTURE_DATE: &str = "departure_date";
    pub const DAYS_REMAINING: &str = "days_remaining";
}

/// Anything that can hand out the current contents of a defaults suite.
pub trait DefaultsSource {
    fn current(&self) -> Defaults;
}

impl DefaultsSource for SharedDefaults {
    fn current(&self) -> Defaults {
        self.snapshot()
    }
}

impl DefaultsSource for Defaults {
    fn current(&self) -> Defaults {
        self.clone()
    }
}

pub struct SnapshotReader<S> {
    source: S,
}

impl<S: DefaultsSource> SnapshotReader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn read_snapshot(&self) -> CountdownSnapshot {
        self.read_snapshot_at(Utc::now())
    }

    /// Reads with `now` standing in for the current time.
    pub fn read_snapshot_at(&self, now: DateTime<Utc>) -> CountdownSnapshot {
        snapshot_from_defaults(&self.source.current(), now)
    }
}

pub fn snapshot_from_defaults(defaults: &Defaults, now: DateTime<Utc>) -> CountdownSnapshot {
    if !defaults.bool(keys::HAS_DATA).unwrap_or(false) {
        debug!("no cruise published");
        return CountdownSnapshot::no_data(now);
    }

    let departure = parse_departure(defaults.get(keys::DEPARTURE_DATE)).unwrap_or_else(|| {
        warn!("missing or invalid departure date, using current time");
        now.into()
    });

    let snapshot = CountdownSnapshot {
        as_of: now,
        event_name: text(defaults, keys::CRUISE_NAME),
        vehicle_name: text(defaults, keys::SHIP_NAME),
        destination: text(defaults, keys::DESTINATION),
        departure,
        days_remaining: days_remaining(defaults),
        has_data: true,
    };
    debug!(%snapshot, "read countdown snapshot");

    snapshot
}

fn text(defaults: &Defaults, key: &str) -> String {
    defaults.string(key).unwrap_or_default().to_owned()
}

fn days_remaining(defaults: &Defaults) -> u32 {
    match defaults.integer(keys::DAYS_REMAINING) {
        Some(days) => u32::try_from(days).unwrap_or_else(|_| {
            warn!(days, "days remaining out of range, using 0");
            0
        }),
        None => 0,
    }
}

/// Accepts an internet date-time string, or a native TOML datetime that
/// carries a full date, time and offset.
fn parse_departure(value: Option<&Value>) -> Option<DateTime<FixedOffset>> {
    match value? {
        Value::String(s) => parse_internet_date_time(s),
        Value::Datetime(dt) => parse_internet_date_time(&dt.to_string()),
        _ => None,
    }
}

/// RFC 3339 restricted to the ISO 8601 combined form: an uppercase `T`
/// between date and time and an uppercase `Z` for UTC.
fn parse_internet_date_time(s: &str) -> Option<DateTime<FixedOffset>> {
    if s.as_bytes().get(10) != Some(&b'T') || s.ends_with('z') {
        return None;
    }
    DateTime::parse_from_rfc3339(s).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn published() -> Defaults {
        let mut defaults = Defaults::new();
        defaults.set(keys::HAS_DATA, true);
        defaults.set(keys::CRUISE_NAME, "7-Day Caribbean Cruise");
        defaults.set(keys::SHIP_NAME, "Norwegian Aqua");
        defaults.set(keys::DESTINATION, "Miami to Caribbean");
        defaults.set(keys::DEPARTURE_DATE, "2025-09-07T00:00:00Z");
        defaults.set(keys::DAYS_REMAINING, 15i64);
        defaults
    }

    #[test]
    fn test_empty_suite_has_no_data() {
        let now = Utc::now();
        let snapshot = SnapshotReader::new(Defaults::new()).read_snapshot_at(now);

        assert_eq!(snapshot, CountdownSnapshot::no_data(now));
    }

    #[test]
    fn test_has_data_false_ignores_fields() {
        let mut defaults = published();
        defaults.set(keys::HAS_DATA, false);
        let now = Utc::now();

        let snapshot = SnapshotReader::new(defaults).read_snapshot_at(now);

        assert!(!snapshot.has_data);
        assert!(snapshot.event_name.is_empty());
        assert_eq!(snapshot.days_remaining, 0);
    }

    #[test]
    fn test_has_data_wrong_type_has_no_data() {
        let mut defaults = published();
        defaults.set(keys::HAS_DATA, "true");

        let snapshot = SnapshotReader::new(defaults).read_snapshot();

        assert!(!snapshot.has_data);
    }

    #[test]
    fn test_fields_round_trip() {
        let now = Utc::now();
        let snapshot = SnapshotReader::new(published()).read_snapshot_at(now);

        assert!(snapshot.has_data);
        assert_eq!(snapshot.as_of, now);
        assert_eq!(snapshot.event_name, "7-Day Caribbean Cruise");
        assert_eq!(snapshot.vehicle_name, "Norwegian Aqua");
        assert_eq!(snapshot.destination, "Miami to Caribbean");
        assert_eq!(snapshot.departure, Utc.with_ymd_and_hms(2025, 9, 7, 0, 0, 0).unwrap());
        assert_eq!(snapshot.days_remaining, 15);
    }

    #[test]
    fn test_departure_keeps_offset() {
        let mut defaults = published();
        defaults.set(keys::DEPARTURE_DATE, "2025-09-07T08:30:00-04:00");

        let snapshot = SnapshotReader::new(defaults).read_snapshot();

        assert_eq!(snapshot.departure.offset().local_minus_utc(), -4 * 3600);
        assert_eq!(snapshot.departure.to_rfc3339(), "2025-09-07T08:30:00-04:00");
    }

    #[test]
    fn test_unparseable_departure_is_now() {
        let now = Utc::now();
        for bad in [
            "next tuesday",
            "2025-09-07",
            "2025-09-07 00:00:00",
            "2025-09-07 00:00:00Z",
            "2025-09-07t00:00:00Z",
            "2025-09-07T00:00:00z",
            "2025-09-07T00:00:00",
            "",
        ] {
            let mut defaults = published();
            defaults.set(keys::DEPARTURE_DATE, bad);

            let snapshot = SnapshotReader::new(defaults).read_snapshot_at(now);

            assert!(snapshot.has_data);
            assert_eq!(snapshot.departure, now);
        }
    }

    #[test]
    fn test_departure_with_fraction_and_offset() {
        let mut defaults = published();
        defaults.set(keys::DEPARTURE_DATE, "2025-09-07T00:00:00.250+02:00");

        let snapshot = SnapshotReader::new(defaults).read_snapshot();

        assert_eq!(snapshot.departure.timestamp_millis() % 1000, 250);
        assert_eq!(snapshot.departure.offset().local_minus_utc(), 2 * 3600);
    }

    #[test]
    fn test_missing_departure_is_now() {
        let mut defaults = published();
        defaults.remove(keys::DEPARTURE_DATE);

        let before = Utc::now();
        let snapshot = SnapshotReader::new(defaults).read_snapshot();
        let after = Utc::now();

        let departure = snapshot.departure.with_timezone(&Utc);
        assert!(departure >= before && departure <= after);
    }

    #[test]
    fn test_missing_fields_default_independently() {
        let mut defaults = Defaults::new();
        defaults.set(keys::HAS_DATA, true);
        defaults.set(keys::SHIP_NAME, "Norwegian Aqua");

        let snapshot = SnapshotReader::new(defaults).read_snapshot();

        assert!(snapshot.has_data);
        assert_eq!(snapshot.vehicle_name, "Norwegian Aqua");
        assert_eq!(snapshot.event_name, "");
        assert_eq!(snapshot.destination, "");
        assert_eq!(snapshot.days_remaining, 0);
    }

    #[test]
    fn test_days_remaining_out_of_range_is_zero() {
        for bad in [-3i64, i64::from(u32::MAX) + 1] {
            let mut defaults = published();
            defaults.set(keys::DAYS_REMAINING, bad);

            assert_eq!(SnapshotReader::new(defaults).read_snapshot().days_remaining, 0);
        }

        let mut defaults = published();
        defaults.set(keys::DAYS_REMAINING, "15");
        assert_eq!(SnapshotReader::new(defaults).read_snapshot().days_remaining, 0);
    }

    #[test]
    fn test_native_toml_datetime() {
        let table: toml::value::Table = toml::from_str(
            r#"
            has_data = true
            departure_date = 2025-09-07T00:00:00Z
            "#,
        )
        .unwrap();

        let snapshot = SnapshotReader::new(Defaults::from(table)).read_snapshot();

        assert_eq!(snapshot.departure, Utc.with_ymd_and_hms(2025, 9, 7, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_reads_shared_suite() {
        let dir = tempfile::tempdir().unwrap();
        let shared = SharedDefaults::open(dir.path(), "group.test").unwrap();
        shared.save(&published()).unwrap();

        let snapshot = SnapshotReader::new(shared).read_snapshot();

        assert!(snapshot.has_data);
        assert_eq!(snapshot.days_remaining, 15);
    }
}
