use chrono::{DateTime, Duration, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

const PLACEHOLDER_EVENT_NAME: &str = "Caribbean Cruise";
const PLACEHOLDER_VEHICLE_NAME: &str = "Norwegian Aqua";
const PLACEHOLDER_DESTINATION: &str = "Miami to Caribbean";
const PLACEHOLDER_DAYS_REMAINING: u32 = 15;

/// Countdown state at one point in time.
///
/// When `has_data` is false the remaining business fields carry no meaning
/// and must not be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CountdownSnapshot {
    pub as_of: DateTime<Utc>,
    pub event_name: String,
    pub vehicle_name: String,
    pub destination: String,
    pub departure: DateTime<FixedOffset>,
    pub days_remaining: u32,
    pub has_data: bool,
}

impl CountdownSnapshot {
    /// The "nothing selected yet" snapshot.
    pub fn no_data(now: DateTime<Utc>) -> Self {
        Self {
            as_of: now,
            event_name: String::new(),
            vehicle_name: String::new(),
            destination: String::new(),
            departure: now.into(),
            days_remaining: 0,
            has_data: false,
        }
    }

    /// Representative example values shown before any real read completes.
    pub fn placeholder(now: DateTime<Utc>) -> Self {
        Self {
            as_of: now,
            event_name: PLACEHOLDER_EVENT_NAME.into(),
            vehicle_name: PLACEHOLDER_VEHICLE_NAME.into(),
            destination: PLACEHOLDER_DESTINATION.into(),
            departure: (now + Duration::days(PLACEHOLDER_DAYS_REMAINING.into())).into(),
            days_remaining: PLACEHOLDER_DAYS_REMAINING,
            has_data: true,
        }
    }
}

impl fmt::Display for CountdownSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.has_data {
            return write!(f, "no cruise selected");
        }
        write!(
            f,
            "{} (ship: {}, destination: {}, days to go: {})",
            self.event_name, self.vehicle_name, self.destination, self.days_remaining
        )
    }
}
