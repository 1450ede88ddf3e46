use crate::{
    reader::{DefaultsSource, SnapshotReader},
    snapshot::CountdownSnapshot,
};
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// When the host should ask for a new timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReloadPolicy {
    /// Once the last entry's date has passed.
    AtEnd,
    After(DateTime<Utc>),
    Never,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timeline {
    pub entries: Vec<CountdownSnapshot>,
    pub policy: ReloadPolicy,
}

impl Timeline {
    pub fn current(&self) -> Option<&CountdownSnapshot> {
        self.entries.first()
    }

    pub fn next_reload(&self) -> Option<DateTime<Utc>> {
        match self.policy {
            ReloadPolicy::AtEnd => self.entries.last().map(|entry| entry.as_of),
            ReloadPolicy::After(date) => Some(date),
            ReloadPolicy::Never => None,
        }
    }

    /// The time to poll again after polling at `last_poll`: no sooner than the
    /// reload date and no sooner than `min_interval` after the last poll.
    pub fn next_poll(
        &self,
        last_poll: DateTime<Utc>,
        min_interval: Duration,
    ) -> Option<DateTime<Utc>> {
        let reload = self.next_reload()?;
        let earliest = last_poll
            .checked_add_signed(min_interval)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        Some(reload.max(earliest))
    }
}

/// Entry points the widget host calls.
pub struct Provider<S> {
    reader: SnapshotReader<S>,
}

impl<S: DefaultsSource> Provider<S> {
    pub fn new(source: S) -> Self {
        Self {
            reader: SnapshotReader::new(source),
        }
    }

    /// Example entry shown before any real read completes. Never touches
    /// storage.
    pub fn placeholder(&self, now: DateTime<Utc>) -> CountdownSnapshot {
        CountdownSnapshot::placeholder(now)
    }

    pub fn snapshot(&self) -> CountdownSnapshot {
        self.reader.read_snapshot()
    }

    pub fn timeline(&self) -> Timeline {
        self.timeline_at(Utc::now())
    }

    pub fn timeline_at(&self, now: DateTime<Utc>) -> Timeline {
        Timeline {
            entries: vec![self.reader.read_snapshot_at(now)],
            policy: ReloadPolicy::AtEnd,
        }
    }
}
