use cruise_countdown::{CountdownSnapshot, Timeline, WidgetDescriptor};
use std::fmt;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct SnapshotInfo {
    #[tabled(rename = "CRUISE")]
    event_name: String,
    #[tabled(rename = "SHIP")]
    vehicle_name: String,
    #[tabled(rename = "DESTINATION")]
    destination: String,
    #[tabled(rename = "DEPARTURE")]
    departure: String,
    #[tabled(rename = "DAYS")]
    days_remaining: u32,
    #[tabled(rename = "AS-OF")]
    as_of: String,
}

impl From<&CountdownSnapshot> for SnapshotInfo {
    fn from(snapshot: &CountdownSnapshot) -> Self {
        Self {
            event_name: snapshot.event_name.clone(),
            vehicle_name: snapshot.vehicle_name.clone(),
            destination: snapshot.destination.clone(),
            departure: snapshot.departure.to_rfc3339(),
            days_remaining: snapshot.days_remaining,
            as_of: snapshot.as_of.to_rfc3339(),
        }
    }
}

pub struct SnapshotTable {
    table: Option<Table>,
}

impl SnapshotTable {
    pub fn new(snapshot: &CountdownSnapshot) -> Self {
        Self::from_entries(std::slice::from_ref(snapshot))
    }

    pub fn from_timeline(timeline: &Timeline) -> Self {
        Self::from_entries(&timeline.entries)
    }

    /// Entries without data are left out.
    fn from_entries(entries: &[CountdownSnapshot]) -> Self {
        let rows = entries
            .iter()
            .filter(|snapshot| snapshot.has_data)
            .map(SnapshotInfo::from)
            .collect::<Vec<_>>();

        if rows.is_empty() {
            return Self { table: None };
        }

        let mut table = Table::new(rows);
        table.with(Style::blank());
        Self { table: Some(table) }
    }
}

impl fmt::Display for SnapshotTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.table {
            Some(table) => write!(f, "{}", table),
            None => write!(f, "no cruise selected"),
        }
    }
}

#[derive(Tabled)]
struct DescriptorInfo {
    #[tabled(rename = "KIND")]
    kind: &'static str,
    #[tabled(rename = "NAME")]
    display_name: &'static str,
    #[tabled(rename = "FAMILIES")]
    families: String,
    #[tabled(rename = "DESCRIPTION")]
    description: &'static str,
}

pub struct DescriptorTable {
    table: Table,
}

impl DescriptorTable {
    pub fn new(descriptor: &WidgetDescriptor) -> Self {
        let mut table = Table::new([DescriptorInfo {
            kind: descriptor.kind,
            display_name: descriptor.display_name,
            families: descriptor
                .supported_families
                .iter()
                .map(|family| family.name())
                .collect::<Vec<_>>()
                .join(", "),
            description: descriptor.description,
        }]);
        table.with(Style::blank());
        Self { table }
    }
}

impl fmt::Display for DescriptorTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.table)
    }
}
