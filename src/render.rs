use crate::{
    family::SizeCategory,
    snapshot::CountdownSnapshot,
    view::{
        CompactView, CountdownColumn, DateFooter, DetailsColumn, Font, Icon, NoDataView,
        StandardView, Symbol, Text, Tint, View, Weight,
    },
};
use chrono::format::{Item, StrftimeItems};
use tracing::warn;

pub const DEFAULT_DATE_FORMAT: &str = "%B %-d, %Y";

const CAPTION: &str = "days to go";
const NO_DATA_MESSAGE: &str = "No Cruise Selected";
const NO_DATA_HINT: &str = "Tap to select a cruise";

/// Builds views from snapshots.
#[derive(Debug, Clone)]
pub struct Renderer {
    date_format: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.into(),
        }
    }
}

impl Renderer {
    /// Uses `date_format` (strftime syntax) for the departure date. A pattern
    /// chrono cannot format falls back to the default.
    pub fn with_date_format(date_format: &str) -> Self {
        if StrftimeItems::new(date_format).any(|item| matches!(item, Item::Error)) {
            warn!(date_format, "invalid date format, using default");
            return Self::default();
        }
        Self {
            date_format: date_format.into(),
        }
    }

    pub fn render(&self, snapshot: &CountdownSnapshot, size: SizeCategory) -> View {
        if !snapshot.has_data {
            return View::NoData(no_data());
        }

        match size {
            SizeCategory::Compact => View::Compact(compact(snapshot)),
            SizeCategory::Standard => View::Standard(self.standard(snapshot)),
        }
    }

    fn standard(&self, snapshot: &CountdownSnapshot) -> StandardView {
        StandardView {
            countdown: CountdownColumn {
                icon: Icon {
                    symbol: Symbol::SailboatFill,
                    size: 20,
                    tint: Tint::Accent,
                },
                days: days(snapshot, Font::rounded(36, Weight::Bold)),
                caption: Text::new(CAPTION, Font::new(14, Weight::Medium), Tint::Secondary),
            },
            details: DetailsColumn {
                event_name: Text::new(
                    &snapshot.event_name,
                    Font::new(16, Weight::Semibold),
                    Tint::Primary,
                )
                .max_lines(2),
                vehicle_name: Text::new(
                    &snapshot.vehicle_name,
                    Font::new(14, Weight::Medium),
                    Tint::Secondary,
                )
                .max_lines(1),
                destination: Text::new(
                    &snapshot.destination,
                    Font::new(13, Weight::Regular),
                    Tint::Secondary,
                )
                .max_lines(2),
                footer: DateFooter {
                    icon: Icon {
                        symbol: Symbol::Calendar,
                        size: 12,
                        tint: Tint::Accent,
                    },
                    date: Text::new(
                        snapshot.departure.format(&self.date_format).to_string(),
                        Font::new(12, Weight::Medium),
                        Tint::Secondary,
                    ),
                },
            },
            spacing: 16,
            padding: 16,
        }
    }
}

/// Renders with the default date format.
pub fn render(snapshot: &CountdownSnapshot, size: SizeCategory) -> View {
    Renderer::default().render(snapshot, size)
}

fn days(snapshot: &CountdownSnapshot, font: Font) -> Text {
    Text::new(snapshot.days_remaining.to_string(), font, Tint::Accent)
}

fn no_data() -> NoDataView {
    NoDataView {
        icon: Icon {
            symbol: Symbol::Sailboat,
            size: 24,
            tint: Tint::Secondary,
        },
        message: Text::new(NO_DATA_MESSAGE, Font::new(14, Weight::Medium), Tint::Secondary)
            .centered(),
        hint: Text::new(NO_DATA_HINT, Font::new(11, Weight::Regular), Tint::Secondary).centered(),
        spacing: 8,
        padding: 12,
    }
}

fn compact(snapshot: &CountdownSnapshot) -> CompactView {
    CompactView {
        icon: Icon {
            symbol: Symbol::SailboatFill,
            size: 16,
            tint: Tint::Accent,
        },
        days: days(snapshot, Font::rounded(24, Weight::Bold)),
        caption: Text::new(CAPTION, Font::new(12, Weight::Medium), Tint::Secondary),
        event_name: Text::new(
            &snapshot.event_name,
            Font::new(14, Weight::Semibold),
            Tint::Primary,
        )
        .max_lines(2)
        .centered(),
        vehicle_name: Text::new(
            &snapshot.vehicle_name,
            Font::new(12, Weight::Medium),
            Tint::Secondary,
        )
        .max_lines(1),
        destination: Text::new(
            &snapshot.destination,
            Font::new(11, Weight::Regular),
            Tint::Secondary,
        )
        .max_lines(1),
        spacing: 8,
        padding: 12,
    }
}
