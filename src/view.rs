//! Declarative description of what the widget shows.
//!
//! A [`View`] names every element, its styling and the most lines each text
//! may occupy. Drawing it (wrapping, ellipsis, colors) is up to whoever
//! displays it.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Symbol {
    Sailboat,
    SailboatFill,
    Calendar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Weight {
    Regular,
    Medium,
    Semibold,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Design {
    Default,
    Rounded,
}

/// Semantic foreground color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tint {
    Primary,
    Secondary,
    Accent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Alignment {
    Leading,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Font {
    pub size: u16,
    pub weight: Weight,
    pub design: Design,
}

impl Font {
    pub const fn new(size: u16, weight: Weight) -> Self {
        Self {
            size,
            weight,
            design: Design::Default,
        }
    }

    pub const fn rounded(size: u16, weight: Weight) -> Self {
        Self {
            size,
            weight,
            design: Design::Rounded,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Icon {
    pub symbol: Symbol,
    pub size: u16,
    pub tint: Tint,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Text {
    pub content: String,
    pub font: Font,
    pub tint: Tint,
    /// `None` means unlimited.
    pub max_lines: Option<u8>,
    pub alignment: Alignment,
}

impl Text {
    pub fn new<S: Into<String>>(content: S, font: Font, tint: Tint) -> Self {
        Self {
            content: content.into(),
            font,
            tint,
            max_lines: None,
            alignment: Alignment::Leading,
        }
    }

    pub fn max_lines(mut self, lines: u8) -> Self {
        self.max_lines = Some(lines);
        self
    }

    pub fn centered(mut self) -> Self {
        self.alignment = Alignment::Center;
        self
    }
}

/// Shown while no cruise has been selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoDataView {
    pub icon: Icon,
    pub message: Text,
    pub hint: Text,
    pub spacing: u16,
    pub padding: u16,
}

/// Single column: icon and count on one row, then caption and details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompactView {
    pub icon: Icon,
    pub days: Text,
    pub caption: Text,
    pub event_name: Text,
    pub vehicle_name: Text,
    pub destination: Text,
    pub spacing: u16,
    pub padding: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountdownColumn {
    pub icon: Icon,
    pub days: Text,
    pub caption: Text,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateFooter {
    pub icon: Icon,
    pub date: Text,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailsColumn {
    pub event_name: Text,
    pub vehicle_name: Text,
    pub destination: Text,
    pub footer: DateFooter,
}

/// Two columns: countdown on the left, trip details on the right.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandardView {
    pub countdown: CountdownColumn,
    pub details: DetailsColumn,
    pub spacing: u16,
    pub padding: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "layout", rename_all = "kebab-case")]
pub enum View {
    NoData(NoDataView),
    Compact(CompactView),
    Standard(StandardView),
}

impl View {
    /// Every text element in reading order.
    pub fn texts(&self) -> Vec<&Text> {
        match self {
            View::NoData(view) => vec![&view.message, &view.hint],
            View::Compact(view) => vec![
                &view.days,
                &view.caption,
                &view.event_name,
                &view.vehicle_name,
                &view.destination,
            ],
            View::Standard(view) => vec![
                &view.countdown.days,
                &view.countdown.caption,
                &view.details.event_name,
                &view.details.vehicle_name,
                &view.details.destination,
                &view.details.footer.date,
            ],
        }
    }

    pub fn padding(&self) -> u16 {
        match self {
            View::NoData(view) => view.padding,
            View::Compact(view) => view.padding,
            View::Standard(view) => view.padding,
        }
    }
}
