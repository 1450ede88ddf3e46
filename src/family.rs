use serde::{Deserialize, Serialize};
use std::{convert::Infallible, fmt, str::FromStr};

/// Display size the widget host asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetFamily {
    Small,
    Medium,
    Large,
    ExtraLarge,
    AccessoryCircular,
    AccessoryRectangular,
    AccessoryInline,
}

impl WidgetFamily {
    pub const ALL: [WidgetFamily; 7] = [
        WidgetFamily::Small,
        WidgetFamily::Medium,
        WidgetFamily::Large,
        WidgetFamily::ExtraLarge,
        WidgetFamily::AccessoryCircular,
        WidgetFamily::AccessoryRectangular,
        WidgetFamily::AccessoryInline,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            WidgetFamily::Small => "small",
            WidgetFamily::Medium => "medium",
            WidgetFamily::Large => "large",
            WidgetFamily::ExtraLarge => "extra-large",
            WidgetFamily::AccessoryCircular => "accessory-circular",
            WidgetFamily::AccessoryRectangular => "accessory-rectangular",
            WidgetFamily::AccessoryInline => "accessory-inline",
        }
    }

    /// Looks a family up by name. Case, separators and a leading `system`
    /// are ignored, so `systemMedium`, `system-medium` and `MEDIUM` all match.
    pub fn lookup(name: &str) -> Option<Self> {
        let normalized: String = name
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let normalized = normalized.strip_prefix("system").unwrap_or(&normalized);

        Self::ALL
            .into_iter()
            .find(|family| family.name().replace('-', "") == normalized)
    }
}

impl fmt::Display for WidgetFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Layout class a view is rendered for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SizeCategory {
    #[default]
    Compact,
    Standard,
}

impl From<WidgetFamily> for SizeCategory {
    fn from(family: WidgetFamily) -> Self {
        match family {
            WidgetFamily::Medium => SizeCategory::Standard,
            _ => SizeCategory::Compact,
        }
    }
}

/// Unknown names fall back to [`SizeCategory::Compact`].
impl FromStr for SizeCategory {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(WidgetFamily::lookup(s).map(Self::from).unwrap_or_default())
    }
}

/// Static description of the widget, as registered with the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetDescriptor {
    pub kind: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub supported_families: &'static [WidgetFamily],
}

pub const COUNTDOWN_WIDGET: WidgetDescriptor = WidgetDescriptor {
    kind: "CountdownWidget",
    display_name: "Cruise Countdown",
    description: "Shows countdown to your next cruise departure.",
    supported_families: &[WidgetFamily::Small, WidgetFamily::Medium],
};

impl WidgetDescriptor {
    pub fn supports(&self, family: WidgetFamily) -> bool {
        self.supported_families.contains(&family)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_medium_is_standard() {
        for family in WidgetFamily::ALL {
            let expected = if family == WidgetFamily::Medium {
                SizeCategory::Standard
            } else {
                SizeCategory::Compact
            };
            assert_eq!(SizeCategory::from(family), expected, "{family}");
        }
    }

    #[test]
    fn test_lookup_host_names() {
        assert_eq!(WidgetFamily::lookup("systemMedium"), Some(WidgetFamily::Medium));
        assert_eq!(WidgetFamily::lookup("system-small"), Some(WidgetFamily::Small));
        assert_eq!(WidgetFamily::lookup("EXTRA_LARGE"), Some(WidgetFamily::ExtraLarge));
        assert_eq!(
            WidgetFamily::lookup("accessoryInline"),
            Some(WidgetFamily::AccessoryInline)
        );
        assert_eq!(WidgetFamily::lookup("jumbo"), None);
    }

    #[test]
    fn test_unknown_size_falls_back_to_compact() {
        assert_eq!("jumbo".parse::<SizeCategory>(), Ok(SizeCategory::Compact));
        assert_eq!("".parse::<SizeCategory>(), Ok(SizeCategory::Compact));
        assert_eq!("medium".parse::<SizeCategory>(), Ok(SizeCategory::Standard));
    }

    #[test]
    fn test_descriptor_supports_small_and_medium() {
        assert!(COUNTDOWN_WIDGET.supports(WidgetFamily::Small));
        assert!(COUNTDOWN_WIDGET.supports(WidgetFamily::Medium));
        assert!(!COUNTDOWN_WIDGET.supports(WidgetFamily::Large));
    }
}
