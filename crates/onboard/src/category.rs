//! Device categories and their display metadata.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned when a tag names no [`DeviceCategory`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown device category {0:?}")]
pub struct UnknownCategory(pub String);

/// Coarse device category inferred from vendor and product ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceCategory {
    Light,
    Switch,
    Sensor,
    Outlet,
    Thermostat,
    Lock,
    Camera,
    Speaker,
    Other,
}

impl DeviceCategory {
    pub const ALL: [DeviceCategory; 9] = [
        DeviceCategory::Light,
        DeviceCategory::Switch,
        DeviceCategory::Sensor,
        DeviceCategory::Outlet,
        DeviceCategory::Thermostat,
        DeviceCategory::Lock,
        DeviceCategory::Camera,
        DeviceCategory::Speaker,
        DeviceCategory::Other,
    ];

    /// Lowercase tag, e.g. `"light"`.
    pub fn tag(self) -> &'static str {
        match self {
            DeviceCategory::Light => "light",
            DeviceCategory::Switch => "switch",
            DeviceCategory::Sensor => "sensor",
            DeviceCategory::Outlet => "outlet",
            DeviceCategory::Thermostat => "thermostat",
            DeviceCategory::Lock => "lock",
            DeviceCategory::Camera => "camera",
            DeviceCategory::Speaker => "speaker",
            DeviceCategory::Other => "other",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        tag.parse().ok()
    }

    /// Display metadata for this category.
    pub fn info(self) -> DeviceTypeInfo {
        let (group, icon, label) = match self {
            DeviceCategory::Light => ("Lighting", "lightbulb", "Smart Light"),
            DeviceCategory::Switch => ("Control", "toggle_on", "Smart Switch"),
            DeviceCategory::Sensor => ("Sensing", "sensors", "Sensor"),
            DeviceCategory::Outlet => ("Power", "power", "Smart Outlet"),
            DeviceCategory::Thermostat => ("Climate", "thermostat", "Thermostat"),
            DeviceCategory::Lock => ("Security", "lock", "Smart Lock"),
            DeviceCategory::Camera => ("Security", "videocam", "Security Camera"),
            DeviceCategory::Speaker => ("Audio", "speaker", "Smart Speaker"),
            DeviceCategory::Other => ("Other", "device_hub", "Other Device"),
        };
        DeviceTypeInfo {
            category: self,
            group,
            icon,
            label,
        }
    }
}

impl fmt::Display for DeviceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for DeviceCategory {
    type Err = UnknownCategory;

    /// Parses a lowercase tag such as `"light"`. Matching is case-sensitive.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.tag() == tag)
            .ok_or_else(|| UnknownCategory(tag.to_string()))
    }
}

/// Static display metadata for a [`DeviceCategory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeviceTypeInfo {
    pub category: DeviceCategory,
    /// Broader grouping shown in device lists, e.g. `"Security"`.
    pub group: &'static str,
    /// Icon identifier for the UI icon set.
    pub icon: &'static str,
    pub label: &'static str,
}

impl DeviceTypeInfo {
    /// Looks up metadata by tag. Unknown tags get the `other` entry.
    pub fn for_tag(tag: &str) -> Self {
        DeviceCategory::from_tag(tag)
            .unwrap_or(DeviceCategory::Other)
            .info()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip() {
        for category in DeviceCategory::ALL {
            assert_eq!(DeviceCategory::from_tag(category.tag()), Some(category));
            assert_eq!(category.to_string(), category.tag());
        }
        assert_eq!(DeviceCategory::from_tag("Light"), None);
    }

    #[test]
    fn parses_tags() {
        for category in DeviceCategory::ALL {
            assert_eq!(category.tag().parse::<DeviceCategory>(), Ok(category));
        }
        assert_eq!("speaker".parse::<DeviceCategory>(), Ok(DeviceCategory::Speaker));
    }

    #[test]
    fn parse_rejects_unknown_and_mixed_case() {
        assert_eq!(
            "toaster".parse::<DeviceCategory>(),
            Err(UnknownCategory("toaster".to_string()))
        );
        assert!("Light".parse::<DeviceCategory>().is_err());
        assert!("".parse::<DeviceCategory>().is_err());
        assert_eq!(
            UnknownCategory("toaster".into()).to_string(),
            "unknown device category \"toaster\""
        );
    }

    #[test]
    fn info_for_unknown_tag_is_other() {
        let info = DeviceTypeInfo::for_tag("toaster");
        assert_eq!(info.category, DeviceCategory::Other);
        assert_eq!(info.icon, "device_hub");
        assert_eq!(DeviceTypeInfo::for_tag("camera").label, "Security Camera");
    }
}
