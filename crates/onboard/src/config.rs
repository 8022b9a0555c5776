//! Lookup tables that drive device classification.
//!
//! Onboarding codes carry no device-type field, so the category is guessed
//! from vendor and product ids. The tables are plain data: callers can
//! deserialize their own from any serde format and build a
//! [`crate::Classifier`] from them.

use serde::{Deserialize, Serialize};

use crate::DeviceCategory;

/// A known vendor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorEntry {
    pub id: u16,
    pub name: String,
    /// Device types the vendor is known for, most common first. Only the
    /// first is used. An empty list defers to the product-id ranges.
    #[serde(default)]
    pub common_types: Vec<DeviceCategory>,
}

/// Inclusive product-id range mapped to a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRange {
    pub start: u16,
    pub end: u16,
    pub category: DeviceCategory,
}

impl ProductRange {
    pub fn contains(&self, product_id: u16) -> bool {
        (self.start..=self.end).contains(&product_id)
    }
}

/// Exact (vendor, product) pair with a known category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownProduct {
    pub vendor_id: u16,
    pub product_id: u16,
    pub category: DeviceCategory,
}

/// Display-name override for a vendor that has no table entry.
///
/// Only [`crate::Classifier::vendor_name`] reads these. Classification and
/// aliases treat the vendor as unknown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorName {
    pub id: u16,
    pub name: String,
}

/// Classification tables. Missing sections deserialize as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub vendors: Vec<VendorEntry>,
    pub product_ranges: Vec<ProductRange>,
    pub known_products: Vec<KnownProduct>,
    pub vendor_names: Vec<VendorName>,
}

impl ClassifierConfig {
    /// The tables shipped with the crate.
    pub fn builtin() -> Self {
        use DeviceCategory::*;

        let vendor = |id: u16, name: &str, common_types: &[DeviceCategory]| VendorEntry {
            id,
            name: name.to_string(),
            common_types: common_types.to_vec(),
        };
        let range = |start: u16, category: DeviceCategory| ProductRange {
            start,
            end: start | 0x00FF,
            category,
        };

        Self {
            vendors: vec![
                vendor(0x1037, "Apple", &[Light, Switch, Sensor]),
                vendor(0x1049, "Google", &[Speaker, Thermostat, Camera]),
                vendor(0x117C, "Samsung", &[Light, Switch, Outlet]),
                vendor(0x1344, "Philips", &[Light]),
                vendor(0x100B, "Amazon", &[Speaker, Switch, Outlet]),
                vendor(0x131B, "Xiaomi", &[Light, Sensor, Switch]),
                vendor(0x1217, "TP-Link", &[Outlet, Switch, Light]),
                vendor(0x1234, "Generic", &[Other]),
            ],
            product_ranges: vec![
                range(0x0100, Light),
                range(0x0200, Switch),
                range(0x0300, Sensor),
                range(0x0400, Outlet),
                range(0x0500, Thermostat),
                range(0x0600, Lock),
                range(0x0700, Camera),
                range(0x0800, Speaker),
            ],
            known_products: vec![KnownProduct {
                vendor_id: 0x1188,
                product_id: 0x0101,
                category: Light,
            }],
            // Test vendor used by the reference payload.
            vendor_names: vec![VendorName {
                id: 0x1188,
                name: "Test Vendor (4488)".to_string(),
            }],
        }
    }
}
