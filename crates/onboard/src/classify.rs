//! Heuristic device classification.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Serialize;
use tracing::debug;

use crate::config::{ClassifierConfig, ProductRange, VendorEntry};
use crate::DeviceCategory;

/// Which lookup produced a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchRule {
    KnownProduct,
    Vendor,
    ProductRange,
    Fallback,
}

/// Result of [`Classifier::classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeviceClassification {
    pub category: DeviceCategory,
    pub group: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
    pub rule: MatchRule,
}

impl DeviceClassification {
    fn new(category: DeviceCategory, rule: MatchRule) -> Self {
        let info = category.info();
        Self {
            category,
            group: info.group,
            icon: info.icon,
            label: info.label,
            rule,
        }
    }
}

/// Typed lookup tables built from a [`ClassifierConfig`].
///
/// Classification is total: every id pair maps to exactly one category.
#[derive(Debug, Clone)]
pub struct Classifier {
    vendors: HashMap<u16, VendorEntry>,
    known_products: HashMap<(u16, u16), DeviceCategory>,
    product_ranges: Vec<ProductRange>,
    vendor_names: HashMap<u16, String>,
}

impl Classifier {
    /// Builds a classifier. A vendor or product listed twice keeps its last
    /// entry; overlapping ranges resolve to the first listed.
    pub fn new(config: ClassifierConfig) -> Self {
        let vendors = config.vendors.into_iter().map(|v| (v.id, v)).collect();
        let known_products = config
            .known_products
            .into_iter()
            .map(|p| ((p.vendor_id, p.product_id), p.category))
            .collect();
        let vendor_names = config
            .vendor_names
            .into_iter()
            .map(|v| (v.id, v.name))
            .collect();
        Self {
            vendors,
            known_products,
            product_ranges: config.product_ranges,
            vendor_names,
        }
    }

    /// Shared classifier over [`ClassifierConfig::builtin`].
    pub fn builtin() -> &'static Classifier {
        static BUILTIN: OnceLock<Classifier> = OnceLock::new();
        BUILTIN.get_or_init(|| Classifier::new(ClassifierConfig::builtin()))
    }

    pub fn vendor(&self, vendor_id: u16) -> Option<&VendorEntry> {
        self.vendors.get(&vendor_id)
    }

    /// Guesses the device category.
    ///
    /// Lookup order: exact (vendor, product) pair, then the vendor's first
    /// common type, then the product-id ranges, then `Other`.
    pub fn classify(&self, vendor_id: u16, product_id: u16) -> DeviceClassification {
        let (category, rule) = self.lookup(vendor_id, product_id);
        debug!(vendor_id, product_id, category = %category, rule = ?rule, "classified device");
        DeviceClassification::new(category, rule)
    }

    fn lookup(&self, vendor_id: u16, product_id: u16) -> (DeviceCategory, MatchRule) {
        if let Some(&category) = self.known_products.get(&(vendor_id, product_id)) {
            return (category, MatchRule::KnownProduct);
        }
        if let Some(&category) = self
            .vendors
            .get(&vendor_id)
            .and_then(|v| v.common_types.first())
        {
            return (category, MatchRule::Vendor);
        }
        if let Some(range) = self.product_ranges.iter().find(|r| r.contains(product_id)) {
            return (range.category, MatchRule::ProductRange);
        }
        (DeviceCategory::Other, MatchRule::Fallback)
    }

    /// Display name of a vendor, or `Unknown (0xHEX)`. Name-only overrides
    /// take precedence over the vendor table.
    pub fn vendor_name(&self, vendor_id: u16) -> String {
        if let Some(name) = self.vendor_names.get(&vendor_id) {
            return name.clone();
        }
        match self.vendors.get(&vendor_id) {
            Some(v) => v.name.clone(),
            None => format!("Unknown (0x{vendor_id:X})"),
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Classifier::new(ClassifierConfig::builtin())
    }
}

/// Classifies with the built-in tables. See [`Classifier::classify`].
///
/// ```
/// use mt_onboard::{classify_device, DeviceCategory};
///
/// assert_eq!(classify_device(0x1344, 0x9999).category, DeviceCategory::Light);
/// assert_eq!(classify_device(0xFFF1, 0x0605).category, DeviceCategory::Lock);
/// assert_eq!(classify_device(0xFFF1, 0x0000).category, DeviceCategory::Other);
/// ```
pub fn classify_device(vendor_id: u16, product_id: u16) -> DeviceClassification {
    Classifier::builtin().classify(vendor_id, product_id)
}

/// Vendor display name from the built-in tables.
pub fn resolve_vendor_name(vendor_id: u16) -> String {
    Classifier::builtin().vendor_name(vendor_id)
}
