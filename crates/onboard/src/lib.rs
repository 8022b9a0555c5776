//! Matter onboarding code parsing and device classification.
//!
//! A scanned onboarding code (`MT:` followed by base38 text) is decoded into
//! an [`OnboardingRecord`]. Since the payload carries no device type, the
//! vendor and product ids are run through lookup tables to guess a
//! [`DeviceCategory`], a vendor name and a friendly alias.
//!
//! Everything here is pure and thread-safe. The only outside input is the
//! clock used for aliases, which callers pass in through [`Clock`].
//!
//! # Example
//!
//! ```
//! use mt_onboard::{classify_device, parse_onboarding_code, DeviceCategory};
//!
//! let record = parse_onboarding_code("MT:YZ7A0WMV1710LO7D910").unwrap();
//! let class = classify_device(record.vendor_id, record.product_id);
//! assert_eq!(class.category, DeviceCategory::Light);
//! assert_eq!(class.label, "Smart Light");
//! ```

mod alias;
mod analyze;
mod category;
mod classify;
mod commissioning;
pub mod config;
mod error;
pub mod layout;
mod parse;
mod record;

pub use alias::{
    disambiguator, generate_alias, generate_alias_with, Clock, FixedClock, SystemClock,
    FALLBACK_ALIAS_VENDOR,
};
pub use analyze::{analyze_onboarding_code, OnboardingAnalysis};
pub use category::{DeviceCategory, DeviceTypeInfo, UnknownCategory};
pub use classify::{
    classify_device, resolve_vendor_name, Classifier, DeviceClassification, MatchRule,
};
pub use commissioning::CommissioningInfo;
pub use config::ClassifierConfig;
pub use error::ParseError;
pub use parse::{format_onboarding_code, is_onboarding_code, parse_onboarding_code, PREFIX};
pub use record::{CommissioningFlow, DiscoveryCapabilities, OnboardingRecord};
