//! One-call parse plus classification, as consumed by a UI.

use serde::Serialize;

use crate::{
    parse_onboarding_code, Classifier, Clock, CommissioningInfo, DeviceClassification,
    OnboardingRecord, ParseError,
};

/// Everything derived from a scanned onboarding code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingAnalysis {
    pub record: OnboardingRecord,
    pub classification: DeviceClassification,
    pub commissioning: CommissioningInfo,
    pub vendor_name: String,
    pub alias: String,
}

impl Classifier {
    /// Parses `code` and derives classification, commissioning details,
    /// vendor name and alias. The alias reads the time from `clock`.
    pub fn analyze<C: Clock + ?Sized>(
        &self,
        code: &str,
        clock: &C,
    ) -> Result<OnboardingAnalysis, ParseError> {
        let record = parse_onboarding_code(code)?;
        let classification = self.classify(record.vendor_id, record.product_id);
        Ok(OnboardingAnalysis {
            commissioning: CommissioningInfo::from_record(&record),
            vendor_name: self.vendor_name(record.vendor_id),
            alias: self.generate_alias(
                classification.category,
                record.vendor_id,
                clock.now_unix_ms(),
            ),
            classification,
            record,
        })
    }
}

/// [`Classifier::analyze`] with the built-in tables.
///
/// ```
/// use mt_onboard::{analyze_onboarding_code, DeviceCategory, FixedClock};
///
/// let analysis = analyze_onboarding_code("MT:YZ7A0WMV1710LO7D910", &FixedClock(42)).unwrap();
/// assert_eq!(analysis.classification.category, DeviceCategory::Light);
/// assert_eq!(analysis.vendor_name, "Test Vendor (4488)");
/// assert_eq!(analysis.commissioning.pin_code, "58980771");
/// ```
pub fn analyze_onboarding_code<C: Clock + ?Sized>(
    code: &str,
    clock: &C,
) -> Result<OnboardingAnalysis, ParseError> {
    Classifier::builtin().analyze(code, clock)
}
