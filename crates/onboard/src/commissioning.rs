//! Commissioning details formatted for display.

use serde::Serialize;

use crate::OnboardingRecord;

/// Display-ready commissioning details of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissioningInfo {
    pub discriminator: String,
    /// Setup PIN, zero-padded to eight digits.
    pub pin_code: String,
    /// `0x` followed by uppercase hex.
    pub vendor_id: String,
    pub product_id: String,
    pub flow: &'static str,
    pub supports_ip: bool,
    pub supports_ble: bool,
    pub supports_soft_ap: bool,
}

impl CommissioningInfo {
    pub fn from_record(record: &OnboardingRecord) -> Self {
        let caps = record.discovery_capabilities;
        Self {
            discriminator: record.discriminator.to_string(),
            pin_code: format!("{:08}", record.setup_pin_code),
            vendor_id: format!("0x{:X}", record.vendor_id),
            product_id: format!("0x{:X}", record.product_id),
            flow: record.commissioning_flow.label(),
            supports_ip: caps.ip(),
            supports_ble: caps.ble(),
            supports_soft_ap: caps.soft_ap(),
        }
    }
}

impl From<&OnboardingRecord> for CommissioningInfo {
    fn from(record: &OnboardingRecord) -> Self {
        Self::from_record(record)
    }
}
