//! The decoded onboarding record and its small field types.

use mt_onboard_base38::Base38Value;
use serde::{Deserialize, Serialize};

use crate::layout::{
    BitField, COMMISSIONING_FLOW, DISCOVERY_CAPABILITIES, DISCRIMINATOR, PAYLOAD_BYTES,
    PRODUCT_ID, SETUP_PIN_CODE, VENDOR_ID, VERSION,
};

/// How a device expects to be put into commissioning mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommissioningFlow {
    Standard,
    UserIntent,
    Custom,
}

impl CommissioningFlow {
    /// Maps the 2-bit field. The reserved encoding `3` reads as `Custom`.
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => CommissioningFlow::Standard,
            1 => CommissioningFlow::UserIntent,
            _ => CommissioningFlow::Custom,
        }
    }

    pub fn bits(self) -> u8 {
        match self {
            CommissioningFlow::Standard => 0,
            CommissioningFlow::UserIntent => 1,
            CommissioningFlow::Custom => 2,
        }
    }

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            CommissioningFlow::Standard => "Standard",
            CommissioningFlow::UserIntent => "User Intent",
            CommissioningFlow::Custom => "Custom",
        }
    }
}

/// Discovery transports advertised by the device.
///
/// The bit assignment (bit 0 IP/Wi-Fi, bit 1 BLE, bit 2 SoftAP) is a
/// deployment convention that has not been checked against a decoded
/// payload beyond the BLE bit. Treat the accessors as a best guess.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiscoveryCapabilities(pub u8);

impl DiscoveryCapabilities {
    pub const IP: u8 = 0b001;
    pub const BLE: u8 = 0b010;
    pub const SOFT_AP: u8 = 0b100;

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn ip(self) -> bool {
        self.0 & Self::IP != 0
    }

    pub fn ble(self) -> bool {
        self.0 & Self::BLE != 0
    }

    pub fn soft_ap(self) -> bool {
        self.0 & Self::SOFT_AP != 0
    }
}

/// Fields carried by an onboarding code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingRecord {
    pub version: u8,
    pub vendor_id: u16,
    pub product_id: u16,
    pub commissioning_flow: CommissioningFlow,
    pub discovery_capabilities: DiscoveryCapabilities,
    pub discriminator: u16,
    pub setup_pin_code: u32,
}

impl OnboardingRecord {
    /// Reads every field of the layout out of a decoded payload.
    pub fn from_value(value: &Base38Value) -> Self {
        // Each field is at most 27 bits wide, so the narrowing casts are exact.
        Self {
            version: VERSION.read(value) as u8,
            vendor_id: VENDOR_ID.read(value) as u16,
            product_id: PRODUCT_ID.read(value) as u16,
            commissioning_flow: CommissioningFlow::from_bits(COMMISSIONING_FLOW.read(value) as u8),
            discovery_capabilities: DiscoveryCapabilities(
                DISCOVERY_CAPABILITIES.read(value) as u8,
            ),
            discriminator: DISCRIMINATOR.read(value) as u16,
            setup_pin_code: SETUP_PIN_CODE.read(value) as u32,
        }
    }

    /// Packs the record into payload bytes. Values wider than their field
    /// are truncated to the field width.
    pub fn to_bytes(&self) -> [u8; PAYLOAD_BYTES] {
        let mut bytes = [0u8; PAYLOAD_BYTES];
        let fields: [(BitField, u64); 7] = [
            (VERSION, u64::from(self.version)),
            (VENDOR_ID, u64::from(self.vendor_id)),
            (PRODUCT_ID, u64::from(self.product_id)),
            (COMMISSIONING_FLOW, u64::from(self.commissioning_flow.bits())),
            (DISCOVERY_CAPABILITIES, u64::from(self.discovery_capabilities.bits())),
            (DISCRIMINATOR, u64::from(self.discriminator)),
            (SETUP_PIN_CODE, u64::from(self.setup_pin_code)),
        ];
        for (field, value) in fields {
            field.write(&mut bytes, value);
        }
        bytes
    }
}
