//! Alias generation and the clock it depends on.
//!
//! An alias looks like `Philips_light_0427`. The trailing digits come from
//! the wall clock so that devices of the same type onboarded one after another
//! get distinct names. The clock is always supplied by the caller.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::{Classifier, DeviceCategory};

/// Vendor part of an alias when the vendor is not in the tables.
pub const FALLBACK_ALIAS_VENDOR: &str = "Device";

/// Source of wall-clock time.
pub trait Clock: Send + Sync {
    /// Current Unix timestamp in milliseconds.
    fn now_unix_ms(&self) -> u64;
}

/// Clock backed by [`SystemTime`]. Reads 0 if the system clock is set before
/// the Unix epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now_unix_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Clock frozen at a fixed timestamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    #[inline]
    fn now_unix_ms(&self) -> u64 {
        self.0
    }
}

/// Last four decimal digits of a millisecond timestamp, zero-padded.
pub fn disambiguator(now_unix_ms: u64) -> String {
    format!("{:04}", now_unix_ms % 10_000)
}

impl Classifier {
    /// Builds `{vendor}_{category}_{digits}` for a newly onboarded device.
    ///
    /// The vendor part comes from the vendor table only; name-only
    /// overrides are display names and fall back to
    /// [`FALLBACK_ALIAS_VENDOR`].
    pub fn generate_alias(
        &self,
        category: DeviceCategory,
        vendor_id: u16,
        now_unix_ms: u64,
    ) -> String {
        let vendor = self
            .vendor(vendor_id)
            .map(|v| v.name.as_str())
            .unwrap_or(FALLBACK_ALIAS_VENDOR);
        format!("{vendor}_{category}_{}", disambiguator(now_unix_ms))
    }
}

/// Generates an alias with the built-in tables at the given time.
///
/// ```
/// use mt_onboard::{generate_alias, DeviceCategory};
///
/// let alias = generate_alias(DeviceCategory::Light, 0x1344, 1_700_000_001_234);
/// assert_eq!(alias, "Philips_light_1234");
/// ```
pub fn generate_alias(category: DeviceCategory, vendor_id: u16, now_unix_ms: u64) -> String {
    Classifier::builtin().generate_alias(category, vendor_id, now_unix_ms)
}

/// Generates an alias reading the time from `clock`.
pub fn generate_alias_with<C: Clock + ?Sized>(
    category: DeviceCategory,
    vendor_id: u16,
    clock: &C,
) -> String {
    generate_alias(category, vendor_id, clock.now_unix_ms())
}
