//! Onboarding code parsing and formatting.

use mt_onboard_base38::{decode, encode};
use tracing::{debug, trace};

use crate::{OnboardingRecord, ParseError};

/// Marker that precedes the base38 payload of a Matter onboarding code.
pub const PREFIX: &str = "MT:";

/// Returns `true` if `code` carries the `MT:` marker and a non-empty payload.
///
/// This is a shape check only; the payload is not decoded.
pub fn is_onboarding_code(code: &str) -> bool {
    code.len() > PREFIX.len() && code.starts_with(PREFIX)
}

/// Parses an onboarding code into its record.
///
/// The `MT:` marker is stripped when present, so both the scanned form and a
/// bare payload are accepted.
///
/// # Errors
///
/// - [`ParseError::NotMatterFormat`] if nothing remains after the marker.
/// - [`ParseError::InvalidCharacter`] for a symbol outside the base38
///   alphabet, positioned within the payload.
///
/// # Example
///
/// ```
/// use mt_onboard::parse_onboarding_code;
///
/// let record = parse_onboarding_code("MT:YZ7A0WMV1710LO7D910").unwrap();
/// assert_eq!(record.vendor_id, 4488);
/// assert_eq!(record.product_id, 257);
/// assert_eq!(record.discriminator, 303);
/// assert_eq!(record.setup_pin_code, 58980771);
/// ```
pub fn parse_onboarding_code(code: &str) -> Result<OnboardingRecord, ParseError> {
    let payload = code.strip_prefix(PREFIX).unwrap_or(code);
    if payload.is_empty() {
        return Err(ParseError::NotMatterFormat);
    }

    let value = decode(payload)?;
    trace!(bits = value.bit_len(), value = %format_args!("{value:x}"), "decoded payload");

    let record = OnboardingRecord::from_value(&value);
    // The setup PIN proves physical possession; keep it out of logs.
    debug!(
        version = record.version,
        vendor_id = record.vendor_id,
        product_id = record.product_id,
        discriminator = record.discriminator,
        flow = record.commissioning_flow.label(),
        "parsed onboarding code"
    );
    Ok(record)
}

/// Renders a record as an `MT:`-prefixed onboarding code.
///
/// Parsing the result yields the same record, except that the reserved
/// flow encoding reads back as [`crate::CommissioningFlow::Custom`].
pub fn format_onboarding_code(record: &OnboardingRecord) -> String {
    let mut out = String::from(PREFIX);
    out.push_str(&encode(&record.to_bytes()));
    out
}
