//! Helpers for moving between decimal and sexagesimal angle notation.
//!
//! The Swiss projection series take their angular inputs as *total arc
//! seconds* (`degree*3600 + minute*60 + second`), so the decimal-degree
//! values of WGS84 have to pass through the sexagesimal decomposition
//! first.

use crate::utils::div_mod;

pub(crate) mod consts;

use consts::{
    CENTI_SECONDS_IN_DEGREE, CENTI_SECONDS_IN_MINUTE, MINUTES_IN_DEGREE, SECONDS_IN_DEGREE,
};

/// Total arc seconds of the sexagesimal (degree, minute, second)
/// representation of a decimal-degree angle.
///
/// The decomposition is floor-based, so negative angles follow the
/// round-toward-negative-infinity convention: `-7.5°` splits into
/// `-8° 30′ 0″` and still totals `-27000″`.
pub fn sexagesimal_seconds(decimal_degrees: f64) -> f64 {
    let degrees = decimal_degrees.floor();
    let fraction = decimal_degrees - degrees;
    let minutes = (fraction * 60.0).floor();
    let seconds = (fraction * 60.0 - minutes) * 60.0;

    seconds + minutes * 60.0 + degrees * SECONDS_IN_DEGREE
}

/// Decimal degrees from separate degree, arc minute and arc second parts
pub(crate) fn from_dms(degrees: f64, minutes: f64, seconds: f64) -> f64 {
    degrees + minutes / 60.0 + seconds / SECONDS_IN_DEGREE
}

/// Break the absolute value of a decimal-degree angle into degree,
/// arc minute and arc second parts.
///
/// The seconds are rounded to hundredths through an integer
/// representation, so a value sitting just below a whole degree carries
/// over cleanly instead of producing `59′60″`.
pub(crate) fn dms_parts(decimal_degrees: f64) -> (u64, u64, f64) {
    let centi_seconds = (decimal_degrees.abs() * CENTI_SECONDS_IN_DEGREE).round() as u64;
    let (total_minutes, centi) = div_mod(centi_seconds, CENTI_SECONDS_IN_MINUTE);
    let (degrees, minutes) = div_mod(total_minutes, MINUTES_IN_DEGREE);

    (degrees, minutes, centi as f64 / 100.0)
}
