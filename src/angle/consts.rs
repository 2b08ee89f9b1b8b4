pub(crate) const MINUTES_IN_DEGREE: u64 = 60;
pub(crate) const SECONDS_IN_DEGREE: f64 = 3600.0;

/// Hundredths of an arc second in one arc minute
pub(crate) const CENTI_SECONDS_IN_MINUTE: u64 = 6_000;
/// Hundredths of an arc second in one degree
pub(crate) const CENTI_SECONDS_IN_DEGREE: f64 = 360_000.0;

pub(crate) const DEGREE_SIGN: char = '°';
pub(crate) const ARC_MINUTE_SIGN: char = '′';
pub(crate) const ARC_SECOND_SIGN: char = '″';
