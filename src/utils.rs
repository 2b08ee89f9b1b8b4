//! Small helpers with no geodesy knowledge

use std::ops::{Div, Rem};

#[doc(hidden)]
#[macro_export]
/// Implements `From` trait for newtype-like enum variants
macro_rules! enum_trivial_from_impl {
    ($from:ty => $to:ty:$constructor:ident) => {
        impl From<$from> for $to {
            fn from(val: $from) -> Self {
                Self::$constructor(val)
            }
        }
    };
}

/// Division and remainder in one step
pub(crate) fn div_mod<T>(divider: T, divisor: T) -> (T, T)
where
    T: Copy + Div<Output = T> + Rem<Output = T>,
{
    (divider / divisor, divider % divisor)
}

/// Format a length in meters the way Swiss maps label grid lines:
/// two decimal places and apostrophes grouping the thousands
/// (`2'600'000.00`).
pub(crate) fn swiss_grouped(meters: f64) -> String {
    let negative = meters.is_sign_negative();
    let centimeters = (meters.abs() * 100.0).round() as u64;
    let (mut whole, fraction) = div_mod(centimeters, 100);

    let mut groups = Vec::new();
    loop {
        let (rest, group) = div_mod(whole, 1000);
        whole = rest;
        if whole == 0 {
            groups.push(group.to_string());
            break;
        }
        groups.push(format!("{:03}", group));
    }
    groups.reverse();

    let sign = if negative { "-" } else { "" };
    format!("{}{}.{:02}", sign, groups.join("'"), fraction)
}
