use std::{fmt, str::FromStr};

use lazy_static::lazy_static;
use regex::Regex;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    angle::{
        consts::{ARC_MINUTE_SIGN, ARC_SECOND_SIGN, DEGREE_SIGN},
        dms_parts, from_dms,
    },
    convert,
    projection::{angular_aux, Formula},
};

use super::{
    errors::ParseCoordinateError,
    swiss::{Lv03, Lv95},
};

/// A WGS84 position: latitude and longitude in decimal degrees and
/// height above the reference ellipsoid in meters.
///
/// The type is a plain value. No range checking is applied; positions far
/// outside Switzerland convert to numerically defined but geodetically
/// meaningless Swiss coordinates.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Wgs84 {
    latitude: f64,
    longitude: f64,
    height: f64,
}

impl Wgs84 {
    /// Assemble a position from latitude and longitude in decimal degrees
    /// and ellipsoidal height in meters.
    pub fn new(latitude: f64, longitude: f64, height: f64) -> Self {
        Self {
            latitude,
            longitude,
            height,
        }
    }

    /// Latitude in decimal degrees (north positive)
    pub fn latitude(self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees (east positive)
    pub fn longitude(self) -> f64 {
        self.longitude
    }

    /// Height above the WGS84 ellipsoid, in meters
    pub fn height(self) -> f64 {
        self.height
    }

    /// Project into the LV03 ("military") frame.
    pub fn to_lv03(self) -> Lv03 {
        convert::wgs84_to_lv03(self.latitude, self.longitude, self.height)
    }

    /// Project into the LV95 frame.
    pub fn to_lv95(self) -> Lv95 {
        convert::wgs84_to_lv95(self.latitude, self.longitude, self.height)
    }

    /// Same as [`to_lv03`](Self::to_lv03) with an explicit choice of the
    /// inverse series variant.
    pub fn to_lv03_with(self, formula: Formula) -> Lv03 {
        convert::wgs84_to_lv03_with(self.latitude, self.longitude, self.height, formula)
    }

    /// Same as [`to_lv95`](Self::to_lv95) with an explicit choice of the
    /// inverse series variant.
    pub fn to_lv95_with(self, formula: Formula) -> Lv95 {
        convert::wgs84_to_lv95_with(self.latitude, self.longitude, self.height, formula)
    }

    /// Whether the position is close enough to Bern for the approximation
    /// series to be meaningful: both auxiliary values stay within
    /// magnitude 1 (about 2.8° from the reference meridians).
    ///
    /// Advisory only; the conversions never consult it.
    pub fn is_near_switzerland(self) -> bool {
        let (lat_aux, lng_aux) = angular_aux(self.latitude, self.longitude);
        lat_aux.abs() <= 1.0 && lng_aux.abs() <= 1.0
    }
}

impl From<(f64, f64, f64)> for Wgs84 {
    fn from((latitude, longitude, height): (f64, f64, f64)) -> Self {
        Self::new(latitude, longitude, height)
    }
}

impl From<Wgs84> for (f64, f64, f64) {
    fn from(position: Wgs84) -> Self {
        (position.latitude, position.longitude, position.height)
    }
}

fn write_dms(
    f: &mut fmt::Formatter<'_>,
    angle: f64,
    positive: char,
    negative: char,
) -> fmt::Result {
    let (deg, min, sec) = dms_parts(angle);
    let hemisphere = if angle.is_sign_negative() {
        negative
    } else {
        positive
    };
    write!(
        f,
        "{}{}{}{}{}{}{}",
        deg, DEGREE_SIGN, min, ARC_MINUTE_SIGN, sec, ARC_SECOND_SIGN, hemisphere
    )
}

impl fmt::Display for Wgs84 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "Lat: ")?;
            write_dms(f, self.latitude, 'N', 'S')?;
            write!(f, ", Long: ")?;
            write_dms(f, self.longitude, 'E', 'W')?;
            write!(f, ", Height: {:.2}m", self.height)
        } else {
            write!(
                f,
                "({:.6}{}, {:.6}{}, {:.2}m)",
                self.latitude, DEGREE_SIGN, self.longitude, DEGREE_SIGN, self.height
            )
        }
    }
}

lazy_static! {
    static ref RE_UNICODE: Regex = Regex::new(
        r"^(?P<deg>[0-9]{1,3})°(?: ?(?P<min>[0-9]{1,2})′(?: ?(?P<sec>[0-9]{1,2}(?:\.[0-9]+)?)″)?)?$"
    )
    .expect("Unicode DMS regex is valid");
    static ref RE_ASCII: Regex = Regex::new(
        r#"^(?P<deg>[0-9]{1,3})\*(?: ?(?P<min>[0-9]{1,2})'(?: ?(?P<sec>[0-9]{1,2}(?:\.[0-9]+)?)")?)?$"#
    )
    .expect("ASCII DMS regex is valid");
}

fn parse_dms(s: &str) -> Result<f64, ParseCoordinateError> {
    let capture = RE_UNICODE
        .captures(s)
        .or_else(|| RE_ASCII.captures(s))
        .ok_or(ParseCoordinateError::DmsNotation)?;

    let degrees: f64 = capture
        .name("deg")
        .ok_or(ParseCoordinateError::DmsNotation)?
        .as_str()
        .parse()?;
    let minutes: f64 = capture.name("min").map_or("0", |m| m.as_str()).parse()?;
    let seconds: f64 = capture.name("sec").map_or("0", |m| m.as_str()).parse()?;

    Ok(from_dms(degrees, minutes, seconds))
}

/// Parse one angle: decimal degrees (optional `°`) or DMS notation,
/// either with an optional trailing hemisphere letter.
fn parse_angle(s: &str, positive: char, negative: char) -> Result<f64, ParseCoordinateError> {
    let s = s.trim();

    let (body, sign) = if let Some(stripped) = s.strip_suffix(positive) {
        (stripped.trim_end(), 1.0)
    } else if let Some(stripped) = s.strip_suffix(negative) {
        (stripped.trim_end(), -1.0)
    } else {
        (s, 1.0)
    };

    let decimal = body.strip_suffix(DEGREE_SIGN).unwrap_or(body);
    if let Ok(value) = decimal.parse::<f64>() {
        return Ok(sign * value);
    }

    parse_dms(body).map(|value| sign * value)
}

impl FromStr for Wgs84 {
    type Err = ParseCoordinateError;

    /// Comma-separated `latitude, longitude[, height]`.
    ///
    /// Each angle is decimal degrees (`46.95`, `46.95°`, `46.95° N`) or
    /// degree-minute-second notation in Unicode (`46°52′37.54″N`) or
    /// ASCII (`46*52'37.54"N`) signs; `S` and `W` negate. A missing
    /// height is taken as zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut components = s.split(',');

        let latitude = parse_angle(
            components.next().ok_or(ParseCoordinateError::MissingComponent)?,
            'N',
            'S',
        )?;
        let longitude = parse_angle(
            components.next().ok_or(ParseCoordinateError::MissingComponent)?,
            'E',
            'W',
        )?;
        let height = match components.next() {
            Some(raw) => raw.trim().trim_end_matches('m').trim_end().parse()?,
            None => 0.0,
        };

        if components.next().is_some() {
            return Err(ParseCoordinateError::ExtraComponent);
        }

        Ok(Self::new(latitude, longitude, height))
    }
}


#[cfg(test)]
mod parse_tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn decimal_pair() {
        let position: Wgs84 = "46.95, 7.44".parse().unwrap();
        assert_eq!(position.latitude(), 46.95);
        assert_eq!(position.longitude(), 7.44);
        assert_eq!(position.height(), 0.0);
    }

    #[test]
    fn decimal_with_degree_signs() {
        let position: Wgs84 = "46.95°, 7.44°, 550".parse().unwrap();
        assert_eq!(position.latitude(), 46.95);
        assert_eq!(position.longitude(), 7.44);
        assert_eq!(position.height(), 550.0);
    }

    #[test]
    fn decimal_with_hemisphere_letters() {
        let position: Wgs84 = "46.95° N, 7.44° E".parse().unwrap();
        assert_eq!(position.latitude(), 46.95);
        assert_eq!(position.longitude(), 7.44);
    }

    #[test]
    fn southern_and_western_letters_negate() {
        let position: Wgs84 = "33.45S, 70.67W".parse().unwrap();
        assert_eq!(position.latitude(), -33.45);
        assert_eq!(position.longitude(), -70.67);
    }

    #[test]
    fn signed_decimal() {
        let position: Wgs84 = "-33.45, -70.67, 520".parse().unwrap();
        assert_eq!(position.latitude(), -33.45);
        assert_eq!(position.longitude(), -70.67);
        assert_eq!(position.height(), 520.0);
    }

    #[test]
    fn height_with_meter_suffix() {
        let position: Wgs84 = "46.95, 7.44, 550.25m".parse().unwrap();
        assert_eq!(position.height(), 550.25);
    }

    #[test]
    fn unicode_dms() {
        let position: Wgs84 = "46°52′37.54″N, 7°27′54.98″E, 947.39".parse().unwrap();
        assert_abs_diff_eq!(position.latitude(), 46.877_094_444, epsilon = 1e-8);
        assert_abs_diff_eq!(position.longitude(), 7.465_272_222, epsilon = 1e-8);
        assert_eq!(position.height(), 947.39);
    }

    #[test]
    fn ascii_dms() {
        let position: Wgs84 = r#"46*52'37.54"N, 7*27'54.98"E"#.parse().unwrap();
        assert_abs_diff_eq!(position.latitude(), 46.877_094_444, epsilon = 1e-8);
        assert_abs_diff_eq!(position.longitude(), 7.465_272_222, epsilon = 1e-8);
    }

    #[test]
    fn dms_with_spaces_between_parts() {
        let position: Wgs84 = "46° 52′ 37.54″ N, 7° 27′ 54.98″ E".parse().unwrap();
        assert_abs_diff_eq!(position.latitude(), 46.877_094_444, epsilon = 1e-8);
    }

    #[test]
    fn dms_without_seconds() {
        let position: Wgs84 = "46°30′N, 7°15′E".parse().unwrap();
        assert_eq!(position.latitude(), 46.5);
        assert_eq!(position.longitude(), 7.25);
    }

    #[test]
    fn display_round_trips_through_parse() {
        let original = Wgs84::new(46.877_094, 7.465_272, 947.39);
        let reparsed: Wgs84 = original
            .to_string()
            .trim_matches(|c| c == '(' || c == ')')
            .parse()
            .unwrap();

        assert_abs_diff_eq!(reparsed.latitude(), original.latitude(), epsilon = 1e-6);
        assert_abs_diff_eq!(reparsed.longitude(), original.longitude(), epsilon = 1e-6);
        assert_abs_diff_eq!(reparsed.height(), original.height(), epsilon = 1e-6);
    }

    #[test]
    #[should_panic(expected = "MissingComponent")]
    fn missing_longitude() {
        let _position: Wgs84 = "46.95".parse().unwrap();
    }

    #[test]
    #[should_panic(expected = "ExtraComponent")]
    fn too_many_components() {
        let _position: Wgs84 = "46.95, 7.44, 550, 1".parse().unwrap();
    }

    #[test]
    #[should_panic(expected = "DmsNotation")]
    fn garbage_latitude() {
        let _position: Wgs84 = "forty-six, 7.44".parse().unwrap();
    }

    #[test]
    #[should_panic(expected = "DmsNotation")]
    fn mixed_unicode_and_ascii_signs() {
        let _position: Wgs84 = "46°52'37.54\"N, 7.44".parse().unwrap();
    }

    #[test]
    #[should_panic(expected = "Float")]
    fn garbage_height() {
        let _position: Wgs84 = "46.95, 7.44, high".parse().unwrap();
    }
}
