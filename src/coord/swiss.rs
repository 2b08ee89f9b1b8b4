use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    convert,
    projection::consts::{LV95_EASTING_OFFSET, LV95_NORTHING_OFFSET},
    utils::swiss_grouped,
};

use super::{errors::ParseCoordinateError, wgs84::Wgs84};

/// An LV03 ("military") position: easting and northing in meters on the
/// legacy Swiss grid centered at 600'000/200'000 on the old observatory
/// of Bern, plus a height in meters.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Lv03 {
    easting: f64,
    northing: f64,
    height: f64,
}

/// An LV95 position: the LV03 plane shifted by exactly +2'000'000 m of
/// easting and +1'000'000 m of northing.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Lv95 {
    easting: f64,
    northing: f64,
    height: f64,
}

impl Lv03 {
    /// Assemble a position from easting, northing and height in meters.
    pub fn new(easting: f64, northing: f64, height: f64) -> Self {
        Self {
            easting,
            northing,
            height,
        }
    }

    /// Easting ("y") in meters
    pub fn easting(self) -> f64 {
        self.easting
    }

    /// Northing ("x") in meters
    pub fn northing(self) -> f64 {
        self.northing
    }

    /// Height in meters
    pub fn height(self) -> f64 {
        self.height
    }

    /// Shift into the LV95 frame. The offsets are whole millions of
    /// meters, so the shift is lossless.
    pub fn to_lv95(self) -> Lv95 {
        Lv95::new(
            self.easting + LV95_EASTING_OFFSET,
            self.northing + LV95_NORTHING_OFFSET,
            self.height,
        )
    }

    /// Convert to WGS84 through the approximation series.
    pub fn to_wgs84(self) -> Wgs84 {
        convert::ch_to_wgs84(self.easting, self.northing, self.height)
    }

    /// Whether the position lies in the region the approximation series
    /// were fitted for: easting 480–850 km, northing 70–310 km.
    ///
    /// Advisory only; the conversions never consult it.
    pub fn is_within_swiss_bounds(self) -> bool {
        (480_000.0..=850_000.0).contains(&self.easting)
            && (70_000.0..=310_000.0).contains(&self.northing)
    }
}

impl Lv95 {
    /// Assemble a position from easting, northing and height in meters.
    pub fn new(easting: f64, northing: f64, height: f64) -> Self {
        Self {
            easting,
            northing,
            height,
        }
    }

    /// Easting ("y") in meters
    pub fn easting(self) -> f64 {
        self.easting
    }

    /// Northing ("x") in meters
    pub fn northing(self) -> f64 {
        self.northing
    }

    /// Height in meters
    pub fn height(self) -> f64 {
        self.height
    }

    /// Shift into the LV03 ("military") frame. The offsets are whole
    /// millions of meters, so the shift is lossless.
    pub fn to_lv03(self) -> Lv03 {
        Lv03::new(
            self.easting - LV95_EASTING_OFFSET,
            self.northing - LV95_NORTHING_OFFSET,
            self.height,
        )
    }

    /// Convert to WGS84 through the approximation series.
    pub fn to_wgs84(self) -> Wgs84 {
        convert::ch_to_wgs84(self.easting, self.northing, self.height)
    }

    /// Whether the position lies in the region the approximation series
    /// were fitted for, judged in the LV03 frame.
    ///
    /// Advisory only; the conversions never consult it.
    pub fn is_within_swiss_bounds(self) -> bool {
        self.to_lv03().is_within_swiss_bounds()
    }
}

impl From<Lv03> for Lv95 {
    fn from(position: Lv03) -> Self {
        position.to_lv95()
    }
}

impl From<Lv95> for Lv03 {
    fn from(position: Lv95) -> Self {
        position.to_lv03()
    }
}

impl From<(f64, f64, f64)> for Lv03 {
    fn from((easting, northing, height): (f64, f64, f64)) -> Self {
        Self::new(easting, northing, height)
    }
}

impl From<Lv03> for (f64, f64, f64) {
    fn from(position: Lv03) -> Self {
        (position.easting, position.northing, position.height)
    }
}

impl From<(f64, f64, f64)> for Lv95 {
    fn from((easting, northing, height): (f64, f64, f64)) -> Self {
        Self::new(easting, northing, height)
    }
}

impl From<Lv95> for (f64, f64, f64) {
    fn from(position: Lv95) -> Self {
        (position.easting, position.northing, position.height)
    }
}

fn write_plane(
    f: &mut fmt::Formatter<'_>,
    easting: f64,
    northing: f64,
    height: f64,
) -> fmt::Result {
    if f.alternate() {
        write!(
            f,
            "({}, {}, {})",
            swiss_grouped(easting),
            swiss_grouped(northing),
            swiss_grouped(height)
        )
    } else {
        write!(f, "({:.2}, {:.2}, {:.2})", easting, northing, height)
    }
}

impl fmt::Display for Lv03 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_plane(f, self.easting, self.northing, self.height)
    }
}

impl fmt::Display for Lv95 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_plane(f, self.easting, self.northing, self.height)
    }
}

fn parse_meters(token: &str) -> Result<f64, ParseCoordinateError> {
    Ok(token.replace('\'', "").parse()?)
}

/// Parse `easting northing [height]`, separated by commas, semicolons or
/// whitespace, with optional Swiss apostrophe digit grouping.
fn parse_plane(s: &str) -> Result<(f64, f64, f64), ParseCoordinateError> {
    let s = s.trim();

    let components: Vec<&str> = if s.contains(',') || s.contains(';') {
        s.split(|c| c == ',' || c == ';').map(str::trim).collect()
    } else {
        s.split_whitespace().collect()
    };

    if components.len() < 2 {
        return Err(ParseCoordinateError::MissingComponent);
    }
    if components.len() > 3 {
        return Err(ParseCoordinateError::ExtraComponent);
    }

    let easting = parse_meters(components[0])?;
    let northing = parse_meters(components[1])?;
    let height = match components.get(2) {
        Some(token) => parse_meters(token)?,
        None => 0.0,
    };

    Ok((easting, northing, height))
}

impl FromStr for Lv03 {
    type Err = ParseCoordinateError;

    /// `easting northing [height]` in meters, separated by commas,
    /// semicolons or whitespace, with optional Swiss apostrophe digit
    /// grouping (`2'600'000`). A missing height is taken as zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (easting, northing, height) = parse_plane(s)?;
        Ok(Self::new(easting, northing, height))
    }
}

impl FromStr for Lv95 {
    type Err = ParseCoordinateError;

    /// `easting northing [height]` in meters, separated by commas,
    /// semicolons or whitespace, with optional Swiss apostrophe digit
    /// grouping (`2'600'000`). A missing height is taken as zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (easting, northing, height) = parse_plane(s)?;
        Ok(Self::new(easting, northing, height))
    }
}
