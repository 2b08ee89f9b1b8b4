//! Offset-handling entry points composing the projection series.

use crate::{
    coord::{Lv03, Lv95, Wgs84},
    projection::{
        self,
        consts::{LV95_EASTING_OFFSET, LV95_NORTHING_OFFSET},
        Formula,
    },
};

/// Convert Swiss plane coordinates to WGS84.
///
/// Accepts either convention: LV95 values are recognized by their
/// million-meter offsets (easting >= 2'000'000, northing >= 1'000'000,
/// checked independently) and normalized to LV03 before the series run.
pub fn ch_to_wgs84(easting: f64, northing: f64, height: f64) -> Wgs84 {
    let mut easting = easting;
    let mut northing = northing;

    if easting >= LV95_EASTING_OFFSET {
        easting -= LV95_EASTING_OFFSET;
    }
    if northing >= LV95_NORTHING_OFFSET {
        northing -= LV95_NORTHING_OFFSET;
    }

    Wgs84::new(
        projection::wgs_latitude(easting, northing),
        projection::wgs_longitude(easting, northing),
        projection::wgs_height(easting, northing, height),
    )
}

/// Convert a WGS84 position (decimal degrees, ellipsoidal height in
/// meters) to LV03 using the default series variant.
pub fn wgs84_to_lv03(latitude: f64, longitude: f64, ell_height: f64) -> Lv03 {
    wgs84_to_lv03_with(latitude, longitude, ell_height, Formula::default())
}

/// Convert a WGS84 position to LV03 with an explicit choice of the
/// inverse series variant.
pub fn wgs84_to_lv03_with(
    latitude: f64,
    longitude: f64,
    ell_height: f64,
    formula: Formula,
) -> Lv03 {
    Lv03::new(
        projection::lv03_easting(latitude, longitude, formula),
        projection::lv03_northing(latitude, longitude, formula),
        projection::lv03_height(latitude, longitude, ell_height),
    )
}

/// Convert a WGS84 position to LV95 using the default series variant.
///
/// The height passes through the LV95 shift unchanged.
pub fn wgs84_to_lv95(latitude: f64, longitude: f64, ell_height: f64) -> Lv95 {
    wgs84_to_lv03(latitude, longitude, ell_height).to_lv95()
}

/// Convert a WGS84 position to LV95 with an explicit choice of the
/// inverse series variant.
pub fn wgs84_to_lv95_with(
    latitude: f64,
    longitude: f64,
    ell_height: f64,
    formula: Formula,
) -> Lv95 {
    wgs84_to_lv03_with(latitude, longitude, ell_height, formula).to_lv95()
}
