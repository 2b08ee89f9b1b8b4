//! The swisstopo approximation series.
//!
//! Closed-form polynomials over auxiliary coordinates relative to the old
//! observatory of Bern: the forward series map LV03 ("military") plane
//! coordinates to WGS84 components, the inverse series map WGS84 angles
//! back to LV03. Within Switzerland's bounding region the series agree
//! with the rigorous datum transformation to roughly one meter; outside it
//! the results are numerically defined but geodetically meaningless.
//!
//! Throughout this module `y` is the easting and `x` the northing, the
//! Swiss surveying convention, kept to match the coefficient tables.

use crate::angle::sexagesimal_seconds;

pub(crate) mod consts;

use consts::{
    ANGLE_UNIT, BERN_EASTING, BERN_LAT_SECONDS, BERN_LNG_SECONDS, BERN_NORTHING, PLANE_UNIT,
};

/// Selects the variant of the inverse (WGS84 → LV03) series.
///
/// The forward series is identical under both variants.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum Formula {
    /// The series as published by swisstopo, with the cubic correction
    /// terms `-44.54·λ′³` (easting) and `+119.79·φ′³` (northing).
    #[default]
    Published,
    /// Bug-compatible with widely circulated ports of the series, which
    /// regroup the small easting terms as `-(0.36·λ′·φ′² - λ′³)` and
    /// scale the last northing term linearly (`119.79·φ′·3`) instead of
    /// cubing it. The two variants differ by about 10 m of northing at
    /// Zimmerwald and up to roughly 150 m at the southern border.
    Legacy,
}

/// Planar auxiliary values relative to Bern, in units of 1000 km
fn plane_aux(y: f64, x: f64) -> (f64, f64) {
    let y_aux = (y - BERN_EASTING) / PLANE_UNIT;
    let x_aux = (x - BERN_NORTHING) / PLANE_UNIT;
    (y_aux, x_aux)
}

/// Angular auxiliary values relative to Bern, in units of 10000″
pub(crate) fn angular_aux(latitude: f64, longitude: f64) -> (f64, f64) {
    let lat_aux = (sexagesimal_seconds(latitude) - BERN_LAT_SECONDS) / ANGLE_UNIT;
    let lng_aux = (sexagesimal_seconds(longitude) - BERN_LNG_SECONDS) / ANGLE_UNIT;
    (lat_aux, lng_aux)
}

/// WGS84 latitude (decimal degrees) of an LV03 point.
pub(crate) fn wgs_latitude(y: f64, x: f64) -> f64 {
    let (y_aux, x_aux) = plane_aux(y, x);

    let lat = 16.902_389_2 + 3.238_272 * x_aux
        - 0.270_978 * y_aux.powi(2)
        - 0.002_528 * x_aux.powi(2)
        - 0.0447 * y_aux.powi(2) * x_aux
        - 0.0140 * x_aux.powi(3);

    // the series' native unit is 10000″; 10000/3600 = 100/36 degrees
    lat * 100.0 / 36.0
}

/// WGS84 longitude (decimal degrees) of an LV03 point.
pub(crate) fn wgs_longitude(y: f64, x: f64) -> f64 {
    let (y_aux, x_aux) = plane_aux(y, x);

    let lng = 2.677_909_4 + 4.728_982 * y_aux
        + 0.791_484 * y_aux * x_aux
        + 0.1306 * y_aux * x_aux.powi(2)
        - 0.0436 * y_aux.powi(3);

    lng * 100.0 / 36.0
}

/// WGS84 ellipsoidal height (meters) of an LV03 point.
pub(crate) fn wgs_height(y: f64, x: f64, height: f64) -> f64 {
    let (y_aux, x_aux) = plane_aux(y, x);

    height + 49.55 - 12.60 * y_aux - 22.64 * x_aux
}

/// LV03 easting (meters) of a WGS84 point.
pub(crate) fn lv03_easting(latitude: f64, longitude: f64, formula: Formula) -> f64 {
    let (lat_aux, lng_aux) = angular_aux(latitude, longitude);

    let y = 600_072.37 + 211_455.93 * lng_aux - 10_938.51 * lng_aux * lat_aux;
    match formula {
        Formula::Published => {
            y - 0.36 * lng_aux * lat_aux.powi(2) - 44.54 * lng_aux.powi(3)
        }
        // grouping kept verbatim: the cube ends up *added*
        Formula::Legacy => y - (0.36 * lng_aux * lat_aux.powi(2) - lng_aux.powi(3)),
    }
}

/// LV03 northing (meters) of a WGS84 point.
pub(crate) fn lv03_northing(latitude: f64, longitude: f64, formula: Formula) -> f64 {
    let (lat_aux, lng_aux) = angular_aux(latitude, longitude);

    let x = 200_147.07 + 308_807.95 * lat_aux
        + 3_745.25 * lng_aux.powi(2)
        + 76.63 * lat_aux.powi(2)
        - 194.56 * lng_aux.powi(2) * lat_aux;
    match formula {
        Formula::Published => x + 119.79 * lat_aux.powi(3),
        // missing exponent kept verbatim: multiply by three, not cube
        Formula::Legacy => x + 119.79 * lat_aux * 3.0,
    }
}

/// LV03 height (meters) of a WGS84 point.
pub(crate) fn lv03_height(latitude: f64, longitude: f64, ell_height: f64) -> f64 {
    let (lat_aux, lng_aux) = angular_aux(latitude, longitude);

    ell_height - 49.55 + 2.73 * lng_aux + 6.94 * lat_aux
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    // swisstopo's published reference point: the Zimmerwald observatory
    const ZIMMERWALD_LV03: (f64, f64, f64) = (602_030.68, 191_775.03, 897.68);
    const ZIMMERWALD_LAT: f64 = 46.877_094_444; // 46°52′37.54″
    const ZIMMERWALD_LNG: f64 = 7.465_272_222; // 7°27′54.98″
    const ZIMMERWALD_ELL_HEIGHT: f64 = 947.39;

    #[test]
    fn latitude_of_projection_center() {
        // at Bern both auxiliary values vanish, leaving the constant term
        assert_abs_diff_eq!(
            wgs_latitude(600_000.0, 200_000.0),
            16.902_389_2 * 100.0 / 36.0
        );
        assert_abs_diff_eq!(wgs_latitude(600_000.0, 200_000.0), 46.951_081, epsilon = 1e-6);
    }

    #[test]
    fn longitude_of_projection_center() {
        assert_abs_diff_eq!(
            wgs_longitude(600_000.0, 200_000.0),
            2.677_909_4 * 100.0 / 36.0
        );
        assert_abs_diff_eq!(wgs_longitude(600_000.0, 200_000.0), 7.438_637, epsilon = 1e-6);
    }

    #[test]
    fn height_of_projection_center() {
        assert_abs_diff_eq!(wgs_height(600_000.0, 200_000.0, 0.0), 49.55);
    }

    #[test]
    fn zimmerwald_latitude() {
        let (y, x, _) = ZIMMERWALD_LV03;
        assert_abs_diff_eq!(wgs_latitude(y, x), ZIMMERWALD_LAT, epsilon = 5e-5);
    }

    #[test]
    fn zimmerwald_longitude() {
        let (y, x, _) = ZIMMERWALD_LV03;
        assert_abs_diff_eq!(wgs_longitude(y, x), ZIMMERWALD_LNG, epsilon = 5e-5);
    }

    #[test]
    fn zimmerwald_height() {
        let (y, x, h) = ZIMMERWALD_LV03;
        assert_abs_diff_eq!(wgs_height(y, x, h), ZIMMERWALD_ELL_HEIGHT, epsilon = 0.02);
    }

    #[test]
    fn zimmerwald_easting() {
        let y = lv03_easting(ZIMMERWALD_LAT, ZIMMERWALD_LNG, Formula::Published);
        assert_abs_diff_eq!(y, ZIMMERWALD_LV03.0, epsilon = 0.2);
    }

    #[test]
    fn zimmerwald_northing() {
        let x = lv03_northing(ZIMMERWALD_LAT, ZIMMERWALD_LNG, Formula::Published);
        assert_abs_diff_eq!(x, ZIMMERWALD_LV03.1, epsilon = 0.2);
    }

    #[test]
    fn zimmerwald_lv03_height() {
        let h = lv03_height(ZIMMERWALD_LAT, ZIMMERWALD_LNG, ZIMMERWALD_ELL_HEIGHT);
        assert_abs_diff_eq!(h, ZIMMERWALD_LV03.2, epsilon = 0.02);
    }

    #[test]
    fn variants_agree_at_projection_center() {
        // the cubic terms vanish with the auxiliary values
        let lat = BERN_LAT_SECONDS / 3600.0;
        let lng = BERN_LNG_SECONDS / 3600.0;

        assert_abs_diff_eq!(
            lv03_easting(lat, lng, Formula::Legacy),
            lv03_easting(lat, lng, Formula::Published),
            epsilon = 1e-3
        );
        assert_abs_diff_eq!(
            lv03_northing(lat, lng, Formula::Legacy),
            lv03_northing(lat, lng, Formula::Published),
            epsilon = 1e-3
        );
    }

    #[test]
    fn legacy_northing_shift_at_zimmerwald() {
        let published = lv03_northing(ZIMMERWALD_LAT, ZIMMERWALD_LNG, Formula::Published);
        let legacy = lv03_northing(ZIMMERWALD_LAT, ZIMMERWALD_LNG, Formula::Legacy);

        // 119.79·(3φ′ - φ′³) at φ′ ≈ -0.02711
        assert_abs_diff_eq!(legacy - published, -9.74, epsilon = 0.05);
    }

    #[test]
    fn legacy_easting_stays_close_near_bern() {
        let published = lv03_easting(ZIMMERWALD_LAT, ZIMMERWALD_LNG, Formula::Published);
        let legacy = lv03_easting(ZIMMERWALD_LAT, ZIMMERWALD_LNG, Formula::Legacy);

        // 45.54·λ′³ is sub-millimeter for λ′ ≈ 0.009
        assert_abs_diff_eq!(legacy, published, epsilon = 1e-3);
    }

    #[test]
    fn published_is_the_default_variant() {
        assert_eq!(Formula::default(), Formula::Published);
    }
}
