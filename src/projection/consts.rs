//! Fixed reference constants of the swisstopo approximation series.

/// LV03 ("military") easting of the projection center, the old
/// observatory of Bern, in meters.
pub(crate) const BERN_EASTING: f64 = 600_000.0;
/// LV03 ("military") northing of the projection center, in meters.
pub(crate) const BERN_NORTHING: f64 = 200_000.0;

/// WGS84 latitude of the projection center, in arc seconds.
pub(crate) const BERN_LAT_SECONDS: f64 = 169_028.66;
/// WGS84 longitude of the projection center, in arc seconds.
pub(crate) const BERN_LNG_SECONDS: f64 = 26_782.5;

/// The planar series work on Bern offsets expressed in units of 1000 km.
pub(crate) const PLANE_UNIT: f64 = 1_000_000.0;
/// The angular series work on Bern offsets expressed in units of 10000″.
pub(crate) const ANGLE_UNIT: f64 = 10_000.0;

/// Easting shift between the LV03 and LV95 frames, in meters.
pub(crate) const LV95_EASTING_OFFSET: f64 = 2_000_000.0;
/// Northing shift between the LV03 and LV95 frames, in meters.
pub(crate) const LV95_NORTHING_OFFSET: f64 = 1_000_000.0;
