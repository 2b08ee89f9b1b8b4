//! Conversions between the Swiss national coordinate reference systems
//! (LV03 "military" and LV95) and the global WGS84 system, using the
//! closed-form approximation series published by the Federal Office of
//! Topography swisstopo and centered on the old observatory of Bern.
//!
//! The conversions are pure functions over plain numbers: no I/O, no
//! state, no validation. Within Switzerland's bounding region they agree
//! with the rigorous datum transformation to roughly one meter; outside
//! it the results are numerically defined but geodetically meaningless.
//!
//! ```
//! use swissgrid::{ch_to_wgs84, wgs84_to_lv95};
//!
//! // the Zimmerwald observatory, LV03
//! let wgs = ch_to_wgs84(602_030.68, 191_775.03, 897.68);
//! assert!((wgs.latitude() - 46.877_094).abs() < 1e-4);
//! assert!((wgs.longitude() - 7.465_272).abs() < 1e-4);
//!
//! // and back, into the modern LV95 frame
//! let lv95 = wgs84_to_lv95(wgs.latitude(), wgs.longitude(), wgs.height());
//! assert!((lv95.easting() - 2_602_030.68).abs() < 1.0);
//! assert!((lv95.northing() - 1_191_775.03).abs() < 1.0);
//! ```

// do not warn on older Rust versions
#![allow(unknown_lints)]
//
// The list was generated with the command
//   $ rustc -W help | grep ' allow ' | awk '{print $1}' | tr - _ | sort | xargs -I{} echo '#![warn({})]'
#![warn(absolute_paths_not_starting_with_crate)]
#![warn(anonymous_parameters)]
#![warn(deprecated_in_future)]
#![warn(elided_lifetimes_in_paths)]
#![warn(explicit_outlives_requirements)]
#![warn(keyword_idents)]
#![warn(macro_use_extern_crate)]
#![warn(meta_variable_misuse)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(single_use_lifetimes)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unstable_features)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]
#![warn(unused_labels)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]
#![warn(variant_size_differences)]
// recommendations
#![forbid(unsafe_code)]
#![deny(clippy::mem_forget)]
// suppress some pedantic warnings
#![allow(clippy::non_ascii_literal)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub use angle::sexagesimal_seconds;
pub use convert::{
    ch_to_wgs84, wgs84_to_lv03, wgs84_to_lv03_with, wgs84_to_lv95, wgs84_to_lv95_with,
};
pub use coord::{Lv03, Lv95, ParseCoordinateError, Wgs84};
pub use projection::Formula;

mod angle;
mod convert;
mod coord;
mod projection;
mod utils;
