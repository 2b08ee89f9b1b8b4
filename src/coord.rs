//! Coordinate value types for the supported reference systems

mod errors;
mod swiss;
mod wgs84;

pub use errors::ParseCoordinateError;
pub use swiss::{Lv03, Lv95};
pub use wgs84::Wgs84;
