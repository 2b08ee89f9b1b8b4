use std::{error::Error, fmt, num::ParseFloatError};

use crate::enum_trivial_from_impl;

/// The reasons a coordinate string cannot be understood
#[derive(Debug)]
pub enum ParseCoordinateError {
    /// A numeric component is not a valid float
    Float(ParseFloatError),
    /// Fewer components than the coordinate needs
    MissingComponent,
    /// More components than the coordinate can hold
    ExtraComponent,
    /// An angle is neither decimal degrees nor degree-minute-second notation
    DmsNotation,
}

enum_trivial_from_impl!(ParseFloatError => ParseCoordinateError:Float);

impl fmt::Display for ParseCoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot parse coordinate: ")?;
        match self {
            Self::Float(inner) => write!(f, "{inner}"),
            Self::MissingComponent => write!(f, "missing a component"),
            Self::ExtraComponent => write!(f, "too many components"),
            Self::DmsNotation => {
                write!(f, "not a decimal degree nor a Degree-Minute-Second notation")
            }
        }
    }
}

impl Error for ParseCoordinateError {}
