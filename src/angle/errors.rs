use std::{error::Error, fmt};

use crate::enum_trivial_from_impl;

use super::{format::OutputFormat, kind::AngleKind};

/// The value lies outside the valid range of its kind
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RangeError {
    value: f64,
    kind: AngleKind,
}

impl RangeError {
    pub(crate) const fn new(value: f64, kind: AngleKind) -> Self {
        Self { value, kind }
    }

    /// The rejected value
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// The kind the value was checked against
    pub const fn kind(&self) -> AngleKind {
        self.kind
    }
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The {} value {} is not in range [{}..{}]",
            self.kind,
            self.value,
            self.kind.min(),
            self.kind.max()
        )
    }
}

impl Error for RangeError {}

/// The rendering was requested with the wrong parameters
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[allow(variant_size_differences)]
pub enum FormatError {
    /// There is no template for the kind of angle in the given format
    UnsupportedLayout {
        /// kind of the angle to render
        kind: AngleKind,
        /// requested layout
        format: OutputFormat,
    },
    /// The number of arcseconds' decimal digits cannot be negative
    InvalidPrecision(i32),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedLayout { kind, format } => write!(
                f,
                "Angle format {format} is not supported for the {kind} angle"
            ),
            Self::InvalidPrecision(precision) => {
                write!(f, "Invalid number of decimal digits of seconds: {precision}")
            }
        }
    }
}

impl Error for FormatError {}

/// The angle cannot be rendered
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AngleError {
    /// The value is out of range
    Range(RangeError),
    /// The format is invalid for the angle
    Format(FormatError),
}

enum_trivial_from_impl!(RangeError => AngleError:Range);
enum_trivial_from_impl!(FormatError => AngleError:Format);

impl fmt::Display for AngleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot format angle: ")?;
        match self {
            Self::Range(inner) => write!(f, "{inner}"),
            Self::Format(inner) => write!(f, "{inner}"),
        }
    }
}

impl Error for AngleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Range(inner) => Some(inner),
            Self::Format(inner) => Some(inner),
        }
    }
}
