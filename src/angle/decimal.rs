use std::{borrow::Cow, fmt};

use num_traits::AsPrimitive;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{
    consts::DEFAULT_PRECISION,
    errors::{AngleError, RangeError},
    format::{format, OutputFormat},
    hemisphere_letter, is_within_range,
    kind::{AngleKind, Hemisphere},
    normalize,
    parts::{decompose, DmsParts},
};

/// The angle as it came from the user: either a text or a number
#[derive(Debug, Clone, PartialEq)]
pub enum RawAngle<'a> {
    /// Free-form text, e.g. `"  45 23 41,7888 w"`
    Text(Cow<'a, str>),
    /// Already a number of degrees
    Number(f64),
}

impl RawAngle<'_> {
    /// Try to treat the raw angle as the decimal degrees.
    ///
    /// The text gets [normalized](super::normalize) before parsing.
    /// Nothing is returned if the value cannot be parsed
    /// or is out of range for the kind.
    pub fn to_decimal(&self, kind: AngleKind) -> Option<f64> {
        self.to_number()
            .filter(|&value| is_within_range(value, kind))
    }

    /// The number itself or the [normalized](super::normalize) text parsed as a float
    pub fn to_number(&self) -> Option<f64> {
        match self {
            Self::Text(text) => normalize(text).parse().ok(),
            Self::Number(value) => Some(*value),
        }
    }
}

impl<'a> From<&'a str> for RawAngle<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(Cow::Borrowed(text))
    }
}

impl<'a> From<&'a String> for RawAngle<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(Cow::Borrowed(text))
    }
}

impl From<String> for RawAngle<'_> {
    fn from(text: String) -> Self {
        Self::Text(Cow::Owned(text))
    }
}

macro_rules! raw_angle_from_numbers {
    ($($t:ty),+) => {
        $(
            impl From<$t> for RawAngle<'_> {
                fn from(value: $t) -> Self {
                    Self::Number(value.as_())
                }
            }
        )+
    };
}

raw_angle_from_numbers!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl fmt::Display for RawAngle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{text:?}"),
            Self::Number(value) => write!(f, "{value}"),
        }
    }
}

/// Probe the raw angle as the decimal degrees.
///
/// ```
/// use geod_dms::{parse_loose_decimal, AngleKind};
///
/// assert_eq!(parse_loose_decimal("25,44", AngleKind::Longitude), Some(25.44));
/// assert_eq!(parse_loose_decimal(-180, AngleKind::Longitude), Some(-180.0));
/// assert_eq!(parse_loose_decimal("361,0", AngleKind::Bearing), None);
/// ```
pub fn parse_loose_decimal<'a>(raw: impl Into<RawAngle<'a>>, kind: AngleKind) -> Option<f64> {
    raw.into().to_decimal(kind)
}

/// Decimal degrees which are known to be valid for their kind
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecimalAngle {
    value: f64,
    kind: AngleKind,
}

impl DecimalAngle {
    /// Validate the value against the range of the kind.
    ///
    /// # Errors
    /// When the value is out of range.
    pub fn new(value: f64, kind: AngleKind) -> Result<Self, RangeError> {
        if is_within_range(value, kind) {
            Ok(Self { value, kind })
        } else {
            Err(RangeError::new(value, kind))
        }
    }

    /// Signed decimal degrees
    pub const fn value(self) -> f64 {
        self.value
    }

    /// What the angle measures
    pub const fn kind(self) -> AngleKind {
        self.kind
    }

    /// The hemisphere of the value (not defined for the bearings)
    pub fn hemisphere(self) -> Option<Hemisphere> {
        let sign = if self.value >= 0.0 { 1 } else { -1 };
        hemisphere_letter(sign, self.kind)
    }

    /// Decompose into degrees, minutes and seconds
    pub fn to_dms(self, precision: u32) -> DmsParts {
        decompose(self.value, precision)
    }

    /// Render the angle as a text.
    ///
    /// # Errors
    /// When the format is not applicable to the kind of the angle
    /// or the precision is negative.
    pub fn format(self, output: OutputFormat, precision: i32) -> Result<String, AngleError> {
        format(self.value, self.kind, output, precision)
    }
}

impl TryFrom<(f64, AngleKind)> for DecimalAngle {
    type Error = RangeError;

    fn try_from(value: (f64, AngleKind)) -> Result<Self, Self::Error> {
        let (value, kind) = value;
        Self::new(value, kind)
    }
}

impl From<DecimalAngle> for f64 {
    fn from(angle: DecimalAngle) -> Self {
        angle.value
    }
}

impl fmt::Display for DecimalAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .format(
                OutputFormat::default_for(self.kind),
                i32::from(DEFAULT_PRECISION),
            )
            .map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}
