use std::{convert::TryFrom, error::Error, fmt, ops::RangeInclusive, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::consts::{FULL_TURN_DEG, HALF_TURN_DEG, QUARTER_TURN_DEG};

/// What the angle measures.
///
/// The kind defines the valid range of the values
/// and the letters used to denote the sign of the value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AngleKind {
    /// East-west position in the range `-180..=180`, signed with `E` or `W`
    Longitude,
    /// North-south position in the range `-90..=90`, signed with `N` or `S`
    Latitude,
    /// Direction measured clockwise from the north in the range `0..=360`.
    /// Has no hemisphere.
    Bearing,
}

impl AngleKind {
    /// All the supported kinds
    pub const ALL: [Self; 3] = [Self::Longitude, Self::Latitude, Self::Bearing];

    /// The smallest valid value
    pub fn min(self) -> f64 {
        match self {
            Self::Longitude => -f64::from(HALF_TURN_DEG),
            Self::Latitude => -f64::from(QUARTER_TURN_DEG),
            Self::Bearing => 0.0,
        }
    }

    /// The biggest valid value
    pub fn max(self) -> f64 {
        match self {
            Self::Longitude => f64::from(HALF_TURN_DEG),
            Self::Latitude => f64::from(QUARTER_TURN_DEG),
            Self::Bearing => f64::from(FULL_TURN_DEG),
        }
    }

    /// Inclusive range of the valid values
    pub fn range(self) -> RangeInclusive<f64> {
        self.min()..=self.max()
    }

    /// Whether the value is valid for the kind (bounds are inclusive, `NaN` is never valid)
    pub fn contains(self, value: f64) -> bool {
        self.range().contains(&value)
    }

    /// The letters for the positive and negative values correspondingly
    pub const fn hemispheres(self) -> Option<(Hemisphere, Hemisphere)> {
        match self {
            Self::Longitude => Some((Hemisphere::East, Hemisphere::West)),
            Self::Latitude => Some((Hemisphere::North, Hemisphere::South)),
            Self::Bearing => None,
        }
    }

    /// Zero-padded width of the degrees field when rendering
    pub const fn degree_width(self) -> usize {
        match self {
            Self::Longitude => 3,
            Self::Latitude | Self::Bearing => 2,
        }
    }

    /// The longest degrees token accepted when parsing separated notation
    pub const fn max_degree_digits(self) -> usize {
        match self {
            Self::Longitude | Self::Bearing => 3,
            Self::Latitude => 2,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Longitude => "longitude",
            Self::Latitude => "latitude",
            Self::Bearing => "bearing",
        }
    }
}

impl fmt::Display for AngleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug)]
/// Unknown name of an angle kind
pub struct ParseKindError {
    failed: String,
}

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot parse AngleKind from {:?}", self.failed)
    }
}

impl Error for ParseKindError {}

impl FromStr for AngleKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseKindError {
                failed: s.to_owned(),
            })
    }
}

/// The letter denoting the sign of a longitude or a latitude
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Hemisphere {
    /// Positive latitude
    North,
    /// Negative latitude
    South,
    /// Positive longitude
    East,
    /// Negative longitude
    West,
}

impl Hemisphere {
    /// The kind of angle the hemisphere is applicable to
    pub const fn kind(self) -> AngleKind {
        match self {
            Self::North | Self::South => AngleKind::Latitude,
            Self::East | Self::West => AngleKind::Longitude,
        }
    }

    /// `+1` for the northern and eastern hemispheres, `-1` otherwise
    pub const fn sign(self) -> i8 {
        match self {
            Self::North | Self::East => 1,
            Self::South | Self::West => -1,
        }
    }

    /// Single upper-case letter
    pub const fn letter(self) -> char {
        match self {
            Self::North => 'N',
            Self::South => 'S',
            Self::East => 'E',
            Self::West => 'W',
        }
    }

    /// Find the hemisphere for the sign of the value.
    ///
    /// Only `-1` and `+1` are meaningful signs, and only longitudes
    /// and latitudes have the hemisphere. Otherwise, nothing is returned.
    pub const fn from_sign(sign: i8, kind: AngleKind) -> Option<Self> {
        match (kind.hemispheres(), sign) {
            (Some((positive, _)), 1) => Some(positive),
            (Some((_, negative)), -1) => Some(negative),
            _ => None,
        }
    }

    /// Recognize the letter only if it belongs to the given kind of angle
    pub fn from_letter(letter: char, kind: AngleKind) -> Option<Self> {
        Self::try_from(letter)
            .ok()
            .filter(|hemisphere| hemisphere.kind() == kind)
    }
}

#[derive(Debug, Copy, Clone)]
/// The character is not one of `N`, `S`, `E`, `W`
pub struct ParseHemisphereError {
    failed: char,
}

impl fmt::Display for ParseHemisphereError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot parse Hemisphere from {:?}", self.failed)
    }
}

impl Error for ParseHemisphereError {}

impl TryFrom<char> for Hemisphere {
    type Error = ParseHemisphereError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'N' => Ok(Self::North),
            'S' => Ok(Self::South),
            'E' => Ok(Self::East),
            'W' => Ok(Self::West),
            _ => Err(ParseHemisphereError { failed: c }),
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
