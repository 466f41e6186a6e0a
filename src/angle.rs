//! Conversion of a single angle between the decimal degrees and the DMS text.
//!
//! The module is a leaf: it validates ranges, maps signs into hemispheres,
//! splits the decimal degrees into degrees-minutes-seconds (and back)
//! and renders the DMS text by the table of templates.

pub use self::{
    consts::DEFAULT_PRECISION,
    decimal::{parse_loose_decimal, DecimalAngle, RawAngle},
    errors::{AngleError, FormatError, RangeError},
    format::{format, DmsFormatter, OutputFormat, ParseFormatError},
    kind::{AngleKind, Hemisphere, ParseHemisphereError, ParseKindError},
    parts::{assemble_dms, assemble_from_dms_parts, decompose, DmsParts},
};

mod consts;
mod decimal;
mod errors;
mod format;
mod kind;
mod parts;

pub(crate) use self::consts::MINUTES_WIDTH;

/// Prepare the user's text for parsing:
/// - remove the leading and trailing blanks;
/// - replace the decimal comma with the dot;
/// - make the letters upper case (`n` -> `N`).
///
/// ```
/// assert_eq!(geod_dms::normalize("  32 44 56,77n "), "32 44 56.77N");
/// ```
pub fn normalize(raw: &str) -> String {
    raw.trim().replace(',', ".").to_uppercase()
}

/// Whether the value is valid for the kind of angle (inclusive bounds)
pub fn is_within_range(value: f64, kind: AngleKind) -> bool {
    kind.contains(value)
}

/// The hemisphere letter of the sign for the kind of angle.
///
/// Nothing is returned for the bearings or
/// if the `sign` is neither `+1` nor `-1`.
pub const fn hemisphere_letter(sign: i8, kind: AngleKind) -> Option<Hemisphere> {
    Hemisphere::from_sign(sign, kind)
}

/// The capabilities of the angle codec required to parse coordinates.
///
/// Every method has the default implementation
/// provided by the free functions of this module.
pub trait AngleCodec {
    /// See [`is_within_range`]
    fn is_within_range(&self, value: f64, kind: AngleKind) -> bool {
        is_within_range(value, kind)
    }

    /// See [`parse_loose_decimal`]
    fn parse_loose_decimal(&self, raw: &RawAngle<'_>, kind: AngleKind) -> Option<f64> {
        raw.to_number()
            .filter(|&value| self.is_within_range(value, kind))
    }

    /// See [`assemble_from_dms_parts`]
    fn assemble(
        &self,
        degrees: u32,
        minutes: i32,
        seconds: f64,
        hemisphere: Option<char>,
    ) -> Option<f64> {
        assemble_from_dms_parts(degrees, minutes, seconds, hemisphere)
    }

    /// See [`assemble_dms`]
    fn assemble_unsigned(&self, degrees: u32, minutes: i32, seconds: f64) -> Option<f64> {
        assemble_dms(degrees, minutes, seconds)
    }
}

/// The standard angle codec
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Codec;

impl AngleCodec for Codec {}
