//! Conversion of geographic angles (longitude, latitude and bearing)
//! between the decimal degrees and the degrees-minutes-seconds text.
//!
//! ```
//! use geod_dms::{format_angle, parse_angle, AngleKind, OutputFormat};
//!
//! let dms = format_angle(-145.958_959_966_111_1, AngleKind::Longitude, OutputFormat::HemisphereFirst, 3);
//! assert_eq!(dms.unwrap(), "W145 57 32.256");
//!
//! assert_eq!(parse_angle("1800000E", AngleKind::Longitude), Some(180.0));
//! assert_eq!(parse_angle("E900000", AngleKind::Latitude), None);
//! ```

// do not warn on older Rust versions
#![allow(unknown_lints)]
//
// The following list was generated with the command
//   $ rustc -W help | grep ' allow ' | awk '{print $1}' | tr - _ | sort | xargs -I{} echo '#![warn({})]'
//
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
// conflicts with the `clippy::redundant_pub_crate`
#![allow(unreachable_pub)]
// !!! NO UNSAFE
#![forbid(unsafe_code)]
#![warn(unstable_features)]
#![warn(unused_crate_dependencies)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]
#![warn(unused_labels)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]
#![warn(unused_results)]
#![warn(variant_size_differences)]
//
// additional recommendations
#![deny(clippy::mem_forget)]
// suppress some pedantic warnings
#![allow(clippy::non_ascii_literal)]
#![allow(clippy::must_use_candidate)]
// the degrees and minutes are truncated from the floats deliberately
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
// `use super::*` in tests
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub use angle::{
    assemble_dms, assemble_from_dms_parts, decompose, format, hemisphere_letter, is_within_range,
    normalize, parse_loose_decimal, AngleCodec, AngleError, AngleKind, Codec, DecimalAngle,
    DmsFormatter, DmsParts, FormatError, Hemisphere, OutputFormat, ParseFormatError,
    ParseHemisphereError, ParseKindError, RangeError, RawAngle, DEFAULT_PRECISION,
};
pub use coord::CoordinateParser;
pub use node::{AxisOrder, NodeFormatter, ParseAxisOrderError};

mod angle;
mod coord;
mod node;
mod utils;

/// Render the decimal degrees as DMS text.
///
/// The usual choice of the layout is [`OutputFormat::default`]
/// and the precision is [`DEFAULT_PRECISION`].
///
/// # Errors
/// - [`AngleError::Range`] if the value is out of range for the kind;
/// - [`AngleError::Format`] if the `precision` is negative or
///   the layout is not applicable to the kind.
pub fn format_angle(
    value: f64,
    kind: AngleKind,
    output: OutputFormat,
    precision: i32,
) -> Result<String, AngleError> {
    format(value, kind, output, precision)
}

/// Convert the free-form text (or a number) into the decimal degrees.
///
/// Nothing is returned when the input is not recognized
/// as a valid angle of the given kind.
/// See [`CoordinateParser::parse`] for the supported layouts.
pub fn parse_angle<'a>(raw: impl Into<RawAngle<'a>>, kind: AngleKind) -> Option<f64> {
    CoordinateParser::new(kind).parse(raw)
}
