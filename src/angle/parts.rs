//! Sexagesimal decomposition of the decimal degrees and the way back

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::utils::round_to;

use super::{
    consts::{MINUTES_IN_DEGREE, SECONDS_IN_DEGREE, SECONDS_IN_MINUTE},
    kind::Hemisphere,
};

/// Degrees, minutes and seconds of an angle with the sign kept aside.
///
/// Can only be produced by decomposing the decimal degrees with [`decompose`],
/// so the minutes and the seconds are always in the range `[0..60)`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DmsParts {
    sign: i8,
    degrees: u32,
    minutes: u8,
    seconds: f64,
}

impl DmsParts {
    /// `+1` for the non-negative values, `-1` otherwise
    pub const fn sign(&self) -> i8 {
        self.sign
    }

    /// Whole degrees of the absolute value
    pub const fn degrees(&self) -> u32 {
        self.degrees
    }

    /// Whole arc minutes
    pub const fn minutes(&self) -> u8 {
        self.minutes
    }

    /// Arc seconds rounded to the requested precision
    pub const fn seconds(&self) -> f64 {
        self.seconds
    }
}

/// Split the decimal degrees into the sign, whole degrees, whole minutes
/// and the seconds rounded to `precision` decimal digits
/// (an exact half goes to the even digit: `22.5″` becomes `22″` with no digits).
///
/// The zero is considered positive.
/// When the seconds get rounded up to a full minute, the minute is carried over
/// (`0.99999999` becomes `1° 00′ 00″`).
///
/// ```
/// use geod_dms::decompose;
///
/// let parts = decompose(145.958_959_966_111_1, 6);
/// assert_eq!(parts.sign(), 1);
/// assert_eq!(parts.degrees(), 145);
/// assert_eq!(parts.minutes(), 57);
/// assert_eq!(parts.seconds(), 32.255_878);
/// ```
pub fn decompose(value: f64, precision: u32) -> DmsParts {
    let sign = if value >= 0.0 { 1 } else { -1 };

    let abs = value.abs();
    let minutes = abs.fract() * f64::from(MINUTES_IN_DEGREE);
    let seconds = minutes.fract() * f64::from(SECONDS_IN_MINUTE);

    let mut degrees = abs.trunc() as u32;
    let mut minutes = minutes.trunc() as u8;
    let mut seconds = round_to(seconds, precision);

    if seconds >= f64::from(SECONDS_IN_MINUTE) {
        seconds = 0.0;
        minutes += 1;
    }
    if minutes >= MINUTES_IN_DEGREE {
        minutes = 0;
        degrees = degrees.saturating_add(1);
    }

    DmsParts {
        sign,
        degrees,
        minutes,
        seconds,
    }
}

/// Convert degrees, minutes and seconds into the decimal degrees.
///
/// Nothing is returned if the minutes or the seconds
/// are not in the range `[0..60)`.
/// The degrees are not limited here, the caller should check the range itself.
pub fn assemble_dms(degrees: u32, minutes: i32, seconds: f64) -> Option<f64> {
    let valid_minutes = 0..i32::from(MINUTES_IN_DEGREE);
    let valid_seconds = 0.0..f64::from(SECONDS_IN_MINUTE);
    if !valid_minutes.contains(&minutes) || !valid_seconds.contains(&seconds) {
        return None;
    }

    Some(
        f64::from(degrees)
            + f64::from(minutes) / f64::from(MINUTES_IN_DEGREE)
            + seconds / f64::from(SECONDS_IN_DEGREE),
    )
}

/// Convert degrees, minutes, seconds and the hemisphere letter into the decimal degrees.
///
/// The result is negative for the `W` and `S` letters.
/// Nothing is returned if the minutes or the seconds
/// are not in the range `[0..60)` or the letter is not a hemisphere.
/// The degrees are not limited here, the caller should check the range of the result.
///
/// ```
/// use geod_dms::assemble_from_dms_parts;
///
/// assert_eq!(assemble_from_dms_parts(100, 35, 44.0, Some('W')), Some(-100.595_555_555_555_55));
/// assert_eq!(assemble_from_dms_parts(100, 60, 0.0, Some('E')), None);
/// assert_eq!(assemble_from_dms_parts(100, 5, 10.0, Some('A')), None);
/// ```
pub fn assemble_from_dms_parts(
    degrees: u32,
    minutes: i32,
    seconds: f64,
    hemisphere: Option<char>,
) -> Option<f64> {
    let abs = assemble_dms(degrees, minutes, seconds)?;
    let hemisphere = Hemisphere::try_from(hemisphere?).ok()?;
    if hemisphere.sign() < 0 {
        Some(-abs)
    } else {
        Some(abs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_tuple(parts: DmsParts) -> (i8, u32, u8, f64) {
        (parts.sign, parts.degrees, parts.minutes, parts.seconds)
    }

    #[test]
    fn zero_is_positive() {
        assert_eq!(as_tuple(decompose(0.0, 3)), (1, 0, 0, 0.0));
        assert_eq!(as_tuple(decompose(-0.0, 3)), (1, 0, 0, 0.0));
    }

    #[test]
    fn whole_degrees() {
        assert_eq!(as_tuple(decompose(-1.0, 3)), (-1, 1, 0, 0.0));
        assert_eq!(as_tuple(decompose(10.0, 3)), (1, 10, 0, 0.0));
        assert_eq!(as_tuple(decompose(180.0, 3)), (1, 180, 0, 0.0));
        assert_eq!(as_tuple(decompose(360.0, 3)), (1, 360, 0, 0.0));
    }

    #[test]
    fn half_degree() {
        assert_eq!(as_tuple(decompose(45.5, 3)), (1, 45, 30, 0.0));
    }

    #[test]
    fn seconds_rounded() {
        assert_eq!(
            as_tuple(decompose(1.016_944_444_444_44, 3)),
            (1, 1, 1, 1.0)
        );
        assert_eq!(
            as_tuple(decompose(100.169_444_444_444_4, 3)),
            (1, 100, 10, 10.0)
        );
        assert_eq!(
            as_tuple(decompose(-120.338_888_888_888_9, 3)),
            (-1, 120, 20, 20.0)
        );
    }

    #[test]
    fn high_precision() {
        assert_eq!(
            as_tuple(decompose(145.958_959_966_111_1, 6)),
            (1, 145, 57, 32.255_878)
        );
    }

    #[test]
    fn half_second_rounded_to_even() {
        // 10° 09′ 22.5″, every step is exact in binary
        assert_eq!(as_tuple(decompose(10.156_25, 0)), (1, 10, 9, 22.0));
        assert_eq!(as_tuple(decompose(10.156_25, 1)), (1, 10, 9, 22.5));
    }

    #[test]
    fn very_high_precision() {
        assert_eq!(as_tuple(decompose(45.5, 300)), (1, 45, 30, 0.0));
        let parts = decompose(145.958_959_966_111_1, 300);
        assert_eq!(parts.minutes(), 57);
        assert!((parts.seconds() - 32.255_878).abs() < 1e-6);
    }

    #[test]
    fn seconds_carried_into_minutes() {
        // 10° 20′ 59.9996″
        let value = 10.0 + 20.0 / 60.0 + 59.9996 / 3600.0;
        assert_eq!(as_tuple(decompose(value, 3)), (1, 10, 21, 0.0));
    }

    #[test]
    fn minutes_carried_into_degrees() {
        assert_eq!(as_tuple(decompose(0.999_999_99, 3)), (1, 1, 0, 0.0));
        assert_eq!(as_tuple(decompose(-89.999_999_99, 2)), (-1, 90, 0, 0.0));
    }

    #[test]
    fn no_carry_with_enough_precision() {
        let parts = decompose(0.999_999_99, 6);
        assert_eq!(parts.degrees(), 0);
        assert_eq!(parts.minutes(), 59);
        assert!(parts.seconds() < 60.0);
    }

    #[test]
    fn assemble_bad_minutes() {
        assert!(assemble_from_dms_parts(100, 61, 59.0, Some('W')).is_none());
        assert!(assemble_from_dms_parts(100, 60, 0.0, Some('W')).is_none());
        assert!(assemble_from_dms_parts(100, -1, 0.0, Some('S')).is_none());
    }

    #[test]
    fn assemble_bad_seconds() {
        assert!(assemble_from_dms_parts(100, 0, 60.0, Some('E')).is_none());
        assert!(assemble_from_dms_parts(100, 0, -0.5, Some('E')).is_none());
        assert!(assemble_from_dms_parts(100, 0, f64::NAN, Some('E')).is_none());
    }

    #[test]
    fn assemble_upper_bounds_are_valid() {
        let dd = assemble_from_dms_parts(0, 59, 59.999, Some('N')).unwrap();
        assert!(dd < 1.0);
        assert!(dd > 0.999);
    }

    #[test]
    fn assemble_bad_hemisphere() {
        assert!(assemble_from_dms_parts(100, 5, 10.0, Some('A')).is_none());
        assert!(assemble_from_dms_parts(100, 5, 10.0, Some('n')).is_none());
        assert!(assemble_from_dms_parts(100, 5, 10.0, None).is_none());
    }

    #[test]
    fn assemble_signed() {
        assert_eq!(
            assemble_from_dms_parts(100, 35, 44.0, Some('N')),
            Some(100.595_555_555_555_55)
        );
        assert_eq!(
            assemble_from_dms_parts(100, 35, 44.0, Some('E')),
            Some(100.595_555_555_555_55)
        );
        assert_eq!(
            assemble_from_dms_parts(100, 35, 44.0, Some('W')),
            Some(-100.595_555_555_555_55)
        );
        assert_eq!(
            assemble_from_dms_parts(100, 35, 44.0, Some('S')),
            Some(-100.595_555_555_555_55)
        );
    }

    #[test]
    fn degrees_are_not_limited() {
        assert_eq!(assemble_from_dms_parts(200, 0, 0.0, Some('E')), Some(200.0));
    }

    #[test]
    fn assemble_unsigned() {
        assert!(assemble_dms(100, 61, 59.0).is_none());
        assert!(assemble_dms(100, 0, 60.0).is_none());
        assert!(assemble_dms(100, -1, 0.0).is_none());
        assert_eq!(assemble_dms(100, 35, 44.0), Some(100.595_555_555_555_55));
    }
}
