//! Recognize the longitude or the latitude in one of the textual layouts.
//!
//! The layouts are probed from the cheapest and the most specific one:
//! 1. plain decimal degrees (`-133.55666`);
//! 2. compacted fixed-width DMS (`1233021.5555E`, `N233021.5555`);
//! 3. space-separated DMS (`045 23 41.7888 W`, `S 03 09 02.111`).
//!
//! The first layout producing a valid value wins.
//! Inputs matching no layout produce nothing, never an error.

use log::{debug, trace};

use crate::angle::{normalize, AngleCodec, AngleKind, Codec, RawAngle};

mod compacted;
mod separated;

/// Converts the free-form text into the decimal degrees
/// of the specific kind of angle
#[derive(Debug, Copy, Clone)]
pub struct CoordinateParser<C = Codec> {
    codec: C,
    kind: AngleKind,
}

impl CoordinateParser {
    /// The parser backed by the standard codec
    pub const fn new(kind: AngleKind) -> Self {
        Self { codec: Codec, kind }
    }
}

impl<C: AngleCodec> CoordinateParser<C> {
    /// The parser validating and assembling the values with the custom codec
    pub const fn with_codec(codec: C, kind: AngleKind) -> Self {
        Self { codec, kind }
    }

    /// The kind of the parsed angles
    pub const fn kind(&self) -> AngleKind {
        self.kind
    }

    /// Convert the raw angle to the decimal degrees.
    ///
    /// The numbers are only checked for the range.
    /// The text is tried as the decimal degrees, then as the compacted DMS,
    /// then as the space-separated DMS.
    ///
    /// Every stage sees the [normalized](crate::normalize) text, so the surrounding blanks,
    /// the lower-case hemisphere letters, the decimal comma and the repeated blanks
    /// between the DMS fields are tolerated in all the layouts, not only in the decimal one.
    ///
    /// ```
    /// use geod_dms::{AngleKind, CoordinateParser};
    ///
    /// let lon = CoordinateParser::new(AngleKind::Longitude);
    /// assert_eq!(lon.parse("1800000E"), Some(180.0));
    /// assert_eq!(lon.parse("3 60 2.111E"), None);
    /// ```
    pub fn parse<'a>(&self, raw: impl Into<RawAngle<'a>>) -> Option<f64> {
        let raw = raw.into();
        if let Some(dd) = self.codec.parse_loose_decimal(&raw, self.kind) {
            trace!("{raw} parsed as decimal {}", self.kind);
            return Some(dd);
        }

        let RawAngle::Text(text) = &raw else {
            debug!("{raw} is not a valid {}", self.kind);
            return None;
        };

        let text = normalize(&text);
        let dd = self
            .parse_compacted(&text)
            .or_else(|| self.parse_separated(&text));

        if dd.is_none() {
            debug!("{raw} is not recognized as {}", self.kind);
        }
        dd
    }

    fn validate(&self, dd: f64) -> Option<f64> {
        if self.codec.is_within_range(dd, self.kind) {
            Some(dd)
        } else {
            trace!("{dd} is out of the {} range", self.kind);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn lon(s: &str) -> Option<f64> {
        CoordinateParser::new(AngleKind::Longitude).parse(s)
    }

    fn lat(s: &str) -> Option<f64> {
        CoordinateParser::new(AngleKind::Latitude).parse(s)
    }

    #[test]
    fn valid_longitudes() {
        let cases = [
            ("180", 180.0),
            ("-133.55666", -133.556_66),
            ("E1233021.5555", 123.505_987_638_888_88),
            ("045 23 41.7888 W", -45.394_941_333_333_335),
            ("3 9 2.111E", 3.150_586_388_888_888_8),
            ("W 003 09 02.111", -3.150_586_388_888_888_8),
        ];

        for (text, expected) in cases {
            dbg!(text);
            assert_abs_diff_eq!(lon(text).unwrap(), expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn valid_latitudes() {
        let cases = [
            ("90", 90.0),
            ("-33.55666", -33.556_66),
            ("N233021.5555", 23.505_987_638_888_88),
            ("45 23 41.7888 S", -45.394_941_333_333_335),
            ("3 9 2.111N", 3.150_586_388_888_888_8),
            ("S 03 09 02.111", -3.150_586_388_888_888_8),
        ];

        for (text, expected) in cases {
            dbg!(text);
            assert_abs_diff_eq!(lat(text).unwrap(), expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn invalid_longitudes() {
        for text in [
            "181",
            "-180.55666",
            "S1233021.5555",
            "045 023 41.7888 W",
            "3 60 2.111E",
            "W 003 09 60.111",
        ] {
            assert!(lon(text).is_none(), "{text}");
        }
    }

    #[test]
    fn invalid_latitudes() {
        for text in [
            "91.55666",
            "E233021.5555",
            "045 23 41.7888 S",
            "3 60 2.111N",
            "S 03 09 60.00",
        ] {
            assert!(lat(text).is_none(), "{text}");
        }
        assert!(CoordinateParser::new(AngleKind::Latitude)
            .parse(91)
            .is_none());
    }

    #[test]
    fn numbers() {
        let parser = CoordinateParser::new(AngleKind::Latitude);
        assert_eq!(parser.parse(-90), Some(-90.0));
        assert_eq!(parser.parse(45.25), Some(45.25));
        assert!(parser.parse(-90.5).is_none());
    }

    #[test]
    fn lower_case_and_comma() {
        assert_abs_diff_eq!(
            lon("  045 23 41,7888 w ").unwrap(),
            -45.394_941_333_333_335,
            epsilon = 1e-12
        );
        assert_eq!(lat("n900000"), Some(90.0));
    }

    #[test]
    fn normalized_before_every_layout() {
        assert_eq!(lat(" 45 30 00 N"), Some(45.5));
        assert_eq!(lat("n900000"), Some(90.0));
        assert_eq!(lat("N  45  30 00"), Some(45.5));
        assert_eq!(lon(" e 045 30 00,5 "), lon("E 045 30 00.5"));
    }

    #[test]
    fn garbage() {
        for text in ["", " ", "E", "N", "abc", "12:30:00", "45°30′N"] {
            assert!(lon(text).is_none(), "{text}");
            assert!(lat(text).is_none(), "{text}");
        }
    }

    #[test]
    fn bearing() {
        let parser = CoordinateParser::new(AngleKind::Bearing);
        assert_eq!(parser.parse("360"), Some(360.0));
        assert_eq!(parser.parse("270 30 00"), Some(270.5));
        assert!(parser.parse("2703000").is_none());
        assert!(parser.parse("270 30 00 E").is_none());
        assert!(parser.parse("360 00 01").is_none());
    }

    #[derive(Debug, Copy, Clone)]
    struct EasternOnly;

    impl AngleCodec for EasternOnly {
        fn is_within_range(&self, value: f64, kind: AngleKind) -> bool {
            value >= 0.0 && kind.contains(value)
        }
    }

    #[test]
    fn custom_codec_is_used_by_every_stage() {
        let parser = CoordinateParser::with_codec(EasternOnly, AngleKind::Longitude);
        assert_eq!(parser.kind(), AngleKind::Longitude);
        assert_eq!(parser.parse("1800000E"), Some(180.0));
        assert!(parser.parse("1800000W").is_none());
        assert!(parser.parse("W 180 00 00").is_none());
        assert!(parser.parse("-10").is_none());
        assert_eq!(parser.parse(10), Some(10.0));
    }
}
