//! Utilities functions which do not linked to domain

#[doc(hidden)]
#[macro_export]
/// Implements `From` trait for newtype-like enum variants
macro_rules! enum_trivial_from_impl {
    ($from:ty => $to:ty:$constructor:ident) => {
        impl From<$from> for $to {
            fn from(val: $from) -> Self {
                Self::$constructor(val)
            }
        }
    };
}

/// Strip the given character from the beginning or the end
pub(crate) trait StripChar {
    /// Strip the character from the beginning
    fn strip_prefix_char(self, ch: char) -> Option<String>;
    /// Strip the character from the end
    fn strip_suffix_char(self, ch: char) -> Option<String>;
    /// Split into the first character and the rest of the string
    fn split_first(self) -> Option<(char, String)>;
    /// Split into the last character and the rest of the string
    fn split_last(self) -> Option<(String, char)>;
}

impl StripChar for &str {
    fn strip_prefix_char(self, ch: char) -> Option<String> {
        self.strip_prefix(ch).map(ToOwned::to_owned)
    }

    fn strip_suffix_char(self, ch: char) -> Option<String> {
        self.strip_suffix(ch).map(ToOwned::to_owned)
    }

    fn split_first(self) -> Option<(char, String)> {
        self.chars().next().and_then(|head| {
            self.strip_prefix_char(head)
                .map(|stripped| (head, stripped))
        })
    }

    fn split_last(self) -> Option<(String, char)> {
        self.chars().last().and_then(|tail| {
            self.strip_suffix_char(tail)
                .map(|stripped| (stripped, tail))
        })
    }
}

/// Round the value to the given number of decimal digits.
/// The exact halves are rounded to the even digit (`12.5` becomes `12`).
///
/// When the scaled value cannot hold the requested digits
/// (too many of them for the `f64` mantissa), the value is returned as is.
pub(crate) fn round_to(value: f64, digits: u32) -> f64 {
    // 2^53: every bigger float is already an integer
    const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

    let factor = i32::try_from(digits).map_or(f64::INFINITY, |digits| 10_f64.powi(digits));
    let scaled = value * factor;
    if !scaled.is_finite() || scaled.abs() >= EXACT_INTEGER_LIMIT {
        return value;
    }

    scaled.round_ties_even() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    //noinspection SpellCheckingInspection
    #[test]
    fn strip_prefix_matches() {
        let s = "Hello";
        assert_eq!(s.strip_prefix_char('H').unwrap(), "ello");
    }

    #[test]
    fn strip_prefix_no_match() {
        let s = "Hello";
        assert!(s.strip_prefix_char('W').is_none());
    }

    //noinspection SpellCheckingInspection
    #[test]
    fn strip_suffix_matches() {
        let s = "World";
        assert_eq!(s.strip_suffix_char('d').unwrap(), "Worl");
    }

    #[test]
    fn strip_suffix_no_match() {
        let s = "World";
        assert!(s.strip_suffix_char('o').is_none());
    }

    #[test]
    fn split_head() {
        let s = "E 145";
        assert_eq!(s.split_first().unwrap(), ('E', " 145".into()));
    }

    #[test]
    fn split_head_empty() {
        let s = "";
        assert!(s.split_first().is_none());
    }

    #[test]
    fn split_head_single() {
        let s = "N";
        assert_eq!(s.split_first().unwrap(), ('N', String::new()));
    }

    #[test]
    fn split_tail() {
        let s = "45 30 00S";
        assert_eq!(s.split_last().unwrap(), ("45 30 00".into(), 'S'));
    }

    #[test]
    fn split_tail_empty() {
        let s = "";
        assert!(s.split_last().is_none());
    }

    #[test]
    fn split_tail_multibyte() {
        let s = "12°";
        assert_eq!(s.split_last().unwrap(), ("12".into(), '°'));
    }

    #[test]
    fn round_digits() {
        assert_eq!(round_to(32.255_877_999_96, 6), 32.255_878);
        assert_eq!(round_to(0.999_999_9, 3), 1.0);
        assert_eq!(round_to(12.5, 0), 12.0);
        assert_eq!(round_to(13.5, 0), 14.0);
        assert_eq!(round_to(0.125, 2), 0.12);
    }

    #[test]
    fn round_too_many_digits_keeps_value() {
        let value = 59.123_456_789;
        assert_eq!(round_to(value, 200), value);
        assert_eq!(round_to(value, u32::MAX), value);
    }
}
