//! DMS with the fields separated by blanks: `045 23 41.7888 W` or `S 03 09 02.111`

use log::trace;

use crate::{
    angle::{AngleCodec, Hemisphere, MINUTES_WIDTH},
    utils::StripChar,
};

use super::CoordinateParser;

impl<C: AngleCodec> CoordinateParser<C> {
    /// Convert the space-separated DMS text with the leading or trailing
    /// hemisphere letter into the decimal degrees.
    /// For the bearings no letter is expected.
    ///
    /// The text should be already [normalized](crate::normalize).
    /// Nothing is returned if there are not exactly three fields,
    /// some field cannot be parsed, the minutes or seconds are not valid
    /// or the result is out of range.
    pub fn parse_separated(&self, text: &str) -> Option<f64> {
        let (hemisphere, rest) = self.split_hemisphere(text)?;

        let fields: Vec<_> = rest.split_whitespace().collect();
        let [degrees, minutes, seconds] = fields.as_slice() else {
            return None;
        };

        // loose width guard, the zero-padding is not required
        if degrees.chars().count() > self.kind.max_degree_digits()
            || minutes.chars().count() > MINUTES_WIDTH
        {
            return None;
        }

        let degrees = degrees.parse().ok()?;
        let minutes = minutes.parse().ok()?;
        let seconds = seconds.parse().ok()?;

        let dd = match hemisphere {
            Some(hemisphere) => {
                self.codec
                    .assemble(degrees, minutes, seconds, Some(hemisphere.letter()))
            }
            None => self.codec.assemble_unsigned(degrees, minutes, seconds),
        }?;

        let dd = self.validate(dd)?;
        trace!("{text:?} parsed as separated {}", self.kind);
        Some(dd)
    }

    /// Detect the hemisphere letter at the start (HDMS) or at the end (DMSH)
    /// and return it with the rest of the text
    fn split_hemisphere(&self, text: &str) -> Option<(Option<Hemisphere>, String)> {
        if self.kind.hemispheres().is_none() {
            return Some((None, text.to_owned()));
        }

        let (first, rest) = text.split_first()?;
        if let Some(hemisphere) = Hemisphere::from_letter(first, self.kind) {
            return Some((Some(hemisphere), rest));
        }

        if !first.is_ascii_digit() {
            return None;
        }

        let (rest, last) = text.split_last()?;
        Hemisphere::from_letter(last, self.kind).map(|hemisphere| (Some(hemisphere), rest))
    }
}
