//! Fixed-width DMS without any separators: `1233021.5555E` or `N233021.5555`

use lazy_static::lazy_static;
use log::trace;
use regex::{Captures, Regex};

use crate::angle::{AngleCodec, AngleKind};

use super::CoordinateParser;

const LONGITUDE_DEGREES: &str = r"180|1[0-7]\d|0\d{2}";
const LATITUDE_DEGREES: &str = r"90|[0-8]\d";

/// Construct regular expression to parse the compacted Degree-Minute-Second-Hemisphere
/// (or Hemisphere-Degree-Minute-Second) representation of the angle
fn compacted_re(degrees: &str, hemispheres: &str, hemisphere_first: bool) -> String {
    let dms = format!(
        r"(?x)
        (?P<deg>{degrees})                  # fixed-width degrees VALUE - the range requires more validation!
        (?P<min>[0-5]\d)                    # minutes VALUE (00..=59)
        (?P<sec>[0-5]\d(?:\.\d+)?)          # whole seconds (00..=59) with the optional decimal fraction
        "
    );
    let hem = format!(r"(?P<hem>[{hemispheres}])");

    let body = if hemisphere_first {
        format!("{hem}{dms}")
    } else {
        format!("{dms}{hem}")
    };

    // match the whole line, from the start till the end
    format!("^(?:{body})$")
}

/// One of the fixed-width layouts
#[derive(Debug)]
struct Layout {
    name: &'static str,
    re: Regex,
}

impl Layout {
    fn new(name: &'static str, degrees: &str, hemispheres: &str, hemisphere_first: bool) -> Self {
        let re = Regex::new(&compacted_re(degrees, hemispheres, hemisphere_first))
            .expect("Compacted DMS regex is valid");
        Self { name, re }
    }

    /// The hemisphere last goes first
    fn both(degrees: &str, hemispheres: &str) -> [Self; 2] {
        [
            Self::new("DMSH", degrees, hemispheres, false),
            Self::new("HDMS", degrees, hemispheres, true),
        ]
    }
}

lazy_static! {
    static ref LONGITUDE_LAYOUTS: [Layout; 2] = Layout::both(LONGITUDE_DEGREES, "EW");
    static ref LATITUDE_LAYOUTS: [Layout; 2] = Layout::both(LATITUDE_DEGREES, "NS");
}

fn layouts(kind: AngleKind) -> &'static [Layout] {
    match kind {
        AngleKind::Longitude => LONGITUDE_LAYOUTS.as_slice(),
        AngleKind::Latitude => LATITUDE_LAYOUTS.as_slice(),
        AngleKind::Bearing => &[],
    }
}

impl<C: AngleCodec> CoordinateParser<C> {
    /// Convert the compacted DMSH or HDMS text into the decimal degrees.
    ///
    /// The text should be already [normalized](crate::normalize).
    /// Nothing is returned if the text does not match any layout completely,
    /// the minutes or seconds are not valid or the result is out of range.
    pub fn parse_compacted(&self, text: &str) -> Option<f64> {
        layouts(self.kind).iter().find_map(|layout| {
            let captures = layout.re.captures(text)?;
            let dd = self.assemble_captures(&captures)?;
            trace!("{text:?} parsed as compacted {} {}", layout.name, self.kind);
            Some(dd)
        })
    }

    fn assemble_captures(&self, captures: &Captures<'_>) -> Option<f64> {
        let degrees = captures.name("deg")?.as_str().parse().ok()?;
        let minutes = captures.name("min")?.as_str().parse().ok()?;
        let seconds = captures.name("sec")?.as_str().parse().ok()?;
        let hemisphere = captures.name("hem")?.as_str().chars().next();

        let dd = self.codec.assemble(degrees, minutes, seconds, hemisphere)?;
        self.validate(dd)
    }
}
