//! Rendering the decimal degrees as DMS text

use std::{error::Error, fmt, str::FromStr};

use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{
    consts::{DEFAULT_PRECISION, MINUTES_WIDTH, SECONDS_WIDTH},
    errors::{AngleError, FormatError, RangeError},
    hemisphere_letter, is_within_range,
    kind::{AngleKind, Hemisphere},
    parts::{decompose, DmsParts},
};

/// Layout of the DMS text
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OutputFormat {
    /// All the fields separated with a space, hemisphere first: `E 145 57 32.256`
    HemisphereFirstSpaced,
    /// Hemisphere first, attached to the degrees: `W145 57 32.256`
    HemisphereFirst,
    /// All the fields separated with a space, hemisphere last: `145 57 32.256 E`
    #[default]
    HemisphereLastSpaced,
    /// Hemisphere last, attached to the seconds: `145 57 32.256E`
    HemisphereLast,
    /// Only the degrees, minutes and seconds, for bearings: `45 57 32.256`
    NoHemisphere,
}

impl OutputFormat {
    /// All the layouts
    pub const ALL: [Self; 5] = [
        Self::HemisphereFirstSpaced,
        Self::HemisphereFirst,
        Self::HemisphereLastSpaced,
        Self::HemisphereLast,
        Self::NoHemisphere,
    ];

    /// The layout used when none is specified for the kind
    pub const fn default_for(kind: AngleKind) -> Self {
        match kind {
            AngleKind::Longitude | AngleKind::Latitude => Self::HemisphereLastSpaced,
            AngleKind::Bearing => Self::NoHemisphere,
        }
    }

    /// Whether the kind of angle can be rendered with the layout
    pub fn supports(self, kind: AngleKind) -> bool {
        Template::lookup(kind, self).is_some()
    }

    const fn name(self) -> &'static str {
        match self {
            Self::HemisphereFirstSpaced => "HDMS_ALL_SEP",
            Self::HemisphereFirst => "HDMS_SEP",
            Self::HemisphereLastSpaced => "DMSH_ALL_SEP",
            Self::HemisphereLast => "DMSH_SEP",
            Self::NoHemisphere => "DMS_SEP",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug)]
/// Unknown name of the layout
pub struct ParseFormatError {
    failed: String,
}

impl fmt::Display for ParseFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot parse OutputFormat from {:?}", self.failed)
    }
}

impl Error for ParseFormatError {}

impl FromStr for OutputFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseFormatError {
                failed: s.to_owned(),
            })
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum HemispherePosition {
    Leading,
    Trailing,
    Absent,
}

/// How to lay out the fields of one (kind, format) pair
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Template {
    hemisphere: HemispherePosition,
    // is the hemisphere letter separated from the numbers
    spaced: bool,
    degree_width: usize,
}

impl Template {
    const fn new(kind: AngleKind, hemisphere: HemispherePosition, spaced: bool) -> Self {
        Self {
            hemisphere,
            spaced,
            degree_width: kind.degree_width(),
        }
    }

    fn lookup(kind: AngleKind, format: OutputFormat) -> Option<Self> {
        TEMPLATES
            .iter()
            .find(|(k, f, _)| *k == kind && *f == format)
            .map(|&(_, _, template)| template)
    }

    fn render(self, parts: &DmsParts, hemisphere: Option<Hemisphere>, seconds: &str) -> String {
        let dms = format!(
            "{:0dw$} {:0mw$} {}",
            parts.degrees(),
            parts.minutes(),
            seconds,
            dw = self.degree_width,
            mw = MINUTES_WIDTH,
        );

        let sep = if self.spaced { " " } else { "" };
        match (self.hemisphere, hemisphere) {
            (HemispherePosition::Leading, Some(hem)) => format!("{hem}{sep}{dms}"),
            (HemispherePosition::Trailing, Some(hem)) => format!("{dms}{sep}{hem}"),
            _ => dms,
        }
    }
}

macro_rules! template_table {
    ($($kind:ident, $format:ident => $position:ident, $spaced:literal;)+) => {
        [$(
            (
                AngleKind::$kind,
                OutputFormat::$format,
                Template::new(AngleKind::$kind, HemispherePosition::$position, $spaced),
            ),
        )+]
    };
}

const TEMPLATES: [(AngleKind, OutputFormat, Template); 9] = template_table! {
    Longitude, HemisphereFirstSpaced => Leading, true;
    Longitude, HemisphereFirst => Leading, false;
    Longitude, HemisphereLastSpaced => Trailing, true;
    Longitude, HemisphereLast => Trailing, false;
    Latitude, HemisphereFirstSpaced => Leading, true;
    Latitude, HemisphereFirst => Leading, false;
    Latitude, HemisphereLastSpaced => Trailing, true;
    Latitude, HemisphereLast => Trailing, false;
    Bearing, NoHemisphere => Absent, false;
};

fn render_seconds(seconds: f64, precision: u32) -> String {
    if precision == 0 {
        format!("{:0w$.0}", seconds, w = SECONDS_WIDTH)
    } else {
        let precision = precision as usize;
        // whole part, the dot and the fraction
        let width = SECONDS_WIDTH + 1 + precision;
        format!("{seconds:0width$.precision$}")
    }
}

/// Render the decimal degrees as DMS text.
///
/// The seconds are rounded to `precision` decimal digits.
///
/// # Errors
/// - [`RangeError`] if the value is out of range for the kind;
/// - [`FormatError`] if the `precision` is negative or
///   the layout is not applicable to the kind (e.g. bearing with a hemisphere).
///
/// ```
/// use geod_dms::{format, AngleKind, OutputFormat};
///
/// let dms = format(-145.958_959_966_111_1, AngleKind::Longitude, OutputFormat::HemisphereFirst, 3);
/// assert_eq!(dms.unwrap(), "W145 57 32.256");
/// ```
pub fn format(
    value: f64,
    kind: AngleKind,
    format: OutputFormat,
    precision: i32,
) -> Result<String, AngleError> {
    if !is_within_range(value, kind) {
        debug!("Refuse to format {value} as {kind}: out of range");
        return Err(RangeError::new(value, kind).into());
    }

    let precision = u32::try_from(precision).map_err(|_| {
        debug!("Refuse to format {value} with {precision} digits of seconds");
        FormatError::InvalidPrecision(precision)
    })?;

    let template = Template::lookup(kind, format).ok_or_else(|| {
        debug!("No {format} template for {kind}");
        FormatError::UnsupportedLayout { kind, format }
    })?;

    let parts = decompose(value, precision);
    let hemisphere = hemisphere_letter(parts.sign(), kind);
    let seconds = render_seconds(parts.seconds(), precision);
    Ok(template.render(&parts, hemisphere, &seconds))
}

/// Reusable rendering settings: the layout and the precision of the seconds
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DmsFormatter {
    format: OutputFormat,
    precision: i32,
}

impl Default for DmsFormatter {
    fn default() -> Self {
        Self::new(OutputFormat::default(), i32::from(DEFAULT_PRECISION))
    }
}

impl DmsFormatter {
    /// Construct the formatter with the given layout and precision
    pub const fn new(format: OutputFormat, precision: i32) -> Self {
        Self { format, precision }
    }

    /// Replace the layout
    pub const fn with_format(self, format: OutputFormat) -> Self {
        Self { format, ..self }
    }

    /// Replace the number of decimal digits of the seconds
    pub const fn with_precision(self, precision: i32) -> Self {
        Self { precision, ..self }
    }

    /// The layout of the produced text
    pub const fn output_format(&self) -> OutputFormat {
        self.format
    }

    /// The number of decimal digits of the seconds
    pub const fn precision(&self) -> i32 {
        self.precision
    }

    /// Render the value with the stored settings.
    ///
    /// # Errors
    /// See [`format`].
    pub fn format(&self, value: f64, kind: AngleKind) -> Result<String, AngleError> {
        format(value, kind, self.format, self.precision)
    }
}
