//! Labels for the polygon nodes: the longitude and the latitude of a vertex in one line

use std::{error::Error, fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::angle::{AngleError, AngleKind, DmsFormatter};

/// Which coordinate goes first in the label
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AxisOrder {
    /// `145 57 32.256 E 45 57 32.256 N`
    #[default]
    LonLat,
    /// `45 57 32.256 N 145 57 32.256 E`
    LatLon,
}

impl AxisOrder {
    const fn name(self) -> &'static str {
        match self {
            Self::LonLat => "lon-lat",
            Self::LatLon => "lat-lon",
        }
    }
}

impl fmt::Display for AxisOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug)]
/// Unknown name of the axis order
pub struct ParseAxisOrderError {
    failed: String,
}

impl fmt::Display for ParseAxisOrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot parse AxisOrder from {:?}", self.failed)
    }
}

impl Error for ParseAxisOrderError {}

impl FromStr for AxisOrder {
    type Err = ParseAxisOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        [Self::LonLat, Self::LatLon]
            .into_iter()
            .find(|order| order.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseAxisOrderError {
                failed: s.to_owned(),
            })
    }
}

/// Renders both coordinates of a vertex with the same settings
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NodeFormatter {
    order: AxisOrder,
    formatter: DmsFormatter,
}

impl NodeFormatter {
    /// Construct the formatter for the labels
    pub const fn new(order: AxisOrder, formatter: DmsFormatter) -> Self {
        Self { order, formatter }
    }

    /// Replace the order of coordinates
    pub const fn with_order(self, order: AxisOrder) -> Self {
        Self { order, ..self }
    }

    /// Replace the settings of every coordinate
    pub const fn with_formatter(self, formatter: DmsFormatter) -> Self {
        Self { formatter, ..self }
    }

    /// The order of coordinates
    pub const fn order(&self) -> AxisOrder {
        self.order
    }

    /// The settings of every coordinate
    pub const fn formatter(&self) -> DmsFormatter {
        self.formatter
    }

    /// Render the vertex as the two DMS coordinates separated by a space.
    ///
    /// # Errors
    /// When any coordinate is out of range
    /// or the layout is not applicable to the longitudes and latitudes.
    ///
    /// ```
    /// use geod_dms::{AxisOrder, NodeFormatter};
    ///
    /// let label = NodeFormatter::default().with_order(AxisOrder::LatLon);
    /// assert_eq!(label.label(-0.5, 45.5).unwrap(), "45 30 00.000 N 000 30 00.000 W");
    /// ```
    pub fn label(&self, lon: f64, lat: f64) -> Result<String, AngleError> {
        let lon = self.formatter.format(lon, AngleKind::Longitude)?;
        let lat = self.formatter.format(lat, AngleKind::Latitude)?;

        Ok(match self.order {
            AxisOrder::LonLat => format!("{lon} {lat}"),
            AxisOrder::LatLon => format!("{lat} {lon}"),
        })
    }
}
