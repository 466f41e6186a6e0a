pub(crate) const FULL_TURN_DEG: u16 = 360;
pub(crate) const HALF_TURN_DEG: u16 = FULL_TURN_DEG >> 1;
pub(crate) const QUARTER_TURN_DEG: u16 = HALF_TURN_DEG >> 1;

pub(crate) const MINUTES_IN_DEGREE: u8 = 60;
pub(crate) const SECONDS_IN_MINUTE: u8 = 60;
pub(crate) const SECONDS_IN_DEGREE: u16 = MINUTES_IN_DEGREE as u16 * SECONDS_IN_MINUTE as u16;

/// Zero-padded width of the minutes field
pub(crate) const MINUTES_WIDTH: usize = 2;
/// Zero-padded width of the whole part of the seconds field
pub(crate) const SECONDS_WIDTH: usize = 2;

/// The number of decimal digits of arcseconds used when nothing else is requested
pub const DEFAULT_PRECISION: u8 = 3;
