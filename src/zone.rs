//! Time zones, in the limited sense this library needs them: a rule for
//! turning an instant into a number of seconds east of UTC.

use std::error;
use std::fmt;

use instant::Instant;
use system::sys_utc_offset;


/// A **zone** decides which UTC offset applies to a given instant.
///
/// There are only three kinds. Full zoneinfo support, with historical
/// transition tables, is a much bigger job than a clock formatter needs:
/// the operating system already knows the local rules, and everything
/// else a user types is either UTC or a fixed offset from it.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Zone {

    /// Coordinated Universal Time itself. The offset is always zero.
    Utc,

    /// A fixed number of seconds east of UTC, which never changes no
    /// matter the instant. Negative values are west of UTC.
    Fixed(i32),

    /// Whatever the operating system says local time is. The offset is
    /// looked up per instant, so daylight-saving transitions are honoured.
    System,
}

impl Zone {

    /// Parses a zone out of a user-supplied string.
    ///
    /// An empty string, `system`, or `default` all mean the system zone;
    /// `Z`, `UTC`, and `GMT` mean UTC; and anything of the shape
    /// `UTC+2`, `GMT-07:00`, `+0530`, or `-11` becomes a fixed offset.
    /// Matching is case-insensitive throughout.
    pub fn parse(input: &str) -> Result<Self, ZoneError> {
        let trimmed = input.trim();
        let lower = trimmed.to_ascii_lowercase();

        match &*lower {
            "" | "system" | "default"  => return Ok(Self::System),
            "z" | "utc" | "gmt"        => return Ok(Self::Utc),
            _                          => {},
        }

        let offset_part = if lower.starts_with("utc") || lower.starts_with("gmt") {
            &trimmed[3..]
        }
        else {
            trimmed
        };

        match parse_offset(offset_part) {
            Some(seconds) => {
                if seconds <= -86400 || seconds >= 86400 {
                    Err(ZoneError::OutOfRange(trimmed.to_string()))
                }
                else {
                    Ok(Self::Fixed(seconds))
                }
            }
            None => Err(ZoneError::Unrecognised(trimmed.to_string())),
        }
    }

    /// The offset, in seconds east of UTC, that this zone applies to the
    /// given instant.
    pub fn offset_at(&self, instant: Instant) -> i32 {
        match *self {
            Self::Utc            => 0,
            Self::Fixed(seconds) => seconds,
            Self::System         => sys_utc_offset(instant.seconds()),
        }
    }
}

/// Parses strings of the shape `+H`, `-HH`, `+HH:MM`, or `-HHMM` into a
/// signed number of seconds. The sign is mandatory.
fn parse_offset(input: &str) -> Option<i32> {
    let mut chars = input.chars();

    let sign = match chars.next() {
        Some('+') =>  1,
        Some('-') => -1,
        _         => return None,
    };

    let rest = &input[1..];
    if rest.is_empty() || ! rest.chars().all(|c| c.is_ascii_digit() || c == ':') {
        return None;
    }

    let (hours_str, minutes_str) = if let Some(colon) = rest.find(':') {
        (&rest[.. colon], &rest[colon + 1 ..])
    }
    else if rest.len() == 4 {
        (&rest[.. 2], &rest[2 ..])
    }
    else {
        (rest, "")
    };

    let hours: i32 = hours_str.parse().ok()?;
    let minutes: i32 = if minutes_str.is_empty() { 0 } else { minutes_str.parse().ok()? };

    if minutes >= 60 {
        return None;
    }

    Some(sign * (hours * 3600 + minutes * 60))
}


/// Something wrong with a string that was supposed to name a zone.
#[derive(PartialEq, Debug, Clone)]
pub enum ZoneError {

    /// The string doesn’t look like any zone this library knows about.
    Unrecognised(String),

    /// The string parsed as an offset, but one further from UTC than a
    /// whole day, which no real zone is.
    OutOfRange(String),
}

impl fmt::Display for ZoneError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ZoneError::Unrecognised(ref tz)  => write!(f, "Unrecognised time zone {:?}", tz),
            ZoneError::OutOfRange(ref tz)    => write!(f, "Time zone offset out of range {:?}", tz),
        }
    }
}

impl error::Error for ZoneError {
    fn description(&self) -> &str {
        "time zone error"
    }
}
