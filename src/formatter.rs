//! The contract every formatting backend signs up to, and the
//! configuration and errors that travel across it.

use std::error;
use std::fmt;

use instant::Instant;
use names::LocaleError;
use zone::ZoneError;


/// A **formatter** is a configured formatting backend: build one from a
/// [`Config`], then feed it patterns and instants as often as you like.
///
/// Implementations are expected to do their expensive work (parsing the
/// zone, loading name tables) at construction time, and to cache
/// compiled patterns internally, so `format` stays cheap enough to call
/// from a once-a-second timer.
pub trait Formatter {

    /// Renders the instant according to the pattern.
    fn format(&self, pattern: &str, instant: Instant) -> Result<String, Error>;
}

impl fmt::Debug for dyn Formatter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Formatter")
    }
}


/// User-facing configuration for building a formatter. A `None` in any
/// slot means “whatever the system default is”.
#[derive(PartialEq, Debug, Clone, Default)]
pub struct Config {
    pub timezone: Option<String>,
    pub locale: Option<String>,
    pub calendar: Option<String>,
}

/// Which of the configuration slots a given backend actually honours.
/// The settings UI uses this to grey out the knobs that would do
/// nothing.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default)]
pub struct Capabilities {
    pub custom_timezone: bool,
    pub custom_locale: bool,
    pub custom_calendar: bool,
}


/// One row of a backend’s pattern cheat-sheet.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct HelpRow {
    pub token: &'static str,
    pub description: &'static str,
    pub example: &'static str,
}

/// A backend’s pattern cheat-sheet: a link to the full reference, and
/// two columns of the most useful tokens.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Help {
    pub link: &'static str,
    pub left: Vec<HelpRow>,
    pub right: Vec<HelpRow>,
}


/// Everything that can go wrong building a formatter or running one.
#[derive(PartialEq, Debug, Clone)]
pub enum Error {

    /// The configured time zone couldn’t be understood.
    Zone(ZoneError),

    /// The configured locale has no name tables.
    Locale(LocaleError),

    /// The configured calendar isn’t one the backend can count in.
    Calendar(String),

    /// The pattern couldn’t be turned into a renderer.
    Pattern(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Zone(ref e)          => e.fmt(f),
            Error::Locale(ref e)        => e.fmt(f),
            Error::Calendar(ref c)      => write!(f, "Unsupported calendar {:?}", c),
            Error::Pattern(ref p)       => write!(f, "Unusable pattern {:?}", p),
        }
    }
}

impl error::Error for Error {
    fn cause(&self) -> Option<&dyn error::Error> {
        match *self {
            Error::Zone(ref e)    => Some(e),
            Error::Locale(ref e)  => Some(e),
            _                     => None,
        }
    }
}

impl From<ZoneError> for Error {
    fn from(error: ZoneError) -> Self {
        Error::Zone(error)
    }
}

impl From<LocaleError> for Error {
    fn from(error: LocaleError) -> Self {
        Error::Locale(error)
    }
}
