//! The user-facing settings surface: which backend to use, the pattern,
//! the appearance knobs, and how often to redraw.
//!
//! Settings are stored as a TOML document with kebab-case keys, one key
//! per knob, so they diff nicely and survive hand-editing.

use serde::{Deserialize, Serialize};
use toml;

use formatter::Config;


/// Where the clock text sits in the space it’s given.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Start,
    Center,
    End,
}

/// How eagerly the redraw timer should be scheduled, for callers whose
/// event loop distinguishes (anything that wants sub-second updates
/// shouldn’t be waiting behind idle work).
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Priority {
    Idle,
    Default,
    High,
}


/// The whole settings document.
///
/// Every field has a default, so an empty document is a valid one, and
/// documents written by older versions keep working as knobs get added.
#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Settings {

    /// The key of the backend to format with.
    pub formatter: String,

    /// The pattern handed to that backend.
    pub pattern: String,

    /// How often to redraw: 0 is once a minute, n is n times a second.
    pub update_level: u8,

    pub use_default_timezone: bool,
    pub custom_timezone: String,

    pub use_default_locale: bool,
    pub custom_locale: String,

    pub use_default_calendar: bool,
    pub custom_calendar: String,

    /// Font size in points; 0 keeps the theme’s size.
    pub font_size: u8,

    pub text_align: TextAlign,

    /// Whether the clock replaces the one on every monitor’s panel, or
    /// just the primary.
    pub apply_all_panels: bool,

    pub remove_messages_indicator: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            formatter: "classic".to_string(),
            pattern: "EEE MMM d  H:mm".to_string(),
            update_level: 1,
            use_default_timezone: true,
            custom_timezone: String::new(),
            use_default_locale: true,
            custom_locale: String::new(),
            use_default_calendar: true,
            custom_calendar: String::new(),
            font_size: 0,
            text_align: TextAlign::Center,
            apply_all_panels: false,
            remove_messages_indicator: false,
        }
    }
}

impl Settings {

    /// Reads settings out of a TOML document.
    pub fn from_toml_str(document: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(document)
    }

    /// Writes settings back out as TOML.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    /// The formatter configuration these settings amount to: each
    /// custom value is passed along only when its “use default” toggle
    /// is off.
    pub fn formatter_config(&self) -> Config {
        Config {
            timezone: self.custom(self.use_default_timezone, &self.custom_timezone),
            locale:   self.custom(self.use_default_locale,   &self.custom_locale),
            calendar: self.custom(self.use_default_calendar, &self.custom_calendar),
        }
    }

    fn custom(&self, use_default: bool, value: &str) -> Option<String> {
        if use_default || value.is_empty() {
            None
        }
        else {
            Some(value.to_string())
        }
    }

    /// The redraw cadence the update level asks for, as a scheduling
    /// priority and an interval in milliseconds.
    ///
    /// Level 0 redraws on the minute at idle priority. Levels above 15
    /// are treated as 1, as they’d only burn battery for sub-pixel
    /// gains.
    pub fn cadence(&self) -> (Priority, u64) {
        match self.update_level {
            0                   => (Priority::Idle, 60_000),
            level @ 1 ..= 7     => (Priority::Default, 1000 / u64::from(level)),
            level @ 8 ..= 15    => (Priority::High, 1000 / u64::from(level)),
            _                   => (Priority::Default, 1000),
        }
    }

    /// The update level in words, for the settings UI.
    pub fn describe_update_level(&self) -> String {
        match self.update_level {
            0       => "every minute".to_string(),
            1       => "every second".to_string(),
            n if n > 15  => "every second".to_string(),
            n       => format!("{} times in a second", n),
        }
    }
}
