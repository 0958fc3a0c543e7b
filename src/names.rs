//! Locale-dependent names for calendar fields: months, weekdays, day
//! periods, and eras, in long, short, and narrow widths.

use std::error;
use std::fmt;

use locale;

use civil::{Month, Weekday};


/// A set of **names** to render text fields with.
///
/// This wraps the locale crate’s time tables, adding the widths it
/// doesn’t carry: narrow names are derived by taking the first letter of
/// the long form, and day-period and era names are fixed, as the
/// underlying data doesn’t include them at all.
pub struct Names {
    time: locale::Time,
}

impl Names {

    /// Looks up the name tables for a locale tag.
    ///
    /// `None`, the empty string, and `default` all mean the system
    /// default. Only English tables are actually carried (`en`, `en-GB`,
    /// `C`, `POSIX`, and the default all resolve to them); any other tag
    /// is reported as unsupported rather than silently anglicised.
    pub fn for_tag(tag: Option<&str>) -> Result<Self, LocaleError> {
        let tag = match tag {
            Some(t) => t.trim(),
            None    => "",
        };

        match tag {
            "" | "default" | "C" | "POSIX" => Ok(Self { time: locale::Time::english() }),
            t if t == "en" || t.starts_with("en-") || t.starts_with("en_") => {
                Ok(Self { time: locale::Time::english() })
            }
            t => Err(LocaleError { tag: t.to_string() }),
        }
    }

    /// The month’s name written out in full, such as `September`.
    pub fn month_long(&self, month: Month) -> String {
        self.time.long_month_name(month.months_from_january())
    }

    /// The month’s abbreviated name, such as `Sep`.
    pub fn month_short(&self, month: Month) -> String {
        self.time.short_month_name(month.months_from_january())
    }

    /// The narrowest rendering of the month that’s still a name: its
    /// initial letter.
    pub fn month_narrow(&self, month: Month) -> String {
        first_letter(&self.month_long(month))
    }

    /// The weekday’s name written out in full, such as `Tuesday`.
    pub fn weekday_long(&self, weekday: Weekday) -> String {
        self.time.long_day_name(weekday.days_from_sunday())
    }

    /// The weekday’s abbreviated name, such as `Tue`.
    pub fn weekday_short(&self, weekday: Weekday) -> String {
        self.time.short_day_name(weekday.days_from_sunday())
    }

    /// The weekday’s initial letter.
    pub fn weekday_narrow(&self, weekday: Weekday) -> String {
        first_letter(&self.weekday_long(weekday))
    }

    /// Which half of the day an hour falls into.
    pub fn day_period(&self, hour: i8) -> &'static str {
        if hour < 12 { "AM" } else { "PM" }
    }

    /// The abbreviated era name.
    pub fn era_short(&self, before_common_era: bool) -> &'static str {
        if before_common_era { "BC" } else { "AD" }
    }

    /// The era name written out in full.
    pub fn era_long(&self, before_common_era: bool) -> &'static str {
        if before_common_era { "Before Christ" } else { "Anno Domini" }
    }

    /// The era squeezed down to a single letter.
    pub fn era_narrow(&self, before_common_era: bool) -> &'static str {
        if before_common_era { "B" } else { "A" }
    }
}

impl fmt::Debug for Names {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Names(english)")
    }
}

fn first_letter(name: &str) -> String {
    match name.chars().next() {
        Some(c) => c.to_string(),
        None    => String::new(),
    }
}


/// A locale tag this library carries no name tables for.
#[derive(PartialEq, Debug, Clone)]
pub struct LocaleError {
    pub tag: String,
}

impl fmt::Display for LocaleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Unsupported locale {:?}", self.tag)
    }
}

impl error::Error for LocaleError {
    fn description(&self) -> &str {
        "locale error"
    }
}
