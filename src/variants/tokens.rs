//! The tokens backend: the same engine behind a slightly different
//! pattern dialect, with the full set of configuration knobs.

use compile::Compiler;
use fields::Stamp;
use formatter::{Capabilities, Config, Error, Formatter, Help, HelpRow};
use instant::Instant;
use names::Names;
use zone::Zone;


/// The dialect this backend speaks differs from the classic one in a
/// handful of letters, which get remapped before compiling: `o` is the
/// ordinal day of year, `q` the quarter, and a short `E` run is the
/// weekday as a number rather than a name. Everything else lines up, so
/// the remapped pattern goes straight into the shared engine.
#[derive(Debug)]
pub struct Tokens {
    compiler: Compiler,
    zone: Zone,
}

impl Tokens {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let zone = match config.timezone {
            Some(ref tz) => Zone::parse(tz)?,
            None         => Zone::System,
        };

        let names = Names::for_tag(config.locale.as_deref())?;
        check_calendar(config.calendar.as_deref())?;

        Ok(Self {
            compiler: Compiler::new(names),
            zone,
        })
    }
}

impl Formatter for Tokens {
    fn format(&self, pattern: &str, instant: Instant) -> Result<String, Error> {
        let pattern = remap(&pattern.replace("\\n", "\n"));

        let marked = format!("#{}", pattern);
        let renderer = match self.compiler.compile(&marked) {
            Some(renderer) => renderer,
            None           => return Err(Error::Pattern(pattern)),
        };

        let stamp = Stamp::new(instant, self.zone.offset_at(instant));
        Ok(renderer.render(&stamp))
    }
}

/// Only calendars that count days the way this library does are
/// accepted; claiming to support the others would produce wrong dates.
fn check_calendar(calendar: Option<&str>) -> Result<(), Error> {
    match calendar {
        None | Some("") | Some("default")
                | Some("gregory") | Some("iso8601")  => Ok(()),
        Some(other)  => Err(Error::Calendar(other.to_string())),
    }
}

/// Rewrites the letters where this dialect disagrees with the engine’s.
/// Quoted stretches pass through untouched.
pub(crate) fn remap(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars().peekable();
    let mut quoted = false;

    while let Some(c) = chars.next() {
        if c == '\'' {
            quoted = ! quoted;
            out.push(c);
        }
        else if ! quoted && c.is_ascii_alphabetic() {
            let mut width = 1;
            while chars.peek() == Some(&c) {
                chars.next();
                width += 1;
            }

            let letter = match c {
                'o'                   => 'D',
                'q'                   => 'Q',
                'E' if width <= 2     => 'e',
                _                     => c,
            };

            for _ in 0 .. width {
                out.push(letter);
            }
        }
        else {
            out.push(c);
        }
    }

    out
}

/// Boxes up a configured tokens backend.
pub fn build(config: &Config) -> Result<Box<dyn Formatter>, Error> {
    Ok(Box::new(Tokens::new(config)?))
}

pub fn capabilities() -> Capabilities {
    Capabilities {
        custom_timezone: true,
        custom_locale: true,
        custom_calendar: true,
    }
}

pub fn help() -> Help {
    Help {
        link: "https://moment.github.io/luxon/#/formatting?id=table-of-tokens",
        left: vec![
            HelpRow { token: "yyyy", description: "year",              example: "2023" },
            HelpRow { token: "MM",   description: "month",             example: "04" },
            HelpRow { token: "MMMM", description: "month, full",       example: "April" },
            HelpRow { token: "dd",   description: "day of month",      example: "07" },
            HelpRow { token: "o",    description: "day of year",       example: "97" },
            HelpRow { token: "E",    description: "weekday number",    example: "5" },
            HelpRow { token: "EEEE", description: "weekday, full",     example: "Friday" },
            HelpRow { token: "q",    description: "quarter",           example: "2" },
        ],
        right: vec![
            HelpRow { token: "HH",   description: "hour (24)",         example: "09" },
            HelpRow { token: "hh",   description: "hour (12)",         example: "09" },
            HelpRow { token: "mm",   description: "minute",            example: "05" },
            HelpRow { token: "ss",   description: "second",            example: "08" },
            HelpRow { token: "a",    description: "AM or PM",          example: "AM" },
            HelpRow { token: "ZZ",   description: "offset",            example: "+0200" },
            HelpRow { token: "''",   description: "quoted text",       example: "'at' h" },
            HelpRow { token: "\\n",  description: "line break",        example: "" },
        ],
    }
}
