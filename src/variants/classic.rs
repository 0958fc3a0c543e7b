//! The classic backend: the pattern engine driven directly, always on
//! system time.

use compile::Compiler;
use fields::Stamp;
use formatter::{Capabilities, Config, Error, Formatter, Help, HelpRow};
use instant::Instant;
use names::Names;
use zone::Zone;


/// The longest-serving backend. It formats in the system time zone,
/// full stop; the only knob it honours is the locale.
#[derive(Debug)]
pub struct Classic {
    compiler: Compiler,
    zone: Zone,
}

impl Classic {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let names = Names::for_tag(config.locale.as_deref())?;

        Ok(Self {
            compiler: Compiler::new(names),
            zone: Zone::System,
        })
    }
}

impl Formatter for Classic {
    fn format(&self, pattern: &str, instant: Instant) -> Result<String, Error> {
        // Settings arrive as a single line, so a typed-in “\n” stands
        // for a real line break.
        let pattern = pattern.replace("\\n", "\n");

        let marked = format!("#{}", pattern);
        let renderer = match self.compiler.compile(&marked) {
            Some(renderer) => renderer,
            None           => return Err(Error::Pattern(pattern)),
        };

        let stamp = Stamp::new(instant, self.zone.offset_at(instant));
        Ok(renderer.render(&stamp))
    }
}

/// Boxes up a configured classic backend.
pub fn build(config: &Config) -> Result<Box<dyn Formatter>, Error> {
    Ok(Box::new(Classic::new(config)?))
}

pub fn capabilities() -> Capabilities {
    Capabilities {
        custom_locale: true,
        .. Capabilities::default()
    }
}

pub fn help() -> Help {
    Help {
        link: "https://unicode.org/reports/tr35/tr35-dates.html#Date_Field_Symbol_Table",
        left: vec![
            HelpRow { token: "y",    description: "year",              example: "2023" },
            HelpRow { token: "yy",   description: "2-digit year",      example: "23" },
            HelpRow { token: "M",    description: "month",             example: "4" },
            HelpRow { token: "MMM",  description: "month, short",      example: "Apr" },
            HelpRow { token: "MMMM", description: "month, full",       example: "April" },
            HelpRow { token: "d",    description: "day of month",      example: "7" },
            HelpRow { token: "EEE",  description: "weekday, short",    example: "Fri" },
            HelpRow { token: "EEEE", description: "weekday, full",     example: "Friday" },
            HelpRow { token: "w",    description: "week of year",      example: "14" },
        ],
        right: vec![
            HelpRow { token: "h",    description: "hour (12)",         example: "9" },
            HelpRow { token: "HH",   description: "hour (24)",         example: "09" },
            HelpRow { token: "mm",   description: "minute",            example: "05" },
            HelpRow { token: "ss",   description: "second",            example: "08" },
            HelpRow { token: "a",    description: "AM or PM",          example: "AM" },
            HelpRow { token: "ZZZZ", description: "offset from GMT",   example: "GMT+02:00" },
            HelpRow { token: "''",   description: "quoted text",       example: "'at' h" },
            HelpRow { token: "\\n",  description: "line break",        example: "" },
        ],
    }
}
