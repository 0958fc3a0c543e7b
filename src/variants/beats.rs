//! The beats backend: Swatch Internet Time.
//!
//! The day is divided into 1000 beats, counted from midnight in Biel,
//! Switzerland (UTC+1, no summer time), so the whole world is on the
//! same beat at once. There are no zones, locales, or calendars to
//! configure, which makes this by far the simplest backend.

use formatter::{Capabilities, Config, Error, Formatter, Help, HelpRow};
use instant::Instant;


const SECONDS_IN_DAY: i64 = 86400;
const BIEL_OFFSET: i64 = 3600;

/// The Swatch Internet Time backend.
///
/// Its pattern language has exactly two tokens: `bbb` for the beat, and
/// `s` for the hundredths of a beat. Everything else is literal.
#[derive(Debug)]
pub struct Beats;

impl Formatter for Beats {
    fn format(&self, pattern: &str, instant: Instant) -> Result<String, Error> {
        let seconds = (instant.seconds() + BIEL_OFFSET).rem_euclid(SECONDS_IN_DAY);

        // Work in hundredths of a beat so both tokens come from one sum.
        let centibeats = seconds * 100_000 / SECONDS_IN_DAY;

        let text = pattern
            .replace("\\n", "\n")
            .replace("bbb", &format!("{:03}", centibeats / 100))
            .replace("s", &format!("{:02}", centibeats % 100));

        Ok(text)
    }
}

/// Boxes up the beats backend. The configuration is accepted and
/// ignored, as there’s nothing for it to configure.
pub fn build(_config: &Config) -> Result<Box<dyn Formatter>, Error> {
    Ok(Box::new(Beats))
}

pub fn capabilities() -> Capabilities {
    Capabilities::default()
}

pub fn help() -> Help {
    Help {
        link: "https://en.wikipedia.org/wiki/Swatch_Internet_Time",
        left: vec![
            HelpRow { token: "bbb", description: "the beat",           example: "500" },
        ],
        right: vec![
            HelpRow { token: "s",   description: "hundredths of a beat", example: "27" },
        ],
    }
}


#[cfg(test)]
mod test {
    use super::Beats;
    use formatter::Formatter;
    use instant::Instant;

    // 2023-04-07T11:00:00Z is noon in Biel: beat 500 exactly.
    const NOON_IN_BIEL: i64 = 1_680_865_200;

    #[test]
    fn noon_is_beat_five_hundred() {
        let text = Beats.format("@bbb.s", Instant::at(NOON_IN_BIEL)).unwrap();
        assert_eq!(text, "@500.00");
    }

    #[test]
    fn midnight_in_biel_is_beat_zero() {
        let text = Beats.format("@bbb", Instant::at(NOON_IN_BIEL + 12 * 3600)).unwrap();
        assert_eq!(text, "@000");
    }

    #[test]
    fn beats_tick_every_86_point_4_seconds() {
        let text = Beats.format("@bbb", Instant::at(NOON_IN_BIEL + 87)).unwrap();
        assert_eq!(text, "@501");
    }

    #[test]
    fn the_same_beat_everywhere() {
        // An instant has one beat, no matter whose midnight is closest.
        let here  = Beats.format("@bbb", Instant::at(0)).unwrap();
        assert_eq!(here, "@041");
    }
}
