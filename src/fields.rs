//! Turning a single pattern field into a rendering function.
//!
//! Each field letter and width pair resolves to a boxed closure that
//! reads the calendar fields it needs off a [`Stamp`] and produces a
//! string. Resolving happens once per distinct field, at compile time;
//! the closures are what run on every tick.

use std::rc::Rc;

use civil::{CivilDateTime, Weekday};
use instant::Instant;
use names::Names;
use util::zero_pad;

// Weeks are numbered with this as the first day. The name tables are
// Sunday-first too, so the two stay in step.
const FIRST_WEEKDAY: Weekday = Weekday::Sunday;


/// A compiled rendering function for one field.
pub type Render = Rc<dyn Fn(&Stamp) -> String>;

/// Everything a renderer may want to know about the moment being
/// formatted: the civil fields, plus the offset they were derived with,
/// which the zone fields print back out.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct Stamp {
    pub civil: CivilDateTime,
    pub offset_seconds: i32,
}

impl Stamp {

    /// Works out the stamp for an instant as seen from the given number
    /// of seconds east of UTC.
    pub fn new(instant: Instant, offset_seconds: i32) -> Self {
        Self {
            civil: CivilDateTime::from_instant(instant, offset_seconds),
            offset_seconds,
        }
    }
}


/// Resolves a field into its rendering function, or `None` for a letter
/// that isn’t a field at all, which the compiler then treats as literal
/// text.
pub fn resolve(letter: char, width: usize, names: &Rc<Names>) -> Option<Render> {
    let n = names.clone();

    let rendering = match letter {

        // ---- years, quarters, months ----

        'y' | 'Y' => render(move |s| {
            let year = if width == 2 { s.civil.year_of_century() } else { s.civil.year() };
            zero_pad(year, width)
        }),

        'Q' | 'q' => render(move |s| {
            let quarter = s.civil.quarter();
            match width {
                2 => zero_pad(quarter, 2),
                3 => format!("Q{}", quarter),
                4 => format!("{}. quarter", quarter),
                _ => quarter.to_string(),
            }
        }),

        'M' | 'L' => render(move |s| {
            let month = s.civil.month();
            match width {
                1 | 2 => zero_pad(month.months_from_january() + 1, width),
                3     => n.month_short(month),
                4     => n.month_long(month),
                _     => n.month_narrow(month),
            }
        }),

        // ---- weeks and days ----

        'w' => render(move |s| zero_pad(s.civil.week_of_year(FIRST_WEEKDAY), width)),

        // Week of month would need to know which day the month started
        // on under the locale’s week rules; nobody has asked for it yet,
        // so it renders a placeholder instead of a wrong answer.
        'W' => render(move |_| "?".to_string()),

        'd' => render(move |s| zero_pad(s.civil.day(), width)),
        'D' => render(move |s| zero_pad(s.civil.yearday(), width)),
        'F' => render(move |s| zero_pad(s.civil.weekday_of_month(), width)),
        'g' => render(move |s| zero_pad(s.civil.julian_day(), width)),

        'E' => render(move |s| weekday_name(&n, s.civil.weekday(), width)),

        'e' | 'c' => render(move |s| {
            let weekday = s.civil.weekday();
            match width {
                1     => weekday_number(weekday).to_string(),
                2 if letter == 'c'
                      => weekday_number(weekday).to_string(),
                2     => zero_pad(weekday_number(weekday), 2),
                _     => weekday_name(&n, weekday, width),
            }
        }),

        // ---- the clock ----

        'a' | 'b' | 'B' => render(move |s| n.day_period(s.civil.hour()).to_string()),

        'h' | 'K' => render(move |s| zero_pad(hour_on_clock(s.civil.hour(), false), width)),
        'H' | 'k' => render(move |s| zero_pad(hour_on_clock(s.civil.hour(), true), width)),

        'm' => render(move |s| zero_pad(s.civil.minute(), width)),
        's' => render(move |s| zero_pad(s.civil.second(), width)),

        'S' => render(move |s| fraction(s.civil.millisecond(), width)),
        'A' => render(move |s| zero_pad(s.civil.milliseconds_of_day(), width)),

        // ---- zones and eras ----

        'z' | 'v' => {
            let style = if width < 4 {
                OffsetStyle { gmt: true, separator: true, omit_zero_minutes: true, .. OffsetStyle::default() }
            }
            else {
                OffsetStyle { gmt: true, pad_hours: true, separator: true, .. OffsetStyle::default() }
            };
            render(move |s| iso_offset(s.offset_seconds, style))
        }

        'V' => {
            let style = OffsetStyle { gmt: true, pad_hours: true, separator: true, .. OffsetStyle::default() };
            render(move |s| iso_offset(s.offset_seconds, style))
        }

        'Z' => {
            let style = match width {
                1 ..= 3 => OffsetStyle { pad_hours: true, .. OffsetStyle::default() },
                4       => OffsetStyle { gmt: true, pad_hours: true, separator: true, .. OffsetStyle::default() },
                _       => OffsetStyle { pad_hours: true, separator: true, seconds: true, zulu_for_zero: true, .. OffsetStyle::default() },
            };
            render(move |s| iso_offset(s.offset_seconds, style))
        }

        'O' => {
            let style = OffsetStyle {
                gmt: true,
                pad_hours: width >= 3,
                separator: width >= 3,
                omit_zero_minutes: width < 3,
                .. OffsetStyle::default()
            };
            render(move |s| iso_offset(s.offset_seconds, style))
        }

        'X' | 'x' => {
            let style = OffsetStyle {
                pad_hours: true,
                separator: width > 1 && width % 2 == 1,
                omit_zero_minutes: width == 1,
                seconds: width >= 4,
                zulu_for_zero: letter == 'X',
                .. OffsetStyle::default()
            };
            render(move |s| iso_offset(s.offset_seconds, style))
        }

        'G' => render(move |s| {
            let bce = s.civil.year() <= 0;
            match width {
                4          => n.era_long(bce).to_string(),
                w if w > 4 => n.era_narrow(bce).to_string(),
                _          => n.era_short(bce).to_string(),
            }
        }),

        _ => return None,
    };

    Some(rendering)
}

fn render<F>(function: F) -> Render
where F: Fn(&Stamp) -> String + 'static {
    Rc::new(function)
}


/// The hour as a clock would show it. Midnight is the top of the dial,
/// not zero, on either kind of clock face.
fn hour_on_clock(hour: i8, twenty_four: bool) -> i8 {
    if hour == 0 {
        if twenty_four { 24 } else { 12 }
    }
    else if hour > 12 && ! twenty_four {
        hour - 12
    }
    else {
        hour
    }
}

/// The weekday as a number from 1 to 7, Monday first.
fn weekday_number(weekday: Weekday) -> usize {
    match weekday.days_from_sunday() {
        0 => 7,
        n => n,
    }
}

fn weekday_name(names: &Names, weekday: Weekday, width: usize) -> String {
    match width {
        1 ..= 3 => names.weekday_short(weekday),
        4       => names.weekday_long(weekday),
        5       => names.weekday_narrow(weekday),
        _       => {
            let short = names.weekday_short(weekday);
            if short.len() > 2 { short[.. 2].to_string() } else { short }
        }
    }
}

/// The fractional-second field: the milliseconds written to exactly
/// `width` digits, truncating or right-padding with zeroes as needed.
fn fraction(milliseconds: i16, width: usize) -> String {
    let mut digits = format!("{:03}", milliseconds);

    if width < digits.len() {
        digits.truncate(width);
    }
    else {
        while digits.len() < width {
            digits.push('0');
        }
    }

    digits
}


/// The knobs that distinguish one zone-offset field from another. All of
/// them render the same offset; they differ only in dressing.
#[derive(PartialEq, Debug, Clone, Copy, Default)]
struct OffsetStyle {
    gmt: bool,
    pad_hours: bool,
    separator: bool,
    seconds: bool,
    zulu_for_zero: bool,
    omit_zero_minutes: bool,
}

/// Renders a UTC offset, in seconds east, according to the style.
fn iso_offset(offset_seconds: i32, style: OffsetStyle) -> String {
    if offset_seconds == 0 {
        if style.zulu_for_zero {
            return "Z".to_string();
        }
        else if style.gmt {
            return "GMT".to_string();
        }
    }

    let magnitude = offset_seconds.abs();
    let hours   = magnitude / 3600;
    let minutes = magnitude / 60 % 60;
    let seconds = magnitude % 60;

    let mut out = String::new();

    if style.gmt {
        out.push_str("GMT");
    }

    out.push(if offset_seconds < 0 { '-' } else { '+' });

    if style.pad_hours {
        out.push_str(&zero_pad(hours, 2));
    }
    else {
        out.push_str(&hours.to_string());
    }

    if minutes != 0 || seconds != 0 || ! style.omit_zero_minutes {
        if style.separator {
            out.push(':');
        }
        out.push_str(&zero_pad(minutes, 2));

        if style.seconds && seconds != 0 {
            if style.separator {
                out.push(':');
            }
            out.push_str(&zero_pad(seconds, 2));
        }
    }

    out
}


#[cfg(test)]
mod test {
    pub use super::{resolve, Stamp};
    pub use instant::Instant;
    pub use names::Names;
    pub use std::rc::Rc;

    pub fn run(letter: char, width: usize, stamp: &Stamp) -> String {
        let names = Rc::new(Names::for_tag(None).unwrap());
        let rendering = resolve(letter, width, &names).unwrap();
        rendering(stamp)
    }

    // 2023-04-07T00:00:00Z, a Friday
    pub fn good_friday() -> Stamp {
        Stamp::new(Instant::at(1_680_825_600), 0)
    }

    // 2009-02-13T23:31:30Z, a Friday evening
    pub fn evening() -> Stamp {
        Stamp::new(Instant::at(1_234_567_890), 0)
    }

    mod dates {
        use super::*;

        macro_rules! test {
            ($name: ident: $letter: expr, $width: expr => $result: expr) => {
                #[test]
                fn $name() {
                    assert_eq!(run($letter, $width, &good_friday()), $result);
                }
            };
        }

        test!(year:           'y', 4 => "2023");
        test!(year_short:     'y', 2 => "23");
        test!(year_bare:      'y', 1 => "2023");
        test!(year_wide:      'y', 5 => "02023");

        test!(quarter:        'Q', 1 => "2");
        test!(quarter_padded: 'Q', 2 => "02");
        test!(quarter_titled: 'Q', 3 => "Q2");
        test!(quarter_prose:  'Q', 4 => "2. quarter");

        test!(month:          'M', 1 => "4");
        test!(month_padded:   'M', 2 => "04");
        test!(month_short:    'M', 3 => "Apr");
        test!(month_long:     'M', 4 => "April");
        test!(month_narrow:   'M', 5 => "A");
        test!(month_alone:    'L', 4 => "April");

        test!(day:            'd', 1 => "7");
        test!(day_padded:     'd', 2 => "07");
        test!(yearday:        'D', 1 => "97");
        test!(yearday_padded: 'D', 3 => "097");

        test!(week:           'w', 1 => "14");
        test!(week_of_month:  'W', 1 => "?");
        test!(weekday_nth:    'F', 1 => "1");
        test!(julian:         'g', 1 => "2460041");

        test!(weekday:        'E', 1 => "Fri");
        test!(weekday_abbr:   'E', 3 => "Fri");
        test!(weekday_long:   'E', 4 => "Friday");
        test!(weekday_narrow: 'E', 5 => "F");
        test!(weekday_tiny:   'E', 6 => "Fr");

        test!(weekday_num:    'e', 1 => "5");
        test!(weekday_padded: 'e', 2 => "05");
        test!(weekday_named:  'e', 4 => "Friday");
        test!(standalone_num: 'c', 2 => "5");

        test!(era:            'G', 1 => "AD");
        test!(era_long:       'G', 4 => "Anno Domini");
        test!(era_narrow:     'G', 5 => "A");
    }

    mod clocks {
        use super::*;

        macro_rules! test {
            ($name: ident: $letter: expr, $width: expr, $stamp: expr => $result: expr) => {
                #[test]
                fn $name() {
                    assert_eq!(run($letter, $width, &$stamp), $result);
                }
            };
        }

        test!(late_h24:     'H', 2, evening() => "23");
        test!(late_h12:     'h', 2, evening() => "11");
        test!(late_k:       'k', 1, evening() => "23");
        test!(late_small_k: 'K', 1, evening() => "11");
        test!(minutes:      'm', 2, evening() => "31");
        test!(seconds:      's', 2, evening() => "30");
        test!(evening_half: 'a', 1, evening() => "PM");

        // midnight is the top of the dial, never zero
        test!(midnight_h24: 'H', 1, good_friday() => "24");
        test!(midnight_h12: 'h', 1, good_friday() => "12");
        test!(morning_half: 'a', 1, good_friday() => "AM");

        #[test]
        fn fractions_truncate_not_round() {
            let stamp = Stamp::new(Instant::at_ms(1_680_825_600, 4), 0);
            assert_eq!(run('S', 1, &stamp), "0");
            assert_eq!(run('S', 3, &stamp), "004");
            assert_eq!(run('S', 5, &stamp), "00400");
        }

        #[test]
        fn milliseconds_of_day() {
            let stamp = Stamp::new(Instant::at_ms(1_680_825_600 + 90, 123), 0);
            assert_eq!(run('A', 1, &stamp), "90123");
        }
    }

    mod zones {
        use super::*;

        fn india() -> Stamp {
            Stamp::new(Instant::at(0), 19800)
        }

        fn pacific() -> Stamp {
            Stamp::new(Instant::at(0), -28800)
        }

        fn greenwich() -> Stamp {
            Stamp::new(Instant::at(0), 0)
        }

        macro_rules! test {
            ($name: ident: $letter: expr, $width: expr, $stamp: expr => $result: expr) => {
                #[test]
                fn $name() {
                    assert_eq!(run($letter, $width, &$stamp), $result);
                }
            };
        }

        test!(named_short:      'z', 1, india()     => "GMT+5:30");
        test!(named_long:       'z', 4, india()     => "GMT+05:30");
        test!(named_at_zero:    'z', 1, greenwich() => "GMT");
        test!(generic:          'v', 1, pacific()   => "GMT-8");
        test!(generic_id:       'V', 1, india()     => "GMT+05:30");

        test!(rfc_822:          'Z', 1, india()     => "+0530");
        test!(localised_gmt:    'Z', 4, pacific()   => "GMT-08:00");
        test!(extended:         'Z', 5, india()     => "+05:30");
        test!(extended_at_zero: 'Z', 5, greenwich() => "Z");

        test!(gmt_short:        'O', 1, pacific()   => "GMT-8");
        test!(gmt_long:         'O', 4, pacific()   => "GMT-08:00");

        test!(iso_hours:        'X', 1, pacific()   => "-08");
        test!(iso_basic:        'X', 2, india()     => "+0530");
        test!(iso_colons:       'X', 3, india()     => "+05:30");
        test!(iso_zulu:         'X', 1, greenwich() => "Z");
        test!(iso_no_zulu:      'x', 1, greenwich() => "+00");
    }
}
