//! The calendar fields of an instant: what the clock and the calendar on
//! the wall would say, once a UTC offset has been applied.

use std::fmt;

use instant::Instant;


/// Number of seconds in a day. As everywhere in this library, leap seconds
/// are simply ignored.
const SECONDS_IN_DAY: i64 = 86400;

/// Number of days guaranteed to be in four years.
const DAYS_IN_4Y: i64 = 365 * 4 + 1;

/// Number of days guaranteed to be in a hundred years.
const DAYS_IN_100Y: i64 = 365 * 100 + 24;

/// Number of days guaranteed to be in four hundred years.
const DAYS_IN_400Y: i64 = 365 * 400 + 97;

/// Number of days between **1st January, 1970** and **1st March, 2000**.
///
/// Counting days from a point just after a leap day, at the start of a
/// 400-year Gregorian cycle, turns the year/month arithmetic below into
/// plain division: every complete cycle is exactly `DAYS_IN_400Y` days,
/// and the odd extra day is always at the very end of a span rather than
/// somewhere in the middle. The Unix epoch itself is a much worse anchor,
/// so it gets shifted to this one internally and never exposed.
const DAYS_TO_MARCH_EPOCH: i64 = 30 * 365 + 7   // thirty years, seven of them leap years,
                               + 31 + 29;       // plus January and February 2000.

/// How long each month is when the year is counted from March. February
/// comes last, which is what keeps its variable length from disturbing
/// the running totals: in the only span where day numbers can reach it
/// at index 29, the year in question really does have a 29th.
const MONTH_LENGTHS_FROM_MARCH: [i64; 12] = [31, 30, 31, 30, 31, 31, 30, 31, 30, 31, 31, 29];

/// Days elapsed in a common year before each month begins.
const DAYS_BEFORE_MONTH: [i64; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];


/// A month of the year, starting with January, and ending with December.
///
/// This is stored as an enum instead of just a number to prevent
/// off-by-one errors: is month 2 February (1-indexed) or March (0-indexed)?
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy)]
pub enum Month {
    January, February, March, April, May, June, July,
    August, September, October, November, December,
}

const MONTHS: [Month; 12] = [
    Month::January, Month::February, Month::March,     Month::April,
    Month::May,     Month::June,     Month::July,      Month::August,
    Month::September, Month::October, Month::November, Month::December,
];

impl Month {

    /// The number of complete months between this month and January:
    /// zero for January itself, eleven for December. This is the index
    /// that locale name tables are keyed by.
    pub fn months_from_january(&self) -> usize {
        *self as usize
    }
}


/// A named day of the week, starting with Sunday, and ending with Saturday.
///
/// Sunday is day 0. This seems to be a North American thing? It's pretty
/// much an arbitrary choice, but it matches the weekday name tables in the
/// locale data this library leans on.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Weekday {
    Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday,
}

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sunday, Weekday::Monday, Weekday::Tuesday, Weekday::Wednesday,
    Weekday::Thursday, Weekday::Friday, Weekday::Saturday,
];

impl Weekday {

    /// The number of days between this day and Sunday: zero for Sunday
    /// itself, six for Saturday. The index locale name tables use.
    pub fn days_from_sunday(&self) -> usize {
        *self as usize
    }
}


/// A **civil date-time** is the full set of calendar and clock fields
/// that an instant decomposes into once a UTC offset has been applied:
/// year, month, day, weekday, day of year, and the time of day down to
/// the millisecond.
///
/// Values of this type are what the field renderers read from. They are
/// computed once per formatting call and handed to every renderer in the
/// compiled pattern, so all the sums live here rather than being repeated
/// per field.
#[derive(PartialEq, Eq, Clone, Copy)]
pub struct CivilDateTime {
    days: i64,
    year: i64,
    month: Month,
    day: i8,
    weekday: Weekday,
    yearday: i16,
    hour: i8,
    minute: i8,
    second: i8,
    millisecond: i16,
}

impl CivilDateTime {

    /// Decomposes an instant into its civil fields, as seen from a clock
    /// that runs the given number of seconds east of UTC.
    pub fn from_instant(instant: Instant, offset_seconds: i32) -> Self {
        let local = instant.seconds() + i64::from(offset_seconds);
        let (days, secs) = split_cycles(local, SECONDS_IN_DAY);

        let (year, month_index, day) = ymd_from_days(days);
        let leap_day = if month_index >= 2 && is_leap_year(year) { 1 } else { 0 };

        Self {
            days,
            year,
            month: MONTHS[month_index],
            day,
            weekday: WEEKDAYS[(days + 4).rem_euclid(7) as usize],  // 1970-01-01 was a Thursday
            yearday: (DAYS_BEFORE_MONTH[month_index] + leap_day + i64::from(day)) as i16,
            hour:   (secs / 60 / 60) as i8,
            minute: (secs / 60 % 60) as i8,
            second: (secs % 60) as i8,
            millisecond: instant.milliseconds(),
        }
    }

    /// The year, in absolute terms.
    /// This is in human-readable format, so the year 2014 actually has a
    /// year value of 2014, rather than 14 or 114 or anything like that.
    pub fn year(&self) -> i64 { self.year }

    /// The month of the year.
    pub fn month(&self) -> Month { self.month }

    /// The day of the month, from 1 to 31.
    pub fn day(&self) -> i8 { self.day }

    /// The day of the week.
    pub fn weekday(&self) -> Weekday { self.weekday }

    /// The day of the year, from 1 to 366.
    pub fn yearday(&self) -> i16 { self.yearday }

    /// The hour of the day.
    pub fn hour(&self) -> i8 { self.hour }

    /// The minute of the hour.
    pub fn minute(&self) -> i8 { self.minute }

    /// The second of the minute.
    pub fn second(&self) -> i8 { self.second }

    /// The millisecond of the second.
    pub fn millisecond(&self) -> i16 { self.millisecond }

    /// The number of years into the century.
    /// This is the same as the last two digits of the year.
    pub fn year_of_century(&self) -> i64 {
        self.year.rem_euclid(100)
    }

    /// The quarter of the year, from 1 to 4.
    pub fn quarter(&self) -> i64 {
        self.month.months_from_january() as i64 / 3 + 1
    }

    /// The week of the year, counted so that the 1st of January always
    /// falls in week 1, with weeks beginning on the given weekday.
    pub fn week_of_year(&self, first_weekday: Weekday) -> i64 {
        let day_of_year = i64::from(self.yearday) - 1;
        let weekday = (self.weekday.days_from_sunday() as i64
                     - first_weekday.days_from_sunday() as i64).rem_euclid(7);

        // Which week-column the 1st of January lands in decides how
        // early the second week starts.
        let first_column = (weekday - day_of_year).rem_euclid(7);
        (day_of_year + first_column) / 7 + 1
    }

    /// Which occurrence of this weekday this is within the month: 2 for
    /// the second Wednesday in July, say.
    pub fn weekday_of_month(&self) -> i64 {
        i64::from(self.day - 1) / 7 + 1
    }

    /// The number of milliseconds elapsed since local midnight.
    pub fn milliseconds_of_day(&self) -> i64 {
        (i64::from(self.hour) * 3600 + i64::from(self.minute) * 60 + i64::from(self.second)) * 1000
            + i64::from(self.millisecond)
    }

    /// The Julian day number of this date: days counted continuously
    /// since 1st January 4713 BCE, the way astronomers (and the `g`
    /// pattern field) like it.
    pub fn julian_day(&self) -> i64 {
        self.days + 2440587
    }
}

impl fmt::Debug for CivilDateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "CivilDateTime({:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03})",
               self.year, self.month.months_from_january() + 1, self.day,
               self.hour, self.minute, self.second, self.millisecond)
    }
}


/// The standard Gregorian leap year rule.
fn is_leap_year(year: i64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Split a number of periods into a number of complete cycles, and the
/// amount left over that doesn’t fit into a cycle.
///
/// This is essentially a division operation with the result and the
/// remainder, with the difference that a negative value gets ‘wrapped
/// around’ to be a positive value, owing to the way the modulo operator
/// works for negative values.
fn split_cycles(number_of_periods: i64, cycle_length: i64) -> (i64, i64) {
    let mut cycles    = number_of_periods / cycle_length;
    let mut remainder = number_of_periods % cycle_length;

    if remainder < 0 {
        remainder += cycle_length;
        cycles    -= 1;
    }

    (cycles, remainder)
}

/// Works out the year, month (as an index from zero), and day of the
/// month for a number of days elapsed since the 1st of January, 1970.
///
/// The days get rebased onto the March-of-2000 anchor first, so that the
/// 400-, 100-, and 4-year Gregorian cycles can be peeled off with plain
/// division. The two clamps handle the single leap day that sits at the
/// very end of a 100-year or 4-year span: the division would otherwise
/// push it into a year of its own.
fn ymd_from_days(days_since_1970: i64) -> (i64, usize, i8) {
    let (cycles_400, mut remainder) = split_cycles(days_since_1970 - DAYS_TO_MARCH_EPOCH, DAYS_IN_400Y);

    let mut cycles_100 = remainder / DAYS_IN_100Y;
    if cycles_100 == 4 { cycles_100 = 3; }
    remainder -= cycles_100 * DAYS_IN_100Y;

    let cycles_4 = remainder / DAYS_IN_4Y;
    remainder -= cycles_4 * DAYS_IN_4Y;

    let mut years = remainder / 365;
    if years == 4 { years = 3; }
    remainder -= years * 365;

    let march_year = 400 * cycles_400 + 100 * cycles_100 + 4 * cycles_4 + years + 2000;

    // The remainder is now a day index into a year that starts in March,
    // so scan forward through the month lengths to find which month the
    // day falls in.
    let mut month_from_march = 0;
    for length in &MONTH_LENGTHS_FROM_MARCH {
        if remainder < *length {
            break;
        }
        remainder -= *length;
        month_from_march += 1;
    }

    // January and February belong to the *following* calendar year.
    let month_index = (month_from_march + 2) % 12;
    let year = march_year + if month_from_march >= 10 { 1 } else { 0 };

    (year, month_index, (remainder + 1) as i8)
}


// ---- tests ----

#[cfg(test)]
mod test {
    pub use super::{CivilDateTime, Month, Weekday};
    pub use instant::Instant;

    fn civil(seconds: i64) -> CivilDateTime {
        CivilDateTime::from_instant(Instant::at(seconds), 0)
    }

    mod instants_to_fields {
        pub use super::*;

        macro_rules! test {
            ($name: ident: $seconds: expr =>
             $year: expr, $month: expr, $day: expr, $weekday: expr, $yearday: expr,
             $hour: expr, $minute: expr, $second: expr) => {
                #[test]
                fn $name() {
                    let when = civil($seconds);
                    assert_eq!(when.year(), $year);
                    assert_eq!(when.month(), $month);
                    assert_eq!(when.day(), $day);
                    assert_eq!(when.weekday(), $weekday);
                    assert_eq!(when.yearday(), $yearday);
                    assert_eq!(when.hour(), $hour);
                    assert_eq!(when.minute(), $minute);
                    assert_eq!(when.second(), $second);
                }
            };
        }

        test!(start_of_magic: 0 =>
            1970, Month::January, 1, Weekday::Thursday, 1, 0, 0, 0);

        test!(before_time: -1_000_000_000 =>
            1938, Month::April, 24, Weekday::Sunday, 114, 22, 13, 20);

        test!(billennium: 1_000_000_000 =>
            2001, Month::September, 9, Weekday::Sunday, 252, 1, 46, 40);

        test!(numbers: 1_234_567_890 =>
            2009, Month::February, 13, Weekday::Friday, 44, 23, 31, 30);

        test!(year_2038_problem: 0x7FFF_FFFF =>
            2038, Month::January, 19, Weekday::Tuesday, 19, 3, 14, 7);

        test!(leap_day: 1_078_012_800 =>
            2004, Month::February, 29, Weekday::Sunday, 60, 0, 0, 0);

        test!(century_leap_day: (146_096 + 11_017) * 86400 =>
            2400, Month::February, 29, Weekday::Tuesday, 60, 0, 0, 0);

        test!(just_another_date: 146_096 * 86400 =>
            2369, Month::December, 31, Weekday::Wednesday, 365, 0, 0, 0);

        test!(the_end_of_time: 0x7FFF_FFFF_FFFF_FFFF =>
            292_277_026_596, Month::December, 4, Weekday::Sunday, 339, 15, 30, 7);
    }

    mod offsets {
        use super::*;

        #[test]
        fn an_hour_east() {
            let when = CivilDateTime::from_instant(Instant::at(0), 3600);
            assert_eq!(when.day(), 1);
            assert_eq!(when.hour(), 1);
        }

        #[test]
        fn an_hour_west() {
            let when = CivilDateTime::from_instant(Instant::at(0), -3600);
            assert_eq!(when.year(), 1969);
            assert_eq!(when.month(), Month::December);
            assert_eq!(when.day(), 31);
            assert_eq!(when.hour(), 23);
        }
    }

    mod derived {
        use super::*;

        #[test]
        fn first_of_january_is_week_one() {
            for year_start in &[0_i64, 1672531200, 1609459200, 1735689600] {
                let when = civil(*year_start);
                assert_eq!(when.week_of_year(Weekday::Sunday), 1,
                    "Jan 1 at {} should be week 1", year_start);
            }
        }

        #[test]
        fn april_week() {
            // 2023-04-07, a Friday in the fourteenth week
            let when = civil(1680825600);
            assert_eq!(when.week_of_year(Weekday::Sunday), 14);
        }

        #[test]
        fn quarters() {
            assert_eq!(civil(0).quarter(), 1);
            assert_eq!(civil(1680825600).quarter(), 2);
        }

        #[test]
        fn second_friday() {
            assert_eq!(civil(1680825600).weekday_of_month(), 1);
            assert_eq!(civil(1680825600 + 7 * 86400).weekday_of_month(), 2);
        }

        #[test]
        fn julian_epoch() {
            assert_eq!(civil(0).julian_day(), 2440587);
        }

        #[test]
        fn milliseconds_of_day() {
            let when = CivilDateTime::from_instant(Instant::at_ms(90, 123), 0);
            assert_eq!(when.milliseconds_of_day(), 90123);
        }

        #[test]
        fn year_of_century() {
            assert_eq!(civil(1680825600).year_of_century(), 23);
        }
    }
}
