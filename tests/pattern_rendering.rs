//! Whole patterns through the engine, the way a caller with a compiler
//! of their own would use it.

extern crate datefmt;

use datefmt::names::Names;
use datefmt::{Compiler, Instant, Stamp};


fn compiler() -> Compiler {
    Compiler::new(Names::for_tag(None).unwrap())
}

// 2009-02-13T23:31:30Z, a Friday evening
fn evening() -> Stamp {
    Stamp::new(Instant::at(1_234_567_890), 0)
}

#[test]
fn a_composite_pattern() {
    let renderer = compiler().compile("#EEEE, MMMM d, y 'at' h:mm:ss a").unwrap();
    assert_eq!(renderer.render(&evening()), "Friday, February 13, 2009 at 11:31:30 PM");
}

#[test]
fn the_short_preset() {
    let renderer = compiler().compile("short").unwrap();
    assert_eq!(renderer.render(&evening()), "2/13/09, 11:31 PM");
}

#[test]
fn literal_text_around_one_field() {
    // 2023-04-04T09:00:00Z, a Tuesday
    let tuesday = Stamp::new(Instant::at(1_680_598_800), 0);

    let renderer = compiler().compile("#'Today is' EEEE").unwrap();
    assert_eq!(renderer.render(&tuesday), "Today is Tuesday");
}

#[test]
fn quarters_and_two_digit_years() {
    let renderer = compiler().compile("#QQQ 'of' yy").unwrap();
    assert_eq!(renderer.render(&evening()), "Q1 of 09");
}

#[test]
fn eras_around_year_zero() {
    let compiler = compiler();
    let renderer = compiler.compile("#y G").unwrap();

    // 0000-01-01T00:00:00Z
    let year_zero = Stamp::new(Instant::at(-62_167_219_200), 0);
    assert_eq!(renderer.render(&year_zero), "0 BC");

    assert_eq!(renderer.render(&evening()), "2009 AD");
}

#[test]
fn one_compiler_serves_many_patterns() {
    let compiler = compiler();
    let stamp = evening();

    assert_eq!(compiler.compile("#yyyy").unwrap().render(&stamp), "2009");
    assert_eq!(compiler.compile("#DDD").unwrap().render(&stamp), "044");
    assert_eq!(compiler.compile("#w").unwrap().render(&stamp), "7");
    assert_eq!(compiler.compile("#yyyy").unwrap().render(&stamp), "2009");
}

#[test]
fn offsets_show_through_the_zone_fields() {
    let compiler = compiler();
    let renderer = compiler.compile("#HH:mm ZZZZZ").unwrap();

    let shifted = Stamp::new(Instant::at(1_234_567_890), 5 * 3600 + 1800);
    assert_eq!(renderer.render(&shifted), "05:01 +05:30");

    let utc = Stamp::new(Instant::at(1_234_567_890), 0);
    assert_eq!(renderer.render(&utc), "23:31 Z");
}
