//! From a settings document all the way to text on the clock.

extern crate datefmt;

use datefmt::{Instant, Registry, Settings, Ticker};


// 2009-02-13T23:31:30Z
const EVENING: i64 = 1_234_567_890;

fn clock_text(document: &str, at: i64) -> String {
    let settings = Settings::from_toml_str(document).unwrap();
    let registry = Registry::load().unwrap();

    let formatter = registry.get(&settings.formatter).unwrap()
                            .build(&settings.formatter_config()).unwrap();

    let mut ticker = Ticker::new(formatter, &settings.pattern);
    ticker.tick(Instant::at(at));
    ticker.text().to_string()
}

#[test]
fn a_configured_clock() {
    let text = clock_text(r#"
        formatter = "tokens"
        pattern = "EEEE d MMMM, HH:mm"
        use-default-timezone = false
        custom-timezone = "UTC"
    "#, EVENING);

    assert_eq!(text, "Friday 13 February, 23:31");
}

#[test]
fn a_zone_shifted_clock() {
    let text = clock_text(r#"
        formatter = "tokens"
        pattern = "HH:mm (ZZ)"
        use-default-timezone = false
        custom-timezone = "UTC-5"
    "#, EVENING);

    assert_eq!(text, "18:31 (-0500)");
}

#[test]
fn a_beats_clock() {
    let text = clock_text(r#"
        formatter = "beats"
        pattern = "@bbb"
    "#, EVENING);

    // 23:31:30 UTC is 00:31:30 in Biel
    assert_eq!(text, "@021");
}

#[test]
fn the_toggles_guard_the_custom_values() {
    // the custom zone is present but the toggle is still on, so the
    // tokens backend must not even see it
    let settings = Settings::from_toml_str(r#"
        formatter = "tokens"
        custom-timezone = "Atlantis"
    "#).unwrap();

    let registry = Registry::load().unwrap();
    let built = registry.get("tokens").unwrap().build(&settings.formatter_config());
    assert!(built.is_ok());
}

#[test]
fn unknown_formatter_keys_surface_early() {
    let settings = Settings::from_toml_str("formatter = \"sundial\"").unwrap();
    let registry = Registry::load().unwrap();
    assert!(registry.get(&settings.formatter).is_none());
}
