//! A tiny command-line clock, mostly useful for trying patterns out:
//! point it at a settings file (or none, for the defaults) and it prints
//! what the panel clock would show. With `--watch` it keeps printing
//! every time the text changes.

extern crate datefmt;

use std::env;
use std::fs;
use std::process::exit;
use std::thread::sleep;
use std::time::Duration;

use datefmt::{Instant, Registry, Settings, Ticker};


fn main() {
    let mut watch = false;
    let mut settings_path = None;

    for argument in env::args().skip(1) {
        if argument == "--watch" {
            watch = true;
        }
        else if argument == "--help" {
            println!("Usage: clock [--watch] [settings.toml]");
            return;
        }
        else {
            settings_path = Some(argument);
        }
    }

    let settings = match settings_path {
        Some(path) => {
            let document = match fs::read_to_string(&path) {
                Ok(document) => document,
                Err(e) => {
                    eprintln!("Couldn’t read {}: {}", path, e);
                    exit(1);
                }
            };

            match Settings::from_toml_str(&document) {
                Ok(settings) => settings,
                Err(e) => {
                    eprintln!("Couldn’t parse {}: {}", path, e);
                    exit(1);
                }
            }
        }
        None => Settings::default(),
    };

    let registry = match Registry::load() {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("{}", e);
            exit(1);
        }
    };

    let variant = match registry.get(&settings.formatter) {
        Some(variant) => variant,
        None => {
            eprintln!("No such formatter {:?} (try one of: {})",
                settings.formatter,
                registry.as_list().iter().map(|v| v.key).collect::<Vec<_>>().join(", "));
            exit(1);
        }
    };

    let formatter = match variant.build(&settings.formatter_config()) {
        Ok(formatter) => formatter,
        Err(e) => {
            eprintln!("{}", e);
            exit(1);
        }
    };

    let mut ticker = Ticker::new(formatter, &settings.pattern);

    if watch {
        let (_priority, interval) = settings.cadence();
        loop {
            if ticker.tick(Instant::now()) {
                println!("{}", ticker.text());
            }
            sleep(Duration::from_millis(interval));
        }
    }
    else {
        ticker.tick(Instant::now());
        println!("{}", ticker.text());
    }
}
