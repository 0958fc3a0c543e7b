#![crate_name = "datefmt"]
#![crate_type = "rlib"]

#![warn(missing_debug_implementations)]
//#![warn(missing_docs)]

#![warn(trivial_casts, trivial_numeric_casts)]

//! Library for rendering dates and times through user-supplied pattern
//! strings, with several interchangeable formatting backends.
//!
//! The heart of the crate is the *classic* pattern dialect: ICU-style
//! letter runs (`yyyy`, `MMM`, `EEEE`...) mixed with quoted literal text,
//! compiled once per pattern into a reusable renderer and cached. Around
//! that engine sits a small family of formatter *variants* — the classic
//! engine itself, a flat token-table dialect, and a fixed-algorithm
//! novelty clock — all reachable through one registry and all sharing the
//! same contract: build one from a configuration, then call `format` with
//! a pattern and an instant as often as you like.
//!
//! # Examples
//!
//! ```
//! use datefmt::{Registry, Config, Formatter, Instant};
//!
//! let registry = Registry::load().unwrap();
//! let variant = registry.get("tokens").unwrap();
//!
//! let config = Config {
//!     timezone: Some("UTC".to_string()),
//!     locale: Some("en-US".to_string()),
//!     calendar: None,
//! };
//!
//! let formatter = variant.build(&config).unwrap();
//! let text = formatter.format("yyyy-MM-dd", Instant::at(1680825600)).unwrap();
//! assert_eq!(text, "2023-04-07");
//! ```

extern crate libc;
extern crate locale;
extern crate num_traits;
extern crate pad;
extern crate serde;
extern crate toml;

#[macro_use]
extern crate log;

pub mod civil;
pub mod clock;
pub mod compile;
pub mod fields;
pub mod formatter;
pub mod instant;
pub mod names;
pub mod pattern;
pub mod registry;
pub mod settings;
pub mod zone;
pub mod variants;
mod system;
mod util;

pub use civil::{CivilDateTime, Month, Weekday};
pub use clock::Ticker;
pub use compile::{Compiler, Renderer};
pub use fields::Stamp;
pub use formatter::{Capabilities, Config, Error, Formatter, Help, HelpRow};
pub use instant::Instant;
pub use registry::Registry;
pub use settings::Settings;
pub use zone::Zone;
